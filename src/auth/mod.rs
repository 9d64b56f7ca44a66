//! Session operations, credential storage, and the route guard.

pub mod guard;
pub mod token;

pub use guard::{Access, AuthGuard};
pub use token::{TokenClaims, TokenStore};

use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::graphql::{documents, RequestGateway};
use crate::store::{keys, StateStore};

/// Login/logout against the remote API, keeping the local credential in
/// sync with the outcome.
pub struct AuthClient {
    gateway: Arc<RequestGateway>,
    tokens: Arc<TokenStore>,
    state: Arc<dyn StateStore>,
}

impl AuthClient {
    pub fn new(
        gateway: Arc<RequestGateway>,
        tokens: Arc<TokenStore>,
        state: Arc<dyn StateStore>,
    ) -> Self {
        Self {
            gateway,
            tokens,
            state,
        }
    }

    /// Authenticate and store the returned bearer token.
    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        let data = self
            .gateway
            .send(
                documents::LOGIN,
                serde_json::json!({ "username": username, "password": password }),
            )
            .await?;

        let token = data
            .pointer("/login/token")
            .and_then(Value::as_str)
            .ok_or(Error::MissingData("login.token"))?
            .to_string();

        self.tokens.set(&token);
        info!(username, "logged in");
        Ok(token)
    }

    /// End the session. The remote call is best-effort: whatever it says,
    /// the local credential and cached user are cleared, because local
    /// state is the source of truth for "is this device logged in".
    pub async fn logout(&self) {
        if let Err(e) = self
            .gateway
            .send(documents::LOGOUT, serde_json::json!({}))
            .await
        {
            warn!(error = %e, "remote logout failed, clearing local session anyway");
        }
        self.tokens.clear();
        self.state.remove(keys::USER);
        info!("logged out");
    }

    /// Cached user object from the persisted state, if one was stored.
    pub fn user(&self) -> Option<Value> {
        self.state
            .get(keys::USER)
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    /// Cache an opaque user object alongside the credential.
    pub fn set_user(&self, user: &Value) {
        if let Ok(raw) = serde_json::to_string(user) {
            self.state.set(keys::USER, &raw);
        }
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }
}
