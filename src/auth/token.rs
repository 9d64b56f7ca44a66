//! Bearer credential storage and validity checks.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;

use crate::store::{keys, StateStore};

/// Claims we care about from the token payload. Anything else the server
/// puts in there is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub sub: Option<String>,
    /// Expiry as a Unix timestamp (seconds).
    #[serde(default)]
    pub exp: Option<i64>,
}

/// Holds at most one bearer credential, backed by the persisted state
/// store. All checks fail closed: an undecodable or expiry-less token is
/// treated as invalid, never as an error.
pub struct TokenStore {
    state: Arc<dyn StateStore>,
}

impl TokenStore {
    pub fn new(state: Arc<dyn StateStore>) -> Self {
        Self { state }
    }

    /// Current credential, if any. No side effects.
    pub fn get(&self) -> Option<String> {
        self.state.get(keys::TOKEN)
    }

    /// Persist a credential, overwriting any existing one.
    pub fn set(&self, token: &str) {
        self.state.set(keys::TOKEN, token);
    }

    /// Remove the credential.
    pub fn clear(&self) {
        self.state.remove(keys::TOKEN);
    }

    /// Decoded claims of the stored token, if it decodes at all.
    pub fn claims(&self) -> Option<TokenClaims> {
        self.get().as_deref().and_then(decode_claims)
    }

    /// False when no token is stored, the token cannot be decoded, the
    /// claims carry no expiry, or the expiry is not in the future.
    pub fn is_valid(&self) -> bool {
        let Some(claims) = self.claims() else {
            return false;
        };
        let Some(exp) = claims.exp else {
            return false;
        };
        Utc::now().timestamp() < exp
    }
}

/// Extract the claim set from a JWT without verifying the signature.
/// Verification is the server's job; the client only needs the expiry.
fn decode_claims(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}
