//! Route-level authentication gate.

use std::sync::Arc;

use super::token::TokenStore;

/// Verdict for a navigation into a guarded route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Render the protected subtree unchanged.
    Granted,
    /// Send the user to the login route, remembering where they were going
    /// so a successful login can return them there.
    Redirect { to: String, return_to: String },
}

/// Consults the token store at the moment of each route evaluation; the
/// verdict is never cached, so a token that expires mid-session is caught
/// on the next guarded navigation.
pub struct AuthGuard {
    tokens: Arc<TokenStore>,
    login_path: String,
}

impl AuthGuard {
    pub fn new(tokens: Arc<TokenStore>) -> Self {
        Self {
            tokens,
            login_path: "/login".to_string(),
        }
    }

    pub fn with_login_path(tokens: Arc<TokenStore>, login_path: impl Into<String>) -> Self {
        Self {
            tokens,
            login_path: login_path.into(),
        }
    }

    /// Evaluate access to `requested_path`.
    pub fn evaluate(&self, requested_path: &str) -> Access {
        if self.tokens.is_valid() {
            Access::Granted
        } else {
            Access::Redirect {
                to: self.login_path.clone(),
                return_to: requested_path.to_string(),
            }
        }
    }

    pub fn is_authorized(&self) -> bool {
        self.tokens.is_valid()
    }
}
