//! Bearer-token authentication context.
//!
//! The token is resolved once and threaded into the gateway client at
//! construction time, instead of being re-read from storage on every call.

use crate::error::{ErrorKind, Result};

/// Environment variable checked first when resolving a stored token.
pub const TOKEN_ENV_VAR: &str = "INSTITUTE_TOKEN";

/// File the dashboard persists its session token under.
pub const TOKEN_FILE: &str = "stoken";

#[derive(Debug, Clone)]
pub struct AuthContext {
    token: String,
}

impl AuthContext {
    pub fn new(token: impl Into<String>) -> AuthContext {
        AuthContext {
            token: token.into(),
        }
    }

    /// Resolves the persisted session token: `INSTITUTE_TOKEN` if set,
    /// otherwise the `stoken` file in the working directory.
    pub fn from_store() -> Result<AuthContext> {
        if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
            if !token.is_empty() {
                return Ok(AuthContext::new(token));
            }
        }

        let token = std::fs::read_to_string(TOKEN_FILE)
            .map_err(|_| ErrorKind::ParseError("No stored session token found".to_string()))?;
        let token = token.trim();
        if token.is_empty() {
            return Err(ErrorKind::ParseError("Stored session token is empty".to_string()).into());
        }

        Ok(AuthContext::new(token))
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}
