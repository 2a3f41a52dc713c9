// src/session/auth.rs
// DOCUMENTATION: Per-page authentication context
// PURPOSE: Carry the bearer token explicitly into every API call of one page load

use super::cookie::{get_cookie, TOKEN_COOKIE};

/// Authentication context for one page load
/// DOCUMENTATION: Resolved once, from the `token` cookie or from a login
/// response. Never refreshed and never checked for expiry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    token: Option<String>,
}

impl AuthContext {
    pub fn anonymous() -> Self {
        AuthContext { token: None }
    }

    /// Context for a token; an empty token counts as anonymous
    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        AuthContext {
            token: (!token.is_empty()).then_some(token),
        }
    }

    /// Resolve the context from a `document.cookie` string
    pub fn from_cookies(cookies: &str) -> Self {
        match get_cookie(cookies, TOKEN_COOKIE) {
            Some(token) => AuthContext::with_token(token),
            None => AuthContext::anonymous(),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// `Authorization` header value, when a token is present
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {}", token))
    }
}
