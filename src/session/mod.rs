// src/session/mod.rs
// DOCUMENTATION: Session module organization
// PURPOSE: Token cookie access and the per-page authentication context

pub mod auth;
pub mod cookie;

pub use auth::AuthContext;
pub use cookie::{get_cookie, token_cookie, TOKEN_COOKIE};
