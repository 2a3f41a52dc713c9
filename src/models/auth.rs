// src/models/auth.rs
// DOCUMENTATION: Login and error payloads
// PURPOSE: Request/response bodies for POST /login and error responses

use serde::{Deserialize, Serialize};

/// Request body for POST /login
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenResponse {
    /// Opaque bearer token; any other fields are ignored
    pub access_token: String,
}

/// JSON body of a non-2xx response
/// DOCUMENTATION: The backend reports failures under `message` or `error`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// First non-empty of `message`, then `error`
    pub fn into_message(self) -> Option<String> {
        self.message
            .filter(|m| !m.is_empty())
            .or(self.error.filter(|e| !e.is_empty()))
    }
}
