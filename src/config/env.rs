// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate client configuration from .env files

/// Base URL of the REST backend when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api/v1";

/// Client configuration
/// DOCUMENTATION: Centralizes all configuration in one struct.
/// Native builds load it with ClientConfig::from_env(); the browser build
/// has no process environment and uses ClientConfig::default()
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// REST API base, without trailing slash (e.g. "http://localhost:5000/api/v1")
    pub api_base_url: String,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,
}

impl Default for ClientConfig {
    /// DOCUMENTATION: Compile-time HBNB_API_BASE_URL wins over the built-in default
    fn default() -> Self {
        ClientConfig {
            api_base_url: normalize_base_url(
                option_env!("HBNB_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL),
            ),
            environment: "development".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at startup of native binaries
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        use std::env;

        // Load .env file if it exists
        dotenv::dotenv().ok();

        let defaults = ClientConfig::default();

        ClientConfig {
            api_base_url: env::var("HBNB_API_BASE_URL")
                .map(|url| normalize_base_url(&url))
                .unwrap_or(defaults.api_base_url),

            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),

            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// Override the API base (tests and the preview binary point it at other hosts)
    pub fn with_api_base_url(mut self, url: &str) -> Self {
        self.api_base_url = normalize_base_url(url);
        self
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures requests can be built from the base URL
    pub fn validate(&self) -> Result<(), String> {
        if self.api_base_url.is_empty() {
            return Err("HBNB_API_BASE_URL is required".to_string());
        }

        let parsed = url::Url::parse(&self.api_base_url)
            .map_err(|e| format!("HBNB_API_BASE_URL is not a valid URL: {}", e))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(format!(
                "HBNB_API_BASE_URL must use http or https, got {}",
                parsed.scheme()
            ));
        }

        if self.environment == "production" && parsed.scheme() == "http" {
            log::warn!("API base URL is plain http in production - tokens travel unencrypted");
        }

        Ok(())
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
