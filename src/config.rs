//! Processing server endpoint configuration

use serde::{Deserialize, Serialize};

/// Default watermark-processing endpoint (local development server)
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5001/upload";

/// Environment variable that overrides the processing endpoint
pub const ENDPOINT_ENV_VAR: &str = "UNMARK_ENDPOINT";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub endpoint: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl ServerConfig {
    /// Resolve the endpoint, honoring the env override when set and non-empty
    pub fn from_env() -> Self {
        match std::env::var(ENDPOINT_ENV_VAR) {
            Ok(url) if !url.trim().is_empty() => Self {
                endpoint: url.trim().to_string(),
            },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ServerConfig;

    #[test]
    fn default_endpoint_points_at_local_server() {
        let config = ServerConfig::default();
        assert_eq!(config.endpoint, "http://localhost:5001/upload");
    }
}
