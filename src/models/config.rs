//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_request_timeout_secs() -> u64 {
    10
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Glob handed to Tera, e.g. `templates/**/*.html`.
    pub templates_dir: String,
    /// Base URL of the lookup backend.
    pub backend_url: String,
    /// Bounded timeout for each backend request, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_defaults_to_ten_seconds() {
        let config: ServerConfig = serde_json::from_value(serde_json::json!({
            "address": "127.0.0.1",
            "port": 8080,
            "templates_dir": "templates/**/*.html",
            "backend_url": "http://127.0.0.1:5000",
        }))
        .unwrap();

        assert_eq!(config.request_timeout_secs, 10);
    }
}
