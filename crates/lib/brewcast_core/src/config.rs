//! Client configuration.

/// Configuration for the preset API client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL of the backend (e.g. "http://127.0.0.1:5001").
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable                    | Default                 |
    /// |-----------------------------|-------------------------|
    /// | `BREWCAST_API_URL`          | `http://127.0.0.1:5001` |
    /// | `BREWCAST_API_TIMEOUT_SECS` | `10`                    |
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("BREWCAST_API_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:5001".into()),
            timeout_secs: std::env::var("BREWCAST_API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5001".into(),
            timeout_secs: 10,
        }
    }
}
