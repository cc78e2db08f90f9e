use serde::{Deserialize, Serialize};

/// Where the backing store's REST API lives.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub use_tls: bool,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Sent as `X-Auth-Token` when set
    #[serde(default)]
    pub auth_token: Option<String>,
}

impl ApiServerConfig {
    pub fn base_url(&self) -> String {
        let scheme = if self.use_tls { "https" } else { "http" };
        format!("{}://{}:{}", scheme, self.host, self.port)
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8082
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            use_tls: false,
            timeout_secs: default_timeout_secs(),
            auth_token: None,
        }
    }
}
