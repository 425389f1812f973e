use serde::Deserialize;

/// Main configuration structure for the Driverays API
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default, rename = "rate-limit")]
    pub rate_limit: RateLimitConfig,
}

/// Listener configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Upstream catalog site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Root URL of the catalog site (must end with '/')
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,

    /// User-Agent header sent with every upstream request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Upstream request timeout (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Response cache configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Time-to-live of every cached payload (seconds)
    #[serde(rename = "ttl-secs", default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Interval between sweeps of expired entries (seconds)
    #[serde(rename = "sweep-secs", default = "default_sweep_secs")]
    pub sweep_secs: u64,
}

/// Per-client request rate limiting
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    /// Requests allowed per window
    #[serde(rename = "max-requests", default = "default_max_requests")]
    pub max_requests: u32,

    /// Window length (seconds)
    #[serde(rename = "window-secs", default = "default_window_secs")]
    pub window_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_base_url() -> String {
    "https://driverays.quest/".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_ttl_secs() -> u64 {
    600
}

fn default_sweep_secs() -> u64 {
    600
}

fn default_max_requests() -> u32 {
    20
}

fn default_window_secs() -> u64 {
    60
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            sweep_secs: default_sweep_secs(),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
            window_secs: default_window_secs(),
        }
    }
}
