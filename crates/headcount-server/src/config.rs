//! Server configuration read from environment variables.
//!
//! - `PORT`: listen port (default "1234")
//! - `API_URL`: seed endpoint (default jsonplaceholder users)
//! - `SEED_FROM_API`: fetch initial contacts at startup (default true)
//! - `ENABLE_GZIP`: gzip responses when the client accepts it (default true)

pub const DEFAULT_PORT: &str = "1234";
pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com/users";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: String,
    pub api_url: String,
    pub seed_from_api: bool,
    pub enable_gzip: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: DEFAULT_PORT.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            seed_from_api: true,
            enable_gzip: true,
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = ServerConfig::default();
        ServerConfig {
            port: lookup_or(&lookup, "PORT", defaults.port),
            api_url: lookup_or(&lookup, "API_URL", defaults.api_url),
            seed_from_api: lookup_flag(&lookup, "SEED_FROM_API", defaults.seed_from_api),
            enable_gzip: lookup_flag(&lookup, "ENABLE_GZIP", defaults.enable_gzip),
        }
    }

    /// Socket address to bind, on all interfaces.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn lookup_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: String) -> String {
    lookup(key).unwrap_or(default)
}

fn lookup_flag(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> bool {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match parse_flag(&raw) {
        Some(value) => value,
        None => {
            tracing::warn!(key, value = %raw, default, "unrecognised boolean, using default");
            default
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
