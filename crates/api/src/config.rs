// Server configuration loaded from environment variables.
// Decision: Every setting has a default so the server runs with no environment
// Decision: Unparseable values fall back to the default with a warning

use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Prefix for the activity routes (e.g. "/api"); empty for none
    pub api_prefix: String,
    /// Origins allowed by CORS; empty disables the CORS layer
    pub cors_origins: Vec<HeaderValue>,
    /// Directory served under /static
    pub static_dir: PathBuf,
    /// Optional JSON seed replacing the built-in activities
    pub seed_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_prefix: String::new(),
            cors_origins: Vec::new(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            seed_file: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// - `HOST` (default "0.0.0.0"), `PORT` (default 8000)
    /// - `API_PREFIX`: e.g. "/api" results in routes like /api/activities
    /// - `CORS_ALLOWED_ORIGINS`: comma separated, e.g. "https://app.example.com"
    /// - `STATIC_DIR`: front-end directory (default "static")
    /// - `ACTIVITIES_SEED_FILE`: JSON object of name -> activity
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());

        let port = match non_empty("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Invalid PORT, using {}", DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        let cors_origins = non_empty("CORS_ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .filter_map(|origin| {
                        let parsed: Option<HeaderValue> = origin.parse().ok();
                        if parsed.is_none() {
                            tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                        }
                        parsed
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            host: non_empty("HOST").unwrap_or(defaults.host),
            port,
            api_prefix: non_empty("API_PREFIX")
                .map(|p| normalize_prefix(&p))
                .unwrap_or_default(),
            cors_origins,
            static_dir: non_empty("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            seed_file: non_empty("ACTIVITIES_SEED_FILE").map(PathBuf::from),
        }
    }

    /// Address to bind, falling back to all interfaces if HOST is not an IP
    pub fn bind_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .unwrap_or_else(|_| {
                tracing::warn!(host = %self.host, "Invalid HOST, binding {}", DEFAULT_HOST);
                SocketAddr::from(([0, 0, 0, 0], self.port))
            })
    }
}

/// Ensure a leading slash and no trailing slash ("api/" -> "/api")
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert!(config.api_prefix.is_empty());
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert!(config.seed_file.is_none());
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9100"),
            ("API_PREFIX", "api/"),
            ("STATIC_DIR", "/srv/www"),
            ("ACTIVITIES_SEED_FILE", "/etc/mergington/activities.json"),
        ]);

        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:9100");
        assert_eq!(config.api_prefix, "/api");
        assert_eq!(config.static_dir, PathBuf::from("/srv/www"));
        assert_eq!(
            config.seed_file,
            Some(PathBuf::from("/etc/mergington/activities.json"))
        );
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = config_from(&[("PORT", "eighty")]);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_cors_origins_parsing() {
        let config = config_from(&[(
            "CORS_ALLOWED_ORIGINS",
            "https://app.example.com, https://admin.example.com,",
        )]);

        assert_eq!(config.cors_origins.len(), 2);
        assert_eq!(config.cors_origins[0], "https://app.example.com");
    }

    #[test]
    fn test_normalize_prefix() {
        assert_eq!(normalize_prefix("/api"), "/api");
        assert_eq!(normalize_prefix("api"), "/api");
        assert_eq!(normalize_prefix("/api/v1/"), "/api/v1");
        assert_eq!(normalize_prefix("/"), "");
    }
}
