use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

/// Application configuration.
///
/// Read from an optional `vibe-playlist.toml` in the working directory, then
/// from environment variables with the `VIBE_` prefix, which take precedence.
/// For example: `VIBE_SERVER__PORT=8889`, `VIBE_CATALOG__MARKET=GB`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Music catalog client configuration
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Search term configuration
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8889
}

impl ServerConfig {
    /// Returns the socket address for binding the server
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Web API base URL, without a trailing slash
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// OAuth token endpoint
    #[serde(default = "default_token_url")]
    pub token_url: String,

    /// Market (ISO country code) used to filter search results
    #[serde(default = "default_market")]
    pub market: String,

    /// Tracks requested per search query
    #[serde(default = "default_search_limit")]
    pub search_limit: u32,

    /// Maximum tracks returned after de-duplication
    #[serde(default = "default_max_tracks")]
    pub max_tracks: usize,

    /// Pause between consecutive search queries, in milliseconds
    #[serde(default = "default_query_delay_ms")]
    pub query_delay_ms: u64,

    /// Timeout for a single catalog request, in seconds
    #[serde(default = "default_request_timeout_s")]
    pub request_timeout_s: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            token_url: default_token_url(),
            market: default_market(),
            search_limit: default_search_limit(),
            max_tracks: default_max_tracks(),
            query_delay_ms: default_query_delay_ms(),
            request_timeout_s: default_request_timeout_s(),
        }
    }
}

impl CatalogConfig {
    pub fn query_delay(&self) -> Duration {
        Duration::from_millis(self.query_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_s)
    }
}

fn default_api_base_url() -> String {
    "https://api.spotify.com/v1".to_string()
}

fn default_token_url() -> String {
    "https://accounts.spotify.com/api/token".to_string()
}

fn default_market() -> String {
    "US".to_string()
}

fn default_search_limit() -> u32 {
    5
}

fn default_max_tracks() -> usize {
    12
}

fn default_query_delay_ms() -> u64 {
    50
}

fn default_request_timeout_s() -> u64 {
    10
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchConfig {
    /// Replacement search terms keyed by vibe name (case-insensitive)
    #[serde(default)]
    pub overrides: HashMap<String, Vec<String>>,
}

impl AppConfig {
    /// Load configuration from the optional config file and the environment.
    ///
    /// Environment variables should be prefixed with `VIBE_` and use
    /// double underscores for nested values:
    /// - `VIBE_SERVER__PORT` -> server.port
    /// - `VIBE_CATALOG__MAX_TRACKS` -> catalog.max_tracks
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("vibe-playlist").required(false))
            .add_source(
                Environment::with_prefix("VIBE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8889);
        assert_eq!(config.catalog.api_base_url, "https://api.spotify.com/v1");
        assert_eq!(config.catalog.market, "US");
        assert_eq!(config.catalog.search_limit, 5);
        assert_eq!(config.catalog.max_tracks, 12);
        assert_eq!(config.catalog.query_delay(), Duration::from_millis(50));
        assert!(config.search.overrides.is_empty());
    }

    #[test]
    fn test_socket_addr() {
        let server = ServerConfig::default();
        let addr = server.socket_addr().unwrap();
        assert_eq!(addr.port(), 8889);
    }

    #[test]
    fn test_invalid_host_is_an_error() {
        let server = ServerConfig {
            host: "not a host".to_string(),
            port: 80,
        };
        assert!(server.socket_addr().is_err());
    }

    #[test]
    fn test_toml_overrides() {
        let toml = r#"
            [catalog]
            market = "GB"
            max_tracks = 20

            [search.overrides]
            Chill = ["ambient", "jazzhop"]
        "#;

        let config: AppConfig = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.catalog.market, "GB");
        assert_eq!(config.catalog.max_tracks, 20);
        assert_eq!(config.catalog.search_limit, 5);
        assert_eq!(config.server.port, 8889);
        // Keys are lowercased by the config crate; vibe lookup ignores case
        let chill = config
            .search
            .overrides
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("chill"))
            .map(|(_, v)| v.clone())
            .unwrap();
        assert_eq!(chill, vec!["ambient".to_string(), "jazzhop".to_string()]);
    }
}
