// weather-tools-server/src/config.rs
use serde::Deserialize;
use std::{env, fs, net::SocketAddr, path::Path};
use thiserror::Error;
use tracing::info;

pub const DEFAULT_CONFIG_PATH: &str = "data/server/config.json";
pub const CONFIG_PATH_ENV: &str = "WEATHER_TOOLS_CONFIG";

pub const NWS_API_BASE: &str = "https://api.weather.gov";
pub const WEATHER_API_BASE: &str = "http://api.weatherapi.com/v1";
pub const USER_AGENT: &str = "weather-tools/1.0";
const PLACEHOLDER_API_KEY: &str = "your-api-key-here";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read { path: String, source: std::io::Error },
    #[error("invalid config file {path}: {source}")]
    Parse { path: String, source: serde_json::Error },
    #[error("invalid bind address '{0}'")]
    BindAddr(String),
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub nws_api_base: String,
    pub weather_api_base: String,
    pub weather_api_key: String,
    pub user_agent: String,
    pub http_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_addr: "0.0.0.0:8000".to_string(),
            nws_api_base: NWS_API_BASE.to_string(),
            weather_api_base: WEATHER_API_BASE.to_string(),
            weather_api_key: PLACEHOLDER_API_KEY.to_string(),
            user_agent: USER_AGENT.to_string(),
            http_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// Load from the config file named by `WEATHER_TOOLS_CONFIG` (or the
    /// default path), then apply environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| env::var(key).ok())
    }

    /// Same as [`ServerConfig::load`] with variables read through `lookup`.
    pub fn load_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = lookup(CONFIG_PATH_ENV).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::from_file(Path::new(&path))?;
        config.apply_overrides(lookup);
        Ok(config)
    }

    /// A missing file yields defaults; a malformed one is an error.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        info!("Loading config from: {}", path.display());
        let display = path.display().to_string();
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read { path: display.clone(), source })?;
        serde_json::from_str(&data).map_err(|source| ConfigError::Parse { path: display, source })
    }

    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("WEATHER_API_KEY") { self.weather_api_key = v; }
        if let Some(v) = lookup("WEATHER_TOOLS_BIND") { self.bind_addr = v; }
        if let Some(v) = lookup("NWS_API_BASE") { self.nws_api_base = v; }
        if let Some(v) = lookup("WEATHER_API_BASE") { self.weather_api_base = v; }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_addr.parse().map_err(|_| ConfigError::BindAddr(self.bind_addr.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn missing_file_gives_defaults() {
        let config = ServerConfig::from_file(Path::new("does/not/exist.json")).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.http_timeout_secs, 30);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = env::temp_dir().join(format!("weather-tools-config-{}.json", std::process::id()));
        fs::write(&path, r#"{"bind_addr": "127.0.0.1:9000", "weather_api_key": "abc"}"#).unwrap();
        let config = ServerConfig::from_file(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
        assert_eq!(config.weather_api_key, "abc");
        assert_eq!(config.nws_api_base, NWS_API_BASE);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = env::temp_dir().join(format!("weather-tools-bad-{}.json", std::process::id()));
        fs::write(&path, "{not json").unwrap();
        let err = ServerConfig::from_file(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn env_overrides_win() {
        let vars: HashMap<&str, &str> = [("WEATHER_API_KEY", "secret"), ("NWS_API_BASE", "http://localhost:1")]
            .into_iter()
            .collect();
        let mut config = ServerConfig::default();
        config.apply_overrides(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.weather_api_key, "secret");
        assert_eq!(config.nws_api_base, "http://localhost:1");
        assert_eq!(config.weather_api_base, WEATHER_API_BASE);
    }

    #[test]
    fn load_reads_named_file_then_env() {
        let path = env::temp_dir().join(format!("weather-tools-load-{}.json", std::process::id()));
        fs::write(&path, r#"{"weather_api_key": "from-file", "bind_addr": "127.0.0.1:9100"}"#).unwrap();
        let path_text = path.display().to_string();
        let vars: HashMap<&str, &str> = [(CONFIG_PATH_ENV, path_text.as_str()), ("WEATHER_API_KEY", "from-env")]
            .into_iter()
            .collect();
        let config = ServerConfig::load_with(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(config.weather_api_key, "from-env");
        assert_eq!(config.bind_addr, "127.0.0.1:9100");
        assert_eq!(config.user_agent, USER_AGENT);
    }

    #[test]
    fn bad_bind_addr_is_reported() {
        let config = ServerConfig { bind_addr: "nowhere".into(), ..ServerConfig::default() };
        assert!(matches!(config.socket_addr(), Err(ConfigError::BindAddr(_))));
    }
}
