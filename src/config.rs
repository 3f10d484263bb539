//! Application Config
//!
//! Endpoints and log level. Read once at startup from a JSON
//! `<meta name="hooks-gallery-config" content="...">` tag, then passed down
//! to components as a prop.

use serde::Deserialize;

use crate::error::ConfigError;

pub const POKEMON_ENDPOINT: &str = "https://pokeapi.co/api/v2/pokemon";
pub const TRACKS_ENDPOINT: &str =
    "https://jsonplaceholder.typicode.com/albums/1/photos?id=1&id=2&id=3&id=4&id=5&id=6";

const CONFIG_META_SELECTOR: &str = "meta[name='hooks-gallery-config']";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub pokemon_endpoint: String,
    pub tracks_endpoint: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pokemon_endpoint: POKEMON_ENDPOINT.to_string(),
            tracks_endpoint: TRACKS_ENDPOINT.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads the config meta tag; no tag means defaults.
    pub fn from_document() -> Result<Self, ConfigError> {
        let content = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(CONFIG_META_SELECTOR).ok().flatten())
            .and_then(|el| el.get_attribute("content"));

        match content {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }

    /// Unknown level names fall back to `Info`
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_block_uses_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.pokemon_endpoint, POKEMON_ENDPOINT);
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_json(r#"{"pokemon_endpoint": "http://localhost:9000/pokemon", "log_level": "debug"}"#).unwrap();
        assert_eq!(config.pokemon_endpoint, "http://localhost:9000/pokemon");
        assert_eq!(config.tracks_endpoint, TRACKS_ENDPOINT);
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_bad_level_falls_back() {
        let config = AppConfig { log_level: "loud".into(), ..Default::default() };
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_malformed_block() {
        assert!(AppConfig::from_json("{not json").is_err());
    }
}
