//! Service settings from the environment
//!
//! | Variable         | Default        | Meaning                          |
//! |------------------|----------------|----------------------------------|
//! | `COMFORT_ADDR`   | `0.0.0.0:3000` | Listen address                   |
//! | `COMFORT_CONFIG` | unset          | Path to a room JSON document     |
//!
//! Without `COMFORT_CONFIG` the embedded reference classroom is served.

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

use comfort_core::RoomConfig;
use comfort_schemas::{room, SchemaError};

/// Listen address used when `COMFORT_ADDR` is unset
pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

/// Settings problems detected at startup
#[derive(Debug, Error)]
pub enum SettingsError {
    /// `COMFORT_ADDR` is not a socket address
    #[error("Invalid COMFORT_ADDR '{value}': {source}")]
    InvalidAddr {
        /// The rejected value
        value: String,
        /// Parser diagnosis
        source: AddrParseError,
    },
}

/// Resolved service settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Listen address
    pub addr: SocketAddr,
    /// Room document to load instead of the reference classroom
    pub config_path: Option<PathBuf>,
}

impl Settings {
    /// Settings from the process environment
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Settings from any variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let raw_addr = lookup("COMFORT_ADDR")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ADDR.to_owned());
        let addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|source| SettingsError::InvalidAddr {
                value: raw_addr.clone(),
                source,
            })?;

        let config_path = lookup("COMFORT_CONFIG")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { addr, config_path })
    }

    /// The room to serve
    pub fn load_room(&self) -> Result<RoomConfig, SchemaError> {
        match &self.config_path {
            Some(path) => {
                log::info!("Loading room document {}", path.display());
                room::from_path(path)
            }
            None => {
                log::info!("No COMFORT_CONFIG set, serving the reference classroom");
                room::classroom()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings.addr, DEFAULT_ADDR.parse().unwrap());
        assert_eq!(settings.config_path, None);
        assert_eq!(settings.load_room().unwrap(), RoomConfig::classroom());
    }

    #[test]
    fn variables_override_defaults() {
        let settings = Settings::from_lookup(lookup(&[
            ("COMFORT_ADDR", "127.0.0.1:8080"),
            ("COMFORT_CONFIG", "/etc/roomcomfort/lab.json"),
        ]))
        .unwrap();
        assert_eq!(settings.addr.port(), 8080);
        assert_eq!(
            settings.config_path,
            Some(PathBuf::from("/etc/roomcomfort/lab.json"))
        );
    }

    #[test]
    fn bad_address_is_rejected() {
        let result = Settings::from_lookup(lookup(&[("COMFORT_ADDR", "localhost")]));
        assert!(matches!(result, Err(SettingsError::InvalidAddr { .. })));
    }
}
