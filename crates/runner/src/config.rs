//! Runner configuration, read from the environment.

use std::path::PathBuf;

use thiserror::Error;

pub const DAYS_VAR: &str = "GILDED_ROSE_DAYS";
pub const ITEMS_VAR: &str = "GILDED_ROSE_ITEMS";

const DEFAULT_DAYS: u32 = 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidDays { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of days to simulate.
    pub days: u32,
    /// JSON file with item records; the seed stock is used when unset.
    pub items_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let days = match lookup(DAYS_VAR) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidDays {
                    var: DAYS_VAR,
                    value,
                })?,
            None => {
                tracing::warn!("{DAYS_VAR} not set; simulating {DEFAULT_DAYS} day");
                DEFAULT_DAYS
            }
        };

        let items_path = lookup(ITEMS_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { days, items_path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(
            config,
            Config {
                days: 1,
                items_path: None
            }
        );
    }

    #[test]
    fn reads_days_and_items_path() {
        let config =
            Config::from_lookup(lookup(&[(DAYS_VAR, " 30 "), (ITEMS_VAR, "stock.json")])).unwrap();
        assert_eq!(config.days, 30);
        assert_eq!(config.items_path, Some(PathBuf::from("stock.json")));
    }

    #[test]
    fn blank_items_path_means_seed_stock() {
        let config = Config::from_lookup(lookup(&[(ITEMS_VAR, "  ")])).unwrap();
        assert_eq!(config.items_path, None);
    }

    #[test]
    fn rejects_non_numeric_days() {
        let err = Config::from_lookup(lookup(&[(DAYS_VAR, "-3")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidDays {
                var: DAYS_VAR,
                value: "-3".to_string()
            }
        );
    }
}
