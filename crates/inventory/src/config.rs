//! Session configuration read from the environment.

use core::num::ParseIntError;

use thiserror::Error;

use crate::item::DEFAULT_LOW_STOCK_THRESHOLD;

pub const LOW_STOCK_THRESHOLD_VAR: &str = "STOCKPILE_LOW_STOCK_THRESHOLD";
pub const SEED_VAR: &str = "STOCKPILE_SEED";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    /// Items with a quantity below this are flagged as low stock.
    pub low_stock_threshold: u32,
    /// Start new sessions from the example item list.
    pub seed: bool,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            seed: true,
        }
    }
}

impl InventoryConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup. Unset variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(LOW_STOCK_THRESHOLD_VAR) {
            config.low_stock_threshold = raw.trim().parse().map_err(|e: ParseIntError| {
                ConfigError::InvalidValue {
                    var: LOW_STOCK_THRESHOLD_VAR,
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(raw) = lookup(SEED_VAR) {
            config.seed = parse_flag(&raw).ok_or_else(|| ConfigError::InvalidValue {
                var: SEED_VAR,
                value: raw.clone(),
                reason: "expected true/false/1/0".to_string(),
            })?;
        }

        tracing::debug!(
            low_stock_threshold = config.low_stock_threshold,
            seed = config.seed,
            "inventory config resolved"
        );
        Ok(config)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
