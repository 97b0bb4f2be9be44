//! Configuration management for CoinPlan.
//!
//! Selection defaults (fee rate, sorting order, change script type) and the
//! logging setup are stored in TOML. Every section has reasonable defaults,
//! so an empty file is a valid configuration.
//!
//! Callers may still pass a fee rate and sorting order per call; the values
//! here are only what [`SelectionConfig::inputs_for`] fills in.
//!
//! ```
//! use coinplan_selection::config::Config;
//! use coinplan_selection::utxo_selection::SortingOrder;
//!
//! let config = Config::from_toml_str(
//!     r#"
//!     [selection]
//!     fee_per_byte = 12
//!     sorting_order = "descent_draw"
//!     "#,
//! ).unwrap();
//!
//! assert_eq!(config.selection.fee_per_byte, 12);
//! assert_eq!(config.selection.sorting_order, SortingOrder::DescentDraw);
//! ```

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::logging::LogConfig;
use crate::types::{Satoshis, ScriptType, SelectionInputs, SelectionTarget, UnspentOutput};
use crate::utxo_selection::SortingOrder;

/// Main configuration structure for CoinPlan
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub selection: SelectionConfig,

    #[serde(default)]
    pub logging: LogConfig,
}

/// Coin selection defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionConfig {
    /// Default fee rate per byte
    #[serde(default = "default_fee_per_byte")]
    pub fee_per_byte: u64,

    /// Upper bound accepted for `fee_per_byte`
    #[serde(default = "default_max_fee_per_byte")]
    pub max_fee_per_byte: u64,

    /// Order in which candidates are accumulated
    #[serde(default)]
    pub sorting_order: SortingOrder,

    /// Script type of change outputs
    #[serde(default)]
    pub change_output_type: ScriptType,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            fee_per_byte: default_fee_per_byte(),
            max_fee_per_byte: default_max_fee_per_byte(),
            sorting_order: SortingOrder::default(),
            change_output_type: ScriptType::default(),
        }
    }
}

impl SelectionConfig {
    /// Build selection inputs for `target` from these defaults
    pub fn inputs_for(&self, target: SelectionTarget, unspent_outputs: Vec<UnspentOutput>) -> SelectionInputs {
        SelectionInputs::new(
            target,
            Satoshis::from(self.fee_per_byte),
            unspent_outputs,
            self.sorting_order,
            self.change_output_type,
        )
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow!("Failed to read config file: {}", e))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| anyhow!("Failed to parse config file: {}", e))
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| anyhow!("Failed to serialize config: {}", e))?;

        fs::write(path.as_ref(), content).map_err(|e| anyhow!("Failed to write config file: {}", e))?;

        log::debug!("Configuration saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.selection.max_fee_per_byte == 0 {
            return Err(anyhow!("Invalid max fee rate: must be greater than 0"));
        }

        if self.selection.fee_per_byte > self.selection.max_fee_per_byte {
            anyhow::bail!(
                "Invalid fee rate: {} exceeds maximum of {}",
                self.selection.fee_per_byte,
                self.selection.max_fee_per_byte
            );
        }

        Ok(())
    }
}

/// Ensure a configuration file exists at the specified path
/// If it doesn't exist, create it with default values
pub fn ensure_config_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        let default_config = Config::default();
        let content = toml::to_string_pretty(&default_config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| anyhow!("Failed to create config directory: {}", e))?;
            }
        }

        fs::write(path, content)
            .map_err(|e| anyhow!("Failed to write default config file: {}", e))?;
    }

    Ok(())
}

// Default value functions

fn default_fee_per_byte() -> u64 {
    1
}

fn default_max_fee_per_byte() -> u64 {
    10_000
}
