//! CoinPlan coin selection library
//!
//! This crate decides which unspent transaction outputs a Bitcoin-style
//! wallet should spend for a payment, what network fee that transaction
//! pays, and whether it needs a change output.
//!
//! # Modules
//!
//! - `types`: Unspent outputs, selection targets and inputs, and the spend plan
//! - `utxo_selection`: Size calculator, sorting strategies and the selector
//! - `error`: Selection failure kinds
//! - `config`: TOML configuration for selection defaults and logging
//! - `logging`: `env_logger` setup for the `log` facade
//!
//! All fee math is exact integer arithmetic on 128-bit values. Selection is
//! synchronous and side-effect free; signing, broadcasting and fetching the
//! UTXO set belong to the surrounding wallet.

/// Core value types
pub mod types;

/// Selection failure kinds
pub mod error;

/// UTXO selection algorithms
pub mod utxo_selection;

/// Configuration management
pub mod config;

/// Logging setup
pub mod logging;

/// Re-export selection types
pub use types::{
    Satoshis, ScriptType, SelectionInputs, SelectionTarget, SpendableUnspentOutputs, UnspentOutput,
};

/// Re-export the selector and its collaborators
pub use utxo_selection::{
    AscentDrawSortingStrategy, CoinSelector, DescentDrawSortingStrategy, SortingOrder,
    SortingStrategy, TransactionSizeCalculator,
};

pub use error::CoinSelectionError;
pub use config::{Config, SelectionConfig};

// Re-export Bitcoin types used in the public API
pub use bitcoin::{Amount, OutPoint, Txid};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
