//! Error types for coin selection
//!
//! Selection has exactly two recoverable failure kinds. Both are returned
//! as values; nothing in the selection path panics.
//!
//! The "nothing effective to send" outcome of spend-all selection is not an
//! error: it is a successful, empty [`SpendableUnspentOutputs`].
//!
//! [`SpendableUnspentOutputs`]: crate::types::SpendableUnspentOutputs

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a targeted coin selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoinSelectionError {
    /// The wallet has no spendable outputs at all
    #[error("No coins to select: the wallet has no unspent outputs")]
    NoCoinsToSelect,

    /// Outputs exist but cannot cover the target plus fee
    #[error("No selected coins: available outputs cannot cover the target amount and fee")]
    NoSelectedCoins,
}

impl CoinSelectionError {
    /// Stable short identifier, suitable for logs and event payloads
    pub fn code(&self) -> &'static str {
        match self {
            CoinSelectionError::NoCoinsToSelect => "no_coins_to_select",
            CoinSelectionError::NoSelectedCoins => "no_selected_coins",
        }
    }
}

/// Result type for selection operations
pub type SelectionResult<T> = Result<T, CoinSelectionError>;
