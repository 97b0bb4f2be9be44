//! UTXO selection module
//!
//! This module decides which unspent transaction outputs (UTXOs) a
//! transaction should spend, what fee it pays, and whether it needs a
//! change output.
//!
//! # Module Structure
//!
//! - `size.rs` - Byte size and fee calculation per script type
//! - `strategies/` - Orderings applied before greedy accumulation
//!   - `ascent_draw.rs` - Smallest outputs first
//!   - `descent_draw.rs` - Largest outputs first
//! - `selector.rs` - The greedy selector and spend-all selection
//!
//! # Boundaries
//!
//! The candidate outputs come from the wallet's account service and the
//! result goes to the transaction builder. Neither is part of this module:
//! selection only reads `value` and `script_type` of each candidate and
//! hands the chosen outputs back unchanged.
//!
//! # Typical Usage
//!
//! ```
//! use coinplan_selection::types::{ScriptType, UnspentOutput};
//! use coinplan_selection::utxo_selection::CoinSelector;
//! use bitcoin::{OutPoint, Txid};
//! use std::str::FromStr;
//!
//! let txid = Txid::from_str("7967a5185e907a25225574544c31f7b059c1a191d65b53dcc1554d339c4f9efc").unwrap();
//! let outputs = vec![
//!     UnspentOutput::new(OutPoint::new(txid, 0), 1, ScriptType::P2pkh),
//!     UnspentOutput::new(OutPoint::new(txid, 1), 20_000, ScriptType::P2pkh),
//!     UnspentOutput::new(OutPoint::new(txid, 2), 300_000, ScriptType::P2pkh),
//! ];
//!
//! let plan = CoinSelector::new().select_all(&outputs, 55, ScriptType::P2pkh);
//! assert_eq!(plan.spendable_outputs.len(), 2);
//! assert_eq!(plan.absolute_fee, 18_700);
//! assert_eq!(plan.amount, 301_300);
//! ```

pub mod size;
pub mod strategies;
pub mod selector;

pub use selector::CoinSelector;
pub use size::TransactionSizeCalculator;
pub use strategies::{
    AscentDrawSortingStrategy, DescentDrawSortingStrategy, SortingOrder, SortingStrategy,
};
