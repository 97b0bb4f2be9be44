//! Core types for UTXO coin selection
//!
//! This module defines the value types that flow through a selection call:
//! the wallet's unspent outputs, the payment target, the bundled selection
//! inputs, and the spend plan produced by the selector.
//!
//! # Key Types
//!
//! - [`ScriptType`]: Locking script form, which determines byte costs
//! - [`UnspentOutput`]: A single spendable output controlled by the wallet
//! - [`SelectionTarget`]: The payment the caller wants to make
//! - [`SelectionInputs`]: Everything a selection call needs
//! - [`SpendableUnspentOutputs`]: The resulting spend plan
//!
//! # Example
//!
//! ```
//! use coinplan_selection::types::{ScriptType, UnspentOutput};
//! use bitcoin::{OutPoint, Txid};
//! use std::str::FromStr;
//!
//! let output = UnspentOutput::new(
//!     OutPoint::new(
//!         Txid::from_str("7967a5185e907a25225574544c31f7b059c1a191d65b53dcc1554d339c4f9efc").unwrap(),
//!         0,
//!     ),
//!     20_000,
//!     ScriptType::P2wpkh,
//! )
//! .with_confirmations(6);
//!
//! assert!(output.is_confirmed());
//! assert_eq!(output.value, 20_000);
//! ```
//!
//! All types here are plain values. Selection never mutates an
//! [`UnspentOutput`]; it clones the chosen ones into a new result.

use crate::utxo_selection::strategies::SortingOrder;
use bitcoin::{Amount, OutPoint};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Amount in the smallest currency unit.
///
/// Wider than 64 bits so that fee-rate by byte-count products summed over
/// many inputs cannot overflow on networks with large unit scales.
pub type Satoshis = u128;

/// Locking script form of an output
///
/// The script type determines how many bytes it costs to spend an output
/// of that type, and how many bytes an output of that type occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ScriptType {
    /// Pay to Public Key Hash (legacy)
    #[default]
    P2pkh,
    /// Pay to Witness Public Key Hash nested in Pay to Script Hash
    P2shP2wpkh,
    /// Pay to Witness Public Key Hash (native SegWit)
    P2wpkh,
    /// Pay to Witness Script Hash
    P2wsh,
    /// Pay to Taproot
    P2tr,
}

impl ScriptType {
    /// All supported script types
    pub const ALL: [ScriptType; 5] = [
        ScriptType::P2pkh,
        ScriptType::P2shP2wpkh,
        ScriptType::P2wpkh,
        ScriptType::P2wsh,
        ScriptType::P2tr,
    ];

    /// Short lowercase identifier, as accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptType::P2pkh => "p2pkh",
            ScriptType::P2shP2wpkh => "p2sh-p2wpkh",
            ScriptType::P2wpkh => "p2wpkh",
            ScriptType::P2wsh => "p2wsh",
            ScriptType::P2tr => "p2tr",
        }
    }

    /// Whether spending this script type carries witness data
    pub fn is_segwit(&self) -> bool {
        !matches!(self, ScriptType::P2pkh)
    }
}

impl fmt::Display for ScriptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScriptType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "p2pkh" => Ok(ScriptType::P2pkh),
            "p2sh-p2wpkh" => Ok(ScriptType::P2shP2wpkh),
            "p2wpkh" => Ok(ScriptType::P2wpkh),
            "p2wsh" => Ok(ScriptType::P2wsh),
            "p2tr" => Ok(ScriptType::P2tr),
            other => Err(format!("Unknown script type: {}", other)),
        }
    }
}

/// Unspent transaction output (UTXO) controlled by the wallet
///
/// Only `value` and `script_type` take part in fee math. The remaining
/// fields are carried through untouched for the transaction builder that
/// signs the selected inputs.
///
/// # Fields
///
/// * `outpoint` - Reference to the transaction output (txid and vout)
/// * `value` - Amount in the smallest currency unit
/// * `script_type` - Locking script form, which sets the input byte cost
/// * `confirmations` - Number of confirmations (0 for unconfirmed)
/// * `transaction_index` - Position of the funding transaction in its block
/// * `origin_key` - Reference to the key that controls this output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnspentOutput {
    /// Reference to the transaction output (txid and vout)
    pub outpoint: OutPoint,

    /// Amount in the smallest currency unit
    pub value: Satoshis,

    /// Locking script form
    pub script_type: ScriptType,

    /// Number of confirmations (0 for unconfirmed)
    #[serde(default)]
    pub confirmations: u32,

    /// Index of the funding transaction within its block
    #[serde(default)]
    pub transaction_index: u32,

    /// Extended key or derivation path that controls this output
    #[serde(default)]
    pub origin_key: Option<String>,
}

impl UnspentOutput {
    /// Create a new unspent output with no confirmation or origin metadata
    ///
    /// # Arguments
    /// * `outpoint` - The transaction outpoint (txid and vout)
    /// * `value` - Amount in the smallest currency unit
    /// * `script_type` - Locking script form of the output
    pub fn new(outpoint: OutPoint, value: Satoshis, script_type: ScriptType) -> Self {
        Self {
            outpoint,
            value,
            script_type,
            confirmations: 0,
            transaction_index: 0,
            origin_key: None,
        }
    }

    /// Set the confirmation count
    pub fn with_confirmations(mut self, confirmations: u32) -> Self {
        self.confirmations = confirmations;
        self
    }

    /// Set the index of the funding transaction within its block
    pub fn with_transaction_index(mut self, transaction_index: u32) -> Self {
        self.transaction_index = transaction_index;
        self
    }

    /// Attach the reference to the key controlling this output
    pub fn with_origin_key(mut self, origin_key: String) -> Self {
        self.origin_key = Some(origin_key);
        self
    }

    /// Check if this output is confirmed
    pub fn is_confirmed(&self) -> bool {
        self.confirmations > 0
    }

    /// Unique identifier in `txid:vout` form
    pub fn id(&self) -> String {
        format!("{}:{}", self.outpoint.txid, self.outpoint.vout)
    }
}

/// The payment the caller wants to make
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionTarget {
    /// Value to send, in the smallest currency unit
    pub value: Satoshis,
    /// Locking script of the payment output, used to size that output
    pub script_type: ScriptType,
}

impl SelectionTarget {
    pub fn new(value: Satoshis, script_type: ScriptType) -> Self {
        Self { value, script_type }
    }
}

/// Everything a single selection call needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionInputs {
    /// The payment to make
    pub target: SelectionTarget,
    /// Fee rate per byte, in the smallest currency unit
    pub fee_per_byte: Satoshis,
    /// Candidate outputs to select from
    pub unspent_outputs: Vec<UnspentOutput>,
    /// Order in which candidates are accumulated
    pub sorting_strategy: SortingOrder,
    /// Script type of the change output, if one is created
    pub change_output_type: ScriptType,
}

impl SelectionInputs {
    /// Bundle the inputs for a selection call
    ///
    /// # Arguments
    /// * `target` - The payment to make
    /// * `fee_per_byte` - Fee rate per byte
    /// * `unspent_outputs` - Candidate outputs
    /// * `sorting_strategy` - Accumulation order
    /// * `change_output_type` - Script type used for a change output
    pub fn new(
        target: SelectionTarget,
        fee_per_byte: Satoshis,
        unspent_outputs: Vec<UnspentOutput>,
        sorting_strategy: SortingOrder,
        change_output_type: ScriptType,
    ) -> Self {
        Self {
            target,
            fee_per_byte,
            unspent_outputs,
            sorting_strategy,
            change_output_type,
        }
    }
}

/// Result of a selection: which outputs to spend and how value is split
///
/// On success `amount + absolute_fee + change` always equals the total
/// value of `spendable_outputs`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpendableUnspentOutputs {
    /// Chosen outputs, in accumulation order
    pub spendable_outputs: Vec<UnspentOutput>,
    /// Total fee to pay
    pub absolute_fee: Satoshis,
    /// Value being sent
    pub amount: Satoshis,
    /// Value returned to the wallet, zero when no change output is created
    pub change: Satoshis,
}

impl SpendableUnspentOutputs {
    /// The degenerate result: nothing to spend, nothing to send
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.spendable_outputs.is_empty()
    }

    /// Whether the transaction builder must add a change output
    pub fn has_change(&self) -> bool {
        self.change > 0
    }

    /// Total value of the chosen outputs
    pub fn total_value(&self) -> Satoshis {
        self.spendable_outputs
            .iter()
            .fold(0, |acc: Satoshis, output| acc.saturating_add(output.value))
    }

    /// Fee as a `bitcoin::Amount`, `None` if it exceeds 64 bits
    pub fn fee_amount(&self) -> Option<Amount> {
        to_amount(self.absolute_fee)
    }

    /// Sent value as a `bitcoin::Amount`, `None` if it exceeds 64 bits
    pub fn send_amount(&self) -> Option<Amount> {
        to_amount(self.amount)
    }

    /// Change as a `bitcoin::Amount`, `None` if it exceeds 64 bits
    pub fn change_amount(&self) -> Option<Amount> {
        to_amount(self.change)
    }
}

/// Convert a wide value into a `bitcoin::Amount` when it fits
pub fn to_amount(value: Satoshis) -> Option<Amount> {
    u64::try_from(value).ok().map(Amount::from_sat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitcoin::Txid;

    fn outpoint(vout: u32) -> OutPoint {
        OutPoint::new(
            Txid::from_str("7967a5185e907a25225574544c31f7b059c1a191d65b53dcc1554d339c4f9efc").unwrap(),
            vout,
        )
    }

    #[test]
    fn script_type_parses_case_insensitively() {
        for script_type in ScriptType::ALL {
            let upper = script_type.as_str().to_uppercase();
            assert_eq!(ScriptType::from_str(&upper).unwrap(), script_type);
        }
        assert!(ScriptType::from_str("p2pk").is_err());
    }

    #[test]
    fn only_legacy_is_non_segwit() {
        assert!(!ScriptType::P2pkh.is_segwit());
        assert!(ScriptType::P2wpkh.is_segwit());
        assert!(ScriptType::P2tr.is_segwit());
    }

    #[test]
    fn wide_values_do_not_convert_to_amount() {
        let result = SpendableUnspentOutputs {
            spendable_outputs: vec![UnspentOutput::new(outpoint(0), u128::from(u64::MAX) + 10, ScriptType::P2pkh)],
            absolute_fee: 10,
            amount: u128::from(u64::MAX) + 1,
            change: 0,
        };
        assert_eq!(result.fee_amount(), Some(Amount::from_sat(10)));
        assert_eq!(result.send_amount(), None);
        assert_eq!(result.total_value(), u128::from(u64::MAX) + 10);
        assert!(!result.has_change());
    }

    #[test]
    fn output_id_is_txid_and_vout() {
        let output = UnspentOutput::new(outpoint(3), 1, ScriptType::P2wpkh);
        assert!(output.id().ends_with(":3"));
        assert!(!output.is_confirmed());
    }
}
