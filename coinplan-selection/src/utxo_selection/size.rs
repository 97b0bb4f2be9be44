//! Transaction size and fee calculation
//!
//! Translates a transaction's structure (inputs and outputs by script type)
//! into a byte count, and a byte count into a fee. All arithmetic is
//! integer-only: fees are `bytes * fee_per_byte`, never rounded.
//!
//! Byte sizes are the usual per-script-type estimates for a single-signature
//! spend. The transaction overhead is fixed and does not depend on whether
//! any input carries witness data.

use crate::types::{Satoshis, ScriptType, UnspentOutput};

/// Fixed transaction overhead (version, locktime, input/output counts)
pub const TX_OVERHEAD_BYTES: u64 = 10;

/// Legacy P2PKH input (outpoint, scriptSig with signature and pubkey, sequence)
pub const P2PKH_INPUT_BYTES: u64 = 148;
/// P2WPKH nested in P2SH input
pub const P2SH_P2WPKH_INPUT_BYTES: u64 = 91;
/// Native SegWit P2WPKH input
pub const P2WPKH_INPUT_BYTES: u64 = 68;
/// Native SegWit P2WSH input
pub const P2WSH_INPUT_BYTES: u64 = 104;
/// Taproot key-path input
pub const P2TR_INPUT_BYTES: u64 = 58;

/// P2PKH output (value, script length, 25-byte script)
pub const P2PKH_OUTPUT_BYTES: u64 = 34;
/// P2SH output (value, script length, 23-byte script)
pub const P2SH_OUTPUT_BYTES: u64 = 32;
/// P2WPKH output (value, script length, 22-byte script)
pub const P2WPKH_OUTPUT_BYTES: u64 = 31;
/// P2WSH output (value, script length, 34-byte script)
pub const P2WSH_OUTPUT_BYTES: u64 = 43;
/// P2TR output (value, script length, 34-byte script)
pub const P2TR_OUTPUT_BYTES: u64 = 43;

/// Computes byte sizes and fees for transactions by script type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionSizeCalculator;

impl TransactionSizeCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Byte cost of spending one output of the given script type
    pub fn input_size(&self, script_type: ScriptType) -> u64 {
        match script_type {
            ScriptType::P2pkh => P2PKH_INPUT_BYTES,
            ScriptType::P2shP2wpkh => P2SH_P2WPKH_INPUT_BYTES,
            ScriptType::P2wpkh => P2WPKH_INPUT_BYTES,
            ScriptType::P2wsh => P2WSH_INPUT_BYTES,
            ScriptType::P2tr => P2TR_INPUT_BYTES,
        }
    }

    /// Byte cost of creating one output of the given script type
    pub fn output_size(&self, script_type: ScriptType) -> u64 {
        match script_type {
            ScriptType::P2pkh => P2PKH_OUTPUT_BYTES,
            ScriptType::P2shP2wpkh => P2SH_OUTPUT_BYTES,
            ScriptType::P2wpkh => P2WPKH_OUTPUT_BYTES,
            ScriptType::P2wsh => P2WSH_OUTPUT_BYTES,
            ScriptType::P2tr => P2TR_OUTPUT_BYTES,
        }
    }

    /// Total size of a transaction with the given inputs and outputs
    ///
    /// # Arguments
    /// * `inputs` - Script types of the outputs being spent
    /// * `outputs` - Script types of the outputs being created
    ///
    /// # Returns
    /// Overhead plus the sum of every input and output size
    pub fn transaction_bytes(&self, inputs: &[ScriptType], outputs: &[ScriptType]) -> u64 {
        let input_bytes = inputs
            .iter()
            .fold(0u64, |acc, script_type| acc.saturating_add(self.input_size(*script_type)));
        let output_bytes = outputs
            .iter()
            .fold(0u64, |acc, script_type| acc.saturating_add(self.output_size(*script_type)));

        TX_OVERHEAD_BYTES
            .saturating_add(input_bytes)
            .saturating_add(output_bytes)
    }

    /// Fee for a transaction with the given inputs and outputs
    pub fn transaction_fee(
        &self,
        inputs: &[ScriptType],
        outputs: &[ScriptType],
        fee_per_byte: Satoshis,
    ) -> Satoshis {
        bytes_to_fee(self.transaction_bytes(inputs, outputs), fee_per_byte)
    }

    /// Marginal fee of adding one input of the given script type
    pub fn input_fee(&self, script_type: ScriptType, fee_per_byte: Satoshis) -> Satoshis {
        bytes_to_fee(self.input_size(script_type), fee_per_byte)
    }

    /// Whether spending `output` contributes more value than it costs in fee
    ///
    /// An output is effective when its value strictly exceeds its own
    /// marginal input fee. Outputs that are not effective are dust at this
    /// fee rate.
    pub fn is_effective(&self, output: &UnspentOutput, fee_per_byte: Satoshis) -> bool {
        output.value > self.input_fee(output.script_type, fee_per_byte)
    }
}

/// Convert a byte count into a fee at the given rate
pub fn bytes_to_fee(bytes: u64, fee_per_byte: Satoshis) -> Satoshis {
    Satoshis::from(bytes).saturating_mul(fee_per_byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_input_costs_more_than_segwit() {
        let calculator = TransactionSizeCalculator::new();
        assert!(calculator.input_size(ScriptType::P2pkh) > calculator.input_size(ScriptType::P2wpkh));
        assert!(calculator.output_size(ScriptType::P2pkh) > calculator.output_size(ScriptType::P2wpkh));
    }

    #[test]
    fn empty_transaction_is_overhead_only() {
        let calculator = TransactionSizeCalculator::new();
        assert_eq!(calculator.transaction_bytes(&[], &[]), TX_OVERHEAD_BYTES);
    }

    #[test]
    fn transaction_bytes_sums_each_component() {
        let calculator = TransactionSizeCalculator::new();
        // 10 + 148 + 68 + 34 + 31
        let bytes = calculator.transaction_bytes(
            &[ScriptType::P2pkh, ScriptType::P2wpkh],
            &[ScriptType::P2pkh, ScriptType::P2wpkh],
        );
        assert_eq!(bytes, 291);
    }

    #[test]
    fn fee_is_bytes_times_rate() {
        let calculator = TransactionSizeCalculator::new();
        // one legacy input, two legacy outputs: 10 + 148 + 68 = 226 bytes
        let fee = calculator.transaction_fee(
            &[ScriptType::P2pkh],
            &[ScriptType::P2pkh, ScriptType::P2pkh],
            55,
        );
        assert_eq!(fee, 12_430);
    }

    #[test]
    fn fee_does_not_overflow_at_extreme_rates() {
        let fee = bytes_to_fee(u64::MAX, Satoshis::from(u64::MAX));
        assert_eq!(fee, Satoshis::from(u64::MAX) * Satoshis::from(u64::MAX));
    }
}
