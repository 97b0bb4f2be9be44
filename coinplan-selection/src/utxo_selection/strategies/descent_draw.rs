//! DescentDraw sorting strategy
//!
//! Orders outputs by descending value, which minimizes the number of
//! inputs needed for a payment and so the fee. Small outputs may stay
//! unspent indefinitely under this order.

use crate::types::UnspentOutput;
use crate::utxo_selection::strategies::SortingStrategy;

/// Strategy visiting the largest outputs first
#[derive(Debug, Clone, Copy, Default)]
pub struct DescentDrawSortingStrategy;

impl DescentDrawSortingStrategy {
    /// Create a new DescentDrawSortingStrategy
    pub fn new() -> Self {
        Self
    }
}

impl SortingStrategy for DescentDrawSortingStrategy {
    fn name(&self) -> &'static str {
        "DescentDraw"
    }

    fn sort(&self, outputs: &[UnspentOutput]) -> Vec<UnspentOutput> {
        let mut sorted = outputs.to_vec();
        // stable: equal values keep their original order
        sorted.sort_by(|a, b| b.value.cmp(&a.value));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScriptType;
    use bitcoin::{OutPoint, Txid};
    use std::str::FromStr;

    fn output(vout: u32, value: u128) -> UnspentOutput {
        let txid = Txid::from_str("abcdef1234567890abcdef1234567890abcdef1234567890abcdef1234567890").unwrap();
        UnspentOutput::new(OutPoint::new(txid, vout), value, ScriptType::P2wpkh)
    }

    #[test]
    fn sorts_largest_first() {
        let outputs = vec![output(0, 1), output(1, 300), output(2, 0), output(3, 20)];
        let values: Vec<u128> = DescentDrawSortingStrategy::new()
            .sort(&outputs)
            .iter()
            .map(|o| o.value)
            .collect();
        assert_eq!(values, vec![300, 20, 1, 0]);
    }

    #[test]
    fn equal_values_keep_original_order() {
        let outputs = vec![output(0, 5), output(1, 9), output(2, 5), output(3, 5)];
        let vouts: Vec<u32> = DescentDrawSortingStrategy::new()
            .sort(&outputs)
            .iter()
            .map(|o| o.outpoint.vout)
            .collect();
        assert_eq!(vouts, vec![1, 0, 2, 3]);
    }

    #[test]
    fn leaves_input_untouched() {
        let outputs = vec![output(0, 1), output(1, 2)];
        let _ = DescentDrawSortingStrategy::new().sort(&outputs);
        assert_eq!(outputs[0].value, 1);
    }
}
