//! AscentDraw sorting strategy
//!
//! Orders outputs by ascending value so that small outputs are consumed
//! first. Over time this keeps the wallet's UTXO set from fragmenting, at
//! the cost of more inputs (and so more fee) for large payments.

use crate::types::UnspentOutput;
use crate::utxo_selection::strategies::SortingStrategy;

/// Strategy visiting the smallest outputs first
#[derive(Debug, Clone, Copy, Default)]
pub struct AscentDrawSortingStrategy;

impl AscentDrawSortingStrategy {
    /// Create a new AscentDrawSortingStrategy
    pub fn new() -> Self {
        Self
    }
}

impl SortingStrategy for AscentDrawSortingStrategy {
    fn name(&self) -> &'static str {
        "AscentDraw"
    }

    fn sort(&self, outputs: &[UnspentOutput]) -> Vec<UnspentOutput> {
        let mut sorted = outputs.to_vec();
        // stable: equal values keep their original order
        sorted.sort_by(|a, b| a.value.cmp(&b.value));
        sorted
    }
}
