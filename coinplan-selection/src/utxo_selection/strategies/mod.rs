//! UTXO sorting strategies
//!
//! The selector accumulates outputs greedily, so the order in which
//! candidates are visited decides which outputs end up spent. Each strategy
//! implements the `SortingStrategy` trait and imposes one such order.
//!
//! Both orders are stable: outputs with equal values keep their original
//! relative order, so ties resolve deterministically.

use crate::types::UnspentOutput;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod ascent_draw;
pub mod descent_draw;

// Re-export implementations
pub use ascent_draw::AscentDrawSortingStrategy;
pub use descent_draw::DescentDrawSortingStrategy;

/// Trait defining a UTXO ordering applied before greedy accumulation
pub trait SortingStrategy {
    /// Name of this strategy
    fn name(&self) -> &'static str;

    /// Return the outputs in this strategy's order
    ///
    /// The input slice is left untouched; a sorted copy is returned.
    fn sort(&self, outputs: &[UnspentOutput]) -> Vec<UnspentOutput>;
}

/// Named sorting order, as carried in selection inputs and configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortingOrder {
    /// Smallest values first, consuming small outputs preferentially
    #[default]
    AscentDraw,
    /// Largest values first, using as few inputs as possible
    DescentDraw,
}

impl SortingOrder {
    /// The strategy implementing this order
    pub fn strategy(&self) -> Box<dyn SortingStrategy> {
        match self {
            SortingOrder::AscentDraw => Box::new(AscentDrawSortingStrategy::new()),
            SortingOrder::DescentDraw => Box::new(DescentDrawSortingStrategy::new()),
        }
    }

    /// Sort `outputs` in this order
    pub fn sort(&self, outputs: &[UnspentOutput]) -> Vec<UnspentOutput> {
        self.strategy().sort(outputs)
    }
}

impl fmt::Display for SortingOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.strategy().name())
    }
}

impl FromStr for SortingOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ascent_draw" | "ascent" | "ascending" => Ok(SortingOrder::AscentDraw),
            "descent_draw" | "descent" | "descending" => Ok(SortingOrder::DescentDraw),
            other => Err(format!("Unknown sorting order: {}", other)),
        }
    }
}
