//! Coin selector implementation
//!
//! The `CoinSelector` turns a wallet's unspent outputs, a payment target and
//! a fee rate into a concrete spend plan.
//!
//! # Targeted selection
//!
//! 1. Outputs that cost more to spend than they are worth are skipped.
//! 2. The remaining outputs are ordered by the requested sorting strategy.
//! 3. Outputs are accumulated until the running total covers the target
//!    plus the fee of a transaction without a change output.
//! 4. The fee is then recomputed with a change output. If the change output
//!    does not pay for itself, it is dropped and the whole excess goes to
//!    the fee instead.
//!
//! # Spend-all selection
//!
//! Every effective output is spent into a single output with no change. When
//! nothing is effective the result is an empty plan, not an error.
//!
//! # Usage
//!
//! ```
//! use coinplan_selection::types::{ScriptType, SelectionInputs, SelectionTarget, UnspentOutput};
//! use coinplan_selection::utxo_selection::{CoinSelector, SortingOrder};
//! use bitcoin::{OutPoint, Txid};
//! use std::str::FromStr;
//!
//! let txid = Txid::from_str("7967a5185e907a25225574544c31f7b059c1a191d65b53dcc1554d339c4f9efc").unwrap();
//! let outputs = vec![
//!     UnspentOutput::new(OutPoint::new(txid, 0), 20_000, ScriptType::P2pkh),
//!     UnspentOutput::new(OutPoint::new(txid, 1), 300_000, ScriptType::P2pkh),
//! ];
//!
//! let inputs = SelectionInputs::new(
//!     SelectionTarget::new(10_000, ScriptType::P2pkh),
//!     55,
//!     outputs,
//!     SortingOrder::AscentDraw,
//!     ScriptType::P2pkh,
//! );
//!
//! let plan = CoinSelector::new().select(&inputs).unwrap();
//! assert_eq!(plan.absolute_fee, 20_570);
//! assert_eq!(plan.change, 289_430);
//! ```
//!
//! Selection is a pure function of its arguments. A selector holds no
//! mutable state and can be shared freely between threads.

use log::{debug, trace, warn};

use crate::error::{CoinSelectionError, SelectionResult};
use crate::types::{Satoshis, ScriptType, SelectionInputs, SpendableUnspentOutputs, UnspentOutput};
use crate::utxo_selection::size::TransactionSizeCalculator;

/// Greedy UTXO selector
#[derive(Debug, Clone, Copy, Default)]
pub struct CoinSelector {
    calculator: TransactionSizeCalculator,
}

impl CoinSelector {
    /// Create a selector with the standard size calculator
    pub fn new() -> Self {
        Self {
            calculator: TransactionSizeCalculator::new(),
        }
    }

    /// The size calculator used for fee math
    pub fn calculator(&self) -> &TransactionSizeCalculator {
        &self.calculator
    }

    /// Select outputs to pay `inputs.target` at `inputs.fee_per_byte`
    ///
    /// # Arguments
    ///
    /// * `inputs` - Target, fee rate, candidate outputs, sorting order and
    ///   change script type
    ///
    /// # Returns
    ///
    /// * `Ok(SpendableUnspentOutputs)` - The outputs to spend, the fee, the
    ///   sent amount and the change
    /// * `Err(CoinSelectionError::NoCoinsToSelect)` - No candidates at all
    /// * `Err(CoinSelectionError::NoSelectedCoins)` - Candidates cannot cover
    ///   the target plus fee
    pub fn select(&self, inputs: &SelectionInputs) -> SelectionResult<SpendableUnspentOutputs> {
        let target = inputs.target;
        let fee_per_byte = inputs.fee_per_byte;

        debug!(
            "Selecting coins: target={} fee_per_byte={} candidates={} order={}",
            target.value,
            fee_per_byte,
            inputs.unspent_outputs.len(),
            inputs.sorting_strategy
        );

        if inputs.unspent_outputs.is_empty() {
            warn!("Coin selection failed: {}", CoinSelectionError::NoCoinsToSelect.code());
            return Err(CoinSelectionError::NoCoinsToSelect);
        }

        let candidates = self.effective_outputs(&inputs.unspent_outputs, fee_per_byte);
        let sorted = inputs.sorting_strategy.sort(&candidates);

        let payment_outputs = [target.script_type];
        let mut selected: Vec<UnspentOutput> = Vec::new();
        let mut selected_types: Vec<ScriptType> = Vec::new();
        let mut selected_value: Satoshis = 0;
        let mut covered = false;

        for output in sorted {
            selected_value = selected_value.saturating_add(output.value);
            selected_types.push(output.script_type);
            selected.push(output);

            let fee_without_change =
                self.calculator
                    .transaction_fee(&selected_types, &payment_outputs, fee_per_byte);

            trace!(
                "Accumulated {} inputs: selected_value={} fee_without_change={}",
                selected.len(),
                selected_value,
                fee_without_change
            );

            if selected_value >= target.value.saturating_add(fee_without_change) {
                covered = true;
                break;
            }
        }

        if !covered {
            warn!(
                "Coin selection failed: {} (effective candidates={}, effective value={})",
                CoinSelectionError::NoSelectedCoins.code(),
                candidates.len(),
                selected_value
            );
            return Err(CoinSelectionError::NoSelectedCoins);
        }

        let fee_with_change = self.calculator.transaction_fee(
            &selected_types,
            &[target.script_type, inputs.change_output_type],
            fee_per_byte,
        );

        let excess = selected_value.saturating_sub(target.value);
        let (absolute_fee, change) = match excess.checked_sub(fee_with_change) {
            Some(change) => (fee_with_change, change),
            // The change output would not pay for itself; the excess becomes fee.
            None => (excess, 0),
        };

        debug!(
            "Selected {} of {} candidates: fee={} amount={} change={}",
            selected.len(),
            inputs.unspent_outputs.len(),
            absolute_fee,
            target.value,
            change
        );

        Ok(SpendableUnspentOutputs {
            spendable_outputs: selected,
            absolute_fee,
            amount: target.value,
            change,
        })
    }

    /// Spend every effective output into a single output with no change
    ///
    /// # Arguments
    ///
    /// * `all` - Candidate outputs
    /// * `fee_per_byte` - Fee rate per byte
    /// * `single_output_type` - Script type of the one output created
    ///
    /// # Returns
    ///
    /// The spend plan. When no output is effective, or the effective total
    /// does not cover the fee, the plan is empty with zero fee and amount.
    pub fn select_all(
        &self,
        all: &[UnspentOutput],
        fee_per_byte: Satoshis,
        single_output_type: ScriptType,
    ) -> SpendableUnspentOutputs {
        debug!(
            "Selecting all coins: fee_per_byte={} candidates={} output_type={}",
            fee_per_byte,
            all.len(),
            single_output_type
        );

        let spendable = self.effective_outputs(all, fee_per_byte);
        if spendable.is_empty() {
            debug!("No effective outputs to spend");
            return SpendableUnspentOutputs::empty();
        }

        let input_types: Vec<ScriptType> = spendable.iter().map(|output| output.script_type).collect();
        let total = spendable
            .iter()
            .fold(0 as Satoshis, |acc, output| acc.saturating_add(output.value));
        let absolute_fee =
            self.calculator
                .transaction_fee(&input_types, &[single_output_type], fee_per_byte);

        match total.checked_sub(absolute_fee) {
            Some(amount) if amount > 0 => {
                debug!(
                    "Selected all {} effective outputs: fee={} amount={}",
                    spendable.len(),
                    absolute_fee,
                    amount
                );
                SpendableUnspentOutputs {
                    spendable_outputs: spendable,
                    absolute_fee,
                    amount,
                    change: 0,
                }
            }
            _ => {
                debug!(
                    "Effective value {} does not cover fee {}, nothing to send",
                    total, absolute_fee
                );
                SpendableUnspentOutputs::empty()
            }
        }
    }

    /// Maximum value a spend-all transaction could send
    pub fn spendable_balance(
        &self,
        all: &[UnspentOutput],
        fee_per_byte: Satoshis,
        single_output_type: ScriptType,
    ) -> Satoshis {
        self.select_all(all, fee_per_byte, single_output_type).amount
    }

    /// Outputs worth spending at `fee_per_byte`, in their original order
    pub fn effective_outputs(&self, outputs: &[UnspentOutput], fee_per_byte: Satoshis) -> Vec<UnspentOutput> {
        outputs
            .iter()
            .filter(|output| {
                let effective = self.calculator.is_effective(output, fee_per_byte);
                if !effective {
                    trace!("Skipping ineffective output {} (value={})", output.id(), output.value);
                }
                effective
            })
            .cloned()
            .collect()
    }
}
