#![allow(dead_code)]

use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, Once};

use bitcoin::{OutPoint, Txid};
use coinplan_selection::types::{Satoshis, ScriptType, SpendableUnspentOutputs, UnspentOutput};
use lazy_static::lazy_static;
use log::LevelFilter;

// Initialize logging once
static INIT: Once = Once::new();

// Mutex to ensure tests run one at a time
lazy_static! {
    static ref TEST_MUTEX: Mutex<()> = Mutex::new(());
}

const TEST_TXID: &str = "7967a5185e907a25225574544c31f7b059c1a191d65b53dcc1554d339c4f9efc";

/// Initialize logging for tests
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Trace)
            .try_init();
    });
}

/// Serialize tests that touch process-wide state
pub fn serialize_test() -> MutexGuard<'static, ()> {
    TEST_MUTEX.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn outpoint(vout: u32) -> OutPoint {
    OutPoint::new(Txid::from_str(TEST_TXID).unwrap(), vout)
}

/// Outputs of one script type, one per value, with `vout` equal to the position
pub fn outputs_of(script_type: ScriptType, values: &[Satoshis]) -> Vec<UnspentOutput> {
    values
        .iter()
        .enumerate()
        .map(|(vout, value)| {
            UnspentOutput::new(outpoint(vout as u32), *value, script_type)
                .with_confirmations(6)
                .with_transaction_index(vout as u32)
        })
        .collect()
}

pub fn p2pkh_outputs(values: &[Satoshis]) -> Vec<UnspentOutput> {
    outputs_of(ScriptType::P2pkh, values)
}

pub fn selected_values(result: &SpendableUnspentOutputs) -> Vec<Satoshis> {
    result.spendable_outputs.iter().map(|output| output.value).collect()
}

pub fn selected_vouts(result: &SpendableUnspentOutputs) -> Vec<u32> {
    result.spendable_outputs.iter().map(|output| output.outpoint.vout).collect()
}

/// Assert that selected value splits exactly into amount, fee and change
pub fn assert_balance_equation(result: &SpendableUnspentOutputs) {
    let total = result.total_value();
    assert_eq!(
        total,
        result.amount + result.absolute_fee + result.change,
        "selected {} != amount {} + fee {} + change {}",
        total,
        result.amount,
        result.absolute_fee,
        result.change
    );
}
