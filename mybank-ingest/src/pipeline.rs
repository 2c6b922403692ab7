use mybank_core::{Bank, BankSorter};
use tracing::debug;

use crate::mapper::map_bank;
use crate::types::RawBank;

/// Map every raw bank and sort the result by name.
///
/// Pure and infallible; the same input always yields equal output.
pub fn process(raw_banks: &[RawBank]) -> Vec<Bank> {
    let banks = BankSorter::sort(raw_banks.iter().map(map_bank).collect());
    debug!(
        banks = banks.len(),
        accounts = banks.iter().map(|b| b.accounts.len()).sum::<usize>(),
        "normalized banks"
    );
    banks
}
