//! Deterministic orderings applied after mapping.
//!
//! Both sorts are stable and compare with a plain `to_lowercase`, not a
//! Unicode collation.

use std::cmp::Reverse;

use crate::model::{Bank, Operation};

/// Most recent first, then title A→Z (case-insensitive)
pub struct OperationSorter;

impl OperationSorter {
    pub fn sort(mut operations: Vec<Operation>) -> Vec<Operation> {
        operations.sort_by_cached_key(|op| (Reverse(op.epoch_seconds), op.title.to_lowercase()));
        operations
    }
}

/// Name A→Z (case-insensitive)
pub struct BankSorter;

impl BankSorter {
    pub fn sort(mut banks: Vec<Bank>) -> Vec<Bank> {
        banks.sort_by_cached_key(|bank| bank.name.to_lowercase());
        banks
    }
}
