//! Raw record → domain entity mapping.
//!
//! Every function here is total: bad amounts become `0.0`, and every raw
//! operation yields exactly one domain operation.

use mybank_core::{
    Account, Bank, Operation, OperationSorter, normalize_to_epoch_seconds, parse_amount,
};

use crate::types::{RawAccount, RawBank, RawOperation};

pub fn map_operation(raw: &RawOperation) -> Operation {
    Operation::new(
        raw.title.clone(),
        normalize_to_epoch_seconds(raw.date),
        parse_amount(&raw.amount),
    )
}

/// Operations come out sorted most recent first.
pub fn map_account(raw: &RawAccount) -> Account {
    let operations = raw.operations.iter().map(map_operation).collect();
    Account {
        label: raw.label.clone(),
        balance: raw.balance.clone(),
        operations: OperationSorter::sort(operations),
    }
}

/// Accounts keep their input order.
pub fn map_bank(raw: &RawBank) -> Bank {
    Bank {
        name: raw.name.clone(),
        is_featured: raw.is_featured(),
        accounts: raw.accounts.iter().map(map_account).collect(),
    }
}
