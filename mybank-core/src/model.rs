//! Domain entities handed to presentation.
//!
//! All of them are plain immutable values rebuilt from scratch on every fetch.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::amount::{CURRENCY_EUR, format_amount};
use crate::time::{format_epoch_seconds, format_epoch_seconds_in};

/// A single account movement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub title: String,
    /// Always seconds since the Unix epoch
    pub epoch_seconds: i64,
    /// Negative = debit, positive = credit
    pub amount: f64,
    pub currency: String,
}

impl Operation {
    /// Create a euro operation
    pub fn new(title: impl Into<String>, epoch_seconds: i64, amount: f64) -> Self {
        Self {
            title: title.into(),
            epoch_seconds,
            amount,
            currency: CURRENCY_EUR.to_string(),
        }
    }

    pub fn is_negative(&self) -> bool {
        self.amount < 0.0
    }

    /// e.g. "-45,99 €"
    pub fn formatted_amount(&self) -> String {
        format_amount(self.amount, &self.currency)
    }

    /// e.g. "14 nov. 2023", in the system time zone
    pub fn formatted_date(&self) -> String {
        format_epoch_seconds(self.epoch_seconds)
    }

    pub fn formatted_date_in(&self, tz: Tz) -> String {
        format_epoch_seconds_in(self.epoch_seconds, tz)
    }
}

/// A bank account. `balance` is display text from the server and is never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub label: String,
    pub balance: String,
    /// Most recent first
    pub operations: Vec<Operation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    pub name: String,
    /// Featured institutions get their own section in the bank list
    pub is_featured: bool,
    /// Order as received
    pub accounts: Vec<Account>,
}

impl Bank {
    /// First account with exactly this label
    pub fn account(&self, label: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.label == label)
    }
}
