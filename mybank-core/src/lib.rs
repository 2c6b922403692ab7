//! mybank-core: domain entities and the small locale helpers they rely on

pub mod amount;
pub mod model;
pub mod sort;
pub mod time;

pub use amount::{CURRENCY_EUR, format_amount, parse_amount};
pub use model::{Account, Bank, Operation};
pub use sort::{BankSorter, OperationSorter};
pub use time::{format_epoch_seconds, format_epoch_seconds_in, normalize_to_epoch_seconds};
