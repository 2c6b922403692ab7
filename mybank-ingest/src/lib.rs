//! mybank-ingest: wire records and the pipeline that turns them into domain banks.

pub mod mapper;
pub mod pipeline;
pub mod types;

pub use mapper::{map_account, map_bank, map_operation};
pub use pipeline::process;
pub use types::{RawAccount, RawBank, RawOperation, decode_banks};
