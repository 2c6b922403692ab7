//! mybank-client: fetch layer, repository and the UI state containers around the pipeline

pub mod repository;
pub mod service;
pub mod store;

pub use repository::BanksRepository;
pub use service::{BanksService, FileBanksService, HttpBanksService};
pub use store::{BanksEvent, BanksState, BanksStore, OperationsStore};
