use anyhow::Result;
use mybank_core::Bank;
use mybank_ingest::process;
use tracing::info;

use crate::service::BanksService;

/// Fetches raw records and hands back normalized, sorted banks.
pub struct BanksRepository<S> {
    service: S,
}

impl<S: BanksService> BanksRepository<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Fetch errors propagate untouched; mapping itself cannot fail.
    pub async fn get_banks(&self) -> Result<Vec<Bank>> {
        let raw = self.service.fetch_banks().await?;
        let banks = process(&raw);
        info!(banks = banks.len(), "banks loaded");
        Ok(banks)
    }
}
