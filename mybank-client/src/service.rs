//! Where raw bank records come from.

use anyhow::{Context, Result, bail};
use mybank_ingest::{RawBank, decode_banks};
use reqwest::header::{ACCEPT, HeaderValue};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// A source of raw bank records. One call = one fetch, no retries.
pub trait BanksService {
    fn fetch_banks(&self) -> impl Future<Output = Result<Vec<RawBank>>> + Send;
}

/// Single GET against the banks endpoint
#[derive(Debug, Clone)]
pub struct HttpBanksService {
    client: reqwest::Client,
    url: String,
}

impl HttpBanksService {
    pub fn new(base_url: &str, banks_path: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("build http client")?;
        Ok(Self {
            client,
            url: join_url(base_url, banks_path),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl BanksService for HttpBanksService {
    async fn fetch_banks(&self) -> Result<Vec<RawBank>> {
        debug!(url = %self.url, "fetching banks");
        let resp = self
            .client
            .get(&self.url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .with_context(|| format!("GET {}", self.url))?;

        let status = resp.status();
        if !status.is_success() {
            bail!("GET {} failed: {status}", self.url);
        }

        let banks: Vec<RawBank> = resp.json().await.context("parse banks response")?;
        debug!(count = banks.len(), "fetched banks");
        Ok(banks)
    }
}

/// Reads the same JSON payload from disk
#[derive(Debug, Clone)]
pub struct FileBanksService {
    path: PathBuf,
}

impl FileBanksService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BanksService for FileBanksService {
    async fn fetch_banks(&self) -> Result<Vec<RawBank>> {
        debug!(path = %self.path.display(), "reading banks");
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("read {}", self.path.display()))?;
        decode_banks(&json).with_context(|| format!("parsing {}", self.path.display()))
    }
}

fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
