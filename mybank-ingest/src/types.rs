use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// An operation as served by the banks endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawOperation {
    pub title: String,
    /// Seconds or milliseconds since the epoch, depending on the producer
    pub date: i64,
    /// French-formatted, e.g. "-45,99" or "1 234,56 €"
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAccount {
    pub label: String,
    /// Display-ready text, passed through as is
    pub balance: String,
    pub operations: Vec<RawOperation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBank {
    pub name: String,
    /// `1` marks the featured institution, anything else does not
    #[serde(rename = "isCA")]
    pub flag: i64,
    pub accounts: Vec<RawAccount>,
}

impl RawBank {
    pub fn is_featured(&self) -> bool {
        self.flag == 1
    }
}

/// Decode the JSON array returned by the banks endpoint.
pub fn decode_banks(json: &str) -> Result<Vec<RawBank>> {
    serde_json::from_str(json).context("decode banks payload")
}
