use anyhow::{Context, Result, anyhow};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::state::{ensure_dir, mybank_home};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub endpoint: EndpointSection,
    #[serde(default)]
    pub display: DisplaySection,
    #[serde(default)]
    pub log: LogSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointSection {
    pub base_url: String,
    #[serde(default = "default_banks_path")]
    pub banks_path: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DisplaySection {
    /// IANA zone for operation dates; system zone when unset
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSection {
    /// Used when RUST_LOG is not set
    pub level: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

fn default_banks_path() -> String {
    "/banks.json".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: EndpointSection {
                base_url: "http://localhost:8080".to_string(),
                banks_path: default_banks_path(),
                timeout_secs: default_timeout_secs(),
            },
            display: DisplaySection::default(),
            log: LogSection::default(),
        }
    }
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.endpoint.timeout_secs)
    }

    pub fn timezone(&self) -> Result<Option<Tz>> {
        self.display
            .timezone
            .as_deref()
            .map(|tz| tz.parse().map_err(|_| anyhow!("invalid timezone: {tz}")))
            .transpose()
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(mybank_home()?.join("config.toml"))
}

/// Read-only: no home directory or no file both mean defaults.
pub fn load_config() -> Result<Config> {
    match config_path() {
        Ok(p) => load_config_from(&p),
        Err(_) => Ok(Config::default()),
    }
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s)
}

pub fn parse_config(s: &str) -> Result<Config> {
    toml::from_str(s).context("parse config.toml")
}

pub fn save_config(cfg: &Config) -> Result<()> {
    save_config_to(cfg, &config_path()?)
}

/// Creates the parent directory on first write.
pub fn save_config_to(cfg: &Config, p: &Path) -> Result<()> {
    if let Some(dir) = p.parent() {
        ensure_dir(dir)?;
    }
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}
