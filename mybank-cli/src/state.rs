//! Where mybank keeps its files: `$MYBANK_HOME`, else `$HOME/.mybank`.
//!
//! Nothing here touches the disk except [`ensure_dir`], which only writers call.

use anyhow::{Context, Result, bail};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

const HOME_OVERRIDE_VAR: &str = "MYBANK_HOME";

pub fn mybank_home() -> Result<PathBuf> {
    resolve_home(std::env::var_os(HOME_OVERRIDE_VAR), std::env::var_os("HOME"))
}

fn resolve_home(override_dir: Option<OsString>, home: Option<OsString>) -> Result<PathBuf> {
    match (override_dir, home) {
        (Some(dir), _) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        (_, Some(home)) if !home.is_empty() => Ok(PathBuf::from(home).join(".mybank")),
        _ => bail!("neither {HOME_OVERRIDE_VAR} nor HOME is set"),
    }
}

pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))
}
