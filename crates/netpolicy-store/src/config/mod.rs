//! Store config loader (strict parsing).
//!
//! The config path comes from the first CLI argument, then `NETPOLICY_CONFIG`,
//! then `netpolicy.yaml` in the working directory. Errors name the file.

pub mod schema;

use std::fs;
use std::path::{Path, PathBuf};

use netpolicy_core::{NetPolicyError, Result};

pub use schema::{AppToggle, NetPolicyConfig, SeedEntry, StoreSection};

/// Environment variable consulted when no path is passed explicitly.
pub const CONFIG_PATH_ENV: &str = "NETPOLICY_CONFIG";

pub const DEFAULT_CONFIG_PATH: &str = "netpolicy.yaml";

/// Pick the config path: explicit argument, then `NETPOLICY_CONFIG`, then default.
pub fn resolve_path(arg: Option<String>) -> PathBuf {
    resolve_path_with(arg, std::env::var(CONFIG_PATH_ENV).ok())
}

fn resolve_path_with(arg: Option<String>, env: Option<String>) -> PathBuf {
    arg.or(env)
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

pub fn load_from_file(path: impl AsRef<Path>) -> Result<NetPolicyConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        NetPolicyError::Internal(format!("read config {} failed: {e}", path.display()))
    })?;
    load_from_str(&s).map_err(|e| match e {
        NetPolicyError::BadRequest(msg) => {
            NetPolicyError::BadRequest(format!("{}: {msg}", path.display()))
        }
        other => other,
    })
}

pub fn load_from_str(s: &str) -> Result<NetPolicyConfig> {
    let cfg: NetPolicyConfig = serde_yaml::from_str(s)
        .map_err(|e| NetPolicyError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
