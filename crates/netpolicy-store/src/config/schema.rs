use std::collections::HashSet;

use netpolicy_core::{NetPolicyError, PolicyFlags, RestrictionCategory, Result, Uid};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetPolicyConfig {
    pub version: u32,

    #[serde(default)]
    pub store: StoreSection,

    /// Initial authority state (in-process authority only).
    #[serde(default)]
    pub seed: Vec<SeedEntry>,

    /// Toggles applied in order by the demo binary.
    #[serde(default)]
    pub apps: Vec<AppToggle>,
}

impl NetPolicyConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(NetPolicyError::UnsupportedVersion);
        }

        let mut seen = HashSet::new();
        for entry in &self.seed {
            if !seen.insert(entry.uid) {
                return Err(NetPolicyError::BadRequest(format!(
                    "seed uid {} listed more than once",
                    entry.uid
                )));
            }
            entry.flags()?;
        }

        for app in &self.apps {
            if app.label.trim().is_empty() {
                return Err(NetPolicyError::BadRequest(format!(
                    "apps[uid={}].label must not be empty",
                    app.uid
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    /// Run the blacklist bulk load when the store is built.
    #[serde(default)]
    pub preload_blacklist: bool,

    /// Count usage events and authority calls in-process.
    #[serde(default = "default_metrics")]
    pub metrics: bool,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            preload_blacklist: false,
            metrics: default_metrics(),
        }
    }
}

fn default_metrics() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedEntry {
    pub uid: Uid,
    #[serde(default)]
    pub policies: Vec<String>,
}

impl SeedEntry {
    /// OR of the named policies.
    pub fn flags(&self) -> Result<PolicyFlags> {
        let mut flags = PolicyFlags::NONE;
        for name in &self.policies {
            flags |= PolicyFlags::from_policy_name(name)?;
        }
        Ok(flags)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppToggle {
    pub uid: Uid,
    pub label: String,
    #[serde(default)]
    pub block_background: Option<bool>,
    #[serde(default)]
    pub block_cellular: Option<bool>,
    #[serde(default)]
    pub block_vpn: Option<bool>,
    #[serde(default)]
    pub block_wifi: Option<bool>,
}

impl AppToggle {
    /// Requested toggles, in category order; unset ones are skipped.
    pub fn requested(&self) -> Vec<(RestrictionCategory, bool)> {
        [
            (RestrictionCategory::BackgroundMeteredData, self.block_background),
            (RestrictionCategory::Cellular, self.block_cellular),
            (RestrictionCategory::Vpn, self.block_vpn),
            (RestrictionCategory::Wifi, self.block_wifi),
        ]
        .into_iter()
        .filter_map(|(c, v)| v.map(|v| (c, v)))
        .collect()
    }
}
