use std::sync::Arc;

use netpolicy_core::{PolicyFlags, RestrictionCategory, Result, Uid};

use crate::authority::PolicyAuthority;
use crate::config::StoreSection;
use crate::obs::{MetricsCollector, MetricsEvent};

use super::cache::BlacklistCache;

/// All four toggles for one app, as rendered on its detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppRestrictions {
    pub background_metered_data: bool,
    pub cellular: bool,
    pub vpn: bool,
    pub wifi: bool,
}

impl AppRestrictions {
    pub fn get(&self, category: RestrictionCategory) -> bool {
        match category {
            RestrictionCategory::BackgroundMeteredData => self.background_metered_data,
            RestrictionCategory::Cellular => self.cellular,
            RestrictionCategory::Vpn => self.vpn,
            RestrictionCategory::Wifi => self.wifi,
        }
    }
}

/// Per-app network policy, backed by an authority.
/// Construct once per settings session, then share via Arc.
pub struct PolicyStore {
    authority: Arc<dyn PolicyAuthority>,
    metrics: Arc<dyn MetricsCollector>,
    blacklist: BlacklistCache,
}

impl PolicyStore {
    pub fn new(authority: Arc<dyn PolicyAuthority>, metrics: Arc<dyn MetricsCollector>) -> Self {
        Self {
            authority,
            metrics,
            blacklist: BlacklistCache::new(),
        }
    }

    /// Build a store and apply `store:` options (eager blacklist load).
    pub fn from_config(
        authority: Arc<dyn PolicyAuthority>,
        metrics: Arc<dyn MetricsCollector>,
        cfg: &StoreSection,
    ) -> Result<Self> {
        let store = Self::new(authority, metrics);
        if cfg.preload_blacklist {
            store.ensure_blacklist_loaded()?;
        }
        Ok(store)
    }

    /// Add or remove `uid` from the data saver blacklist.
    ///
    /// Order: reject bit on the authority, cache, override-bit removal, usage
    /// event. Nothing is rolled back if a later step fails; the cache is only
    /// written once the authority accepted the reject-bit change.
    pub fn set_blacklisted(&self, uid: Uid, display_name: &str, blacklisted: bool) -> Result<()> {
        let policy = if blacklisted {
            self.call("add_uid_policy", |a| {
                a.add_uid_policy(uid, PolicyFlags::REJECT_METERED_BACKGROUND)
            })?;
            PolicyFlags::REJECT_METERED_BACKGROUND
        } else {
            self.call("remove_uid_policy", |a| {
                a.remove_uid_policy(uid, PolicyFlags::REJECT_METERED_BACKGROUND)
            })?;
            PolicyFlags::NONE
        };
        self.blacklist.put(uid, policy)?;

        self.call("remove_uid_policy", |a| {
            a.remove_uid_policy(uid, PolicyFlags::ALLOW_METERED_BACKGROUND)
        })?;
        tracing::debug!(uid = %uid, blacklisted, "data saver blacklist updated");

        if blacklisted {
            if let Err(e) = self.metrics.action(MetricsEvent::DataSaverBlacklist, display_name) {
                tracing::warn!(
                    uid = %uid,
                    label = %display_name,
                    error = %e,
                    "usage event dropped"
                );
            }
        }
        Ok(())
    }

    /// True if `uid` is on the data saver blacklist. Authority is consulted
    /// only for the first call on this store.
    pub fn is_blacklisted(&self, uid: Uid) -> Result<bool> {
        self.ensure_blacklist_loaded()?;
        Ok(self.blacklist.get(uid)? == PolicyFlags::REJECT_METERED_BACKGROUND)
    }

    /// Every uid currently cached as blacklisted, sorted.
    pub fn blacklisted_uids(&self) -> Result<Vec<Uid>> {
        self.ensure_blacklist_loaded()?;
        self.blacklist.blacklisted()
    }

    pub fn is_blacklist_loaded(&self) -> Result<bool> {
        self.blacklist.is_initialized()
    }

    fn ensure_blacklist_loaded(&self) -> Result<()> {
        let loaded = self.blacklist.ensure_loaded(|| {
            self.call("get_uids_with_policy", |a| {
                a.get_uids_with_policy(PolicyFlags::REJECT_METERED_BACKGROUND)
            })
        })?;
        if let Some(count) = loaded {
            self.metrics.observe_cache_load(count);
            tracing::info!(uids = count, "data saver blacklist loaded");
        }
        Ok(())
    }

    pub fn get_app_restrict_cellular(&self, uid: Uid) -> Result<bool> {
        self.app_restriction(uid, PolicyFlags::REJECT_CELLULAR)
    }

    pub fn get_app_restrict_vpn(&self, uid: Uid) -> Result<bool> {
        self.app_restriction(uid, PolicyFlags::REJECT_VPN)
    }

    pub fn get_app_restrict_wifi(&self, uid: Uid) -> Result<bool> {
        self.app_restriction(uid, PolicyFlags::REJECT_WIFI)
    }

    pub fn set_app_restrict_cellular(&self, uid: Uid, restrict: bool) -> Result<()> {
        self.set_app_restriction(uid, PolicyFlags::REJECT_CELLULAR, restrict)
    }

    pub fn set_app_restrict_vpn(&self, uid: Uid, restrict: bool) -> Result<()> {
        self.set_app_restriction(uid, PolicyFlags::REJECT_VPN, restrict)
    }

    pub fn set_app_restrict_wifi(&self, uid: Uid, restrict: bool) -> Result<()> {
        self.set_app_restriction(uid, PolicyFlags::REJECT_WIFI, restrict)
    }

    fn app_restriction(&self, uid: Uid, policy: PolicyFlags) -> Result<bool> {
        let current = self.call("get_uid_policy", |a| a.get_uid_policy(uid))?;
        Ok(current.restricts(policy))
    }

    fn set_app_restriction(&self, uid: Uid, policy: PolicyFlags, restrict: bool) -> Result<()> {
        if restrict {
            self.call("add_uid_policy", |a| a.add_uid_policy(uid, policy))?;
        } else {
            self.call("remove_uid_policy", |a| a.remove_uid_policy(uid, policy))?;
        }
        tracing::debug!(uid = %uid, policy = policy.bits(), restrict, "app restriction updated");
        Ok(())
    }

    pub fn get_restriction(&self, uid: Uid, category: RestrictionCategory) -> Result<bool> {
        match category {
            RestrictionCategory::BackgroundMeteredData => self.is_blacklisted(uid),
            other => self.app_restriction(uid, other.policy()),
        }
    }

    /// `display_name` only reaches telemetry, and only for background
    /// metered data.
    pub fn set_restriction(
        &self,
        uid: Uid,
        display_name: &str,
        category: RestrictionCategory,
        restrict: bool,
    ) -> Result<()> {
        tracing::debug!(uid = %uid, category = category.as_str(), restrict, "set restriction");
        match category {
            RestrictionCategory::BackgroundMeteredData => {
                self.set_blacklisted(uid, display_name, restrict)
            }
            other => self.set_app_restriction(uid, other.policy(), restrict),
        }
    }

    /// One authority read plus a cache lookup.
    pub fn app_restrictions(&self, uid: Uid) -> Result<AppRestrictions> {
        let background_metered_data = self.is_blacklisted(uid)?;
        let current = self.call("get_uid_policy", |a| a.get_uid_policy(uid))?;
        Ok(AppRestrictions {
            background_metered_data,
            cellular: current.restricts(PolicyFlags::REJECT_CELLULAR),
            vpn: current.restricts(PolicyFlags::REJECT_VPN),
            wifi: current.restricts(PolicyFlags::REJECT_WIFI),
        })
    }

    fn call<T, F>(&self, op: &'static str, f: F) -> Result<T>
    where
        F: FnOnce(&dyn PolicyAuthority) -> Result<T>,
    {
        let res = f(self.authority.as_ref());
        self.metrics.observe_authority(op, res.is_ok());
        if let Err(e) = &res {
            tracing::warn!(op, error = %e, "policy authority call failed");
        }
        res
    }
}
