use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use netpolicy_core::{NetPolicyError, PolicyFlags, Result, Uid};

enum CacheState {
    /// Bulk load has not run; holds writes made before it.
    Uninitialized { pending: HashMap<Uid, PolicyFlags> },
    Initialized { map: HashMap<Uid, PolicyFlags> },
}

/// Background-metered policy per uid (`NONE` or `REJECT_METERED_BACKGROUND`).
/// Grows only; never invalidated.
pub(crate) struct BlacklistCache {
    state: Mutex<CacheState>,
}

impl BlacklistCache {
    pub(crate) fn new() -> Self {
        Self {
            state: Mutex::new(CacheState::Uninitialized {
                pending: HashMap::new(),
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, CacheState>> {
        self.state
            .lock()
            .map_err(|_| NetPolicyError::Internal("blacklist cache lock poisoned".into()))
    }

    /// Run `load` once and mark the cache initialized.
    ///
    /// The lock is held across `load`, so concurrent callers never issue a
    /// second bulk query. A failed load leaves the cache uninitialized.
    /// Returns `Some(count)` when this call performed the load.
    pub(crate) fn ensure_loaded<F>(&self, load: F) -> Result<Option<usize>>
    where
        F: FnOnce() -> Result<Vec<Uid>>,
    {
        let mut state = self.lock()?;
        let pending = match &mut *state {
            CacheState::Initialized { .. } => return Ok(None),
            CacheState::Uninitialized { pending } => pending,
        };

        let uids = load()?;
        let count = uids.len();
        let mut map: HashMap<Uid, PolicyFlags> = uids
            .into_iter()
            .map(|uid| (uid, PolicyFlags::REJECT_METERED_BACKGROUND))
            .collect();
        // local writes are newer than the snapshot
        map.extend(pending.drain());

        *state = CacheState::Initialized { map };
        Ok(Some(count))
    }

    pub(crate) fn put(&self, uid: Uid, policy: PolicyFlags) -> Result<()> {
        let mut state = self.lock()?;
        match &mut *state {
            CacheState::Uninitialized { pending } => pending.insert(uid, policy),
            CacheState::Initialized { map } => map.insert(uid, policy),
        };
        Ok(())
    }

    /// Cached value, `NONE` when absent.
    pub(crate) fn get(&self, uid: Uid) -> Result<PolicyFlags> {
        let state = self.lock()?;
        let map = match &*state {
            CacheState::Uninitialized { pending } => pending,
            CacheState::Initialized { map } => map,
        };
        Ok(map.get(&uid).copied().unwrap_or_default())
    }

    /// Sorted uids cached as blacklisted.
    pub(crate) fn blacklisted(&self) -> Result<Vec<Uid>> {
        let state = self.lock()?;
        let map = match &*state {
            CacheState::Uninitialized { pending } => pending,
            CacheState::Initialized { map } => map,
        };
        let mut out: Vec<Uid> = map
            .iter()
            .filter(|(_, p)| **p == PolicyFlags::REJECT_METERED_BACKGROUND)
            .map(|(uid, _)| *uid)
            .collect();
        out.sort();
        Ok(out)
    }

    pub(crate) fn is_initialized(&self) -> Result<bool> {
        Ok(matches!(&*self.lock()?, CacheState::Initialized { .. }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn load_runs_once() {
        let cache = BlacklistCache::new();
        assert_eq!(cache.ensure_loaded(|| Ok(vec![Uid(1), Uid(2)])).unwrap(), Some(2));
        assert_eq!(cache.ensure_loaded(|| Ok(vec![Uid(3)])).unwrap(), None);
        assert_eq!(cache.blacklisted().unwrap(), vec![Uid(1), Uid(2)]);
    }

    #[test]
    fn failed_load_stays_uninitialized() {
        let cache = BlacklistCache::new();
        let err = cache
            .ensure_loaded(|| Err(NetPolicyError::AuthorityUnavailable("down".into())))
            .expect_err("must fail");
        assert_eq!(err.code().as_str(), "AUTHORITY_UNAVAILABLE");
        assert!(!cache.is_initialized().unwrap());
        assert_eq!(cache.ensure_loaded(|| Ok(vec![Uid(5)])).unwrap(), Some(1));
        assert!(cache.is_initialized().unwrap());
    }

    #[test]
    fn pending_writes_override_snapshot() {
        let cache = BlacklistCache::new();
        cache.put(Uid(1), PolicyFlags::NONE).unwrap();
        cache.put(Uid(2), PolicyFlags::REJECT_METERED_BACKGROUND).unwrap();
        cache.ensure_loaded(|| Ok(vec![Uid(1), Uid(3)])).unwrap();
        assert_eq!(cache.get(Uid(1)).unwrap(), PolicyFlags::NONE);
        assert_eq!(cache.blacklisted().unwrap(), vec![Uid(2), Uid(3)]);
    }
}
