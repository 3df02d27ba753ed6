use dashmap::DashMap;

use netpolicy_core::{PolicyFlags, Result, Uid};

use super::PolicyAuthority;

/// In-process authority backed by raw bitmasks.
/// Entries that drop to zero are removed, so `len()` counts restricted uids.
#[derive(Default)]
pub struct MemoryAuthority {
    policies: DashMap<Uid, u32>,
}

impl MemoryAuthority {
    pub fn new() -> Self {
        Self {
            policies: DashMap::new(),
        }
    }

    /// Replace the mask for `uid` (used for seeding).
    pub fn seed(&self, uid: Uid, policy: PolicyFlags) {
        if policy.is_empty() {
            self.policies.remove(&uid);
        } else {
            self.policies.insert(uid, policy.bits());
        }
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Sorted `(uid, mask)` pairs.
    pub fn snapshot(&self) -> Vec<(Uid, PolicyFlags)> {
        let mut out: Vec<(Uid, PolicyFlags)> = self
            .policies
            .iter()
            .map(|e| (*e.key(), PolicyFlags::from_raw(*e.value())))
            .collect();
        out.sort_by_key(|(uid, _)| *uid);
        out
    }
}

impl PolicyAuthority for MemoryAuthority {
    fn add_uid_policy(&self, uid: Uid, policy: PolicyFlags) -> Result<()> {
        if policy.is_empty() {
            return Ok(());
        }
        *self.policies.entry(uid).or_insert(0) |= policy.bits();
        Ok(())
    }

    fn remove_uid_policy(&self, uid: Uid, policy: PolicyFlags) -> Result<()> {
        if let Some(mut bits) = self.policies.get_mut(&uid) {
            *bits &= !policy.bits();
        }
        self.policies.remove_if(&uid, |_, bits| *bits == 0);
        Ok(())
    }

    fn get_uid_policy(&self, uid: Uid) -> Result<PolicyFlags> {
        Ok(self
            .policies
            .get(&uid)
            .map(|bits| PolicyFlags::from_raw(*bits))
            .unwrap_or_default())
    }

    fn get_uids_with_policy(&self, policy: PolicyFlags) -> Result<Vec<Uid>> {
        let mut out: Vec<Uid> = self
            .policies
            .iter()
            .filter(|e| PolicyFlags::from_raw(*e.value()).contains(policy))
            .map(|e| *e.key())
            .collect();
        out.sort();
        Ok(out)
    }
}
