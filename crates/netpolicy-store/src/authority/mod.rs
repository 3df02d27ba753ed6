//! Policy authority seam.
//!
//! The authority owns the per-uid bitmask and is the single source of truth.
//! Calls are synchronous and may block on a remote service; failures are
//! reported as `NetPolicyError::AuthorityUnavailable` and never retried here.

pub mod memory;

use netpolicy_core::{PolicyFlags, Result, Uid};

pub use memory::MemoryAuthority;

/// Network policy authority (system policy service or an in-process stand-in).
pub trait PolicyAuthority: Send + Sync {
    /// Set `policy` bits for `uid`. Idempotent.
    fn add_uid_policy(&self, uid: Uid, policy: PolicyFlags) -> Result<()>;

    /// Clear `policy` bits for `uid`. Idempotent.
    fn remove_uid_policy(&self, uid: Uid, policy: PolicyFlags) -> Result<()>;

    /// Full combined mask for `uid`; `NONE` if the uid is unknown.
    fn get_uid_policy(&self, uid: Uid) -> Result<PolicyFlags>;

    /// Every uid currently holding at least `policy`.
    fn get_uids_with_policy(&self, policy: PolicyFlags) -> Result<Vec<Uid>>;
}
