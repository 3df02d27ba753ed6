//! Per-uid network policy bits.
//!
//! Values match the platform network policy authority exactly; they are part
//! of the authority contract and must not be renumbered.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::error::{NetPolicyError, Result};

bitflags! {
    /// Combined policy bitmask held by the authority for one uid.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct PolicyFlags: u32 {
        /// No policy.
        const NONE = 0;

        /// Reject background data on metered networks.
        const REJECT_METERED_BACKGROUND = 0x1;

        /// Allow background data on metered networks even under data saver.
        /// Legacy allowlist state; only ever cleared by the store.
        const ALLOW_METERED_BACKGROUND = 0x4;

        /// Reject all traffic on Wi-Fi.
        const REJECT_WIFI = 0x8000;

        /// Reject all traffic on cellular.
        const REJECT_CELLULAR = 0x10000;

        /// Reject all traffic through a VPN.
        const REJECT_VPN = 0x20000;
    }
}

impl Default for PolicyFlags {
    fn default() -> Self {
        PolicyFlags::NONE
    }
}

impl PolicyFlags {
    /// Rebuild a mask received from the authority, keeping unnamed bits.
    pub fn from_raw(bits: u32) -> Self {
        PolicyFlags::from_bits_retain(bits)
    }

    /// True if any bit of `policy` is set in this mask.
    pub fn restricts(self, policy: PolicyFlags) -> bool {
        self.intersects(policy)
    }

    /// Parse a snake_case policy name (config surface).
    pub fn from_policy_name(name: &str) -> Result<Self> {
        match name {
            "none" => Ok(PolicyFlags::NONE),
            "reject_metered_background" => Ok(PolicyFlags::REJECT_METERED_BACKGROUND),
            "allow_metered_background" => Ok(PolicyFlags::ALLOW_METERED_BACKGROUND),
            "reject_wifi" => Ok(PolicyFlags::REJECT_WIFI),
            "reject_cellular" => Ok(PolicyFlags::REJECT_CELLULAR),
            "reject_vpn" => Ok(PolicyFlags::REJECT_VPN),
            other => Err(NetPolicyError::BadRequest(format!("unknown policy: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_bits_survive() {
        let raw = 0x8000_0000 | PolicyFlags::REJECT_VPN.bits();
        let f = PolicyFlags::from_raw(raw);
        assert!(f.restricts(PolicyFlags::REJECT_VPN));
        assert_eq!(f.bits(), raw);
    }

    #[test]
    fn none_restricts_nothing() {
        assert!(!PolicyFlags::REJECT_WIFI.restricts(PolicyFlags::NONE));
        assert!(!PolicyFlags::default().restricts(PolicyFlags::REJECT_WIFI));
    }
}
