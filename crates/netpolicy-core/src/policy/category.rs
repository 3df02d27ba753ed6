use serde::{Deserialize, Serialize};

use super::flags::PolicyFlags;

/// Independently toggleable restriction kinds exposed to the settings UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionCategory {
    /// "Block background data" (data saver blacklist).
    BackgroundMeteredData,
    /// "Block cellular".
    Cellular,
    /// "Block VPN".
    Vpn,
    /// "Block Wi-Fi".
    Wifi,
}

impl RestrictionCategory {
    pub const ALL: [RestrictionCategory; 4] = [
        RestrictionCategory::BackgroundMeteredData,
        RestrictionCategory::Cellular,
        RestrictionCategory::Vpn,
        RestrictionCategory::Wifi,
    ];

    /// Authority bit backing this category.
    pub fn policy(self) -> PolicyFlags {
        match self {
            RestrictionCategory::BackgroundMeteredData => PolicyFlags::REJECT_METERED_BACKGROUND,
            RestrictionCategory::Cellular => PolicyFlags::REJECT_CELLULAR,
            RestrictionCategory::Vpn => PolicyFlags::REJECT_VPN,
            RestrictionCategory::Wifi => PolicyFlags::REJECT_WIFI,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RestrictionCategory::BackgroundMeteredData => "background_metered_data",
            RestrictionCategory::Cellular => "cellular",
            RestrictionCategory::Vpn => "vpn",
            RestrictionCategory::Wifi => "wifi",
        }
    }
}
