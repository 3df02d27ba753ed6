//! Policy flag values and category mapping.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use netpolicy_core::{PolicyFlags, RestrictionCategory, Uid};

#[test]
fn authority_bit_values_are_stable() {
    assert_eq!(PolicyFlags::NONE.bits(), 0);
    assert_eq!(PolicyFlags::REJECT_METERED_BACKGROUND.bits(), 0x1);
    assert_eq!(PolicyFlags::ALLOW_METERED_BACKGROUND.bits(), 0x4);
    assert_eq!(PolicyFlags::REJECT_WIFI.bits(), 0x8000);
    assert_eq!(PolicyFlags::REJECT_CELLULAR.bits(), 0x10000);
    assert_eq!(PolicyFlags::REJECT_VPN.bits(), 0x20000);
}

#[test]
fn categories_use_disjoint_bits() {
    let mut seen = PolicyFlags::NONE;
    for c in RestrictionCategory::ALL {
        let bit = c.policy();
        assert_eq!(bit.bits().count_ones(), 1, "{c:?}");
        assert!(!seen.intersects(bit), "{c:?} collides");
        seen |= bit;
    }
    assert!(!seen.intersects(PolicyFlags::ALLOW_METERED_BACKGROUND));
}

#[test]
fn policy_names_parse() {
    assert_eq!(
        PolicyFlags::from_policy_name("reject_cellular").unwrap(),
        PolicyFlags::REJECT_CELLULAR
    );
    let err = PolicyFlags::from_policy_name("reject_everything").expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}

#[test]
fn config_names_match_flag_names() {
    for name in [
        "reject_metered_background",
        "allow_metered_background",
        "reject_wifi",
        "reject_cellular",
        "reject_vpn",
    ] {
        let parsed = PolicyFlags::from_policy_name(name).unwrap();
        assert_eq!(PolicyFlags::from_name(&name.to_uppercase()), Some(parsed), "{name}");
    }
    assert_eq!(PolicyFlags::from_policy_name("none").unwrap(), PolicyFlags::empty());
}

#[test]
fn category_yaml_names() {
    let c: RestrictionCategory = serde_yaml::from_str("background_metered_data").unwrap();
    assert_eq!(c, RestrictionCategory::BackgroundMeteredData);
    assert_eq!(c.as_str(), "background_metered_data");

    let uid: Uid = serde_yaml::from_str("42").unwrap();
    assert_eq!(uid, Uid(42));
    assert_eq!(uid.to_string(), "42");
}
