#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use netpolicy_core::{PolicyFlags, RestrictionCategory, Uid};
use netpolicy_store::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
store:
  preload_blacklst: true # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert!(!cfg.store.preload_blacklist);
    assert!(cfg.store.metrics);
    assert!(cfg.seed.is_empty());
    assert!(cfg.apps.is_empty());
}

#[test]
fn unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn seed_policies_combine() {
    let ok = r#"
version: 1
seed:
  - uid: 7
    policies: [reject_cellular, reject_vpn]
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.seed[0].uid, Uid(7));
    assert_eq!(
        cfg.seed[0].flags().unwrap(),
        PolicyFlags::REJECT_CELLULAR | PolicyFlags::REJECT_VPN
    );
}

#[test]
fn unknown_seed_policy_rejected() {
    let bad = r#"
version: 1
seed:
  - uid: 7
    policies: [reject_bluetooth]
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}

#[test]
fn duplicate_seed_uid_rejected() {
    let bad = r#"
version: 1
seed:
  - uid: 7
    policies: [reject_wifi]
  - uid: 7
    policies: [reject_vpn]
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("seed uid 7"));
}

#[test]
fn empty_app_label_rejected() {
    let bad = r#"
version: 1
apps:
  - uid: 42
    label: "  "
    block_background: true
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}

#[test]
fn app_toggles_in_category_order() {
    let ok = r#"
version: 1
apps:
  - uid: 42
    label: "com.example.app"
    block_wifi: true
    block_background: false
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(
        cfg.apps[0].requested(),
        vec![
            (RestrictionCategory::BackgroundMeteredData, false),
            (RestrictionCategory::Wifi, true),
        ]
    );
}

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn load_fixture_file() {
    let cfg = config::load_from_file(fixture("demo.yaml")).expect("must parse");
    assert_eq!(cfg.seed.len(), 1);
    assert_eq!(cfg.apps[0].label, "com.example.app");
}

#[test]
fn file_errors_name_the_file() {
    let err = config::load_from_file(fixture("unknown_field.yaml")).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
    assert!(err.to_string().contains("unknown_field.yaml"), "{err}");

    let err = config::load_from_file(fixture("missing.yaml")).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INTERNAL");
    assert!(err.to_string().contains("missing.yaml"), "{err}");
}

#[test]
fn explicit_path_is_used_verbatim() {
    let p = config::resolve_path(Some(fixture("demo.yaml")));
    assert!(p.ends_with("tests/fixtures/demo.yaml"));
}
