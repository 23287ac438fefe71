#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use chatprism_relay::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r##"
version: 1
presets:
  rich:
    colour: "#FFFFFF" # typo should fail
"##;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.relay.log_label, "message");
    assert!(cfg.relay.log_outgoing);
    assert_eq!(cfg.presets.rich.color, "#E6E6FA");
    assert_eq!(cfg.presets.rich.click_action, "OPEN_URL");
    assert_eq!(cfg.presets.admin.click_action, "SUGGEST_COMMAND");
}

#[test]
fn rejects_unknown_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn rejects_empty_values() {
    let bad = r#"
version: 1
relay:
  log_label: "  "
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");

    let bad = r#"
version: 1
presets:
  admin:
    click_action: ""
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("presets.admin.click_action"));
}

#[test]
fn shipped_config_parses() {
    let cfg = config::load_from_file("chatprism.yaml").expect("must parse");
    assert_eq!(cfg.presets.admin.click_action, "SUGGEST_COMMAND");
}
