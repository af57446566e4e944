//! # Configuration Tests

use ls8_core::config::{Config, MalformedLinePolicy};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert_eq!(config.loader.malformed_lines, MalformedLinePolicy::Skip);
    assert!(!config.machine.ret_pops_stack);
}

#[test]
fn test_empty_json_object_gives_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.loader.malformed_lines, MalformedLinePolicy::Skip);
    assert!(!config.machine.ret_pops_stack);
}

#[test]
fn test_partial_sections() {
    let config = Config::from_json(r#"{ "machine": { "ret_pops_stack": true } }"#).unwrap();
    assert!(config.machine.ret_pops_stack);
    assert!(!config.general.trace_instructions);
}

#[test]
fn test_strict_alias() {
    let config = Config::from_json(r#"{ "loader": { "malformed_lines": "Strict" } }"#).unwrap();
    assert_eq!(config.loader.malformed_lines, MalformedLinePolicy::Reject);
}

#[test]
fn test_unknown_policy_is_an_error() {
    assert!(Config::from_json(r#"{ "loader": { "malformed_lines": "Ignore" } }"#).is_err());
}

#[test]
fn test_malformed_json_is_an_error() {
    assert!(Config::from_json("{ general: ").is_err());
}
