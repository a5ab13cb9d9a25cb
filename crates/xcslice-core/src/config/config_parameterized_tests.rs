#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// ============================================================================
// Architecture filter
// ============================================================================

#[test_case(&[Architecture::Arm64], true)]
#[test_case(&[Architecture::X86_64], true)]
#[test_case(&[Architecture::Arm64, Architecture::X86_64], true)]
#[test_case(&[Architecture::Armv7k, Architecture::Arm64_32], false)]
#[test_case(&[Architecture::I386], false)]
#[test_case(&[], false)]
fn ResolverConfig___supports_any___default_filter(archs: &[Architecture], expected: bool) {
    let config = ResolverConfig::default();

    assert_eq!(config.supports_any(archs), expected);
}

// ============================================================================
// Preferred simulator architecture JSON parsing
// ============================================================================

#[test_case(r#"{"preferred_simulator_architecture": "x86_64"}"#, Some(Architecture::X86_64))]
#[test_case(r#"{"preferred_simulator_architecture": "arm64"}"#, Some(Architecture::Arm64))]
#[test_case(r#"{"preferred_simulator_architecture": null}"#, None)]
#[test_case(r#"{}"#, Some(Architecture::X86_64))]
fn ResolverConfig___preferred_simulator_architecture_json___parses_correctly(
    json: &str,
    expected: Option<Architecture>,
) {
    let config = ResolverConfig::from_json(json.as_bytes()).unwrap();

    assert_eq!(config.preferred_simulator_architecture, expected);
}

#[test_case(r#"{"log_level": "info"}"#, "info")]
#[test_case(r#"{"log_level": "debug"}"#, "debug")]
#[test_case(r#"{"log_level": "trace"}"#, "trace")]
fn ResolverConfig___log_level_json___parses_correctly(json: &str, expected: &str) {
    let config = ResolverConfig::from_json(json.as_bytes()).unwrap();

    assert_eq!(config.log_level, expected);
}
