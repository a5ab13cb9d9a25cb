#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case(ResolveError::manifest_parse("/a/Info.plist", "bad"), 1)]
#[test_case(ResolveError::ArchitectureNotFound { bundle: "/a".into() }, 2)]
#[test_case(ResolveError::InvalidConfig("bad".into()), 3)]
fn ResolveError___variant___maps_to_stable_code(error: ResolveError, expected_code: u32) {
    assert_eq!(error.error_code(), expected_code);
}

#[test]
fn ResolveError___architecture_not_found___names_bundle_path() {
    let err = ResolveError::ArchitectureNotFound {
        bundle: PathBuf::from("/tmp/MyMath.xcframework"),
    };

    assert_eq!(
        err.to_string(),
        "couldn't find any supported architecture references in /tmp/MyMath.xcframework"
    );
}

#[test]
fn ResolveError___manifest_parse___displays_path_and_reason() {
    let err = ResolveError::manifest_parse(
        "/tmp/A.xcframework/Info.plist",
        "missing field `LibraryIdentifier`",
    );

    let msg = err.to_string();
    assert!(msg.contains("/tmp/A.xcframework/Info.plist"));
    assert!(msg.contains("LibraryIdentifier"));
}

#[test]
fn ResolveError___path___returns_referenced_path() {
    let err = ResolveError::ArchitectureNotFound {
        bundle: PathBuf::from("/nope.xcframework"),
    };

    assert_eq!(err.path(), Some(std::path::Path::new("/nope.xcframework")));
    assert!(ResolveError::InvalidConfig("x".into()).path().is_none());
}

#[test]
fn ResolveError___from_json_error___becomes_invalid_config() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();

    let err: ResolveError = json_err.into();

    assert!(matches!(err, ResolveError::InvalidConfig(_)));
}
