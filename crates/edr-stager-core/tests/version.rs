use std::str::FromStr;

use edr_stager_core::version::{CompatibleRelease, PackageVersion};

#[test]
fn parse_valid_version() {
    let v = PackageVersion::from_str("0.16.1").unwrap();
    assert_eq!(v.major(), 0);
    assert_eq!(v.minor(), 16);
    assert_eq!(v.patch(), 1);
}

#[test]
fn parse_pre_release_version() {
    let v = PackageVersion::from_str("1.0.0-rc.1").unwrap();
    assert_eq!(v.to_string(), "1.0.0-rc.1");
}

#[test]
fn parse_invalid_version() {
    assert!(PackageVersion::from_str("not-a-version").is_err());
    assert!(PackageVersion::from_str("").is_err());
    assert!(PackageVersion::from_str("2").is_err());
    assert!(PackageVersion::from_str("2.3").is_err());
}

#[test]
fn parse_error_names_the_value() {
    let err = PackageVersion::parse("0.16").unwrap_err();
    assert!(err.to_string().contains("0.16"));
}

#[test]
fn version_display() {
    let v = PackageVersion::from_str("5.3.1").unwrap();
    assert_eq!(format!("{v}"), "5.3.1");
}

#[test]
fn version_ordering() {
    let v1 = PackageVersion::from_str("0.9.0").unwrap();
    let v2 = PackageVersion::from_str("0.16.0").unwrap();
    let v3 = PackageVersion::from_str("1.0.0").unwrap();

    assert!(v1 < v2);
    assert!(v2 < v3);
    assert!(v1 < v3);
}

#[test]
fn version_equality() {
    let a = PackageVersion::from_str("0.16.1").unwrap();
    let b = PackageVersion::from_str("0.16.1").unwrap();
    assert_eq!(a, b);
}

#[test]
fn version_new() {
    let v = PackageVersion::new(0, 16, 0);
    assert_eq!(v.to_string(), "0.16.0");
}

#[test]
fn release_anchors_at_patch_zero() {
    let detected = PackageVersion::from_str("5.3.1").unwrap();
    let release = CompatibleRelease::anchored(&detected);
    assert_eq!(release.anchor(), PackageVersion::new(5, 3, 0));
    assert_eq!(release.to_string(), "~=5.3.0");
}

#[test]
fn release_accepts_same_line_at_or_above_anchor() {
    let release = CompatibleRelease::anchored(&PackageVersion::new(0, 16, 1));
    assert!(release.matches(&PackageVersion::new(0, 16, 0)));
    assert!(release.matches(&PackageVersion::new(0, 16, 1)));
    assert!(release.matches(&PackageVersion::new(0, 16, 9)));
}

#[test]
fn release_rejects_other_minor_lines() {
    let release = CompatibleRelease::anchored(&PackageVersion::new(0, 16, 1));
    assert!(!release.matches(&PackageVersion::new(0, 15, 9)));
    assert!(!release.matches(&PackageVersion::new(0, 17, 0)));
    assert!(!release.matches(&PackageVersion::new(1, 16, 0)));
}

#[test]
fn release_rejects_pre_release_below_anchor() {
    let release = CompatibleRelease::anchored(&PackageVersion::new(2, 0, 0));
    let candidate = PackageVersion::from_str("2.0.0-rc.1").unwrap();
    assert!(!release.matches(&candidate));
}
