//! Integration tests for title tiers

use ckmap_foundation::{ErrorKind, Tier, expect_tier, title_tier};

#[test]
fn every_tier_prefix() {
    for tier in [
        Tier::Barony,
        Tier::County,
        Tier::Duchy,
        Tier::Kingdom,
        Tier::Empire,
    ] {
        let title = format!("{}_somewhere", tier.prefix());
        assert_eq!(title_tier(&title), Some(tier));
        assert_eq!(Tier::from_prefix(tier.prefix() as u8), Some(tier));
    }
}

#[test]
fn county_check() {
    assert!(expect_tier("c_dublin", Tier::County).is_ok());
    let err = expect_tier("b_dublin", Tier::County).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TierMismatch { .. }));
}

#[test]
fn tier_display() {
    assert_eq!(Tier::Kingdom.to_string(), "kingdom");
}
