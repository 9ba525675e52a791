//! Tests for target number validation and drawing.

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_guess::{TARGET_MAX, TARGET_MIN, TARGET_RANGE, TargetNumber};

#[test]
fn test_new_accepts_range_bounds() {
    assert_eq!(TargetNumber::new(TARGET_MIN).unwrap().value(), 1);
    assert_eq!(TargetNumber::new(TARGET_MAX).unwrap().value(), 100);
}

#[test]
fn test_new_rejects_out_of_range() {
    let err = TargetNumber::new(0).unwrap_err();
    assert_eq!(err.value, 0);
    assert!(err.to_string().contains("outside 1..=100"));

    assert!(TargetNumber::new(101).is_err());
}

#[test]
fn test_range_error_tracks_caller() {
    let err = TargetNumber::try_from(500).unwrap_err();
    assert!(err.file.ends_with("target_number_test.rs"), "got {}", err.file);
}

#[test]
fn test_draw_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..10_000 {
        let target = TargetNumber::draw(&mut rng);
        assert!(TARGET_RANGE.contains(&target.value()));
    }
}

#[test]
fn test_draw_covers_full_range() {
    let mut rng = StdRng::seed_from_u64(42);
    let seen: HashSet<u32> = (0..20_000)
        .map(|_| TargetNumber::draw(&mut rng).value())
        .collect();
    assert_eq!(seen.len(), 100, "every value in 1..=100 should appear");
}

#[test]
fn test_random_stays_in_range() {
    for _ in 0..1_000 {
        assert!(TARGET_RANGE.contains(&TargetNumber::random().value()));
    }
}

#[test]
fn test_serializes_as_bare_integer() {
    let target = TargetNumber::new(42).unwrap();
    assert_eq!(serde_json::to_string(&target).unwrap(), "42");
}

#[test]
fn test_deserialize_rejects_out_of_range() {
    let parsed: Result<TargetNumber, _> = serde_json::from_str("250");
    let err = parsed.unwrap_err();
    assert!(err.to_string().contains("outside"));

    let parsed: TargetNumber = serde_json::from_str("17").unwrap();
    assert_eq!(parsed.value(), 17);
}

#[test]
fn test_display_is_plain_decimal() {
    assert_eq!(TargetNumber::new(7).unwrap().to_string(), "7");
}
