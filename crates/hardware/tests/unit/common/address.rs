//! # Instruction Address Tests

use bytesim_core::common::InstAddr;

#[test]
fn test_next_is_sequential() {
    assert_eq!(InstAddr::new(41).next(), InstAddr::new(42));
}

#[test]
fn test_from_target_accepts_non_negative() {
    assert_eq!(InstAddr::from_target(0), Some(InstAddr::new(0)));
    assert_eq!(InstAddr::from_target(127), Some(InstAddr::new(127)));
}

#[test]
fn test_from_target_rejects_negative() {
    assert_eq!(InstAddr::from_target(-1), None);
    assert_eq!(InstAddr::from_target(i8::MIN), None);
}

#[test]
fn test_ordering_follows_value() {
    assert!(InstAddr::new(3) < InstAddr::new(10));
    assert_eq!(InstAddr::new(7).val(), 7);
}

#[test]
fn test_display_is_decimal() {
    assert_eq!(InstAddr::new(15).to_string(), "15");
}
