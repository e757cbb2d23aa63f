//! # ALU Tests
//!
//! 8-bit addition wraps in two's complement; equality is exact.

use bytesim_core::core::units::alu::Alu;

#[test]
fn test_add_in_range() {
    assert_eq!(Alu::add(5, 2), 7);
    assert_eq!(Alu::add(-5, 2), -3);
}

#[test]
fn test_add_wraps_on_overflow() {
    assert_eq!(Alu::add(127, 1), -128);
    assert_eq!(Alu::add(100, 100), -56);
}

#[test]
fn test_add_wraps_on_underflow() {
    assert_eq!(Alu::add(-128, -1), 127);
}

#[test]
fn test_equal() {
    assert!(Alu::equal(-3, -3));
    assert!(!Alu::equal(3, -3));
}
