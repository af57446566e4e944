//! # Condition Flag Tests
//!
//! Verifies that a comparison raises exactly one flag and that the packed
//! `00000LGE` layout matches.

use ls8_core::core::arch::Flags;
use ls8_core::core::arch::flags::{FLAG_EQUAL, FLAG_GREATER, FLAG_LESS};
use proptest::prelude::*;
use rstest::rstest;

#[test]
fn test_flags_start_clear() {
    let flags = Flags::default();
    assert!(!flags.equal && !flags.greater && !flags.less);
    assert_eq!(flags.bits(), 0);
}

#[rstest]
#[case(5, 5, true, false, false)]
#[case(9, 3, false, true, false)]
#[case(3, 9, false, false, true)]
#[case(0, 255, false, false, true)]
#[case(255, 0, false, true, false)]
fn test_compare(
    #[case] a: u8,
    #[case] b: u8,
    #[case] equal: bool,
    #[case] greater: bool,
    #[case] less: bool,
) {
    assert_eq!(
        Flags::compare(a, b),
        Flags {
            equal,
            greater,
            less
        }
    );
}

#[test]
fn test_compare_is_unsigned() {
    // 0x80 would be negative if the bytes were read as signed.
    assert!(Flags::compare(0x80, 0x7F).greater);
}

#[test]
fn test_bits_layout() {
    assert_eq!(Flags::compare(1, 1).bits(), FLAG_EQUAL);
    assert_eq!(Flags::compare(2, 1).bits(), FLAG_GREATER);
    assert_eq!(Flags::compare(1, 2).bits(), FLAG_LESS);
    assert_eq!(FLAG_LESS, 0b100);
}

#[test]
fn test_display() {
    assert_eq!(Flags::compare(1, 2).to_string(), "L--");
    assert_eq!(Flags::compare(2, 1).to_string(), "-G-");
    assert_eq!(Flags::compare(2, 2).to_string(), "--E");
    assert_eq!(Flags::default().to_string(), "---");
}

proptest! {
    #[test]
    fn prop_exactly_one_flag_set(a: u8, b: u8) {
        let flags = Flags::compare(a, b);
        prop_assert_eq!(flags.bits().count_ones(), 1);
    }
}
