//! Property tests for the conversion engine.

use proptest::prelude::*;
use proptest::string::string_regex;
use radix_tools::convert::{convert, format, ConversionResult, DisplaySet, NumberBase};

fn any_base() -> impl Strategy<Value = NumberBase> {
    prop::sample::select(NumberBase::ALL.to_vec())
}

fn digits_of(base: NumberBase) -> &'static str {
    match base {
        NumberBase::Binary => "[01]",
        NumberBase::Decimal => "[0-9]",
        NumberBase::Hexadecimal => "[0-9a-fA-F]",
        NumberBase::Octal => "[0-7]",
    }
}

/// A valid digit string for `base` with no superfluous leading zero,
/// short enough to fit in 128 bits.
fn canonical_digits(base: NumberBase) -> impl Strategy<Value = String> {
    let pattern = match base {
        NumberBase::Binary => "0|1[01]{0,100}",
        NumberBase::Decimal => "0|[1-9][0-9]{0,30}",
        NumberBase::Hexadecimal => "0|[1-9a-fA-F][0-9a-fA-F]{0,25}",
        NumberBase::Octal => "0|[1-7][0-7]{0,35}",
    };
    string_regex(pattern).unwrap()
}

fn some_digits(base: NumberBase) -> impl Strategy<Value = String> {
    string_regex(&format!("{}{{1,6}}", digits_of(base))).unwrap()
}

proptest! {
    #[test]
    fn round_trip_in_source_base(
        (base, text) in any_base().prop_flat_map(|b| (Just(b), canonical_digits(b)))
    ) {
        let value = match convert(&text, base) {
            ConversionResult::Valid(value) => value,
            other => panic!("{:?} in {} gave {:?}", text, base, other),
        };
        prop_assert_eq!(format(value, base), text.to_ascii_uppercase());
    }

    #[test]
    fn outputs_agree_on_one_magnitude(value in any::<u128>(), base in any_base()) {
        let text = format(value, base);
        let set = convert(&text, base).display();
        prop_assert_eq!(&set, &DisplaySet::of(value));
        for target in NumberBase::ALL {
            prop_assert_eq!(convert(set.get(target), target), ConversionResult::Valid(value));
        }
    }

    #[test]
    fn conversion_is_idempotent(text in ".{0,24}", base in any_base()) {
        prop_assert_eq!(convert(&text, base), convert(&text, base));
    }

    #[test]
    fn blank_input_is_zero(text in "[ \t\r\n]{0,8}", base in any_base()) {
        let result = convert(&text, base);
        prop_assert_eq!(result, ConversionResult::Empty);
        prop_assert_eq!(result.display(), DisplaySet::zero());
    }

    #[test]
    fn foreign_character_invalidates_all_outputs(
        (base, prefix, bad, suffix) in any_base().prop_flat_map(|b| {
            let radix = b.radix();
            (
                Just(b),
                some_digits(b),
                any::<char>().prop_filter("outside the digit set", move |c| !c.is_digit(radix)),
                some_digits(b),
            )
        })
    ) {
        let text = format!("{}{}{}", prefix, bad, suffix);
        let result = convert(&text, base);
        prop_assert_eq!(result, ConversionResult::Invalid);
        prop_assert!(result.display().is_invalid());
    }
}

#[test]
fn documented_scenarios() {
    let cases = [
        ("1010", NumberBase::Binary, ["1010", "10", "A", "12"]),
        ("255", NumberBase::Decimal, ["11111111", "255", "FF", "377"]),
        ("ff", NumberBase::Hexadecimal, ["11111111", "255", "FF", "377"]),
        ("17", NumberBase::Octal, ["1111", "15", "F", "17"]),
        ("12a", NumberBase::Binary, ["Invalid", "Invalid", "Invalid", "Invalid"]),
        ("", NumberBase::Decimal, ["0", "0", "0", "0"]),
    ];

    for (text, base, [binary, decimal, hex, octal]) in cases {
        let set = convert(text, base).display();
        assert_eq!(set.binary, binary, "binary of {:?} ({})", text, base);
        assert_eq!(set.decimal, decimal, "decimal of {:?} ({})", text, base);
        assert_eq!(set.hex, hex, "hex of {:?} ({})", text, base);
        assert_eq!(set.octal, octal, "octal of {:?} ({})", text, base);
    }
}
