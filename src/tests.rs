use crate::error::QuantityError;
use crate::parser::*;
use crate::types::*;

#[test]
fn test_whole_number() {
    assert_eq!(parse_quantity("3").unwrap(), FractionText::Whole(3));
    assert_eq!(parse_quantity("0").unwrap(), FractionText::Whole(0));
    assert_eq!(parse_quantity("007").unwrap(), FractionText::Whole(7));
}

#[test]
fn test_decimal_numeral() {
    assert_eq!(parse_quantity("1.5").unwrap(), FractionText::Decimal(1.5));
    assert_eq!(parse_quantity(".75").unwrap(), FractionText::Decimal(0.75));
    assert_eq!(parse_quantity("2.").unwrap(), FractionText::Decimal(2.0));
    // Wider than u64 still reads as a numeral
    assert_eq!(
        parse_quantity("100000000000000000000").unwrap(),
        FractionText::Decimal(1e20)
    );
}

#[test]
fn test_simple_fraction() {
    assert_eq!(
        parse_quantity("1/2").unwrap(),
        FractionText::Simple {
            numerator: 1,
            denominator: 2
        }
    );
    // Improper fractions are accepted as written
    assert_eq!(
        parse_quantity("3/2").unwrap(),
        FractionText::Simple {
            numerator: 3,
            denominator: 2
        }
    );
}

#[test]
fn test_mixed_number() {
    let parsed = parse_quantity("2 3/4").unwrap();
    assert_eq!(
        parsed,
        FractionText::Mixed {
            whole: 2,
            numerator: 3,
            denominator: 4
        }
    );
    assert_eq!(parsed.to_decimal().unwrap(), 2.75);
    assert!(parsed.is_fraction());
    assert!(!FractionText::Whole(2).is_fraction());
}

#[test]
fn test_surrounding_whitespace_is_trimmed() {
    assert_eq!(parse_quantity("  1/4\t").unwrap().to_decimal().unwrap(), 0.25);
    assert_eq!(parse_quantity("\n5 ").unwrap(), FractionText::Whole(5));
}

#[test]
fn test_malformed_text() {
    for text in [
        "", "   ", "abc", "1//2", "1/", "/2", "1 /2", "1/ 2", "1  1/2", "1 1", "1.5/2", "1 1.5",
        "½", "-1/2", "+3", "1,5", "1 1/2/3", "1e3", "inf", "NaN",
    ] {
        assert!(
            matches!(parse_quantity(text), Err(QuantityError::Format { .. })),
            "'{}' should be a format error",
            text
        );
    }
}

#[test]
fn test_zero_denominator() {
    assert_eq!(
        parse_quantity("1/0"),
        Err(QuantityError::ZeroDenominator {
            input: "1/0".to_string()
        })
    );
    assert!(matches!(
        parse_quantity("2 5/00"),
        Err(QuantityError::ZeroDenominator { .. })
    ));
    // A zero numerator is fine
    assert_eq!(parse_quantity("0/4").unwrap().to_decimal().unwrap(), 0.0);
}

#[test]
fn test_overflowing_fraction_parts() {
    assert!(matches!(
        parse_quantity("1/99999999999999999999"),
        Err(QuantityError::Overflow { .. })
    ));
    assert!(matches!(
        parse_quantity("99999999999999999999 1/2"),
        Err(QuantityError::Overflow { .. })
    ));
}

#[test]
fn test_display_renders_canonical_text() {
    assert_eq!(parse_quantity(" 1 1/2 ").unwrap().to_string(), "1 1/2");
    assert_eq!(parse_quantity("3/8").unwrap().to_string(), "3/8");
    assert_eq!(parse_quantity("04").unwrap().to_string(), "4");
    assert_eq!(parse_quantity("1.50").unwrap().to_string(), "1.5");
}

#[test]
fn test_hand_built_zero_denominator() {
    let text = FractionText::Simple {
        numerator: 1,
        denominator: 0,
    };
    assert!(matches!(
        text.to_decimal(),
        Err(QuantityError::ZeroDenominator { .. })
    ));
}

#[test]
fn test_numeral_beyond_f64_range() {
    use crate::codec::{fraction_to_decimal, validate};

    let huge_integer = format!("1{}", "0".repeat(400));
    let huge_decimal = format!("{}.5", "9".repeat(400));

    for text in [huge_integer.as_str(), huge_decimal.as_str()] {
        assert!(
            matches!(parse_quantity(text), Err(QuantityError::Overflow { .. })),
            "parse of {}-digit numeral should overflow",
            text.len()
        );
        assert!(!validate(text));
        assert!(matches!(
            fraction_to_decimal(text),
            Err(QuantityError::Overflow { .. })
        ));
    }
}
