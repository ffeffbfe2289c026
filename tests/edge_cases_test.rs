//! Edge case tests for the public conversion API.

use std::io::Cursor;
use std::str::FromStr;
use tamil_amount_words::lexicon::{CRORE, LAKH, THOUSAND, UNITS};
use tamil_amount_words::{
    amount_to_words, amount_words, decimal_to_words, integer_to_words, Amount, BatchConverter,
    WordsError,
};

fn words_for(amount: &str) -> String {
    amount_words(Amount::from_str(amount).unwrap())
}

// ==================== ZERO ====================

#[test]
fn test_zero_has_no_suffix() {
    assert_eq!(amount_to_words(0.0).unwrap(), "பூஜ்ஜியம்");
    assert_eq!(words_for("0.00"), "பூஜ்ஜியம்");
}

#[test]
fn test_amount_rounding_to_zero_uses_zero_word() {
    assert_eq!(words_for("0.001"), "பூஜ்ஜியம்");
}

// ==================== CLAUSES ====================

#[test]
fn test_rupee_clause_only() {
    assert_eq!(amount_to_words(15.0).unwrap(), "பதினைந்து ரூபாய்");
    assert_eq!(amount_to_words(100.0).unwrap(), "ஒன்று நூறு ரூபாய்");
}

#[test]
fn test_paisa_clause_only() {
    assert_eq!(words_for("0.19"), "பத்தொன்பது காசு");
}

#[test]
fn test_rupee_and_paisa_structure() {
    let words = amount_to_words(1500.50).unwrap();
    let (rupees, paisa) = words.split_once(" மற்றும் ").unwrap();

    assert!(rupees.starts_with("ஆயிரம்"));
    assert!(rupees.ends_with("ரூபாய்"));
    assert_eq!(paisa, "ஐம்பது காசு");
}

// ==================== TIERS ====================

#[test]
fn test_lakh_and_crore_idioms() {
    assert_eq!(amount_to_words(100_000.0).unwrap(), "ஒரு இலட்சம் ரூபாய்");
    assert_eq!(amount_to_words(10_000_000.0).unwrap(), "ஒரு கோடி ரூபாய்");
    assert!(!integer_to_words(LAKH).contains(UNITS[1]));
    assert!(!integer_to_words(CRORE).contains(UNITS[1]));
}

#[test]
fn test_many_uses_count_and_suffix() {
    assert_eq!(integer_to_words(2 * THOUSAND), "இரண்டு ஆயிரம்");
    assert_eq!(integer_to_words(2 * LAKH), "இரண்டு இலட்சம்");
    assert_eq!(integer_to_words(2 * CRORE), "இரண்டு கோடி");
}

#[test]
fn test_mixed_tiers() {
    assert_eq!(
        integer_to_words(12_34_56_789),
        "பன்னிரண்டு கோடி முப்பது நான்கு இலட்சம் ஐம்பது ஆறு ஆயிரம் ஏழு நூற்று எண்பது ஒன்பது"
    );
}

#[test]
fn test_tier_boundaries() {
    assert_eq!(integer_to_words(999), "ஒன்பது நூற்று தொண்ணூறு ஒன்பது");
    assert_eq!(integer_to_words(99_999), "தொண்ணூறு ஒன்பது ஆயிரம் ஒன்பது நூற்று தொண்ணூறு ஒன்பது");
    assert_eq!(integer_to_words(1_001), "ஆயிரம் ஒன்று");
}

#[test]
fn test_largest_rupee_value() {
    let words = amount_words(Amount::from_parts(u64::MAX, 99).unwrap());
    assert!(words.ends_with("தொண்ணூறு ஒன்பது காசு"));
    assert!(!words.contains("  "));
}

// ==================== PAISA CARRY ====================

#[test]
fn test_paisa_never_reaches_hundred() {
    for input in ["5.995", "5.9999", "0.995", "99.999"] {
        let amount = Amount::from_str(input).unwrap();
        assert!(amount.paisa() < 100, "{} gave {} paisa", input, amount.paisa());
        assert!(!amount_words(amount).contains("நூறு காசு"));
    }
    assert_eq!(words_for("5.995"), "ஆறு ரூபாய்");
    assert_eq!(words_for("99.999"), "ஒன்று நூறு ரூபாய்");
}

#[test]
fn test_float_carry() {
    assert_eq!(amount_to_words(5.999).unwrap(), "ஆறு ரூபாய்");
}

// ==================== INVALID INPUT ====================

#[test]
fn test_negative_rejected() {
    let err = amount_to_words(-0.01).unwrap_err();
    assert!(matches!(err, WordsError::InvalidAmount { .. }));
    assert!(err.to_string().contains("negative"));
}

#[test]
fn test_non_finite_rejected() {
    assert!(matches!(
        amount_to_words(f64::NAN),
        Err(WordsError::InvalidAmount { .. })
    ));
    assert!(amount_to_words(f64::INFINITY).is_err());
    assert!(amount_to_words(f64::NEG_INFINITY).is_err());
}

#[test]
fn test_too_large_rejected() {
    let huge = rust_decimal::Decimal::from_str("100000000000000000000").unwrap();
    assert!(decimal_to_words(huge).is_err());
    assert!(amount_to_words(1e20).is_err());
}

// ==================== BATCH ====================

#[test]
fn test_batch_rejects_non_numeric_amount() {
    let csv = "id,amount\n1,10\n2,ten";
    let mut converter = BatchConverter::new();
    let err = converter.process_csv(Cursor::new(csv)).unwrap_err();

    match err {
        WordsError::InvalidRecord { row, message } => {
            assert_eq!(row, 3);
            assert!(message.contains("ten"));
        }
        other => panic!("Expected InvalidRecord, got {:?}", other),
    }
}

#[test]
fn test_batch_accumulates_across_calls() {
    let mut converter = BatchConverter::new();
    converter.process_csv(Cursor::new("id,amount\na,1")).unwrap();
    converter.process_csv(Cursor::new("id,amount\nb,2")).unwrap();

    assert_eq!(converter.rows().len(), 2);
    assert_eq!(converter.rows()[1].words, "இரண்டு ரூபாய்");
}
