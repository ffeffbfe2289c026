//! Conversion of numbers and amounts into Tamil words.
//!
//! Numbers are grouped the Indian way: units, tens and hundreds, then
//! thousand, lakh and crore. Each group tier is driven by [`TIERS`].

use crate::amount::Amount;
use crate::error::Result;
use crate::lexicon::{
    AND, HUNDRED, HUNDRED_JOINED, PAISA, RUPEES, TENS, TIERS, UNITS, ZERO,
};
use rust_decimal::Decimal;

/// Converts a non-negative integer into Tamil words.
///
/// Returns an empty string for zero; callers that need the word for zero
/// go through [`amount_words`].
///
/// # Examples
///
/// ```
/// use tamil_amount_words::integer_to_words;
///
/// assert_eq!(integer_to_words(15), "பதினைந்து");
/// assert_eq!(integer_to_words(100), "ஒன்று நூறு");
/// assert_eq!(integer_to_words(100_000), "ஒரு இலட்சம்");
/// ```
pub fn integer_to_words(n: u64) -> String {
    match n {
        0 => String::new(),
        1..=19 => UNITS[n as usize].to_string(),
        20..=99 => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                rest => format!("{} {}", tens, integer_to_words(rest)),
            }
        }
        100..=999 => {
            let hundreds = UNITS[(n / 100) as usize];
            match n % 100 {
                0 => format!("{} {}", hundreds, HUNDRED),
                rest => format!("{} {} {}", hundreds, HUNDRED_JOINED, integer_to_words(rest)),
            }
        }
        _ => {
            // n >= 1000, so the thousand tier always matches.
            let tier = TIERS
                .iter()
                .find(|tier| n >= tier.divisor)
                .unwrap_or(&TIERS[TIERS.len() - 1]);

            let count = n / tier.divisor;
            let head = if count == 1 {
                tier.single.to_string()
            } else {
                format!("{} {}", integer_to_words(count), tier.suffix)
            };

            match n % tier.divisor {
                0 => head,
                rest => format!("{} {}", head, integer_to_words(rest)),
            }
        }
    }
}

/// Renders a validated amount as a rupee clause and a paisa clause.
///
/// Zero-valued clauses are left out. A zero amount yields the word for zero
/// with no suffix.
pub fn amount_words(amount: Amount) -> String {
    if amount.is_zero() {
        return ZERO.to_string();
    }

    let mut clauses = Vec::with_capacity(2);
    if amount.rupees() > 0 {
        clauses.push(format!("{} {}", integer_to_words(amount.rupees()), RUPEES));
    }
    if amount.paisa() > 0 {
        clauses.push(format!(
            "{} {}",
            integer_to_words(u64::from(amount.paisa())),
            PAISA
        ));
    }

    clauses.join(&format!(" {} ", AND))
}

/// Converts a floating-point amount into Tamil words.
///
/// Negative, NaN and infinite inputs fail with
/// [`WordsError::InvalidAmount`](crate::WordsError::InvalidAmount).
///
/// # Examples
///
/// ```
/// use tamil_amount_words::amount_to_words;
///
/// assert_eq!(amount_to_words(0.0).unwrap(), "பூஜ்ஜியம்");
/// assert_eq!(amount_to_words(15.0).unwrap(), "பதினைந்து ரூபாய்");
/// assert!(amount_to_words(-1.0).is_err());
/// ```
pub fn amount_to_words(amount: f64) -> Result<String> {
    Ok(amount_words(Amount::from_f64(amount)?))
}

/// Converts a decimal amount into Tamil words.
pub fn decimal_to_words(amount: Decimal) -> Result<String> {
    Ok(amount_words(Amount::from_decimal(amount)?))
}
