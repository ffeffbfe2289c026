//! Rupee and paisa amount with exactly two fractional digits.
//!
//! Inputs are parsed through `rust_decimal` so that the paisa part is
//! derived without floating-point drift.

use crate::error::{Result, WordsError};
use log::debug;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A non-negative amount split into whole rupees and paisa.
///
/// # Invariants
///
/// - `paisa < 100`
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use tamil_amount_words::Amount;
///
/// let amount = Amount::from_str("1500.5").unwrap();
/// assert_eq!(amount.rupees(), 1500);
/// assert_eq!(amount.paisa(), 50);
/// assert_eq!(amount.to_string(), "1500.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount {
    rupees: u64,
    paisa: u8,
}

impl Amount {
    /// Number of paisa in one rupee.
    pub const PAISA_PER_RUPEE: u8 = 100;

    /// Zero value.
    pub const ZERO: Self = Amount {
        rupees: 0,
        paisa: 0,
    };

    /// Creates an amount from its parts. Fails if `paisa` is 100 or more.
    pub fn from_parts(rupees: u64, paisa: u8) -> Result<Self> {
        if paisa >= Self::PAISA_PER_RUPEE {
            return Err(WordsError::invalid_amount(
                format!("{}.{}", rupees, paisa),
                "paisa must be below 100",
            ));
        }
        Ok(Amount { rupees, paisa })
    }

    /// Splits a decimal into rupees and paisa.
    ///
    /// The paisa part is rounded half-up to a whole number. When that rounding
    /// reaches 100 it is carried into the rupee part.
    pub fn from_decimal(value: Decimal) -> Result<Self> {
        if value < Decimal::ZERO {
            return Err(WordsError::invalid_amount(value, "amount is negative"));
        }

        let whole = value.trunc();
        let mut rupees = whole
            .to_u64()
            .ok_or_else(|| WordsError::invalid_amount(value, "rupee part is too large"))?;

        let mut paisa = ((value - whole) * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u8()
            .ok_or_else(|| WordsError::invalid_amount(value, "paisa part out of range"))?;

        if paisa == Self::PAISA_PER_RUPEE {
            debug!("Paisa of {} rounds to 100, carrying into rupees", value);
            rupees = rupees
                .checked_add(1)
                .ok_or_else(|| WordsError::invalid_amount(value, "rupee part is too large"))?;
            paisa = 0;
        }

        Ok(Amount { rupees, paisa })
    }

    /// Converts a floating-point amount. NaN, infinities and negatives are rejected.
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(WordsError::invalid_amount(value, "amount is not finite"));
        }
        if value < 0.0 {
            return Err(WordsError::invalid_amount(value, "amount is negative"));
        }
        let decimal = Decimal::from_f64(value)
            .ok_or_else(|| WordsError::invalid_amount(value, "amount is too large"))?;
        Self::from_decimal(decimal)
    }

    /// Whole rupees.
    pub fn rupees(&self) -> u64 {
        self.rupees
    }

    /// Paisa, always below 100.
    pub fn paisa(&self) -> u8 {
        self.paisa
    }

    /// Returns `true` if both parts are zero.
    pub fn is_zero(&self) -> bool {
        self.rupees == 0 && self.paisa == 0
    }
}

impl FromStr for Amount {
    type Err = WordsError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let decimal = Decimal::from_str(trimmed)
            .map_err(|_| WordsError::invalid_amount(trimmed, "not a decimal number"))?;
        Amount::from_decimal(decimal)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.rupees, self.paisa)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Amount::from_str(&s).map_err(serde::de::Error::custom)
    }
}
