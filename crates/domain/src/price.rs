//! Rupee amounts.
//!
//! Prices travel over JSON as plain numbers of rupees (`12500`, `999.5`) but
//! are held as whole paise so that deposits and sums stay exact.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Share of the price collected up front when booking, in percent.
pub const UPFRONT_PERCENT: u64 = 10;

/// Largest accepted amount in rupees; keeps the paise conversion lossless.
const MAX_RUPEES: f64 = 1e12;

/// A non-negative amount of Indian rupees, stored in paise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price {
    paise: u64,
}

impl Price {
    /// Build a price from a whole number of paise.
    #[must_use]
    pub const fn from_paise(paise: u64) -> Self {
        Self { paise }
    }

    /// Build a price from rupees, rounding to the nearest paisa.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPrice`] for negative, non-finite or
    /// absurdly large amounts.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_rupees(rupees: f64) -> Result<Self, ValidationError> {
        if !rupees.is_finite() || rupees < 0.0 || rupees > MAX_RUPEES {
            return Err(ValidationError::InvalidPrice);
        }
        Ok(Self {
            paise: (rupees * 100.0).round() as u64,
        })
    }

    #[must_use]
    pub const fn paise(self) -> u64 {
        self.paise
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.paise == 0
    }

    /// The amount as a floating number of rupees (JSON representation).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn as_rupees(self) -> f64 {
        self.paise as f64 / 100.0
    }

    /// The booking deposit: [`UPFRONT_PERCENT`] of the price, rounded half up
    /// to the paisa.
    #[must_use]
    pub const fn upfront_deposit(self) -> Self {
        Self {
            paise: (self.paise * UPFRONT_PERCENT + 50) / 100,
        }
    }
}

impl TryFrom<f64> for Price {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_rupees(value)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.as_rupees()
    }
}

/// Formats as `₹1,25,000` (Indian digit grouping); paise are shown only when
/// non-zero (`₹1,250.50`).
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rupees = self.paise / 100;
        let paise = self.paise % 100;
        write!(f, "\u{20B9}{}", group_indian(rupees))?;
        if paise != 0 {
            write!(f, ".{paise:02}")?;
        }
        Ok(())
    }
}

/// Group digits as lakh/crore: the last three digits, then pairs.
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}
