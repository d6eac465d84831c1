//! Exact currency amounts.
//!
//! Amounts are held in paise (1/100 rupee) so that tier percentages of
//! whole-rupee prices stay exact. JSON carries decimal rupees, which is the
//! format stored carts and history entries have always used.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const PAISE_PER_RUPEE: u64 = 100;

/// Largest amount accepted from stored data: Rs 1,000,000,000.
pub const MAX_STORED_RUPEES: u64 = 1_000_000_000;

/// A non-negative amount of money in paise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_rupees(rupees: u64) -> Self {
        Money(rupees * PAISE_PER_RUPEE)
    }

    pub const fn from_paise(paise: u64) -> Self {
        Money(paise)
    }

    pub const fn paise(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Price of `quantity` units at this unit price. Saturates at `u64::MAX`.
    pub const fn times(self, quantity: u32) -> Self {
        Money(self.0.saturating_mul(quantity as u64))
    }

    /// `percent`% of this amount, rounded down to the paisa.
    pub const fn percent(self, percent: u64) -> Self {
        match self.0.checked_mul(percent) {
            Some(scaled) => Money(scaled / 100),
            None => Money(self.0 / 100 * percent),
        }
    }

    pub const fn saturating_sub(self, other: Money) -> Self {
        Money(self.0.saturating_sub(other.0))
    }

    /// Decimal rupees, for display and JSON.
    pub fn as_rupees(self) -> f64 {
        self.0 as f64 / PAISE_PER_RUPEE as f64
    }

    /// Parse decimal rupees. Negative, non-finite and values above
    /// [`MAX_STORED_RUPEES`] are rejected.
    pub fn from_rupees_f64(rupees: f64) -> Option<Self> {
        if !rupees.is_finite() || rupees < 0.0 || rupees > MAX_STORED_RUPEES as f64 {
            return None;
        }
        Some(Money((rupees * PAISE_PER_RUPEE as f64).round() as u64))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rs {}.{:02}",
            self.0 / PAISE_PER_RUPEE,
            self.0 % PAISE_PER_RUPEE
        )
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Whole rupees stay integers on the wire ("price": 15).
        if self.0 % PAISE_PER_RUPEE == 0 {
            serializer.serialize_u64(self.0 / PAISE_PER_RUPEE)
        } else {
            serializer.serialize_f64(self.as_rupees())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rupees = f64::deserialize(deserializer)?;
        Money::from_rupees_f64(rupees)
            .ok_or_else(|| D::Error::custom(format!("invalid amount: {rupees}")))
    }
}
