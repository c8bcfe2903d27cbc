use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};
use std::str::FromStr;

use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

use super::error::ExchangeError;
use super::Decimal;

/// An exact decimal amount of money.
///
/// Backed by a 128-bit decimal so that conversions round to the cent
/// deterministically; binary floating point never enters the arithmetic.
/// Comparison is a total ordering by exact value, so `1.00 == 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// One cent, the smallest currency unit.
    pub fn cent() -> Money {
        Money(Decimal::new(1, 2))
    }

    /// Round to whole cents, ties going to the even neighbor.
    pub fn round_to_cents(self) -> Money {
        self.round_dp_with(2, RoundingStrategy::MidpointNearestEven)
    }

    /// Round to `dp` decimal places with the given strategy.
    pub fn round_dp_with(self, dp: u32, strategy: RoundingStrategy) -> Money {
        Money(self.0.round_dp_with_strategy(dp, strategy))
    }

    /// Trim trailing zeros from the internal representation.
    pub fn normalize(self) -> Money {
        Money(self.0.normalize())
    }
}

impl FromStr for Money {
    type Err = ExchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim())
            .map(Money)
            .map_err(|_| ExchangeError::InvalidArgument("not a decimal amount of money"))
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Money(value)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

/// Multiplication by an exchange rate.
impl Mul for Money {
    type Output = Money;

    fn mul(self, rhs: Money) -> Money {
        Money(self.0 * rhs.0)
    }
}

/// Division by an exchange rate. Panics on a zero divisor; the calculator
/// rejects non-positive rates before dividing.
impl Div for Money {
    type Output = Money;

    fn div(self, rhs: Money) -> Money {
        Money(self.0 / rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}
