use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, Mul, Neg, Sub, SubAssign},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::op;

//--------------------------------------       Cents       -----------------------------------------------------------
/// A signed monetary amount in minor currency units. Negative amounts represent refunds or
/// debits rather than incoming payments.
#[derive(Debug, Clone, Copy, Default, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Cents(i64);

op!(binary Cents, Add, add);
op!(binary Cents, Sub, sub);
op!(inplace Cents, SubAssign, sub_assign);
op!(unary Cents, Neg, neg);

impl Mul<i64> for Cents {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        Self::from(self.value() * rhs)
    }
}

impl Sum for Cents {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[derive(Debug, Clone, Error)]
#[error("Value cannot be represented in minor currency units: {0}")]
pub struct CentsConversionError(String);

impl From<i64> for Cents {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl PartialEq for Cents {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Cents {}

impl TryFrom<u64> for Cents {
    type Error = CentsConversionError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value > i64::MAX as u64 {
            Err(CentsConversionError(format!("Value {} is too large to convert to Cents", value)))
        } else {
            #[allow(clippy::cast_possible_wrap)]
            Ok(Self(value as i64))
        }
    }
}

impl Display for Cents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let minor = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", minor / 100, minor % 100)
    }
}

impl Cents {
    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn from_major_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// The magnitude of this amount. Saturates at `i64::MAX` for `i64::MIN`.
    pub fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_renders_major_and_minor_units() {
        assert_eq!(Cents::from(85000).to_string(), "850.00");
        assert_eq!(Cents::from(-1205).to_string(), "-12.05");
        assert_eq!(Cents::from(7).to_string(), "0.07");
        assert_eq!(Cents::default().to_string(), "0.00");
    }

    #[test]
    fn arithmetic_forwards_to_the_wrapped_value() {
        let total: Cents = vec![Cents::from(100), Cents::from(250)].into_iter().sum();
        assert_eq!(total, Cents::from(350));
        assert_eq!(Cents::from_major_units(12) - Cents::from(50), Cents::from(1150));
        assert_eq!(-Cents::from(300), Cents::from(-300));
        assert_eq!(Cents::from(-300).abs(), Cents::from(300));
        assert!(Cents::from(-1).is_negative());
    }
}
