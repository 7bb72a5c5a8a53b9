use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A bill amount carrying exactly two fractional digits.
///
/// Every constructor rounds half-to-even (the same behavior as a bank or a
/// `"{:.2}"` format) and rescales, so `"42.5"` and `42.50` are the same
/// value and serialize identically as `"42.50"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn zero() -> Self {
        Amount(Decimal::new(0, 2))
    }

    /// Rounds half-to-even to 2 places and pins the scale to 2.
    pub fn from_decimal(value: Decimal) -> Self {
        let mut d = value.round_dp(2);
        d.rescale(2);
        Amount(d)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::zero()
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::from_decimal(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
