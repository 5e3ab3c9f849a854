//! Price in integer minor currency units.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A price in minor currency units (BDT, whole taka).
///
/// Prices are stored and transmitted as plain integers, matching the
/// `products` collection. There is no fractional component and no
/// multi-currency support.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Create a new price from minor units.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Get the amount in minor units.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Price {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl From<Price> for i64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_bare_integer() {
        let price = Price::new(60000);
        assert_eq!(serde_json::to_string(&price).expect("serialize"), "60000");

        let back: Price = serde_json::from_str("60000").expect("deserialize");
        assert_eq!(back, price);
    }
}
