//! Prices

use std::{fmt, ops::Deref};

use rust_decimal::Decimal;

/// A price in whole Rupiah.
///
/// Rupiah is quoted without minor units. `Price::new(22_000)` displays as
/// `Rp22000`; reports format it through [`crate::report::format_rupiah`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    value: u64,
}

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self { value: 0 };

    /// Creates a new Price
    pub const fn new(value: u64) -> Self {
        Price { value }
    }

    /// Creates a price from a magnitude quoted in thousands (`"30"` means 30 000 Rupiah).
    ///
    /// Saturates rather than overflowing.
    pub const fn from_thousands(thousands: u64) -> Self {
        Price {
            value: thousands.saturating_mul(1000),
        }
    }

    /// The price as an exact decimal, for savings arithmetic.
    pub fn to_decimal(self) -> Decimal {
        Decimal::from(self.value)
    }
}

impl Deref for Price {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rp{}", self.value)
    }
}
