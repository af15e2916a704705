//! Discount utilities
//!
//! Savings arithmetic and badge labels shared by menu discounts and vouchers.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

use crate::prices::Price;

const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;
const ONE_THOUSAND: Decimal = Decimal::ONE_THOUSAND;

/// Absolute saving of a percentage discount: `price * percentage / 100`.
///
/// The result is exact (`999 * 15%` is `149.85`), no rounding is applied.
pub fn percent_of_price(price: Price, percentage: u8) -> Decimal {
    price.to_decimal() * Decimal::from(percentage) / ONE_HUNDRED
}

/// Round a saving to the nearest thousand Rupiah, halves away from zero.
///
/// `5500` becomes `6`, `1499` becomes `1`, `499` becomes `0`.
pub fn round_to_thousands(saving: Decimal) -> u64 {
    (saving / ONE_THOUSAND)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or_default()
}

/// Thousands shown on a menu discount badge.
///
/// The badge follows the storefront's float arithmetic: the saving is
/// `price * (percentage / 100)` in `f64`, then rounded with [`f64::round`].
/// Some exact halves land just below the midpoint, so 29% of 50 000 shows as
/// 14 rather than 15. Ranking still uses the exact [`percent_of_price`].
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "menu prices are far below 2^52 and the rounded saving is non-negative"
)]
pub fn menu_badge_thousands(price: Price, percentage: u8) -> u64 {
    let saving = *price as f64 * (f64::from(percentage) / 100.0);

    (saving / 1000.0).round() as u64
}

/// Short badge text naming a saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromoLabel {
    /// Saving rounded to thousands, shown as `"6rb Off"`.
    Thousands(u64),

    /// Saving too small to round to a thousand, shown as its percentage `"10% Off"`.
    Percent(u8),

    /// Voucher saving too small to round to a thousand, shown as `"Rp400 Off"`.
    Amount(u64),
}

impl PromoLabel {
    /// Label for a menu discount of `percentage` on an item costing `price`.
    pub fn for_menu_discount(price: Price, percentage: u8) -> Self {
        match menu_badge_thousands(price, percentage) {
            0 => PromoLabel::Percent(percentage),
            thousands => PromoLabel::Thousands(thousands),
        }
    }

    /// Label for a voucher capped at `amount`.
    pub fn for_voucher(amount: Price) -> Self {
        match round_to_thousands(amount.to_decimal()) {
            0 => PromoLabel::Amount(*amount),
            thousands => PromoLabel::Thousands(thousands),
        }
    }
}

impl fmt::Display for PromoLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromoLabel::Thousands(thousands) => write!(f, "{thousands}rb Off"),
            PromoLabel::Percent(percentage) => write!(f, "{percentage}% Off"),
            PromoLabel::Amount(amount) => write!(f, "Rp{amount} Off"),
        }
    }
}
