//! Vouchers

use crate::{prices::Price, uuids::TypedUuid};

/// Voucher UUID
pub type VoucherUuid = TypedUuid<Voucher>;

/// A shop-level voucher offering a capped absolute discount.
#[derive(Debug, Clone, PartialEq)]
pub struct Voucher {
    uuid: VoucherUuid,
    tag: String,
    max_discount_amount: Price,
    min_usage_amount: Price,
    image: String,
}

impl Voucher {
    /// Create a voucher with a freshly generated id. The tag is lowercased.
    pub fn new(
        tag: &str,
        max_discount_amount: Price,
        min_usage_amount: Price,
        image: impl Into<String>,
    ) -> Self {
        Self {
            uuid: VoucherUuid::new(),
            tag: tag.to_lowercase(),
            max_discount_amount,
            min_usage_amount,
            image: image.into(),
        }
    }

    /// Voucher id
    pub fn uuid(&self) -> VoucherUuid {
        self.uuid
    }

    /// Lowercase tag label, possibly comma-separated.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Largest absolute saving the voucher grants.
    pub fn max_discount_amount(&self) -> Price {
        self.max_discount_amount
    }

    /// Minimum spend before the voucher applies.
    pub fn min_usage_amount(&self) -> Price {
        self.min_usage_amount
    }

    /// Image reference
    pub fn image(&self) -> &str {
        &self.image
    }
}
