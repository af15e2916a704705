//! Feed Records
//!
//! Serde shapes of the seed feed and their conversion into domain types.
//! Conversion never fails: out-of-range numbers are clamped and malformed
//! amounts fall back to zero, each with a `warn` event.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    menu::{MenuDiscount, MenuItem},
    prices::Price,
    shops::{GeoPoint, Shop, ShopDetails},
    vouchers::Voucher,
};

/// Discount attached to a menu entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuDiscountRecord {
    /// Free-form tag label
    pub tag: String,

    /// Whole-number percentage
    pub discount_percentage: i64,
}

/// Menu entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuRecord {
    /// Item name
    pub menu_name: String,

    /// Price in whole Rupiah
    pub price: i64,

    /// Optional discount
    #[serde(default)]
    pub discount: Option<MenuDiscountRecord>,

    /// Image reference
    #[serde(default)]
    pub img: String,
}

/// An amount quoted in thousands, written either as a string (`"30"`) or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThousandsAmount {
    /// Numeric form
    Number(i64),

    /// String form, as the upstream feed writes it
    Text(String),
}

impl ThousandsAmount {
    /// Whole Rupiah value, zero when malformed or negative.
    pub fn to_price(&self, field: &'static str) -> Price {
        match self {
            ThousandsAmount::Text(text) => Price::from_thousands(parse_thousands(text, field)),
            ThousandsAmount::Number(number) => {
                Price::from_thousands(clamp_non_negative(*number, field))
            }
        }
    }
}

impl Default for ThousandsAmount {
    fn default() -> Self {
        ThousandsAmount::Number(0)
    }
}

/// Voucher entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherRecord {
    /// Free-form tag label
    pub tag: String,

    /// Maximum discount, in thousands
    #[serde(default)]
    pub max_disc: ThousandsAmount,

    /// Minimum spend, in thousands
    #[serde(default)]
    pub min_usage: ThousandsAmount,

    /// Image reference
    #[serde(default)]
    pub img: String,
}

/// Shop entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopRecord {
    /// Display name
    pub name: String,

    /// Location label
    pub location: String,

    /// Static walking distance in metres
    #[serde(default)]
    pub distance: i64,

    /// Static step count
    #[serde(default)]
    pub steps: i64,

    /// Static calorie estimate
    #[serde(default)]
    pub calories: i64,

    /// Latitude in degrees
    pub latitude: f64,

    /// Longitude in degrees
    pub longitude: f64,

    /// Logo image reference
    #[serde(default)]
    pub logo: String,

    /// Header image reference
    #[serde(default)]
    pub img: String,

    /// Menu entries
    #[serde(default)]
    pub menu: Option<Vec<MenuRecord>>,

    /// Voucher entries
    #[serde(default)]
    pub voucher: Option<Vec<VoucherRecord>>,
}

/// Parse a thousands magnitude such as `"30"` into a plain count of thousands.
///
/// Surrounding whitespace is ignored. Anything else that is not a non-negative
/// base-10 integer yields zero.
pub fn parse_thousands(text: &str, field: &'static str) -> u64 {
    text.trim().parse::<u64>().unwrap_or_else(|error| {
        warn!(field, value = text, %error, "malformed amount, defaulting to 0");
        0
    })
}

fn clamp_non_negative(value: i64, field: &'static str) -> u64 {
    u64::try_from(value).unwrap_or_else(|_error| {
        warn!(field, value, "negative value, clamping to 0");
        0
    })
}

fn clamp_u32(value: i64, field: &'static str) -> u32 {
    let clamped = clamp_non_negative(value, field);

    u32::try_from(clamped).unwrap_or_else(|_error| {
        warn!(field, value, "value too large, clamping to u32::MAX");
        u32::MAX
    })
}

fn clamp_percentage(value: i64) -> u8 {
    let clamped = value.clamp(0, 100);

    if clamped != value {
        warn!(value, clamped, "discount percentage out of range, clamping");
    }

    u8::try_from(clamped).unwrap_or_default()
}

impl From<MenuRecord> for MenuItem {
    fn from(record: MenuRecord) -> Self {
        let discount = record.discount.map(|discount| {
            MenuDiscount::new(
                &discount.tag,
                clamp_percentage(discount.discount_percentage),
            )
        });

        MenuItem::new(
            record.menu_name,
            Price::new(clamp_non_negative(record.price, "price")),
            discount,
            record.img,
        )
    }
}

impl From<VoucherRecord> for Voucher {
    fn from(record: VoucherRecord) -> Self {
        Voucher::new(
            &record.tag,
            record.max_disc.to_price("maxDisc"),
            record.min_usage.to_price("minUsage"),
            record.img,
        )
    }
}

impl From<ShopRecord> for Shop {
    fn from(record: ShopRecord) -> Self {
        let details = ShopDetails {
            name: record.name,
            location: record.location,
            static_distance: clamp_u32(record.distance, "distance"),
            static_steps: clamp_u32(record.steps, "steps"),
            static_calories: clamp_u32(record.calories, "calories"),
            coordinate: GeoPoint::new(record.latitude, record.longitude),
            logo: record.logo,
            header_image: record.img,
        };

        let menu_items = record
            .menu
            .unwrap_or_default()
            .into_iter()
            .map(MenuItem::from)
            .collect();

        let vouchers = record
            .voucher
            .unwrap_or_default()
            .into_iter()
            .map(Voucher::from)
            .collect();

        Shop::new(details, menu_items, vouchers)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn shop_record() -> ShopRecord {
        ShopRecord {
            name: "Tomoro Coffee".to_string(),
            location: "Kuningan".to_string(),
            distance: 450,
            steps: 600,
            calories: 30,
            latitude: -6.2,
            longitude: 106.8,
            logo: "tomoro_logo".to_string(),
            img: "tomoro".to_string(),
            menu: None,
            voucher: None,
        }
    }

    #[test]
    fn parse_thousands_accepts_trimmed_integers() {
        assert_eq!(parse_thousands("30", "maxDisc"), 30);
        assert_eq!(parse_thousands(" 15 ", "maxDisc"), 15);
    }

    #[test]
    fn parse_thousands_defaults_malformed_to_zero() {
        assert_eq!(parse_thousands("thirty", "maxDisc"), 0);
        assert_eq!(parse_thousands("", "maxDisc"), 0);
        assert_eq!(parse_thousands("-5", "maxDisc"), 0);
        assert_eq!(parse_thousands("2.5", "maxDisc"), 0);
    }

    #[test]
    fn voucher_amounts_are_multiplied_by_one_thousand() {
        let voucher = Voucher::from(VoucherRecord {
            tag: "Bank ABC".to_string(),
            max_disc: ThousandsAmount::Text("30".to_string()),
            min_usage: ThousandsAmount::Number(100),
            img: String::new(),
        });

        assert_eq!(voucher.tag(), "bank abc");
        assert_eq!(voucher.max_discount_amount(), Price::new(30_000));
        assert_eq!(voucher.min_usage_amount(), Price::new(100_000));
    }

    #[test]
    fn malformed_voucher_amount_degrades_to_zero() {
        let voucher = Voucher::from(VoucherRecord {
            tag: "bank".to_string(),
            max_disc: ThousandsAmount::Text("n/a".to_string()),
            min_usage: ThousandsAmount::Number(-3),
            img: String::new(),
        });

        assert_eq!(voucher.max_discount_amount(), Price::ZERO);
        assert_eq!(voucher.min_usage_amount(), Price::ZERO);
    }

    #[test]
    fn menu_values_are_clamped() {
        let item = MenuItem::from(MenuRecord {
            menu_name: "Latte".to_string(),
            price: -100,
            discount: Some(MenuDiscountRecord {
                tag: "DRINK".to_string(),
                discount_percentage: 150,
            }),
            img: String::new(),
        });

        assert_eq!(item.price(), Price::ZERO);
        assert_eq!(item.discount().map(MenuDiscount::discount_percentage), Some(100));
        assert_eq!(item.discount().map(MenuDiscount::tag), Some("drink"));
    }

    #[test]
    fn negative_percentage_becomes_inactive() {
        let item = MenuItem::from(MenuRecord {
            menu_name: "Latte".to_string(),
            price: 20_000,
            discount: Some(MenuDiscountRecord {
                tag: "drink".to_string(),
                discount_percentage: -10,
            }),
            img: String::new(),
        });

        assert!(!item.has_active_discount());
    }

    #[test]
    fn shop_without_menu_or_vouchers() {
        let shop = Shop::from(shop_record());

        assert_eq!(shop.name(), "Tomoro Coffee");
        assert_eq!(shop.details().static_distance, 450);
        assert_eq!(shop.details().header_image, "tomoro");
        assert!(shop.menu_items().is_empty());
        assert_eq!(shop.max_effective_discount_value(), Decimal::ZERO);
    }

    #[test]
    fn negative_static_values_are_clamped() {
        let shop = Shop::from(ShopRecord {
            distance: -1,
            steps: -1,
            calories: -1,
            ..shop_record()
        });

        assert_eq!(shop.details().static_distance, 0);
        assert_eq!(shop.details().static_steps, 0);
        assert_eq!(shop.details().static_calories, 0);
    }
}
