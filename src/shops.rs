//! Shops
//!
//! A [`Shop`] is built once from its details, menu and vouchers. Promo-derived
//! fields are computed during construction and frozen alongside the inputs;
//! changing the menu or vouchers means building a new shop with
//! [`Shop::rebuild_with`], so the cached fields never go stale.

use rust_decimal::Decimal;

use crate::{
    menu::MenuItem,
    promotions::{self, PromoCandidate},
    vouchers::Voucher,
};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub latitude: f64,

    /// Longitude in degrees
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new point.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Descriptive shop attributes, independent of promotions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShopDetails {
    /// Display name
    pub name: String,

    /// Human-readable location label
    pub location: String,

    /// Fallback walking distance in metres
    pub static_distance: u32,

    /// Fallback step count
    pub static_steps: u32,

    /// Fallback calorie estimate
    pub static_calories: u32,

    /// Shop position
    pub coordinate: GeoPoint,

    /// Logo image reference
    pub logo: String,

    /// Header image reference
    pub header_image: String,
}

/// A coffee shop with its promotions and cached promo summary.
#[derive(Debug, Clone, PartialEq)]
pub struct Shop {
    details: ShopDetails,
    menu_items: Vec<MenuItem>,
    vouchers: Vec<Voucher>,
    aggregated_promo_tags: String,
    max_effective_discount_value: Decimal,
    best_promo: Option<PromoCandidate>,
}

impl Shop {
    /// Build a shop and compute its promo summary.
    pub fn new(details: ShopDetails, menu_items: Vec<MenuItem>, vouchers: Vec<Voucher>) -> Self {
        let aggregated_promo_tags = promotions::aggregate_tags(&menu_items, &vouchers).to_csv();
        let best_promo = promotions::best_promo(&menu_items, &vouchers);
        let max_effective_discount_value = best_promo.map_or(Decimal::ZERO, |best| best.value);

        Self {
            details,
            menu_items,
            vouchers,
            aggregated_promo_tags,
            max_effective_discount_value,
            best_promo,
        }
    }

    /// Replace the menu and vouchers, recomputing every derived field.
    #[must_use]
    pub fn rebuild_with(self, menu_items: Vec<MenuItem>, vouchers: Vec<Voucher>) -> Self {
        Self::new(self.details, menu_items, vouchers)
    }

    /// Take the shop apart into its construction inputs.
    pub fn into_parts(self) -> (ShopDetails, Vec<MenuItem>, Vec<Voucher>) {
        (self.details, self.menu_items, self.vouchers)
    }

    /// Descriptive attributes
    pub fn details(&self) -> &ShopDetails {
        &self.details
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.details.name
    }

    /// Location label
    pub fn location(&self) -> &str {
        &self.details.location
    }

    /// Shop position
    pub fn coordinate(&self) -> GeoPoint {
        self.details.coordinate
    }

    /// Menu in stored order
    pub fn menu_items(&self) -> &[MenuItem] {
        &self.menu_items
    }

    /// Vouchers in stored order
    pub fn vouchers(&self) -> &[Voucher] {
        &self.vouchers
    }

    /// Sorted, comma-joined promo tags, e.g. `"bank,drink,food"`.
    pub fn aggregated_promo_tags(&self) -> &str {
        &self.aggregated_promo_tags
    }

    /// Largest absolute saving on offer, used for ranking.
    pub fn max_effective_discount_value(&self) -> Decimal {
        self.max_effective_discount_value
    }

    /// The promo behind [`Shop::max_effective_discount_value`].
    pub fn best_promo(&self) -> Option<&PromoCandidate> {
        self.best_promo.as_ref()
    }

    /// Badge text for the best promo.
    pub fn best_promo_text(&self) -> Option<String> {
        self.best_promo.map(|best| best.label.to_string())
    }

    /// Number of vouchers plus actively discounted menu items.
    pub fn active_promo_count(&self) -> usize {
        promotions::active_promo_count(&self.menu_items, &self.vouchers)
    }

    /// Sorted promo tags for display.
    pub fn unique_active_promo_tags(&self) -> Vec<String> {
        promotions::unique_active_promo_tags(&self.menu_items, &self.vouchers)
    }
}

#[cfg(test)]
mod tests {
    use crate::{menu::MenuDiscount, prices::Price};

    use super::*;

    fn details(name: &str) -> ShopDetails {
        ShopDetails {
            name: name.to_string(),
            location: "Green Office Park".to_string(),
            ..ShopDetails::default()
        }
    }

    #[test]
    fn construction_computes_promo_summary() {
        let shop = Shop::new(
            details("Kopi Kenangan"),
            vec![MenuItem::new(
                "Es Kopi Susu",
                Price::new(22_000),
                Some(MenuDiscount::new("Drink", 25)),
                "kopi",
            )],
            vec![Voucher::new(
                "Bank ABC, Food",
                Price::from_thousands(3),
                Price::from_thousands(50),
                "voucher",
            )],
        );

        assert_eq!(shop.aggregated_promo_tags(), "bank abc,drink,food");
        assert_eq!(shop.max_effective_discount_value(), Decimal::from(5500));
        assert_eq!(shop.best_promo_text().as_deref(), Some("6rb Off"));
        assert_eq!(shop.active_promo_count(), 2);
        assert_eq!(
            shop.unique_active_promo_tags(),
            ["bank abc", "drink", "food"]
        );
    }

    #[test]
    fn shop_without_promos_has_empty_summary() {
        let shop = Shop::new(details("Plain"), vec![], vec![]);

        assert_eq!(shop.aggregated_promo_tags(), "");
        assert_eq!(shop.max_effective_discount_value(), Decimal::ZERO);
        assert_eq!(shop.best_promo(), None);
    }

    #[test]
    fn rebuild_recomputes_derived_fields() {
        let shop = Shop::new(
            details("Fore"),
            vec![],
            vec![Voucher::new("ewallet", Price::new(10_000), Price::ZERO, "v")],
        );

        assert_eq!(shop.aggregated_promo_tags(), "ewallet");

        let rebuilt = shop.rebuild_with(
            vec![],
            vec![Voucher::new("food", Price::new(20_000), Price::ZERO, "v")],
        );

        assert_eq!(rebuilt.name(), "Fore");
        assert_eq!(rebuilt.aggregated_promo_tags(), "food");
        assert_eq!(rebuilt.max_effective_discount_value(), Decimal::from(20_000));
    }

    #[test]
    fn rebuilding_from_same_inputs_is_identical() {
        let shop = Shop::new(
            details("Janji Jiwa"),
            vec![MenuItem::new(
                "Croissant",
                Price::new(18_000),
                Some(MenuDiscount::new("food, drink", 15)),
                "c",
            )],
            vec![Voucher::new("ewallet", Price::new(5000), Price::ZERO, "v")],
        );

        let (details, menu, vouchers) = shop.clone().into_parts();
        let first = Shop::new(details.clone(), menu.clone(), vouchers.clone());
        let second = Shop::new(details, menu, vouchers);

        assert_eq!(first.aggregated_promo_tags(), shop.aggregated_promo_tags());
        assert_eq!(first.aggregated_promo_tags(), second.aggregated_promo_tags());
        assert_eq!(
            first.max_effective_discount_value(),
            second.max_effective_discount_value()
        );
        assert_eq!(first, second);
    }
}
