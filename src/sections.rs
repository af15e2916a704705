//! Storefront Sections
//!
//! Read-only, ordered views over a [`Catalog`]. Names sort by ordinal,
//! case-sensitive `str` ordering throughout.

use tracing::debug;

use crate::{
    catalog::{Catalog, ShopSort},
    shops::Shop,
    tags::contains_fragment,
};

/// Tag fragments for the digital wallet and card perks section.
pub const WALLET_AND_BANK_FRAGMENTS: [&str; 2] = ["ewallet", "bank"];

/// Tag fragments for the food section.
pub const FOOD_FRAGMENTS: [&str; 1] = ["food"];

/// Shops with any saving, largest first, ties by name.
pub fn top_discount(catalog: &Catalog) -> Vec<&Shop> {
    catalog.fetch(
        |shop| !shop.max_effective_discount_value().is_zero(),
        ShopSort::MaxDiscountDescending,
    )
}

/// Shops whose stored tags mention any of `fragments`, by name.
pub fn by_tag_fragments<'a>(catalog: &'a Catalog, fragments: &[&str]) -> Vec<&'a Shop> {
    catalog.fetch(
        |shop| {
            fragments
                .iter()
                .any(|fragment| contains_fragment(shop.aggregated_promo_tags(), fragment))
        },
        ShopSort::NameAscending,
    )
}

/// Shops with e-wallet or bank promos, by name.
pub fn wallet_and_bank(catalog: &Catalog) -> Vec<&Shop> {
    by_tag_fragments(catalog, &WALLET_AND_BANK_FRAGMENTS)
}

/// Shops with food promos, by name.
pub fn food(catalog: &Catalog) -> Vec<&Shop> {
    by_tag_fragments(catalog, &FOOD_FRAGMENTS)
}

/// Every shop, by name.
pub fn all_shops(catalog: &Catalog) -> Vec<&Shop> {
    catalog.fetch(|_| true, ShopSort::NameAscending)
}

/// Shops whose name or location contains `query`, ignoring case, by name.
///
/// The query is trimmed first, so an empty or whitespace-only query matches
/// every shop.
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Shop> {
    let needle = query.trim().to_lowercase();

    if needle.is_empty() {
        return all_shops(catalog);
    }

    catalog.fetch(
        |shop| {
            shop.name().to_lowercase().contains(&needle)
                || shop.location().to_lowercase().contains(&needle)
        },
        ShopSort::NameAscending,
    )
}

/// The homepage sections, built together from one catalog snapshot.
#[derive(Debug)]
pub struct Sections<'a> {
    /// "Sip and Save": largest savings first.
    pub top_discount: Vec<&'a Shop>,

    /// Digital wallet and card perks.
    pub wallet_and_bank: Vec<&'a Shop>,

    /// Food selections.
    pub food: Vec<&'a Shop>,

    /// Every shop.
    pub all: Vec<&'a Shop>,
}

impl<'a> Sections<'a> {
    /// Build every section.
    #[tracing::instrument(name = "sections.build", skip_all, fields(shops = catalog.count()))]
    pub fn build(catalog: &'a Catalog) -> Self {
        let sections = Self {
            top_discount: top_discount(catalog),
            wallet_and_bank: wallet_and_bank(catalog),
            food: food(catalog),
            all: all_shops(catalog),
        };

        debug!(
            top_discount = sections.top_discount.len(),
            wallet_and_bank = sections.wallet_and_bank.len(),
            food = sections.food.len(),
            all = sections.all.len(),
            "built sections"
        );

        sections
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        menu::{MenuDiscount, MenuItem},
        prices::Price,
        shops::ShopDetails,
        vouchers::Voucher,
    };

    use super::*;

    fn names<'a>(shops: &[&'a Shop]) -> Vec<&'a str> {
        shops.iter().map(|shop| shop.name()).collect()
    }

    fn shop(name: &str, location: &str, voucher_tag: &str, amount: u64) -> Shop {
        Shop::new(
            ShopDetails {
                name: name.to_string(),
                location: location.to_string(),
                ..ShopDetails::default()
            },
            vec![],
            vec![Voucher::new(voucher_tag, Price::new(amount), Price::ZERO, "v")],
        )
    }

    fn catalog() -> Result<Catalog, crate::catalog::CatalogError> {
        let mut catalog = Catalog::new();

        catalog.insert(shop("Tomoro", "Kuningan", "bank,food", 10_000))?;
        catalog.insert(shop("Fore", "Senayan", "ewallet xyz", 25_000))?;
        catalog.insert(shop("Kopi Kenangan", "BSD", "drink", 10_000))?;
        catalog.insert(Shop::new(
            ShopDetails {
                name: "Anomali".to_string(),
                location: "Menteng".to_string(),
                ..ShopDetails::default()
            },
            vec![MenuItem::new(
                "Latte",
                Price::new(30_000),
                Some(MenuDiscount::new("food", 0)),
                "l",
            )],
            vec![],
        ))?;

        Ok(catalog)
    }

    #[test]
    fn top_discount_orders_by_value_then_name() -> TestResult {
        let catalog = catalog()?;

        assert_eq!(
            names(&top_discount(&catalog)),
            ["Fore", "Kopi Kenangan", "Tomoro"]
        );

        Ok(())
    }

    #[test]
    fn shop_can_appear_in_several_sections() -> TestResult {
        let catalog = catalog()?;

        assert_eq!(names(&wallet_and_bank(&catalog)), ["Fore", "Tomoro"]);
        assert_eq!(names(&food(&catalog)), ["Tomoro"]);

        Ok(())
    }

    #[test]
    fn inactive_discount_tags_do_not_place_shop_in_section() -> TestResult {
        let catalog = catalog()?;

        assert!(!names(&food(&catalog)).contains(&"Anomali"));

        Ok(())
    }

    #[test]
    fn all_shops_sorted_by_name() -> TestResult {
        let catalog = catalog()?;

        assert_eq!(
            names(&all_shops(&catalog)),
            ["Anomali", "Fore", "Kopi Kenangan", "Tomoro"]
        );

        Ok(())
    }

    #[test]
    fn search_matches_name_or_location_ignoring_case() -> TestResult {
        let catalog = catalog()?;

        assert_eq!(names(&search(&catalog, "KOPI")), ["Kopi Kenangan"]);
        assert_eq!(names(&search(&catalog, "senayan")), ["Fore"]);
        assert_eq!(names(&search(&catalog, "o")).len(), 4);
        assert!(search(&catalog, "nowhere").is_empty());

        Ok(())
    }

    #[test]
    fn blank_search_returns_everything() -> TestResult {
        let catalog = catalog()?;

        assert_eq!(search(&catalog, "").len(), 4);
        assert_eq!(search(&catalog, "   ").len(), 4);
        assert_eq!(search(&catalog, "\t\n").len(), 4);
        assert_eq!(names(&search(&catalog, "  tomoro ")), ["Tomoro"]);

        Ok(())
    }

    #[test]
    fn build_collects_all_sections() -> TestResult {
        let catalog = catalog()?;

        let sections = Sections::build(&catalog);

        assert_eq!(sections.top_discount.len(), 3);
        assert_eq!(sections.wallet_and_bank.len(), 2);
        assert_eq!(sections.food.len(), 1);
        assert_eq!(sections.all.len(), 4);

        Ok(())
    }
}
