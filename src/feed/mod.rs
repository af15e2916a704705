//! Feed
//!
//! Loads the shop seed feed (JSON or YAML) and seeds a [`Catalog`] from it.

use std::{fs, path::Path};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    catalog::{Catalog, CatalogError},
    shops::Shop,
};

pub mod records;

pub use records::{MenuDiscountRecord, MenuRecord, ShopRecord, ThousandsAmount, VoucherRecord};

/// Feed loading errors
#[derive(Debug, Error)]
pub enum FeedError {
    /// IO error reading the feed file
    #[error("failed to read feed file: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("failed to parse JSON feed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("failed to parse YAML feed: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// The file extension is not one of `json`, `yml` or `yaml`
    #[error("unsupported feed format: {0}")]
    UnsupportedFormat(String),
}

/// A parsed seed feed: a list of shop records in feed order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feed {
    records: Vec<ShopRecord>,
}

impl Feed {
    /// Wrap already-parsed records.
    pub fn new(records: Vec<ShopRecord>) -> Self {
        Self { records }
    }

    /// Parse a JSON array of shop records.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Json`] if the document is not a valid feed.
    pub fn from_json_str(contents: &str) -> Result<Self, FeedError> {
        Ok(Self::new(serde_json::from_str(contents)?))
    }

    /// Parse a YAML sequence of shop records.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Yaml`] if the document is not a valid feed.
    pub fn from_yaml_str(contents: &str) -> Result<Self, FeedError> {
        Ok(Self::new(serde_norway::from_str(contents)?))
    }

    /// Read and parse a feed file, picking the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// extension is not recognised.
    #[tracing::instrument(name = "feed.load", skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FeedError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let parse: fn(&str) -> Result<Self, FeedError> = match extension.as_str() {
            "json" => Self::from_json_str,
            "yml" | "yaml" => Self::from_yaml_str,
            _ => return Err(FeedError::UnsupportedFormat(path.display().to_string())),
        };

        let contents = fs::read_to_string(path)?;
        let feed = parse(&contents)?;

        info!(records = feed.len(), "parsed feed");

        Ok(feed)
    }

    /// Records in feed order.
    pub fn records(&self) -> &[ShopRecord] {
        &self.records
    }

    /// Number of shop records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the feed has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Convert every record into a [`Shop`], in feed order.
    pub fn into_shops(self) -> Vec<Shop> {
        self.records.into_iter().map(Shop::from).collect()
    }
}

/// What [`seed_if_empty`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The catalog already held shops; nothing was loaded.
    AlreadySeeded {
        /// Shops present before seeding was attempted
        existing: usize,
    },

    /// The feed had no records.
    EmptyFeed,

    /// Shops were inserted.
    Seeded {
        /// Shops inserted
        inserted: usize,

        /// Records skipped because their name was already taken
        skipped: usize,
    },
}

/// Seed an empty catalog from a feed.
///
/// A catalog that already holds shops is left untouched. Records whose name is
/// already taken are skipped with a warning instead of aborting the batch.
#[tracing::instrument(name = "feed.seed", skip_all, fields(records = feed.len()))]
pub fn seed_if_empty(catalog: &mut Catalog, feed: Feed) -> SeedOutcome {
    if !catalog.is_empty() {
        let existing = catalog.count();

        info!(existing, "catalog already seeded, skipping feed");

        return SeedOutcome::AlreadySeeded { existing };
    }

    if feed.is_empty() {
        info!("feed contains no shops");

        return SeedOutcome::EmptyFeed;
    }

    let mut inserted = 0;
    let mut skipped = 0;

    for shop in feed.into_shops() {
        let name = shop.name().to_string();
        let tags = shop.aggregated_promo_tags().to_string();
        let menu_items = shop.menu_items().len();
        let vouchers = shop.vouchers().len();

        match catalog.insert(shop) {
            Ok(_key) => {
                inserted += 1;

                debug!(shop = %name, menu_items, vouchers, tags = %tags, "inserted shop");
            }
            Err(CatalogError::DuplicateName(name)) => {
                skipped += 1;

                warn!(shop = %name, "duplicate shop name in feed, skipping");
            }
            Err(error @ CatalogError::NotFound(_)) => {
                skipped += 1;

                warn!(shop = %name, %error, "failed to insert shop, skipping");
            }
        }
    }

    info!(inserted, skipped, "seeded catalog");

    SeedOutcome::Seeded { inserted, skipped }
}

/// Seed an empty catalog from a feed file.
///
/// The file is only read when the catalog is empty.
///
/// # Errors
///
/// Returns an error if the catalog is empty and the feed cannot be loaded.
pub fn seed_from_path(
    catalog: &mut Catalog,
    path: impl AsRef<Path>,
) -> Result<SeedOutcome, FeedError> {
    if !catalog.is_empty() {
        let existing = catalog.count();

        info!(existing, "catalog already seeded, not reading feed");

        return Ok(SeedOutcome::AlreadySeeded { existing });
    }

    let feed = Feed::from_path(path)?;

    Ok(seed_if_empty(catalog, feed))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    const JSON_FEED: &str = r#"[
        {
            "name": "Tomoro Coffee",
            "location": "Kuningan",
            "distance": 450,
            "steps": 600,
            "calories": 30,
            "latitude": -6.2297,
            "longitude": 106.8295,
            "logo": "tomoro_logo",
            "img": "tomoro",
            "menu": [
                {
                    "menuName": "Aren Latte",
                    "price": 22000,
                    "discount": { "tag": "Drink", "discountPercentage": 25 },
                    "img": "aren"
                }
            ],
            "voucher": [
                { "tag": "Bank ABC, Ewallet XYZ", "maxDisc": "5", "minUsage": "50", "img": "v" }
            ]
        },
        {
            "name": "Fore Coffee",
            "location": "Senayan",
            "distance": 1200,
            "steps": 1500,
            "calories": 75,
            "latitude": -6.2250,
            "longitude": 106.8000,
            "logo": "fore_logo",
            "img": "fore"
        }
    ]"#;

    #[test]
    fn parses_json_feed() -> TestResult {
        let feed = Feed::from_json_str(JSON_FEED)?;

        assert_eq!(feed.len(), 2);

        let shops = feed.into_shops();
        let tomoro = shops.first().ok_or("missing shop")?;

        assert_eq!(tomoro.aggregated_promo_tags(), "bank abc,drink,ewallet xyz");
        assert_eq!(tomoro.max_effective_discount_value(), Decimal::from(5500));
        assert_eq!(tomoro.best_promo_text().as_deref(), Some("6rb Off"));

        Ok(())
    }

    #[test]
    fn parses_yaml_feed_with_numeric_amounts() -> TestResult {
        let yaml = r"
- name: Kopi Kenangan
  location: BSD
  latitude: -6.3
  longitude: 106.65
  voucher:
    - tag: Food
      maxDisc: 12
      minUsage: '40'
";
        let shops = Feed::from_yaml_str(yaml)?.into_shops();
        let shop = shops.first().ok_or("missing shop")?;

        assert_eq!(shop.aggregated_promo_tags(), "food");
        assert_eq!(shop.max_effective_discount_value(), Decimal::from(12_000));
        assert_eq!(shop.details().static_distance, 0);

        Ok(())
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(
            Feed::from_json_str("{ not json"),
            Err(FeedError::Json(_))
        ));
    }

    #[test]
    fn unknown_extension_is_rejected() -> TestResult {
        let file = tempfile::Builder::new().suffix(".csv").tempfile()?;

        assert!(matches!(
            Feed::from_path(file.path()),
            Err(FeedError::UnsupportedFormat(_))
        ));

        Ok(())
    }

    #[test]
    fn loads_feed_from_disk() -> TestResult {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile()?;
        file.write_all(JSON_FEED.as_bytes())?;

        let feed = Feed::from_path(file.path())?;

        assert_eq!(feed.len(), 2);

        Ok(())
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            Feed::from_path("does/not/exist.json"),
            Err(FeedError::Io(_))
        ));
    }

    #[test]
    fn seeds_empty_catalog_once() -> TestResult {
        let mut catalog = Catalog::new();

        let first = seed_if_empty(&mut catalog, Feed::from_json_str(JSON_FEED)?);
        let second = seed_if_empty(&mut catalog, Feed::from_json_str(JSON_FEED)?);

        assert_eq!(
            first,
            SeedOutcome::Seeded {
                inserted: 2,
                skipped: 0
            }
        );
        assert_eq!(second, SeedOutcome::AlreadySeeded { existing: 2 });
        assert_eq!(catalog.count(), 2);

        Ok(())
    }

    #[test]
    fn duplicate_names_in_feed_are_skipped() -> TestResult {
        let mut records = Feed::from_json_str(JSON_FEED)?.records().to_vec();
        records.extend(records.clone());

        let mut catalog = Catalog::new();
        let outcome = seed_if_empty(&mut catalog, Feed::new(records));

        assert_eq!(
            outcome,
            SeedOutcome::Seeded {
                inserted: 2,
                skipped: 2
            }
        );

        Ok(())
    }

    #[test]
    fn empty_feed_seeds_nothing() {
        let mut catalog = Catalog::new();

        assert_eq!(
            seed_if_empty(&mut catalog, Feed::default()),
            SeedOutcome::EmptyFeed
        );
        assert!(catalog.is_empty());
    }

    #[test]
    fn seeded_catalog_does_not_read_feed_file() -> TestResult {
        let mut catalog = Catalog::new();
        seed_if_empty(&mut catalog, Feed::from_json_str(JSON_FEED)?);

        let outcome = seed_from_path(&mut catalog, "does/not/exist.json")?;

        assert_eq!(outcome, SeedOutcome::AlreadySeeded { existing: 2 });

        Ok(())
    }
}
