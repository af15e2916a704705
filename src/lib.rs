//! Sipsave
//!
//! Sipsave ranks coffee shops by the promotions they offer. Each shop's menu
//! discounts and vouchers are reduced to a single best saving, a display label
//! and a tag set, which drive the storefront sections.

pub mod activity;
pub mod catalog;
pub mod discounts;
pub mod feed;
pub mod menu;
pub mod prelude;
pub mod prices;
pub mod promotions;
pub mod proximity;
pub mod report;
pub mod sections;
pub mod shops;
pub mod tags;
pub mod uuids;
pub mod vouchers;
