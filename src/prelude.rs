//! Sipsave prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    activity::{ActivitySnapshot, SensorError, SensorEvent, SensorState, WalkSession},
    catalog::{Catalog, CatalogError, ShopKey, ShopSort},
    discounts::PromoLabel,
    feed::{Feed, FeedError, SeedOutcome, seed_from_path, seed_if_empty},
    menu::{MenuDiscount, MenuItem, MenuItemUuid},
    prices::Price,
    promotions::{PromoCandidate, PromoSource},
    proximity::{RouteEstimate, WalkProgress, WalkStatus},
    report::ReportError,
    sections::Sections,
    shops::{GeoPoint, Shop, ShopDetails},
    tags::PromoTags,
    uuids::TypedUuid,
    vouchers::{Voucher, VoucherUuid},
};
