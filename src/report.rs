//! Report
//!
//! Terminal rendering of storefront sections and shop detail pages.

use std::io;

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    menu::MenuItem,
    prices::Price,
    sections::Sections,
    shops::{GeoPoint, Shop},
    vouchers::Voucher,
};

/// Errors that can occur when writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// IO error
    #[error("IO error")]
    IO,
}

/// Format an amount in rusty-money's IDR style, `"Rp15,000.00"`.
///
/// Fractional savings are rounded to whole Rupiah first, halves away from zero.
pub fn format_rupiah(amount: Decimal) -> String {
    let whole = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    Money::from_decimal(whole, iso::IDR).to_string()
}

fn format_price(price: Price) -> String {
    format_rupiah(price.to_decimal())
}

/// Write every storefront section as a table.
///
/// # Errors
///
/// Returns [`ReportError::IO`] if the output cannot be written.
pub fn write_sections(mut out: impl io::Write, sections: &Sections<'_>) -> Result<(), ReportError> {
    write_section(
        &mut out,
        "Sip and Save",
        "No standout discounts right now.",
        &sections.top_discount,
    )?;
    write_section(
        &mut out,
        "Digital Wallet & Card Perks",
        "No e-wallet or bank promos right now.",
        &sections.wallet_and_bank,
    )?;
    write_section(
        &mut out,
        "Food Selections",
        "No food promos right now.",
        &sections.food,
    )?;
    write_section(
        &mut out,
        "All Coffee Shops",
        "No coffee shops yet.",
        &sections.all,
    )
}

/// Write a list of shops under a title, or `empty` when there are none.
///
/// # Errors
///
/// Returns [`ReportError::IO`] if the output cannot be written.
pub fn write_section(
    out: &mut impl io::Write,
    title: &str,
    empty: &str,
    shops: &[&Shop],
) -> Result<(), ReportError> {
    writeln!(out, "\n\x1b[1m{title}\x1b[0m").map_err(|_err| ReportError::IO)?;

    if shops.is_empty() {
        return writeln!(out, "  {empty}").map_err(|_err| ReportError::IO);
    }

    let mut builder = Builder::default();

    builder.push_record(["Shop", "Location", "Best Promo", "Max Saving", "Promos"]);

    for shop in shops {
        builder.push_record([
            shop.name().to_string(),
            shop.location().to_string(),
            shop.best_promo_text().unwrap_or_default(),
            format_rupiah(shop.max_effective_discount_value()),
            shop.active_promo_count().to_string(),
        ]);
    }

    write_table(out, builder, 3..5)
}

/// Write a shop detail page: header, walking estimates, vouchers and menu.
///
/// # Errors
///
/// Returns [`ReportError::IO`] if the output cannot be written.
pub fn write_shop(
    mut out: impl io::Write,
    shop: &Shop,
    user: Option<GeoPoint>,
) -> Result<(), ReportError> {
    writeln!(out, "\n\x1b[1m{}\x1b[0m  {}", shop.name(), shop.location())
        .map_err(|_err| ReportError::IO)?;

    writeln!(
        out,
        "  {}  ·  {}  ·  {}",
        shop.display_distance(user),
        shop.display_steps(user),
        shop.display_calories(user),
    )
    .map_err(|_err| ReportError::IO)?;

    if let Some(text) = shop.best_promo_text() {
        writeln!(out, "  Best promo: {text}").map_err(|_err| ReportError::IO)?;
    }

    let tags = shop.unique_active_promo_tags();

    if !tags.is_empty() {
        writeln!(out, "  Tags: {}", tags.join(", ")).map_err(|_err| ReportError::IO)?;
    }

    if !shop.vouchers().is_empty() {
        writeln!(out, "\n\x1b[1mPromo Vouchers\x1b[0m").map_err(|_err| ReportError::IO)?;
        write_table(&mut out, voucher_table(shop.vouchers()), 1..3)?;
    }

    writeln!(out, "\n\x1b[1mMenu\x1b[0m").map_err(|_err| ReportError::IO)?;

    if shop.menu_items().is_empty() {
        return writeln!(out, "  No menu available yet.").map_err(|_err| ReportError::IO);
    }

    write_table(&mut out, menu_table(shop.menu_items()), 1..2)
}

fn voucher_table(vouchers: &[Voucher]) -> Builder {
    let mut builder = Builder::default();

    builder.push_record(["Voucher", "Max Discount", "Min Spend"]);

    for voucher in vouchers {
        builder.push_record([
            voucher.tag().to_string(),
            format_price(voucher.max_discount_amount()),
            format_price(voucher.min_usage_amount()),
        ]);
    }

    builder
}

fn menu_table(items: &[MenuItem]) -> Builder {
    let mut builder = Builder::default();

    builder.push_record(["Item", "Price", "Discount"]);

    for item in items {
        let discount = item
            .active_discount()
            .map(|discount| format!("{}% Off ({})", discount.discount_percentage(), discount.tag()))
            .unwrap_or_default();

        builder.push_record([item.name().to_string(), format_price(item.price()), discount]);
    }

    builder
}

fn write_table(
    out: &mut impl io::Write,
    builder: Builder,
    money_columns: std::ops::Range<usize>,
) -> Result<(), ReportError> {
    let mut table = builder.build();

    table.with(Theme::from(Style::modern_rounded()));
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(money_columns), Alignment::right());

    writeln!(out, "{table}").map_err(|_err| ReportError::IO)
}
