//! Promotions
//!
//! Pure evaluation of a shop's menu discounts and vouchers: which tags it
//! advertises, how many promos it runs, and which single promo saves the most.
//!
//! Every function here is total and side-effect free, so results can be cached
//! on the shop and recomputed from the same inputs with identical output.

use rust_decimal::Decimal;

use crate::{
    discounts::{PromoLabel, percent_of_price},
    menu::{MenuItem, MenuItemUuid},
    tags::PromoTags,
    vouchers::{Voucher, VoucherUuid},
};

/// Where a promo candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromoSource {
    /// An active discount on a menu item.
    MenuItem(MenuItemUuid),

    /// A shop voucher.
    Voucher(VoucherUuid),
}

/// One promo with its absolute saving and badge label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromoCandidate {
    /// Menu item or voucher offering the saving.
    pub source: PromoSource,

    /// Absolute saving in Rupiah.
    pub value: Decimal,

    /// Badge text for this saving.
    pub label: PromoLabel,
}

/// Every promo candidate in evaluation order: active menu discounts first,
/// then vouchers, each in stored order.
pub fn candidates<'a>(
    menu_items: &'a [MenuItem],
    vouchers: &'a [Voucher],
) -> impl Iterator<Item = PromoCandidate> + 'a {
    let from_menu = menu_items.iter().filter_map(|item| {
        let discount = item.active_discount()?;
        let value = percent_of_price(item.price(), discount.discount_percentage());

        Some(PromoCandidate {
            source: PromoSource::MenuItem(item.uuid()),
            value,
            label: PromoLabel::for_menu_discount(item.price(), discount.discount_percentage()),
        })
    });

    let from_vouchers = vouchers.iter().map(|voucher| PromoCandidate {
        source: PromoSource::Voucher(voucher.uuid()),
        value: voucher.max_discount_amount().to_decimal(),
        label: PromoLabel::for_voucher(voucher.max_discount_amount()),
    });

    from_menu.chain(from_vouchers)
}

/// Union of every tag fragment from vouchers and active menu discounts.
pub fn aggregate_tags(menu_items: &[MenuItem], vouchers: &[Voucher]) -> PromoTags {
    let mut tags = PromoTags::empty();

    for voucher in vouchers {
        tags.extend_csv(voucher.tag());
    }

    for tag in menu_items.iter().filter_map(MenuItem::active_discount_tag) {
        tags.extend_csv(tag);
    }

    tags
}

/// Number of promo instances: every voucher plus every actively discounted item.
///
/// Overlapping tags are still counted once per instance.
pub fn active_promo_count(menu_items: &[MenuItem], vouchers: &[Voucher]) -> usize {
    vouchers.len()
        + menu_items
            .iter()
            .filter(|item| item.has_active_discount())
            .count()
}

/// The promo with the largest positive saving.
///
/// Comparison is strictly greater, so on a tie the earliest candidate in
/// [`candidates`] order keeps the badge. The label always belongs to the
/// candidate holding the maximum.
pub fn best_promo(menu_items: &[MenuItem], vouchers: &[Voucher]) -> Option<PromoCandidate> {
    candidates(menu_items, vouchers).fold(None, |best, candidate| match best {
        Some(current) if candidate.value <= current.value => Some(current),
        _ if candidate.value > Decimal::ZERO => Some(candidate),
        none => none,
    })
}

/// Badge text of the best promo, `None` when nothing saves money.
pub fn best_promo_text(menu_items: &[MenuItem], vouchers: &[Voucher]) -> Option<String> {
    best_promo(menu_items, vouchers).map(|best| best.label.to_string())
}

/// Largest absolute saving across all promos, zero when there is none.
///
/// Shares the scan with [`best_promo`], so the two always agree on the winner.
pub fn max_effective_discount_value(menu_items: &[MenuItem], vouchers: &[Voucher]) -> Decimal {
    best_promo(menu_items, vouchers).map_or(Decimal::ZERO, |best| best.value)
}

/// Aggregated tags as a sorted, de-duplicated list for stable display order.
pub fn unique_active_promo_tags(menu_items: &[MenuItem], vouchers: &[Voucher]) -> Vec<String> {
    aggregate_tags(menu_items, vouchers).to_vec()
}
