//! Menu Items

use crate::{prices::Price, uuids::TypedUuid};

/// Menu Item UUID
pub type MenuItemUuid = TypedUuid<MenuItem>;

/// A percentage discount attached to a single menu item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MenuDiscount {
    tag: String,
    discount_percentage: u8,
}

impl MenuDiscount {
    /// Create a discount. The tag is lowercased; the percentage is capped at 100.
    pub fn new(tag: &str, discount_percentage: u8) -> Self {
        Self {
            tag: tag.to_lowercase(),
            discount_percentage: discount_percentage.min(100),
        }
    }

    /// Lowercase tag label, possibly comma-separated.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whole-number percentage in `0..=100`.
    pub fn discount_percentage(&self) -> u8 {
        self.discount_percentage
    }

    /// A discount only counts once its percentage is above zero.
    pub fn is_active(&self) -> bool {
        self.discount_percentage > 0
    }
}

/// A priced menu entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    uuid: MenuItemUuid,
    name: String,
    price: Price,
    discount: Option<MenuDiscount>,
    image: String,
}

impl MenuItem {
    /// Create a menu item with a freshly generated id.
    pub fn new(
        name: impl Into<String>,
        price: Price,
        discount: Option<MenuDiscount>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            uuid: MenuItemUuid::new(),
            name: name.into(),
            price,
            discount,
            image: image.into(),
        }
    }

    /// Item id
    pub fn uuid(&self) -> MenuItemUuid {
        self.uuid
    }

    /// Item name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Undiscounted price
    pub fn price(&self) -> Price {
        self.price
    }

    /// Attached discount, active or not.
    pub fn discount(&self) -> Option<&MenuDiscount> {
        self.discount.as_ref()
    }

    /// Image reference
    pub fn image(&self) -> &str {
        &self.image
    }

    /// The discount, but only when it is active.
    pub fn active_discount(&self) -> Option<&MenuDiscount> {
        self.discount.as_ref().filter(|discount| discount.is_active())
    }

    /// Whether the item carries an active discount.
    pub fn has_active_discount(&self) -> bool {
        self.active_discount().is_some()
    }

    /// Tag label of the active discount, if any.
    pub fn active_discount_tag(&self) -> Option<&str> {
        self.active_discount().map(MenuDiscount::tag)
    }
}
