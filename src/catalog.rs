//! Catalog
//!
//! In-memory shop store. Shops live in a [`SlotMap`] arena and are addressed by
//! a surrogate [`ShopKey`]; the display name is indexed separately.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;
use slotmap::{SlotMap, new_key_type};
use thiserror::Error;

use crate::shops::Shop;

new_key_type! {
    /// Shop Key
    pub struct ShopKey;
}

/// Catalog errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A shop with this name is already stored.
    #[error("shop already exists: {0}")]
    DuplicateName(String),

    /// No shop is stored under this key.
    #[error("shop not found")]
    NotFound(ShopKey),
}

/// Ordering applied by [`Catalog::fetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopSort {
    /// Name, ascending.
    NameAscending,

    /// Largest saving first, then name ascending.
    MaxDiscountDescending,
}

impl ShopSort {
    fn compare(self, left: &Shop, right: &Shop) -> Ordering {
        match self {
            ShopSort::NameAscending => left.name().cmp(right.name()),
            ShopSort::MaxDiscountDescending => right
                .max_effective_discount_value()
                .cmp(&left.max_effective_discount_value())
                .then_with(|| left.name().cmp(right.name())),
        }
    }
}

/// Shop catalog
#[derive(Debug)]
pub struct Catalog {
    shops: SlotMap<ShopKey, Shop>,
    names: FxHashMap<String, ShopKey>,
    unique_names: bool,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create an empty catalog that rejects duplicate shop names.
    pub fn new() -> Self {
        Self {
            shops: SlotMap::with_key(),
            names: FxHashMap::default(),
            unique_names: true,
        }
    }

    /// Create an empty catalog where names are plain display attributes.
    ///
    /// [`Catalog::find_by_name`] then returns the most recently inserted match.
    pub fn allowing_duplicate_names() -> Self {
        Self {
            unique_names: false,
            ..Self::new()
        }
    }

    /// Store a shop and return its key.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::DuplicateName`]: the name is taken and names must be unique.
    pub fn insert(&mut self, shop: Shop) -> Result<ShopKey, CatalogError> {
        if self.unique_names && self.names.contains_key(shop.name()) {
            return Err(CatalogError::DuplicateName(shop.name().to_string()));
        }

        let name = shop.name().to_string();
        let key = self.shops.insert(shop);

        self.names.insert(name, key);

        Ok(key)
    }

    /// Swap in a rebuilt shop under an existing key, returning the old one.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NotFound`]: no shop is stored under `key`.
    /// - [`CatalogError::DuplicateName`]: the new name belongs to another shop.
    pub fn replace(&mut self, key: ShopKey, shop: Shop) -> Result<Shop, CatalogError> {
        let old_name = self
            .shops
            .get(key)
            .ok_or(CatalogError::NotFound(key))?
            .name()
            .to_string();

        if self.unique_names
            && self
                .names
                .get(shop.name())
                .is_some_and(|existing| *existing != key)
        {
            return Err(CatalogError::DuplicateName(shop.name().to_string()));
        }

        if self.names.get(&old_name) == Some(&key) {
            self.names.remove(&old_name);
        }

        self.names.insert(shop.name().to_string(), key);

        let slot = self.shops.get_mut(key).ok_or(CatalogError::NotFound(key))?;

        Ok(std::mem::replace(slot, shop))
    }

    /// Look up a shop by key.
    pub fn get(&self, key: ShopKey) -> Option<&Shop> {
        self.shops.get(key)
    }

    /// Look up a shop key by display name.
    pub fn find_by_name(&self, name: &str) -> Option<ShopKey> {
        self.names.get(name).copied()
    }

    /// Number of stored shops.
    pub fn count(&self) -> usize {
        self.shops.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.shops.is_empty()
    }

    /// Remove every shop.
    pub fn clear(&mut self) {
        self.shops.clear();
        self.names.clear();
    }

    /// Iterate over stored shops in arena order.
    pub fn iter(&self) -> impl Iterator<Item = (ShopKey, &Shop)> {
        self.shops.iter()
    }

    /// Shops matching `predicate`, ordered by `sort`.
    pub fn fetch<P>(&self, predicate: P, sort: ShopSort) -> Vec<&Shop>
    where
        P: Fn(&Shop) -> bool,
    {
        let mut shops: Vec<&Shop> = self.shops.values().filter(|shop| predicate(shop)).collect();

        shops.sort_by(|left, right| sort.compare(left, right));

        shops
    }
}
