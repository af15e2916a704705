//! Promo Tags
//!
//! Sorted, de-duplicated tag sets drawn from discount and voucher labels.

use std::fmt;

use smallvec::SmallVec;

/// Separator used by tag labels and by the stored, joined form.
pub const TAG_SEPARATOR: char = ',';

/// A set of promo tags backed by a sorted `SmallVec<[String; 5]>`.
///
/// Tags are stored exactly as given; lowercasing happens once at ingestion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PromoTags {
    tags: SmallVec<[String; 5]>,
}

impl PromoTags {
    /// Create an empty tag set.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            tags: SmallVec::new(),
        }
    }

    /// Parse a comma-separated label such as `"bank abc, ewallet xyz"`.
    ///
    /// Each fragment is trimmed and empty fragments are dropped.
    pub fn from_csv(label: &str) -> Self {
        let mut tags = Self::empty();

        tags.extend_csv(label);

        tags
    }

    /// Add every fragment of a comma-separated label to this set.
    pub fn extend_csv(&mut self, label: &str) {
        label
            .split(TAG_SEPARATOR)
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .for_each(|fragment| self.add(fragment));
    }

    /// The stored form: tags in lexicographic order joined with commas.
    #[must_use]
    pub fn to_csv(&self) -> String {
        self.tags.join(",")
    }

    /// Check whether the set contains `tag` exactly.
    pub fn contains(&self, tag: &str) -> bool {
        self.tags
            .binary_search_by(|existing| existing.as_str().cmp(tag))
            .is_ok()
    }

    /// Insert a tag, keeping the set sorted.
    pub fn add(&mut self, tag: &str) {
        if let Err(pos) = self.tags.binary_search_by(|existing| existing.as_str().cmp(tag)) {
            self.tags.insert(pos, tag.to_string());
        }
    }

    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether the set holds no tags.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterate over the tags in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Copy the tags out in sorted order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.tags.to_vec()
    }
}

impl fmt::Display for PromoTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_csv())
    }
}

/// Check whether a stored, comma-joined tag string mentions `fragment`.
///
/// This is a plain substring test over the joined form, so `"bank"` matches a
/// stored `"bank abc,food"`.
pub fn contains_fragment(joined: &str, fragment: &str) -> bool {
    joined.contains(fragment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_csv_splits_and_trims() {
        let tags = PromoTags::from_csv("bank abc, ewallet xyz");

        assert_eq!(tags.to_vec(), ["bank abc", "ewallet xyz"]);
    }

    #[test]
    fn from_csv_drops_empty_fragments() {
        let tags = PromoTags::from_csv(" , food,, ,drink ,");

        assert_eq!(tags.to_vec(), ["drink", "food"]);
    }

    #[test]
    fn from_csv_of_blank_label_is_empty() {
        assert!(PromoTags::from_csv("").is_empty());
        assert!(PromoTags::from_csv(" ,  , ").is_empty());
    }

    #[test]
    fn to_csv_is_sorted_and_deduplicated() {
        let mut tags = PromoTags::from_csv("food,bank");
        tags.extend_csv("drink, food");

        assert_eq!(tags.to_csv(), "bank,drink,food");
        assert_eq!(tags.to_string(), "bank,drink,food");
    }

    #[test]
    fn add_keeps_order_and_ignores_duplicates() {
        let mut tags = PromoTags::from_csv("food,bank");

        tags.add("drink");
        tags.add("bank");

        assert_eq!(tags.len(), 3);
        assert_eq!(tags.iter().collect::<Vec<_>>(), ["bank", "drink", "food"]);
        assert!(tags.contains("drink"));
        assert!(!tags.contains("dri"));
    }

    #[test]
    fn fragment_matching_is_substring_based() {
        assert!(contains_fragment("bank abc,food", "bank"));
        assert!(contains_fragment("bank abc,food", "food"));
        assert!(!contains_fragment("bank abc,food", "ewallet"));
    }
}
