//! # Catalogue Model
//!
//! The fixed, read-only set of items available for purchase. Built once at
//! startup from already-decoded records and never mutated afterwards.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::item::CatalogueItem;
use std::collections::HashMap;
use std::fmt;

/// An immutable, ordered collection of catalogue items.
///
/// Lookup is case-insensitive via a normalized-key index; when names repeat,
/// the FIRST entry in original order wins.
#[derive(Debug, Clone)]
pub struct Catalogue {
    items: Vec<CatalogueItem>,
    index: HashMap<String, usize>,
}

impl Catalogue {
    /// Builds a catalogue, failing when the item list is empty.
    pub fn new(items: Vec<CatalogueItem>) -> DomainResult<Self> {
        if items.is_empty() {
            return Err(DomainError::validation(
                "catalogue must contain at least one item",
            ));
        }

        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            // First occurrence wins for duplicate names.
            index.entry(item.name().to_lowercase()).or_insert(position);
        }

        Ok(Self { items, index })
    }

    /// Case-insensitive exact-match lookup.
    ///
    /// Absence is not an error; callers decide how to react.
    pub fn find_item(&self, name: &str) -> Option<&CatalogueItem> {
        self.index
            .get(&name.to_lowercase())
            .map(|&position| &self.items[position])
    }

    pub fn items(&self) -> &[CatalogueItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for Catalogue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, item) in self.items.iter().enumerate() {
            if position > 0 {
                writeln!(f)?;
            }
            write!(f, "{}. {}", position + 1, item)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::item::DescriptionRule;
    use rust_decimal::Decimal;

    fn item(name: &str, cents: i64) -> CatalogueItem {
        CatalogueItem::new(name, Decimal::new(cents, 2), None, DescriptionRule::Optional)
            .expect("valid item")
    }

    #[test]
    fn rejects_an_empty_item_list() {
        let result = Catalogue::new(Vec::new());
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn find_item_is_case_insensitive() {
        let catalogue = Catalogue::new(vec![item("Tea", 300), item("Cake", 550)])
            .expect("valid catalogue");

        let found = catalogue.find_item("tEa").expect("item exists");
        assert_eq!(found.name(), "Tea");
        assert!(catalogue.find_item("Coffee").is_none());
    }

    #[test]
    fn duplicate_names_resolve_to_the_first_entry() {
        let catalogue = Catalogue::new(vec![item("Tea", 300), item("TEA", 999)])
            .expect("valid catalogue");

        let found = catalogue.find_item("tea").expect("item exists");
        assert_eq!(found.price().to_string(), "$3.00");
    }

    #[test]
    fn display_numbers_items_in_original_order() {
        let catalogue = Catalogue::new(vec![item("Tea", 300), item("Cake", 550)])
            .expect("valid catalogue");

        assert_eq!(
            catalogue.to_string(),
            "1. Tea .......... $3.00\n2. Cake .......... $5.50"
        );
    }
}
