//! # Cart Model
//!
//! The session-scoped, mutable, capacity-bounded selection of items a user
//! intends to buy. Holds copies of catalogue items; the catalogue itself is
//! never mutated.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::catalogue::Catalogue;
use crate::domain::models::item::{CatalogueItem, PRICE_SEPARATOR};
use crate::domain::models::money::Money;
use std::fmt;

/// Default number of items a cart may hold.
pub const DEFAULT_CAPACITY: usize = 5;

/// A bounded, ordered collection of items drawn from a catalogue.
#[derive(Debug, Clone)]
pub struct Cart {
    items: Vec<CatalogueItem>,
    capacity: usize,
}

impl Cart {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    /// Looks `name` up in `catalogue` and appends the match.
    ///
    /// The capacity check comes BEFORE the lookup: a full cart reports
    /// [`DomainError::CartFull`] even for a name that does not exist.
    pub fn add_item(&mut self, name: &str, catalogue: &Catalogue) -> DomainResult<()> {
        if self.items.len() >= self.capacity {
            return Err(DomainError::CartFull {
                capacity: self.capacity,
            });
        }
        let item = catalogue
            .find_item(name)
            .ok_or_else(|| DomainError::item_not_found(name))?;
        self.items.push(item.clone());
        Ok(())
    }

    /// Removes the first case-insensitive match by scan order.
    ///
    /// An absent name fails with [`DomainError::ItemNotFound`] and leaves the
    /// cart untouched; removal preserves the relative order of the rest.
    pub fn remove_item(&mut self, name: &str) -> DomainResult<CatalogueItem> {
        let position = self
            .items
            .iter()
            .position(|item| item.matches(name))
            .ok_or_else(|| DomainError::item_not_found(name))?;
        Ok(self.items.remove(position))
    }

    /// Exact sum of every item currently in the cart.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(CatalogueItem::price).sum()
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

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Cart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CART")?;
        for (position, item) in self.items.iter().enumerate() {
            writeln!(f, "{}. {}", position + 1, item)?;
        }
        write!(f, "TOTAL {} {}", PRICE_SEPARATOR, self.total_price())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::item::DescriptionRule;
    use rust_decimal::Decimal;

    fn catalogue() -> Catalogue {
        let items = vec![
            item("Tea", 300),
            item("Cake", 550),
            item("Scone", 125),
        ];
        Catalogue::new(items).expect("valid catalogue")
    }

    fn item(name: &str, cents: i64) -> CatalogueItem {
        CatalogueItem::new(name, Decimal::new(cents, 2), None, DescriptionRule::Optional)
            .expect("valid item")
    }

    #[test]
    fn adds_by_case_insensitive_name() {
        let mut cart = Cart::new();
        cart.add_item("tea", &catalogue()).expect("tea exists");
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].name(), "Tea");
    }

    #[test]
    fn add_fails_for_an_unknown_name() {
        let mut cart = Cart::new();
        let result = cart.add_item("Coffee", &catalogue());
        assert_eq!(result, Err(DomainError::item_not_found("Coffee")));
        assert!(cart.is_empty());
    }

    #[test]
    fn sixth_add_fails_even_for_an_unknown_name() {
        let catalogue = catalogue();
        let mut cart = Cart::new();
        for _ in 0..DEFAULT_CAPACITY {
            cart.add_item("Tea", &catalogue).expect("room left");
        }

        // Capacity is checked before the lookup.
        let unknown = cart.add_item("Coffee", &catalogue);
        assert_eq!(unknown, Err(DomainError::CartFull { capacity: 5 }));
        let known = cart.add_item("Cake", &catalogue);
        assert_eq!(known, Err(DomainError::CartFull { capacity: 5 }));
        assert_eq!(cart.len(), DEFAULT_CAPACITY);
    }

    #[test]
    fn removes_the_first_match_and_preserves_order() {
        let catalogue = catalogue();
        let mut cart = Cart::new();
        cart.add_item("Tea", &catalogue).expect("room left");
        cart.add_item("Cake", &catalogue).expect("room left");
        cart.add_item("Tea", &catalogue).expect("room left");

        let removed = cart.remove_item("TEA").expect("tea is in the cart");
        assert_eq!(removed.name(), "Tea");

        let names: Vec<&str> = cart.items().iter().map(CatalogueItem::name).collect();
        assert_eq!(names, ["Cake", "Tea"]);
    }

    #[test]
    fn remove_of_an_absent_name_leaves_the_cart_unchanged() {
        let catalogue = catalogue();
        let mut cart = Cart::new();
        cart.add_item("Tea", &catalogue).expect("room left");
        cart.add_item("Cake", &catalogue).expect("room left");

        let result = cart.remove_item("Scone");
        assert_eq!(result, Err(DomainError::item_not_found("Scone")));

        let names: Vec<&str> = cart.items().iter().map(CatalogueItem::name).collect();
        assert_eq!(names, ["Tea", "Cake"]);
    }

    #[test]
    fn total_is_the_exact_sum_of_item_prices() {
        let items = vec![item("A", 350), item("B", 125)];
        let catalogue = Catalogue::new(items).expect("valid catalogue");
        let mut cart = Cart::new();
        cart.add_item("A", &catalogue).expect("room left");
        cart.add_item("B", &catalogue).expect("room left");
        assert_eq!(cart.total_price().to_string(), "$4.75");
    }

    #[test]
    fn empty_cart_total_is_zero() {
        assert_eq!(Cart::new().total_price().to_string(), "$0.00");
    }

    #[test]
    fn display_lists_items_under_a_cart_header_with_a_total_line() {
        let catalogue = catalogue();
        let mut cart = Cart::new();
        cart.add_item("Tea", &catalogue).expect("room left");
        cart.add_item("Cake", &catalogue).expect("room left");

        assert_eq!(
            cart.to_string(),
            "CART\n\
             1. Tea .......... $3.00\n\
             2. Cake .......... $5.50\n\
             TOTAL .......... $8.50"
        );
    }

    #[test]
    fn empty_cart_display_still_carries_the_total_line() {
        assert_eq!(Cart::new().to_string(), "CART\nTOTAL .......... $0.00");
    }
}
