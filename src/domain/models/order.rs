//! # Order Models
//!
//! A placed order is an immutable snapshot of a non-empty cart; the order
//! history is the append-only record of every order placed in a session.
//! The cart-to-order transition is one way: once an order exists, the
//! session starts over with a fresh cart.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::cart::Cart;
use crate::domain::models::item::CatalogueItem;
use crate::domain::models::money::Money;
use std::fmt;

/// An immutable, validated snapshot of a cart at confirmation time.
#[derive(Debug, Clone)]
pub struct Order {
    cart: Cart,
}

impl Order {
    /// Snapshots `cart`, failing with [`DomainError::EmptyOrder`] when it
    /// holds no items. The source cart is left untouched.
    pub fn from_cart(cart: &Cart) -> DomainResult<Self> {
        if cart.is_empty() {
            return Err(DomainError::EmptyOrder);
        }
        Ok(Self { cart: cart.clone() })
    }

    pub fn items(&self) -> &[CatalogueItem] {
        self.cart.items()
    }

    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }
}

impl fmt::Display for Order {
    /// The underlying cart's display with its leading `CART` line stripped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.cart.to_string();
        let body: Vec<&str> = rendered.lines().skip(1).collect();
        f.write_str(&body.join("\n"))
    }
}

/// The accumulated record of all orders placed in a session.
#[derive(Debug, Clone, Default)]
pub struct OrderHistory {
    orders: Vec<Order>,
}

impl OrderHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends unconditionally; the order validated itself at construction.
    pub fn add_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl fmt::Display for OrderHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ORDERS")?;
        for order in &self.orders {
            write!(f, "\n\n{order}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::catalogue::Catalogue;
    use crate::domain::models::item::DescriptionRule;
    use rust_decimal::Decimal;

    fn filled_cart() -> Cart {
        let items = vec![
            CatalogueItem::new("Tea", Decimal::new(300, 2), None, DescriptionRule::Optional)
                .expect("valid item"),
            CatalogueItem::new("Cake", Decimal::new(550, 2), None, DescriptionRule::Optional)
                .expect("valid item"),
        ];
        let catalogue = Catalogue::new(items).expect("valid catalogue");
        let mut cart = Cart::new();
        cart.add_item("Tea", &catalogue).expect("room left");
        cart.add_item("Cake", &catalogue).expect("room left");
        cart
    }

    #[test]
    fn an_empty_cart_cannot_become_an_order() {
        let result = Order::from_cart(&Cart::new());
        assert!(matches!(result, Err(DomainError::EmptyOrder)));
    }

    #[test]
    fn display_strips_the_cart_header() {
        let order = Order::from_cart(&filled_cart()).expect("cart is non-empty");
        assert_eq!(
            order.to_string(),
            "1. Tea .......... $3.00\n\
             2. Cake .......... $5.50\n\
             TOTAL .......... $8.50"
        );
        assert!(!order.to_string().starts_with("CART"));
    }

    #[test]
    fn the_snapshot_is_independent_of_the_source_cart() {
        let mut cart = filled_cart();
        let order = Order::from_cart(&cart).expect("cart is non-empty");
        cart.remove_item("Tea").expect("tea is in the cart");
        assert_eq!(order.items().len(), 2);
    }

    #[test]
    fn history_keeps_orders_in_call_order() {
        let mut history = OrderHistory::new();
        assert!(history.is_empty());

        let first = Order::from_cart(&filled_cart()).expect("cart is non-empty");
        let mut small_cart = filled_cart();
        small_cart.remove_item("Cake").expect("cake is in the cart");
        let second = Order::from_cart(&small_cart).expect("cart is non-empty");

        history.add_order(first.clone());
        history.add_order(second.clone());

        assert_eq!(history.len(), 2);
        assert_eq!(history.orders()[0].to_string(), first.to_string());
        assert_eq!(history.orders()[1].to_string(), second.to_string());
    }

    #[test]
    fn history_display_separates_orders_with_blank_lines() {
        let mut history = OrderHistory::new();
        history.add_order(Order::from_cart(&filled_cart()).expect("cart is non-empty"));
        history.add_order(Order::from_cart(&filled_cart()).expect("cart is non-empty"));

        let block = "1. Tea .......... $3.00\n\
                     2. Cake .......... $5.50\n\
                     TOTAL .......... $8.50";
        assert_eq!(history.to_string(), format!("ORDERS\n\n{block}\n\n{block}"));
    }
}
