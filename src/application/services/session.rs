//! The shopping session use case.
//!
//! One session owns one catalogue, one cart, and one order history. All
//! mutation of cart and history flows through here, so the cart-to-order
//! transition stays one way: a successful order resets the cart.

use crate::domain::errors::DomainResult;
use crate::domain::models::cart::Cart;
use crate::domain::models::catalogue::Catalogue;
use crate::domain::models::customer::CustomerInfo;
use crate::domain::models::item::CatalogueItem;
use crate::domain::models::order::{Order, OrderHistory};
use crate::ports::outbound::store::CustomerRecordStore;
use anyhow::Context;
use tracing::{debug, info};

pub struct ShoppingSession {
    catalogue: Catalogue,
    cart: Cart,
    history: OrderHistory,
}

impl ShoppingSession {
    pub fn new(catalogue: Catalogue) -> Self {
        Self {
            catalogue,
            cart: Cart::new(),
            history: OrderHistory::new(),
        }
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn history(&self) -> &OrderHistory {
        &self.history
    }

    pub fn add_to_cart(&mut self, name: &str) -> DomainResult<()> {
        self.cart.add_item(name, &self.catalogue)?;
        debug!(item = name, count = self.cart.len(), "item added to cart");
        Ok(())
    }

    pub fn remove_from_cart(&mut self, name: &str) -> DomainResult<CatalogueItem> {
        let removed = self.cart.remove_item(name)?;
        debug!(item = removed.name(), count = self.cart.len(), "item removed from cart");
        Ok(removed)
    }

    /// Confirms the current cart as an order and starts a fresh cart.
    pub fn place_order(&mut self) -> DomainResult<Order> {
        let order = Order::from_cart(&self.cart)?;
        self.history.add_order(order.clone());
        self.cart = Cart::with_capacity(self.cart.capacity());
        info!(total = %order.total_price(), orders = self.history.len(), "order placed");
        Ok(order)
    }

    /// Confirms the current cart as an order, persisting the customer record
    /// first.
    ///
    /// Persistence failure aborts the whole operation: cart and history are
    /// left exactly as they were.
    pub fn place_order_with_customer(
        &mut self,
        info: &CustomerInfo,
        store: &dyn CustomerRecordStore,
    ) -> anyhow::Result<Order> {
        let order = Order::from_cart(&self.cart)?;
        store.persist(info).context("persisting customer record")?;

        self.history.add_order(order.clone());
        self.cart = Cart::with_capacity(self.cart.capacity());
        info!(
            customer = info.name(),
            total = %order.total_price(),
            orders = self.history.len(),
            "order placed"
        );
        Ok(order)
    }
}
