//! The entities and value objects of the storefront.
//!
//! * **[`money`]**: exact currency arithmetic and display.
//! * **[`item`]**: a single validated catalogue entry.
//! * **[`catalogue`]**: the read-only set of purchasable items.
//! * **[`cart`]**: the session-scoped, capacity-bounded selection.
//! * **[`order`]**: placed orders and the session order history.
//! * **[`customer`]**: contact and shipping details captured at checkout.

pub mod cart;
pub mod catalogue;
pub mod customer;
pub mod item;
pub mod money;
pub mod order;
