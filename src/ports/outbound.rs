//! # Outbound Ports (Driven Infrastructure)
//!
//! Contracts the application requires from the outside world: where catalogue
//! records come from, where customer records go, and how results reach the
//! user.

pub mod source;
pub mod store;
pub mod view;
