//! Failure taxonomy for the storefront core.
//!
//! Every variant is a recoverable precondition failure raised synchronously
//! at the offending operation. The core never prints or logs; callers decide
//! how to present these.

use thiserror::Error;

/// Errors raised by the storefront domain models.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Malformed input while constructing an entity.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The cart already holds its maximum number of items.
    #[error("cart is full ({capacity} items)")]
    CartFull {
        /// The capacity that was reached.
        capacity: usize,
    },

    /// No item with the given name exists in the searched collection.
    #[error("no item named '{name}'")]
    ItemNotFound {
        /// The name that was searched for.
        name: String,
    },

    /// An order was requested from an empty cart.
    #[error("cannot place an order from an empty cart")]
    EmptyOrder,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    pub fn item_not_found(name: impl Into<String>) -> Self {
        DomainError::ItemNotFound { name: name.into() }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
