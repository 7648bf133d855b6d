//! # Catalogue Item Model
//!
//! A single purchasable product: validated once at catalogue load time and
//! immutable afterwards. Catalogue revisions differ only in whether every
//! item must carry a description, so that choice is a constructor rule
//! rather than a separate type.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::money::Money;
use rust_decimal::Decimal;
use std::fmt;

/// Fixed separator between an item label and its price in display text.
pub const PRICE_SEPARATOR: &str = "..........";

/// Whether catalogue items must carry a description.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DescriptionRule {
    /// Descriptions may be omitted (but must be non-empty when present).
    #[default]
    Optional,
    /// Every item must carry a non-empty description.
    Required,
}

/// An immutable, validated product record.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogueItem {
    name: String,
    description: Option<String>,
    price: Money,
}

impl CatalogueItem {
    /// Validates and builds an item.
    ///
    /// Fails when the name is empty, the price is below one cent, a present
    /// description is empty, or `rule` requires a description that is absent.
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        description: Option<String>,
        rule: DescriptionRule,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::validation("item name must not be empty"));
        }

        let price = Money::new(price);
        if price < Money::minimum_unit() {
            return Err(DomainError::validation(format!(
                "price {price} for '{name}' is below the {} minimum",
                Money::minimum_unit()
            )));
        }

        match (&description, rule) {
            (Some(text), _) if text.is_empty() => {
                return Err(DomainError::validation(format!(
                    "description for '{name}' must not be empty"
                )));
            }
            (None, DescriptionRule::Required) => {
                return Err(DomainError::validation(format!(
                    "item '{name}' requires a description"
                )));
            }
            _ => {}
        }

        Ok(Self {
            name,
            description,
            price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> Money {
        self.price
    }

    /// Case-insensitive exact name match.
    pub fn matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl fmt::Display for CatalogueItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => write!(
                f,
                "{} - {} {} {}",
                self.name, description, PRICE_SEPARATOR, self.price
            ),
            None => write!(f, "{} {} {}", self.name, PRICE_SEPARATOR, self.price),
        }
    }
}
