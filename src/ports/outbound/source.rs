//! Catalogue record supply.
//!
//! The core never parses files; it consumes already-decoded records and
//! validates them into a [`crate::domain::models::catalogue::Catalogue`].

use rust_decimal::Decimal;

/// One already-decoded catalogue record, not yet validated.
#[derive(Debug, Clone, PartialEq)]
pub struct RawItem {
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
}

/// Supplies the ordered list of raw records the catalogue is built from.
pub trait CatalogueSource {
    fn load(&self) -> anyhow::Result<Vec<RawItem>>;
}
