//! Catalogue construction from an external source.

use crate::domain::models::catalogue::Catalogue;
use crate::domain::models::item::{CatalogueItem, DescriptionRule};
use crate::ports::outbound::source::CatalogueSource;
use anyhow::Context;
use tracing::info;

/// Loads raw records through the port and validates them into a catalogue.
///
/// Any invalid record aborts the whole load; a catalogue is either complete
/// and valid or absent.
pub fn load_catalogue(
    source: &dyn CatalogueSource,
    rule: DescriptionRule,
) -> anyhow::Result<Catalogue> {
    let records = source.load().context("loading catalogue records")?;

    let mut items = Vec::with_capacity(records.len());
    for record in records {
        let item = CatalogueItem::new(record.name, record.price, record.description, rule)?;
        items.push(item);
    }

    let catalogue = Catalogue::new(items)?;
    info!(items = catalogue.len(), "catalogue loaded");
    Ok(catalogue)
}
