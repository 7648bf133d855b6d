//! Catalogue record sources.
//!
//! Two implementations of [`CatalogueSource`]: the built-in demo records and
//! a line-oriented file reader (`name,price[,description]` per line).

use crate::ports::outbound::source::{CatalogueSource, RawItem};
use anyhow::Context;
use rust_decimal::Decimal;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// The built-in demo catalogue, used when no file is given.
pub struct StaticRecords;

impl CatalogueSource for StaticRecords {
    fn load(&self) -> anyhow::Result<Vec<RawItem>> {
        Ok(vec![
            record("Tea", 300, Some("Pot of loose-leaf assam")),
            record("Coffee", 280, Some("Double-shot flat white")),
            record("Cake", 550, Some("Lemon drizzle, generous slice")),
            record("Scone", 325, Some("With clotted cream and jam")),
            record("Sandwich", 495, Some("Cheddar and pickle on sourdough")),
            record("Biscuit", 150, None),
        ])
    }
}

fn record(name: &str, cents: i64, description: Option<&str>) -> RawItem {
    RawItem {
        name: name.to_owned(),
        price: Decimal::new(cents, 2),
        description: description.map(str::to_owned),
    }
}

/// Reads records from a text file, one per line.
///
/// Blank lines and lines starting with `#` are skipped. A third field is the
/// optional description; an empty third field counts as absent.
pub struct LineRecordFile {
    path: PathBuf,
}

impl LineRecordFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogueSource for LineRecordFile {
    fn load(&self) -> anyhow::Result<Vec<RawItem>> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("reading catalogue file {}", self.path.display()))?;

        let mut records = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let record = decode_line(line)
                .with_context(|| format!("{}:{}", self.path.display(), line_no + 1))?;
            records.push(record);
        }
        debug!(path = %self.path.display(), count = records.len(), "records read");
        Ok(records)
    }
}

fn decode_line(line: &str) -> anyhow::Result<RawItem> {
    let mut fields = line.splitn(3, ',').map(str::trim);
    let name = fields.next().unwrap_or_default().to_owned();
    let price = fields.next().context("missing price field")?;
    let price: Decimal = price
        .parse()
        .with_context(|| format!("invalid price '{price}'"))?;
    let description = fields
        .next()
        .map(str::to_owned)
        .filter(|text| !text.is_empty());

    Ok(RawItem {
        name,
        price,
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_name_price_and_optional_description() {
        let plain = decode_line("Tea,3.00").expect("decodes");
        assert_eq!(plain.name, "Tea");
        assert_eq!(plain.price, Decimal::new(300, 2));
        assert_eq!(plain.description, None);

        let described = decode_line("Cake, 5.50, Lemon drizzle").expect("decodes");
        assert_eq!(described.description.as_deref(), Some("Lemon drizzle"));
    }

    #[test]
    fn an_empty_trailing_field_counts_as_no_description() {
        let record = decode_line("Tea,3.00,").expect("decodes");
        assert_eq!(record.description, None);
    }

    #[test]
    fn rejects_missing_or_malformed_prices() {
        assert!(decode_line("Tea").is_err());
        assert!(decode_line("Tea,three dollars").is_err());
    }
}
