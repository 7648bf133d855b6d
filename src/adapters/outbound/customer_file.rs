//! File-backed customer record store.
//!
//! One header line, then one comma-joined row per record, appended as orders
//! are placed.

use crate::domain::models::customer::CustomerInfo;
use crate::ports::outbound::store::{CustomerRecord, CustomerRecordStore, RECORD_HEADER};
use anyhow::Context;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

pub struct CustomerFile {
    path: PathBuf,
}

impl CustomerFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CustomerRecordStore for CustomerFile {
    fn persist(&self, info: &CustomerInfo) -> anyhow::Result<()> {
        let record = CustomerRecord::from(info);
        let fresh = !self.path.exists();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening customer file {}", self.path.display()))?;

        if fresh {
            writeln!(file, "{RECORD_HEADER}")?;
        }
        writeln!(
            file,
            "{}, {}, {}, {}",
            record.name, record.shipping_address, record.email, record.payment_details
        )?;

        debug!(path = %self.path.display(), customer = record.name, "customer record appended");
        Ok(())
    }

    fn load_all(&self) -> anyhow::Result<Vec<CustomerRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("reading customer file {}", self.path.display()))?;

        let mut lines = text.lines();
        match lines.next() {
            None => return Ok(Vec::new()),
            Some(header) if header.trim() == RECORD_HEADER => {}
            Some(other) => anyhow::bail!(
                "malformed customer file {}: expected the '{RECORD_HEADER}' header, found '{other}'",
                self.path.display()
            ),
        }

        let mut records = Vec::new();
        for line in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            records.push(decode_row(line).with_context(|| format!("in {}", self.path.display()))?);
        }
        Ok(records)
    }
}

fn decode_row(line: &str) -> anyhow::Result<CustomerRecord> {
    let fields: Vec<&str> = line.splitn(4, ',').map(str::trim).collect();
    match fields.as_slice() {
        [name, shipping_address, email, payment_details] => Ok(CustomerRecord {
            name: (*name).to_owned(),
            shipping_address: (*shipping_address).to_owned(),
            email: (*email).to_owned(),
            payment_details: (*payment_details).to_owned(),
        }),
        _ => anyhow::bail!("malformed customer row '{line}'"),
    }
}
