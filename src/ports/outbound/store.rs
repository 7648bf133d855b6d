//! Customer record persistence.
//!
//! Records are kept outside the core as a header-plus-rows delimited block;
//! the mechanics live in an adapter, the contract lives here.

use crate::domain::models::customer::CustomerInfo;

/// Header line written once at the top of the external store.
pub const RECORD_HEADER: &str = "Name, Shipping Address, Email Address, Credit Card Details";

/// One flat row of the external store, as written or read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRecord {
    pub name: String,
    pub shipping_address: String,
    pub email: String,
    pub payment_details: String,
}

impl From<&CustomerInfo> for CustomerRecord {
    fn from(info: &CustomerInfo) -> Self {
        Self {
            name: info.name().to_owned(),
            shipping_address: info.shipping_address().to_owned(),
            email: info.email().to_owned(),
            payment_details: info.payment_details().unwrap_or_default().to_owned(),
        }
    }
}

/// Appends validated customer info and reads back everything stored so far.
pub trait CustomerRecordStore {
    fn persist(&self, info: &CustomerInfo) -> anyhow::Result<()>;
    fn load_all(&self) -> anyhow::Result<Vec<CustomerRecord>>;
}
