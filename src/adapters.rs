//! # Adapters Layer (Infrastructure)
//!
//! Concrete implementations of the Ports, plus the CLI front-end.
//!
//! * **[`inbound`]**: adapters that drive the application (CLI commands).
//! * **[`outbound`]**: adapters the application drives (record sources,
//!   the customer record file, the terminal view).

pub mod inbound;
pub mod outbound;
