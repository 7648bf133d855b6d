//! # Application Layer (Service Layer)
//!
//! This layer orchestrates the business logic use cases.
//!
//! ## Purpose
//! It acts as the "API" for the domain. It does not contain business rules
//! (those belong in `domain`), but rather:
//! 1. Receives a command from an Inbound Adapter.
//! 2. Calls the appropriate Domain entities or Outbound Ports.
//! 3. Returns results to the adapter.
//!
//! ## Contents
//! * **[`services`]**: Grouped by feature/context (`session`, `loading`).

pub mod services;
