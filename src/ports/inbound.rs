//! # Inbound Ports (Driving Actors)
//!
//! This module defines the contracts for interactions *initiated by external
//! actors* towards the application (driving the app).
//!
//! ## Current State
//! The CLI adapters (in `src/adapters/inbound/cli`) instantiate and call the
//! application services directly. This is acceptable for a terminal front-end
//! where the driver is always the user.
//!
//! A richer front-end (the storefront originally shipped as a desktop GUI)
//! would define use-case traits here, e.g.:
//! ```rust
//! use shopfront::domain::errors::DomainResult;
//!
//! pub trait CartUseCase {
//!     fn add_to_cart(&mut self, name: &str) -> DomainResult<()>;
//!     fn remove_from_cart(&mut self, name: &str) -> DomainResult<()>;
//! }
//! ```
