//! # Customer Model
//!
//! Contact and shipping details captured alongside an order. One storefront
//! revision also collects payment details, so that field is governed by a
//! constructor rule instead of a second type. Persistence lives behind an
//! outbound port; this model only validates.

use crate::domain::errors::{DomainError, DomainResult};

/// Whether payment details are collected with customer info.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaymentRule {
    /// Payment details are not part of this revision.
    #[default]
    NotCollected,
    /// Payment details must be present and non-empty.
    Required,
}

/// A validated record of contact and shipping fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerInfo {
    name: String,
    shipping_address: String,
    email: String,
    payment_details: Option<String>,
}

impl CustomerInfo {
    /// Validates and builds a customer record.
    ///
    /// Name, shipping address, and email must all be non-empty; payment
    /// details follow `rule` (and must be non-empty whenever present).
    pub fn new(
        name: impl Into<String>,
        shipping_address: impl Into<String>,
        email: impl Into<String>,
        payment_details: Option<String>,
        rule: PaymentRule,
    ) -> DomainResult<Self> {
        let name = name.into();
        let shipping_address = shipping_address.into();
        let email = email.into();

        for (label, value) in [
            ("customer name", &name),
            ("shipping address", &shipping_address),
            ("email address", &email),
        ] {
            if value.is_empty() {
                return Err(DomainError::validation(format!("{label} must not be empty")));
            }
        }

        match (&payment_details, rule) {
            (Some(text), _) if text.is_empty() => {
                return Err(DomainError::validation(
                    "payment details must not be empty",
                ));
            }
            (None, PaymentRule::Required) => {
                return Err(DomainError::validation("payment details are required"));
            }
            _ => {}
        }

        Ok(Self {
            name,
            shipping_address,
            email,
            payment_details,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shipping_address(&self) -> &str {
        &self.shipping_address
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn payment_details(&self) -> Option<&str> {
        self.payment_details.as_deref()
    }
}
