//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in pricing operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Currency mismatch in money arithmetic.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow in money calculation.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Tax rates matched an entity but a required rate part is absent.
    #[error("Tax rate part \"{part}\" not found for entity {entity_id}")]
    TaxRatePartNotFound { entity_id: String, part: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
