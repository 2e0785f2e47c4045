//! Tax rate records.
//!
//! Upstream tax providers key their rate lines with a composite string id
//! of the form `<entityId>&<part>`. That convention is parsed once, at the
//! ingestion boundary, into [`TaxLineId`]; nothing downstream re-parses
//! strings.

use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The rate part covering an entity's tax total.
pub const PART_TOTAL: &str = "total";

/// The rate part covering an entity's tax-inclusive price.
pub const PART_PRICE: &str = "price";

/// Structured form of the provider's composite line id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaxLineId {
    /// The priced entity this line belongs to.
    pub entity_id: String,
    /// Which figure the rate covers ("total", "price", ...).
    pub part: String,
}

impl TaxLineId {
    /// Create a line id from its parts.
    pub fn new(entity_id: impl Into<String>, part: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            part: part.into(),
        }
    }

    /// Parse a composite id of the form `<entityId>&<part>`.
    ///
    /// Splits on the first `&`. An id without a delimiter yields an empty
    /// part, which never matches a named part.
    pub fn parse(composite: &str) -> Self {
        match composite.split_once('&') {
            Some((entity_id, part)) => Self::new(entity_id, part),
            None => Self::new(composite, ""),
        }
    }

    /// Check whether this line covers the given part, ignoring case.
    pub fn is_part(&self, part: &str) -> bool {
        self.part.eq_ignore_ascii_case(part)
    }
}

impl fmt::Display for TaxLineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}&{}", self.entity_id, self.part)
    }
}

/// A tax line supplied by the tax-rate provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxLine {
    /// Structured composite id.
    pub id: TaxLineId,
    /// Provider-side display name, if any.
    pub name: Option<String>,
}

impl TaxLine {
    /// Create a tax line from a raw composite id string.
    pub fn from_composite(composite: &str) -> Self {
        Self {
            id: TaxLineId::parse(composite),
            name: None,
        }
    }
}

/// A tax rate record: a line plus the monetary rate for that line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRate {
    /// The line the rate applies to.
    pub line: TaxLine,
    /// The rate amount.
    pub rate: Money,
}

impl TaxRate {
    /// Create a rate from a raw composite id and an amount.
    pub fn new(composite_id: &str, rate: Money) -> Self {
        Self {
            line: TaxLine::from_composite(composite_id),
            rate,
        }
    }
}

/// A rate that was actually applied to an entity, recorded for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxDetail {
    /// Which part of the entity the rate covered.
    pub name: String,
    /// The applied rate amount.
    pub rate: Money,
}
