//! Tax module.
//!
//! Contains tax-rate records keyed by a structured composite identifier
//! and the detail lines recorded when rates are applied.

mod rate;

pub use rate::{TaxDetail, TaxLine, TaxLineId, TaxRate, PART_PRICE, PART_TOTAL};
