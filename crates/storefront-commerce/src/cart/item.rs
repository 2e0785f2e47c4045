//! Shipment line items.

use crate::ids::LineItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A cart line item assigned to a shipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentItem {
    /// The cart line item being shipped.
    pub line_item_id: LineItemId,
    /// Product name (denormalized for display).
    pub product_name: String,
    /// Quantity shipped in this shipment.
    pub quantity: i64,
    /// Extended price of the shipped quantity.
    pub extended_price: Money,
}

impl ShipmentItem {
    /// Create a new shipment item.
    pub fn new(
        line_item_id: LineItemId,
        product_name: impl Into<String>,
        quantity: i64,
        extended_price: Money,
    ) -> Self {
        Self {
            line_item_id,
            product_name: product_name.into(),
            quantity,
            extended_price,
        }
    }
}
