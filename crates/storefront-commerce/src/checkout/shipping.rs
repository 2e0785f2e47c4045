//! Shipping method types.

use crate::ids::ShippingMethodId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A shipping method option offered at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingMethod {
    /// Unique identifier.
    pub id: ShippingMethodId,
    /// Display name.
    pub name: String,
    /// Method code shipments are matched against (e.g., "standard").
    pub shipment_method_code: String,
    /// Option name within the method (e.g., "signature-required").
    pub option_name: String,
    /// Carrier name (e.g., "UPS", "FedEx").
    pub carrier: Option<String>,
    /// Shipping price.
    pub price: Money,
    /// Minimum delivery days.
    pub min_delivery_days: Option<i32>,
    /// Maximum delivery days.
    pub max_delivery_days: Option<i32>,
}

impl ShippingMethod {
    /// Create a new shipping method.
    pub fn new(id: ShippingMethodId, name: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            shipment_method_code: String::new(),
            option_name: String::new(),
            carrier: None,
            price,
            min_delivery_days: None,
            max_delivery_days: None,
        }
    }

    /// Get delivery estimate string.
    pub fn delivery_estimate(&self) -> Option<String> {
        match (self.min_delivery_days, self.max_delivery_days) {
            (Some(min), Some(max)) if min == max => Some(format!("{} days", min)),
            (Some(min), Some(max)) => Some(format!("{}-{} days", min, max)),
            (Some(min), None) => Some(format!("{}+ days", min)),
            (None, Some(max)) => Some(format!("Up to {} days", max)),
            (None, None) => None,
        }
    }

    /// Check if this is free shipping.
    pub fn is_free(&self) -> bool {
        self.price.is_zero()
    }
}
