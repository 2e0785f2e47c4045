//! Checkout module.
//!
//! Contains the shipping method descriptors a shipment is matched
//! against.

mod shipping;

pub use shipping::ShippingMethod;
