//! Shopping cart module.
//!
//! Contains the shipment pricing aggregate, its discount ledger, and
//! shipment line items.

mod discount;
mod item;
mod shipment;

pub use discount::Discount;
pub use item::ShipmentItem;
pub use shipment::Shipment;
