//! Cart pricing domain for the storefront.
//!
//! This crate provides the computation core of the order-capture layer:
//!
//! - **Money**: currency-safe monetary arithmetic
//! - **Cart**: the shipment pricing aggregate, its discount ledger and items
//! - **Marketing**: promotion rewards and their conversion to discounts
//! - **Tax**: rate records keyed by structured composite ids
//! - **Checkout**: shipping method descriptors
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let mut shipment = Shipment::new(ShipmentId::new("ship-1"), Currency::USD);
//! shipment.shipment_method_code = "standard".to_string();
//! shipment.set_shipping_price(Money::new(1000, Currency::USD))?;
//!
//! // Tax rates from the provider, keyed "<entityId>&<part>".
//! let rates = vec![
//!     TaxRate::new("ship-1&total", Money::new(80, Currency::USD)),
//!     TaxRate::new("ship-1&price", Money::new(80, Currency::USD)),
//! ];
//! shipment.apply_tax_rates(&rates)?;
//!
//! // Rewards from the promotion service.
//! let reward = PromotionReward::shipment(
//!     PromotionId::new("promo-1"),
//!     "$2 off shipping",
//!     RewardAmount::Fixed(Money::new(200, Currency::USD)),
//! );
//! shipment.apply_rewards(&[reward]);
//!
//! assert_eq!(shipment.total(), Money::new(800, Currency::USD));
//! assert_eq!(shipment.tax_total(), Money::new(80, Currency::USD));
//! # Ok::<(), storefront_commerce::CommerceError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod checkout;
pub mod marketing;
pub mod tax;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Cart
    pub use crate::cart::{Discount, Shipment, ShipmentItem};

    // Marketing
    pub use crate::marketing::{PromotionReward, PromotionRewardType, RewardAmount};

    // Tax
    pub use crate::tax::{TaxDetail, TaxLine, TaxLineId, TaxRate};

    // Checkout
    pub use crate::checkout::ShippingMethod;
}
