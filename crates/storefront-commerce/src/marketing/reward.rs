//! Promotion reward types.

use crate::cart::Discount;
use crate::ids::PromotionId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// What kind of entity a promotion reward targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PromotionRewardType {
    /// Reward on a catalog item.
    CatalogItem,
    /// Reward on the cart subtotal.
    CartSubtotal,
    /// Reward on a shipment.
    Shipment,
    /// Reward on a payment method.
    Payment,
}

/// How a reward's discount amount is derived from its base price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RewardAmount {
    /// Fixed amount off, capped at the base price.
    Fixed(Money),
    /// Percentage off the base price (0.0 - 100.0).
    Percentage(f64),
}

impl RewardAmount {
    /// Calculate the discount amount for a given base price.
    pub fn calculate(&self, base: &Money) -> Money {
        match self {
            RewardAmount::Fixed(amount) => {
                // Don't exceed the base
                if amount.amount_cents > base.amount_cents {
                    *base
                } else {
                    *amount
                }
            }
            RewardAmount::Percentage(percent) => base.percentage(*percent),
        }
    }
}

/// A promotion reward produced by the promotion evaluation service.
///
/// Consumed once per pricing pass; not persisted by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionReward {
    /// The promotion that produced this reward.
    pub promotion_id: PromotionId,
    /// Display description (e.g., "Free standard shipping").
    pub description: String,
    /// What the reward targets.
    pub reward_type: PromotionRewardType,
    /// Restricts a shipment reward to one shipping method.
    /// `None` (or empty) applies to any method.
    pub shipping_method_code: Option<String>,
    /// Whether the reward's conditions held at evaluation time.
    pub is_valid: bool,
    /// The discount amount rule.
    pub amount: RewardAmount,
}

impl PromotionReward {
    /// Create a shipment reward.
    pub fn shipment(
        promotion_id: PromotionId,
        description: impl Into<String>,
        amount: RewardAmount,
    ) -> Self {
        Self {
            promotion_id,
            description: description.into(),
            reward_type: PromotionRewardType::Shipment,
            shipping_method_code: None,
            is_valid: true,
            amount,
        }
    }

    /// Restrict the reward to a shipping method code.
    pub fn for_shipping_method(mut self, code: impl Into<String>) -> Self {
        self.shipping_method_code = Some(code.into());
        self
    }

    /// Check whether this reward applies to the given shipping method code.
    ///
    /// A reward without a method restriction applies to every method;
    /// otherwise codes compare case-insensitively.
    pub fn applies_to_method(&self, method_code: &str) -> bool {
        match self.shipping_method_code.as_deref() {
            None | Some("") => true,
            Some(code) => code.eq_ignore_ascii_case(method_code),
        }
    }

    /// Convert this reward into a discount against the given prices.
    ///
    /// `price` and `price_with_tax` are the target entity's current
    /// figures; each side of the discount is derived from its own base.
    pub fn to_discount(&self, price: Money, price_with_tax: Money) -> Discount {
        Discount {
            promotion_id: self.promotion_id.clone(),
            description: self.description.clone(),
            amount: self.amount.calculate(&price),
            amount_with_tax: self.amount.calculate(&price_with_tax),
        }
    }
}
