//! Applied discount type.

use crate::ids::PromotionId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A discount applied to a priced entity.
///
/// Produced only by converting a promotion reward; immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    /// The promotion that granted the discount.
    pub promotion_id: PromotionId,
    /// Description for display.
    pub description: String,
    /// Discount amount, tax exclusive.
    pub amount: Money,
    /// Discount amount, tax inclusive.
    pub amount_with_tax: Money,
}
