//! Marketing module.
//!
//! Contains promotion rewards as delivered by the promotion evaluation
//! service and their conversion into cart discounts.

mod reward;

pub use reward::{PromotionReward, PromotionRewardType, RewardAmount};
