//! Shipment pricing aggregate.

use crate::cart::{Discount, ShipmentItem};
use crate::checkout::ShippingMethod;
use crate::error::CommerceError;
use crate::ids::ShipmentId;
use crate::marketing::{PromotionReward, PromotionRewardType};
use crate::money::{Currency, Money};
use crate::tax::{TaxDetail, TaxRate, PART_PRICE, PART_TOTAL};
use serde::{Deserialize, Serialize};

/// A cart shipment and its pricing state.
///
/// The shipment owns its discount ledger and tax figures. The two
/// mutating passes, [`apply_rewards`](Shipment::apply_rewards) and
/// [`apply_tax_rates`](Shipment::apply_tax_rates), each fully replace
/// the state they own, so repeating a pass never accumulates. Totals are
/// computed on demand from the current inputs and are never stored.
///
/// A shipment is not designed for concurrent mutation; both passes take
/// `&mut self`, so exclusive access is enforced by the borrow checker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    /// Unique shipment identifier. Tax-rate lines reference it.
    pub id: ShipmentId,
    /// Shipping method code (e.g., "standard").
    pub shipment_method_code: String,
    /// Shipping method option name (e.g., "signature-required").
    pub shipment_method_option: String,
    /// Fulfillment center the shipment dispatches from.
    pub fulfillment_center_id: Option<String>,
    /// Package weight.
    pub weight: Option<f64>,
    /// Unit for `weight` (e.g., "kg").
    pub weight_unit: Option<String>,
    /// Volumetric (dimensional) weight.
    pub volumetric_weight: Option<f64>,
    /// Unit for the package dimensions (e.g., "cm").
    pub measure_unit: Option<String>,
    /// Package height.
    pub height: Option<f64>,
    /// Package length.
    pub length: Option<f64>,
    /// Package width.
    pub width: Option<f64>,
    /// Cart line items assigned to this shipment.
    pub items: Vec<ShipmentItem>,
    currency: Currency,
    shipping_price: Money,
    // None until tax application overrides it; the accessor falls back
    // to the tax-exclusive price.
    shipping_price_with_tax: Option<Money>,
    discounts: Vec<Discount>,
    tax_total: Money,
    tax_details: Vec<TaxDetail>,
}

impl Shipment {
    /// Create a shipment priced in the given currency.
    pub fn new(id: ShipmentId, currency: Currency) -> Self {
        Self {
            id,
            shipment_method_code: String::new(),
            shipment_method_option: String::new(),
            fulfillment_center_id: None,
            weight: None,
            weight_unit: None,
            volumetric_weight: None,
            measure_unit: None,
            height: None,
            length: None,
            width: None,
            items: Vec::new(),
            currency,
            shipping_price: Money::zero(currency),
            shipping_price_with_tax: None,
            discounts: Vec::new(),
            tax_total: Money::zero(currency),
            tax_details: Vec::new(),
        }
    }

    /// The currency all of this shipment's figures are denominated in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Raw shipping price, before discounts and taxes.
    pub fn shipping_price(&self) -> Money {
        self.shipping_price
    }

    /// Seed the raw shipping price.
    ///
    /// Fails with [`CommerceError::CurrencyMismatch`] if the price is not
    /// denominated in the shipment's currency; every derived figure
    /// relies on that invariant.
    pub fn set_shipping_price(&mut self, price: Money) -> Result<(), CommerceError> {
        if price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: price.currency.code().to_string(),
            });
        }
        self.shipping_price = price;
        Ok(())
    }

    /// Shipping price including tax.
    ///
    /// Defaults to the tax-exclusive price until a tax application pass
    /// overrides it.
    pub fn shipping_price_with_tax(&self) -> Money {
        self.shipping_price_with_tax.unwrap_or(self.shipping_price)
    }

    /// Discounts currently applied, in reward order.
    pub fn discounts(&self) -> &[Discount] {
        &self.discounts
    }

    /// Total shipping tax amount.
    pub fn tax_total(&self) -> Money {
        self.tax_total
    }

    /// Rates applied by the last tax application pass.
    pub fn tax_details(&self) -> &[TaxDetail] {
        &self.tax_details
    }

    /// Total discount amount, tax exclusive.
    pub fn discount_total(&self) -> Money {
        Money::sum_cents(
            self.discounts.iter().map(|d| d.amount.amount_cents),
            self.currency,
        )
    }

    /// Total discount amount, tax inclusive.
    pub fn discount_total_with_tax(&self) -> Money {
        Money::sum_cents(
            self.discounts.iter().map(|d| d.amount_with_tax.amount_cents),
            self.currency,
        )
    }

    /// Shipping subtotal: price less discounts, before tax.
    pub fn subtotal(&self) -> Money {
        self.price_after_discounts()
    }

    /// Shipping total: price less discounts, before tax.
    ///
    /// Identical to [`subtotal`](Shipment::subtotal); both accessors
    /// exist for symmetry with sibling priced entities that do
    /// differentiate them.
    pub fn total(&self) -> Money {
        self.price_after_discounts()
    }

    /// Shipping subtotal including tax.
    pub fn subtotal_with_tax(&self) -> Money {
        self.price_after_discounts_with_tax()
    }

    /// Shipping total including tax. Identical to
    /// [`subtotal_with_tax`](Shipment::subtotal_with_tax).
    pub fn total_with_tax(&self) -> Money {
        self.price_after_discounts_with_tax()
    }

    /// Subtotal of the line items assigned to this shipment.
    pub fn item_subtotal(&self) -> Money {
        Money::sum_cents(
            self.items.iter().map(|i| i.extended_price.amount_cents),
            self.currency,
        )
    }

    fn price_after_discounts(&self) -> Money {
        Money::new(
            self.shipping_price.amount_cents - self.discount_total().amount_cents,
            self.currency,
        )
    }

    fn price_after_discounts_with_tax(&self) -> Money {
        Money::new(
            self.shipping_price_with_tax().amount_cents
                - self.discount_total_with_tax().amount_cents,
            self.currency,
        )
    }

    /// Apply promotion rewards to this shipment.
    ///
    /// Keeps rewards that target shipments and either carry no shipping
    /// method restriction or name this shipment's method
    /// (case-insensitive). The discount ledger is fully replaced on every
    /// call; passing an empty or entirely inapplicable set clears it.
    /// Invalid rewards are dropped silently, in line with the promotion
    /// service owning reward validity.
    pub fn apply_rewards(&mut self, rewards: &[PromotionReward]) {
        let price = self.shipping_price;
        let price_with_tax = self.shipping_price_with_tax();

        let discounts: Vec<Discount> = rewards
            .iter()
            .filter(|r| {
                r.reward_type == PromotionRewardType::Shipment
                    && r.applies_to_method(&self.shipment_method_code)
            })
            .filter(|r| r.is_valid)
            .map(|r| r.to_discount(price, price_with_tax))
            .collect();

        tracing::debug!(
            shipment_id = %self.id,
            supplied = rewards.len(),
            applied = discounts.len(),
            "applied shipment rewards"
        );

        self.discounts = discounts;
    }

    /// Apply tax rates to this shipment.
    ///
    /// Resets the tax state first, so the pass is idempotent rather than
    /// cumulative. Rates are matched by the entity id of their composite
    /// line id; when none match, the reset state (no tax) stands. When
    /// some match, both the "total" and "price" parts must be present;
    /// a missing part fails with [`CommerceError::TaxRatePartNotFound`],
    /// leaving the reset state in place.
    pub fn apply_tax_rates(&mut self, tax_rates: &[TaxRate]) -> Result<(), CommerceError> {
        self.shipping_price_with_tax = Some(self.shipping_price);
        self.tax_total = Money::zero(self.currency);
        self.tax_details = Vec::new();

        let matching: Vec<&TaxRate> = tax_rates
            .iter()
            .filter(|r| r.line.id.entity_id == self.id.as_str())
            .collect();

        if matching.is_empty() {
            tracing::debug!(shipment_id = %self.id, "no tax rates for shipment");
            return Ok(());
        }

        let total_rate = self.find_part(&matching, PART_TOTAL)?;
        let price_rate = self.find_part(&matching, PART_PRICE)?;

        self.tax_total = self.tax_total.add(&total_rate.rate)?;
        self.shipping_price_with_tax = Some(self.shipping_price.add(&price_rate.rate)?);
        self.tax_details = vec![
            TaxDetail {
                name: PART_TOTAL.to_string(),
                rate: total_rate.rate,
            },
            TaxDetail {
                name: PART_PRICE.to_string(),
                rate: price_rate.rate,
            },
        ];

        tracing::debug!(
            shipment_id = %self.id,
            tax_total = self.tax_total.amount_cents,
            "applied shipment tax rates"
        );

        Ok(())
    }

    /// Check whether this shipment uses the given shipping method.
    ///
    /// True only when both the method code and the option name match,
    /// case-insensitive.
    pub fn has_same_method(&self, method: &ShippingMethod) -> bool {
        self.shipment_method_code
            .eq_ignore_ascii_case(&method.shipment_method_code)
            && self
                .shipment_method_option
                .eq_ignore_ascii_case(&method.option_name)
    }

    fn find_part<'a>(
        &self,
        rates: &[&'a TaxRate],
        part: &str,
    ) -> Result<&'a TaxRate, CommerceError> {
        rates
            .iter()
            .find(|r| r.line.id.is_part(part))
            .copied()
            .ok_or_else(|| CommerceError::TaxRatePartNotFound {
                entity_id: self.id.to_string(),
                part: part.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::PromotionId;
    use crate::marketing::RewardAmount;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    fn shipment(method_code: &str) -> Shipment {
        let mut shipment = Shipment::new(ShipmentId::new("ship-1"), Currency::USD);
        shipment.shipment_method_code = method_code.to_string();
        shipment.set_shipping_price(usd(1000)).unwrap();
        shipment
    }

    fn shipment_reward(cents: i64) -> PromotionReward {
        PromotionReward::shipment(
            PromotionId::new("promo-1"),
            "Shipping discount",
            RewardAmount::Fixed(usd(cents)),
        )
    }

    #[test]
    fn test_price_with_tax_defaults_to_price() {
        let shipment = shipment("standard");
        assert_eq!(shipment.shipping_price_with_tax(), usd(1000));
    }

    #[test]
    fn test_set_shipping_price_rejects_wrong_currency() {
        let mut shipment = shipment("standard");
        let result = shipment.set_shipping_price(Money::new(1000, Currency::EUR));
        assert!(matches!(
            result,
            Err(CommerceError::CurrencyMismatch { .. })
        ));
        assert_eq!(shipment.shipping_price(), usd(1000));
    }

    #[test]
    fn test_totals_with_no_discounts() {
        let shipment = shipment("standard");
        assert_eq!(shipment.discount_total(), usd(0));
        assert_eq!(shipment.subtotal(), usd(1000));
        assert_eq!(shipment.total(), usd(1000));
        assert_eq!(shipment.total_with_tax(), usd(1000));
    }

    #[test]
    fn test_apply_rewards_computes_discount_totals() {
        let mut shipment = shipment("standard");
        shipment.apply_rewards(&[shipment_reward(200)]);

        assert_eq!(shipment.discounts().len(), 1);
        assert_eq!(shipment.discount_total(), usd(200));
        assert_eq!(shipment.subtotal(), usd(800));
        assert_eq!(shipment.total(), usd(800));
    }

    #[test]
    fn test_apply_rewards_empty_clears_prior_state() {
        let mut shipment = shipment("standard");
        shipment.apply_rewards(&[shipment_reward(200)]);
        assert_eq!(shipment.discounts().len(), 1);

        shipment.apply_rewards(&[]);
        assert!(shipment.discounts().is_empty());
        assert_eq!(shipment.discount_total(), usd(0));
    }

    #[test]
    fn test_apply_rewards_replaces_not_merges() {
        let mut shipment = shipment("standard");
        shipment.apply_rewards(&[shipment_reward(200)]);

        let second = PromotionReward::shipment(
            PromotionId::new("promo-2"),
            "Bigger discount",
            RewardAmount::Fixed(usd(300)),
        );
        shipment.apply_rewards(&[second]);

        assert_eq!(shipment.discounts().len(), 1);
        assert_eq!(shipment.discounts()[0].promotion_id, PromotionId::new("promo-2"));
        assert_eq!(shipment.discount_total(), usd(300));
    }

    #[test]
    fn test_apply_rewards_filters_other_reward_types() {
        let mut shipment = shipment("standard");
        let mut reward = shipment_reward(200);
        reward.reward_type = PromotionRewardType::CartSubtotal;

        shipment.apply_rewards(&[reward]);
        assert!(shipment.discounts().is_empty());
    }

    #[test]
    fn test_apply_rewards_filters_other_methods() {
        let mut shipment = shipment("standard");
        let reward = shipment_reward(200).for_shipping_method("express");

        shipment.apply_rewards(&[reward]);
        assert!(shipment.discounts().is_empty());
    }

    #[test]
    fn test_apply_rewards_matches_method_case_insensitively() {
        let mut shipment = shipment("Standard");
        let reward = shipment_reward(200).for_shipping_method("STANDARD");

        shipment.apply_rewards(&[reward]);
        assert_eq!(shipment.discounts().len(), 1);
    }

    #[test]
    fn test_apply_rewards_drops_invalid_rewards() {
        let mut shipment = shipment("standard");
        let mut reward = shipment_reward(200);
        reward.is_valid = false;

        shipment.apply_rewards(&[reward]);
        assert!(shipment.discounts().is_empty());
    }

    #[test]
    fn test_apply_rewards_preserves_input_order() {
        let mut shipment = shipment("standard");
        let first = PromotionReward::shipment(
            PromotionId::new("promo-a"),
            "A",
            RewardAmount::Fixed(usd(100)),
        );
        let second = PromotionReward::shipment(
            PromotionId::new("promo-b"),
            "B",
            RewardAmount::Fixed(usd(200)),
        );

        shipment.apply_rewards(&[first, second]);
        let ids: Vec<&str> = shipment
            .discounts()
            .iter()
            .map(|d| d.promotion_id.as_str())
            .collect();
        assert_eq!(ids, vec!["promo-a", "promo-b"]);
        assert_eq!(shipment.discount_total(), usd(300));
    }

    #[test]
    fn test_apply_tax_rates_empty_resets_state() {
        let mut shipment = shipment("standard");
        shipment.apply_tax_rates(&[]).unwrap();

        assert_eq!(shipment.shipping_price_with_tax(), usd(1000));
        assert_eq!(shipment.tax_total(), usd(0));
        assert!(shipment.tax_details().is_empty());
    }

    #[test]
    fn test_apply_tax_rates_scenario() {
        // Shipment "ship-1", $10.00; total and price rates of $0.80 each.
        let mut shipment = shipment("standard");
        let rates = vec![
            TaxRate::new("ship-1&total", usd(80)),
            TaxRate::new("ship-1&price", usd(80)),
        ];

        shipment.apply_tax_rates(&rates).unwrap();
        assert_eq!(shipment.tax_total(), usd(80));
        assert_eq!(shipment.shipping_price_with_tax(), usd(1080));
        assert_eq!(shipment.tax_details().len(), 2);
    }

    #[test]
    fn test_apply_tax_rates_ignores_other_entities() {
        let mut shipment = shipment("standard");
        let rates = vec![
            TaxRate::new("ship-2&total", usd(80)),
            TaxRate::new("ship-2&price", usd(80)),
        ];

        shipment.apply_tax_rates(&rates).unwrap();
        assert_eq!(shipment.tax_total(), usd(0));
        assert_eq!(shipment.shipping_price_with_tax(), usd(1000));
    }

    #[test]
    fn test_apply_tax_rates_is_idempotent() {
        let mut shipment = shipment("standard");
        let rates = vec![
            TaxRate::new("ship-1&total", usd(80)),
            TaxRate::new("ship-1&price", usd(80)),
        ];

        shipment.apply_tax_rates(&rates).unwrap();
        shipment.apply_tax_rates(&rates).unwrap();
        assert_eq!(shipment.tax_total(), usd(80));
        assert_eq!(shipment.shipping_price_with_tax(), usd(1080));
    }

    #[test]
    fn test_apply_tax_rates_missing_part_is_an_error() {
        let mut shipment = shipment("standard");
        let rates = vec![TaxRate::new("ship-1&total", usd(80))];

        let result = shipment.apply_tax_rates(&rates);
        assert!(matches!(
            result,
            Err(CommerceError::TaxRatePartNotFound { ref part, .. }) if part == "price"
        ));
        // The reset state stands; no partial totals leak.
        assert_eq!(shipment.tax_total(), usd(0));
        assert_eq!(shipment.shipping_price_with_tax(), usd(1000));
        assert!(shipment.tax_details().is_empty());
    }

    #[test]
    fn test_tax_and_discounts_compose() {
        let mut shipment = shipment("standard");
        let rates = vec![
            TaxRate::new("ship-1&total", usd(80)),
            TaxRate::new("ship-1&price", usd(80)),
        ];
        shipment.apply_tax_rates(&rates).unwrap();

        // 10% off: $1.00 of the price, $1.08 of the tax-inclusive price.
        let reward = PromotionReward::shipment(
            PromotionId::new("promo-1"),
            "10% off shipping",
            RewardAmount::Percentage(10.0),
        );
        shipment.apply_rewards(&[reward]);

        assert_eq!(shipment.discount_total(), usd(100));
        assert_eq!(shipment.discount_total_with_tax(), usd(108));
        assert_eq!(shipment.total(), usd(900));
        assert_eq!(shipment.total_with_tax(), usd(972));
        assert_eq!(shipment.subtotal(), shipment.total());
        assert_eq!(shipment.subtotal_with_tax(), shipment.total_with_tax());
    }

    #[test]
    fn test_item_subtotal() {
        use crate::cart::ShipmentItem;
        use crate::ids::LineItemId;

        let mut shipment = shipment("standard");
        shipment.items.push(ShipmentItem::new(
            LineItemId::new("item-1"),
            "Product A",
            2,
            usd(2000),
        ));
        shipment.items.push(ShipmentItem::new(
            LineItemId::new("item-2"),
            "Product B",
            1,
            usd(500),
        ));

        assert_eq!(shipment.item_subtotal(), usd(2500));
    }

    #[test]
    fn test_shipment_serializes_round_trip() {
        let mut shipment = shipment("standard");
        let rates = vec![
            TaxRate::new("ship-1&total", usd(80)),
            TaxRate::new("ship-1&price", usd(80)),
        ];
        shipment.apply_tax_rates(&rates).unwrap();
        shipment.apply_rewards(&[shipment_reward(200)]);

        let json = serde_json::to_string(&shipment).unwrap();
        let restored: Shipment = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, shipment);
        assert_eq!(restored.total(), usd(800));
    }

    #[test]
    fn test_has_same_method() {
        let mut shipment = shipment("standard");
        shipment.shipment_method_option = "signature".to_string();

        let mut method = ShippingMethod::new(
            crate::ids::ShippingMethodId::new("method-1"),
            "Standard Shipping",
            usd(599),
        );
        method.shipment_method_code = "STANDARD".to_string();
        method.option_name = "Signature".to_string();
        assert!(shipment.has_same_method(&method));

        method.option_name = "no-signature".to_string();
        assert!(!shipment.has_same_method(&method));

        method.option_name = "Signature".to_string();
        method.shipment_method_code = "express".to_string();
        assert!(!shipment.has_same_method(&method));
    }
}
