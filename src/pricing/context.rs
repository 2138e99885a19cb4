use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use crate::common::errors::{DeskError, Result};
use crate::pricing::traits::{BoxedCostStrategy, CostStrategy};
use crate::pricing::types::{Discount, TripParameters};

/// Breakdown of a computed fare
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub strategy: String,
    pub trip: TripParameters,
    pub base_price: Decimal,
    pub discount_amount: Decimal,
    pub total: Decimal,
}

/// Booking state a cost strategy prices
///
/// Trip parameters are fixed at construction. The strategy and discount
/// can be replaced any number of times; every computation reads the
/// current ones. Totals are not floored at zero.
pub struct PricingContext {
    trip: TripParameters,
    strategy: Option<BoxedCostStrategy>,
    discount: Option<Discount>,
}

impl PricingContext {
    pub fn new(trip: TripParameters) -> Self {
        Self {
            trip,
            strategy: None,
            discount: None,
        }
    }

    /// Builder form of [`set_strategy`](Self::set_strategy)
    pub fn with_strategy(mut self, strategy: impl CostStrategy + 'static) -> Self {
        self.set_strategy(strategy);
        self
    }

    /// Replace the selected strategy
    pub fn set_strategy(&mut self, strategy: impl CostStrategy + 'static) {
        self.set_boxed_strategy(Box::new(strategy));
    }

    pub fn set_boxed_strategy(&mut self, strategy: BoxedCostStrategy) {
        debug!("Selected cost strategy: {}", strategy.name());
        self.strategy = Some(strategy);
    }

    /// Replace the discount
    pub fn set_discount(&mut self, discount: Discount) {
        debug!("Discount set to {}", discount.amount());
        self.discount = Some(discount);
    }

    pub fn clear_discount(&mut self) {
        self.discount = None;
    }

    pub fn has_strategy(&self) -> bool {
        self.strategy.is_some()
    }

    pub fn strategy_name(&self) -> Option<&str> {
        self.strategy.as_ref().map(|s| s.name())
    }

    pub fn trip(&self) -> &TripParameters {
        &self.trip
    }

    pub fn discount(&self) -> Option<&Discount> {
        self.discount.as_ref()
    }

    /// Strategy price minus the discount amount, if any
    ///
    /// Fails with [`DeskError::StrategyNotSet`] when no strategy has been
    /// selected, and with [`DeskError::AmountOutOfRange`] when the result
    /// does not fit in a `Decimal`. The context is left untouched either way.
    pub fn compute_total(&self) -> Result<Decimal> {
        self.quote().map(|quote| quote.total)
    }

    /// Like [`compute_total`](Self::compute_total) but keeps the breakdown
    ///
    /// Amounts are normalized (no trailing zeros) so they print the way
    /// they were written.
    pub fn quote(&self) -> Result<Quote> {
        let strategy = self.strategy.as_ref().ok_or(DeskError::StrategyNotSet)?;

        let base_price = strategy.compute(&self.trip)?.normalize();
        let discount_amount = self.discount.map(|d| d.amount()).unwrap_or(Decimal::ZERO);
        let total = base_price
            .checked_sub(discount_amount)
            .ok_or_else(|| {
                DeskError::AmountOutOfRange(format!(
                    "{} minus discount {}",
                    base_price, discount_amount
                ))
            })?
            .normalize();

        info!(
            "Priced {} km {} trip with {}: {} - {} = {}",
            self.trip.distance,
            self.trip.tier,
            strategy.name(),
            base_price,
            discount_amount,
            total
        );

        Ok(Quote {
            strategy: strategy.name().to_string(),
            trip: self.trip,
            base_price,
            discount_amount,
            total,
        })
    }
}

impl std::fmt::Debug for PricingContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PricingContext")
            .field("trip", &self.trip)
            .field("strategy", &self.strategy_name())
            .field("discount", &self.discount)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::strategies::TransportMode;
    use crate::pricing::types::ServiceTier;
    use rust_decimal_macros::dec;

    struct FlatFare(Decimal);

    impl CostStrategy for FlatFare {
        fn name(&self) -> &str {
            "flat"
        }

        fn compute(&self, _trip: &TripParameters) -> Result<Decimal> {
            Ok(self.0)
        }
    }

    fn business_100km() -> PricingContext {
        PricingContext::new(TripParameters::new(dec!(100), ServiceTier::Business))
    }

    #[test]
    fn test_total_without_strategy_fails() {
        let mut booking = business_100km();
        assert!(matches!(booking.compute_total(), Err(DeskError::StrategyNotSet)));

        booking.set_discount(Discount::new(dec!(5)));
        assert!(matches!(booking.compute_total(), Err(DeskError::StrategyNotSet)));
        assert!(!booking.has_strategy());
    }

    #[test]
    fn test_recovers_after_strategy_set() {
        let mut booking = business_100km();
        assert!(booking.compute_total().is_err());

        booking.set_strategy(TransportMode::Rail);
        assert_eq!(booking.compute_total().unwrap(), dec!(80));
    }

    #[test]
    fn test_air_business_with_discount() {
        let mut booking = business_100km().with_strategy(TransportMode::Air);
        booking.set_discount(Discount::new(dec!(20)));
        assert_eq!(booking.compute_total().unwrap(), dec!(180));
    }

    #[test]
    fn test_discount_is_plain_subtraction() {
        for amount in [dec!(0), dec!(20), dec!(-15), dec!(1000)] {
            let mut booking = business_100km().with_strategy(TransportMode::Road);
            let undiscounted = booking.compute_total().unwrap();
            booking.set_discount(Discount::new(amount));
            assert_eq!(booking.compute_total().unwrap(), undiscounted - amount);
        }
    }

    #[test]
    fn test_total_may_go_negative() {
        let mut booking = business_100km().with_strategy(TransportMode::Road);
        booking.set_discount(Discount::new(dec!(100)));
        assert_eq!(booking.compute_total().unwrap(), dec!(-50));
    }

    #[test]
    fn test_latest_strategy_and_discount_win() {
        let mut booking = business_100km();
        booking.set_strategy(TransportMode::Air);
        booking.set_strategy(TransportMode::Road);
        booking.set_discount(Discount::new(dec!(10)));
        booking.set_discount(Discount::new(dec!(1)));
        assert_eq!(booking.compute_total().unwrap(), dec!(49));

        booking.clear_discount();
        assert_eq!(booking.compute_total().unwrap(), dec!(50));
    }

    #[test]
    fn test_custom_strategy() {
        let mut booking = business_100km();
        booking.set_boxed_strategy(Box::new(FlatFare(dec!(42))));
        let quote = booking.quote().unwrap();
        assert_eq!(quote.strategy, "flat");
        assert_eq!(quote.base_price, dec!(42));
        assert_eq!(quote.discount_amount, Decimal::ZERO);
        assert_eq!(quote.total, dec!(42));
    }

    #[test]
    fn test_overflowing_discount_is_an_error() {
        let trip = TripParameters::new(Decimal::MAX, ServiceTier::Business);
        let mut booking = PricingContext::new(trip).with_strategy(TransportMode::Air);
        booking.set_discount(Discount::new(-Decimal::MAX));

        assert!(matches!(
            booking.compute_total(),
            Err(DeskError::AmountOutOfRange(_))
        ));

        booking.set_discount(Discount::new(dec!(20)));
        assert!(booking.compute_total().is_ok());
    }

    #[test]
    fn test_custom_strategy_overflow_is_an_error() {
        let mut booking = business_100km();
        booking.set_boxed_strategy(Box::new(FlatFare(Decimal::MIN)));
        booking.set_discount(Discount::new(dec!(1)));
        assert!(matches!(booking.quote(), Err(DeskError::AmountOutOfRange(_))));
    }

    #[test]
    fn test_discount_flags_do_not_change_total() {
        let mut booking = business_100km().with_strategy(TransportMode::Air);
        booking.set_discount(Discount::new(dec!(20)).children().seniors());
        assert_eq!(booking.compute_total().unwrap(), dec!(180));
    }
}
