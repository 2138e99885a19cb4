//! Common test utilities and fixtures

#![allow(dead_code)]

use std::sync::Arc;

use booking_desk::{
    MarketRegistry, PassiveObserver, PricingContext, ServiceTier, SharedListener, ThresholdTrader,
    TripParameters,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// 100 km business trip with no strategy or discount selected
pub fn business_trip() -> PricingContext {
    PricingContext::new(TripParameters::new(dec!(100), ServiceTier::Business))
}

/// Trip with the given distance and tier
pub fn trip(distance: Decimal, tier: ServiceTier) -> PricingContext {
    PricingContext::new(TripParameters::new(distance, tier))
}

/// Trader with buy-below 10 and sell-above 20
pub fn sample_trader() -> SharedListener {
    Arc::new(ThresholdTrader::new(dec!(10), dec!(20)))
}

pub fn sample_observer() -> SharedListener {
    Arc::new(PassiveObserver::new())
}

/// Registry with the sample trader attached before a passive observer
pub fn trader_then_observer() -> MarketRegistry {
    let mut market = MarketRegistry::new();
    market.attach(sample_trader());
    market.attach(sample_observer());
    market
}

/// Sample market session scripts
pub mod sessions {
    pub const TRADER_AND_OBSERVER: &str = "\
trader 10 20
observer
update ACME 15
price ACME
quit
";

    pub const WITH_MISTAKES: &str = "\
observer

fly away
update ACME
update ACME 25
detach 3
price nope
";
}
