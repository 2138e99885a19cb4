//! BookingDesk Library
//!
//! Transport fare pricing with an interchangeable cost strategy, and a
//! stock price registry that pushes price changes to attached listeners.

pub mod cli;
pub mod common;
pub mod config;
pub mod market;
pub mod pricing;

// Re-export commonly used types
pub use common::errors::{DeskError, Result};
pub use config::types::AppConfig;

pub use pricing::{
    BoxedCostStrategy, CostStrategy, Discount, PricingContext, Quote, ServiceTier, TransportMode,
    TripParameters,
};

pub use market::{
    MarketRegistry, PassiveObserver, PriceListener, PriceSubject, Reaction, SharedListener,
    SharedMarketRegistry, Signal, ThresholdTrader,
};
