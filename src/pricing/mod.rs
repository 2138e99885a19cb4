//! Fare pricing with a pluggable cost strategy
//!
//! A [`PricingContext`] holds the [`TripParameters`] of one booking, the
//! currently selected [`CostStrategy`] and an optional [`Discount`].
//! Computing a total delegates to the strategy and then subtracts the
//! discount amount.
//!
//! # Example
//!
//! ```
//! use booking_desk::pricing::{
//!     Discount, PricingContext, ServiceTier, TransportMode, TripParameters,
//! };
//! use rust_decimal_macros::dec;
//!
//! let mut booking = PricingContext::new(TripParameters::new(dec!(100), ServiceTier::Business));
//! booking.set_strategy(TransportMode::Air);
//! booking.set_discount(Discount::new(dec!(20)));
//!
//! assert_eq!(booking.compute_total().unwrap(), dec!(180));
//! ```

mod context;
mod strategies;
mod traits;
mod types;

pub use context::{PricingContext, Quote};
pub use strategies::TransportMode;
pub use traits::{BoxedCostStrategy, CostStrategy};
pub use types::{Discount, ServiceTier, TripParameters};
