//! Stock price registry with change listeners
//!
//! A [`MarketRegistry`] stores the last known price per symbol and holds an
//! ordered roster of [`PriceListener`]s. Every price update is written to
//! the table first, then delivered to each attached listener in attachment
//! order. Each listener answers with a [`Reaction`] describing what it
//! reported.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use booking_desk::market::{MarketRegistry, PassiveObserver, Signal, ThresholdTrader};
//! use rust_decimal_macros::dec;
//!
//! let mut market = MarketRegistry::new();
//! market.attach(Arc::new(ThresholdTrader::new(dec!(10), dec!(20))));
//! market.attach(Arc::new(PassiveObserver::new()));
//!
//! let reactions = market.update_price("ACME", dec!(15));
//! assert_eq!(reactions[0].signal, Signal::Hold);
//! assert_eq!(reactions[1].signal, Signal::Observed);
//! assert_eq!(market.get_price("ACME"), dec!(15));
//! ```

mod listeners;
mod registry;
mod traits;
mod types;

pub use listeners::{PassiveObserver, ThresholdTrader};
pub use registry::{MarketRegistry, SharedMarketRegistry};
pub use traits::{PriceListener, PriceSubject, SharedListener};
pub use types::{Reaction, Signal};
