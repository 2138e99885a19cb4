//! Console drivers for the pricing and market components

pub mod booking;
pub mod market;

pub use booking::{run_quote, QuoteRequest};
pub use market::{run_session, MarketCommand, SessionSummary};
