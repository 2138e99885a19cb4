use rust_decimal::Decimal;
use std::io::Write;
use tracing::info;

use crate::common::errors::Result;
use crate::config::BookingConfig;
use crate::pricing::{PricingContext, Quote, ServiceTier, TransportMode, TripParameters};

/// Validated inputs of the `quote` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    pub distance: Decimal,
    pub tier: ServiceTier,
    pub mode: TransportMode,
    /// Falls back to the configured default discount when absent
    pub discount: Option<Decimal>,
}

impl QuoteRequest {
    /// Assemble the pricing context this request describes
    pub fn to_context(&self, booking: &BookingConfig) -> PricingContext {
        let amount = self.discount.unwrap_or(booking.default_discount);
        let mut context = PricingContext::new(TripParameters::new(self.distance, self.tier))
            .with_strategy(self.mode);
        context.set_discount(booking.discount(amount));
        context
    }
}

/// Price the request and write the result to `out`
pub fn run_quote<W: Write>(
    request: &QuoteRequest,
    booking: &BookingConfig,
    json: bool,
    out: &mut W,
) -> Result<Quote> {
    info!("Quoting {:?}", request);
    let quote = request.to_context(booking).quote()?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&quote)?)?;
    } else {
        writeln!(out, "Total cost: {}", quote.total)?;
    }

    Ok(quote)
}
