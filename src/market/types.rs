use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What a listener decided about a price change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    /// The change was only reported
    Observed,
    Buy,
    Sell,
    /// Price sits between the thresholds (inclusive)
    Hold,
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Signal::Observed => write!(f, "observed"),
            Signal::Buy => write!(f, "buy"),
            Signal::Sell => write!(f, "sell"),
            Signal::Hold => write!(f, "hold"),
        }
    }
}

/// Observable effect of one listener handling one price update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    /// Name of the listener that produced this reaction
    pub listener: String,
    pub symbol: String,
    pub price: Decimal,
    pub signal: Signal,
    pub observed_at: DateTime<Utc>,
}

impl Reaction {
    pub fn new(
        listener: impl Into<String>,
        symbol: impl Into<String>,
        price: Decimal,
        signal: Signal,
    ) -> Self {
        Self {
            listener: listener.into(),
            symbol: symbol.into(),
            price,
            signal,
            observed_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for Reaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.signal {
            Signal::Observed => write!(
                f,
                "{}: price of {} changed to {}",
                self.listener, self.symbol, self.price
            ),
            Signal::Buy => write!(
                f,
                "{}: buying {} at {}",
                self.listener, self.symbol, self.price
            ),
            Signal::Sell => write!(
                f,
                "{}: selling {} at {}",
                self.listener, self.symbol, self.price
            ),
            Signal::Hold => write!(
                f,
                "{}: holding {}, current price {}",
                self.listener, self.symbol, self.price
            ),
        }
    }
}
