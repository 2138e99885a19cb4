use rust_decimal::Decimal;

use crate::market::traits::PriceListener;
use crate::market::types::{Reaction, Signal};

/// Listener that only reports the new price
#[derive(Debug, Clone)]
pub struct PassiveObserver {
    name: String,
}

impl PassiveObserver {
    pub fn new() -> Self {
        Self::named("observer")
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for PassiveObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceListener for PassiveObserver {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_price_changed(&self, symbol: &str, price: Decimal) -> Reaction {
        Reaction::new(&self.name, symbol, price, Signal::Observed)
    }
}

/// Listener that classifies each price against two fixed thresholds
///
/// Below `buy_below` is a buy, above `sell_above` is a sell, anything else
/// (including either threshold exactly) is a hold. Thresholds are not
/// checked against each other; the buy test runs first.
#[derive(Debug, Clone)]
pub struct ThresholdTrader {
    name: String,
    buy_below: Decimal,
    sell_above: Decimal,
}

impl ThresholdTrader {
    pub fn new(buy_below: Decimal, sell_above: Decimal) -> Self {
        Self::named("trader", buy_below, sell_above)
    }

    pub fn named(name: impl Into<String>, buy_below: Decimal, sell_above: Decimal) -> Self {
        Self {
            name: name.into(),
            buy_below,
            sell_above,
        }
    }

    pub fn buy_below(&self) -> Decimal {
        self.buy_below
    }

    pub fn sell_above(&self) -> Decimal {
        self.sell_above
    }

    pub fn classify(&self, price: Decimal) -> Signal {
        if price < self.buy_below {
            Signal::Buy
        } else if price > self.sell_above {
            Signal::Sell
        } else {
            Signal::Hold
        }
    }
}

impl PriceListener for ThresholdTrader {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_price_changed(&self, symbol: &str, price: Decimal) -> Reaction {
        Reaction::new(&self.name, symbol, price, self.classify(price))
    }
}
