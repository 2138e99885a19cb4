//! Configuration types

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::pricing::Discount;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Fare quoting defaults
    #[serde(default)]
    pub booking: BookingConfig,
    /// Market session defaults
    #[serde(default)]
    pub market: MarketConfig,
    /// General application settings
    #[serde(default)]
    pub settings: AppSettings,
}

/// Defaults applied by the `quote` command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Discount applied when none is given on the command line
    #[serde(default)]
    pub default_discount: Decimal,
    /// Marks the default discount as child-eligible (informational only)
    #[serde(default)]
    pub discount_for_children: bool,
    /// Marks the default discount as senior-eligible (informational only)
    #[serde(default)]
    pub discount_for_seniors: bool,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            default_discount: Decimal::ZERO,
            discount_for_children: false,
            discount_for_seniors: false,
        }
    }
}

impl BookingConfig {
    /// Build a discount of `amount` carrying the configured eligibility flags
    pub fn discount(&self, amount: Decimal) -> Discount {
        let mut discount = Discount::new(amount);
        if self.discount_for_children {
            discount = discount.children();
        }
        if self.discount_for_seniors {
            discount = discount.seniors();
        }
        discount
    }
}

/// Defaults used by the `market` session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Buy threshold for `trader` when none is typed
    #[serde(default = "default_buy_below")]
    pub default_buy_below: Decimal,
    /// Sell threshold for `trader` when none is typed
    #[serde(default = "default_sell_above")]
    pub default_sell_above: Decimal,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            default_buy_below: default_buy_below(),
            default_sell_above: default_sell_above(),
        }
    }
}

fn default_buy_below() -> Decimal {
    dec!(10)
}

fn default_sell_above() -> Decimal {
    dec!(20)
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
