use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::common::errors::DeskError;

/// Service tier of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceTier {
    #[default]
    Economy,
    Business,
}

impl std::fmt::Display for ServiceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceTier::Economy => write!(f, "economy"),
            ServiceTier::Business => write!(f, "business"),
        }
    }
}

impl FromStr for ServiceTier {
    type Err = DeskError;

    /// Accepts the tier name or its menu number (1 = economy, 2 = business)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "economy" | "1" => Ok(ServiceTier::Economy),
            "business" | "2" => Ok(ServiceTier::Business),
            other => Err(DeskError::InvalidInput(format!("unknown service tier: {}", other))),
        }
    }
}

/// Parameters of a single pricing request
///
/// Distance is in kilometers and is not validated; a negative distance
/// yields a defined (if meaningless) price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripParameters {
    pub distance: Decimal,
    pub tier: ServiceTier,
}

impl TripParameters {
    pub fn new(distance: Decimal, tier: ServiceTier) -> Self {
        Self { distance, tier }
    }

    pub fn is_business(&self) -> bool {
        self.tier == ServiceTier::Business
    }
}

/// Flat amount subtracted from a computed fare
///
/// The child/senior eligibility flags are carried as metadata only. No
/// computation reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    amount: Decimal,
    for_children: bool,
    for_seniors: bool,
}

impl Discount {
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount,
            for_children: false,
            for_seniors: false,
        }
    }

    /// Mark the discount as child-eligible
    pub fn children(mut self) -> Self {
        self.for_children = true;
        self
    }

    /// Mark the discount as senior-eligible
    pub fn seniors(mut self) -> Self {
        self.for_seniors = true;
        self
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn is_for_children(&self) -> bool {
        self.for_children
    }

    pub fn is_for_seniors(&self) -> bool {
        self.for_seniors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_tier_from_str() {
        assert_eq!("Business".parse::<ServiceTier>().unwrap(), ServiceTier::Business);
        assert_eq!("economy".parse::<ServiceTier>().unwrap(), ServiceTier::Economy);
        assert_eq!("2".parse::<ServiceTier>().unwrap(), ServiceTier::Business);
        assert_eq!("1".parse::<ServiceTier>().unwrap(), ServiceTier::Economy);
        assert!("first".parse::<ServiceTier>().is_err());
    }

    #[test]
    fn test_discount_flags_default_off() {
        let discount = Discount::new(dec!(15));
        assert_eq!(discount.amount(), dec!(15));
        assert!(!discount.is_for_children());
        assert!(!discount.is_for_seniors());

        let flagged = discount.children().seniors();
        assert!(flagged.is_for_children());
        assert!(flagged.is_for_seniors());
        assert_eq!(flagged.amount(), dec!(15));
    }
}
