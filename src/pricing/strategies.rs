use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::common::errors::{DeskError, Result};
use crate::pricing::traits::CostStrategy;
use crate::pricing::types::TripParameters;

/// Built-in fare algorithms, one per transport mode
///
/// | mode | base fare | per km | business surcharge |
/// |------|-----------|--------|--------------------|
/// | Air  | 100       | 0.5    | 50                 |
/// | Rail | 50        | 0.3    | none               |
/// | Road | 30        | 0.2    | none               |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Air,
    Rail,
    Road,
}

impl TransportMode {
    pub const ALL: [TransportMode; 3] =
        [TransportMode::Air, TransportMode::Rail, TransportMode::Road];

    pub fn base_fare(&self) -> Decimal {
        match self {
            TransportMode::Air => dec!(100),
            TransportMode::Rail => dec!(50),
            TransportMode::Road => dec!(30),
        }
    }

    pub fn per_km_rate(&self) -> Decimal {
        match self {
            TransportMode::Air => dec!(0.5),
            TransportMode::Rail => dec!(0.3),
            TransportMode::Road => dec!(0.2),
        }
    }

    /// Extra charge for business tier (only air distinguishes tiers)
    pub fn business_surcharge(&self) -> Decimal {
        match self {
            TransportMode::Air => dec!(50),
            TransportMode::Rail | TransportMode::Road => Decimal::ZERO,
        }
    }
}

impl CostStrategy for TransportMode {
    fn name(&self) -> &str {
        match self {
            TransportMode::Air => "air",
            TransportMode::Rail => "rail",
            TransportMode::Road => "road",
        }
    }

    fn compute(&self, trip: &TripParameters) -> Result<Decimal> {
        let surcharge = if trip.is_business() {
            self.business_surcharge()
        } else {
            Decimal::ZERO
        };
        trip.distance
            .checked_mul(self.per_km_rate())
            .and_then(|distance_cost| distance_cost.checked_add(self.base_fare()))
            .and_then(|fare| fare.checked_add(surcharge))
            .ok_or_else(|| {
                DeskError::AmountOutOfRange(format!(
                    "{} fare for {} km",
                    self.name(),
                    trip.distance
                ))
            })
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TransportMode {
    type Err = DeskError;

    /// Accepts the mode name, the vehicle name, or the menu number 1-3
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "air" | "plane" | "airplane" | "1" => Ok(TransportMode::Air),
            "rail" | "train" | "2" => Ok(TransportMode::Rail),
            "road" | "bus" | "3" => Ok(TransportMode::Road),
            other => Err(DeskError::InvalidInput(format!("unknown transport mode: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::types::ServiceTier;

    fn trip(distance: Decimal, tier: ServiceTier) -> TripParameters {
        TripParameters::new(distance, tier)
    }

    #[test]
    fn test_closed_forms() {
        let cases = [
            (TransportMode::Air, dec!(0), ServiceTier::Economy, dec!(100)),
            (TransportMode::Air, dec!(0), ServiceTier::Business, dec!(150)),
            (TransportMode::Air, dec!(100), ServiceTier::Economy, dec!(150)),
            (TransportMode::Air, dec!(100), ServiceTier::Business, dec!(200)),
            (TransportMode::Rail, dec!(0), ServiceTier::Economy, dec!(50)),
            (TransportMode::Rail, dec!(100), ServiceTier::Business, dec!(80)),
            (TransportMode::Rail, dec!(250.5), ServiceTier::Economy, dec!(125.15)),
            (TransportMode::Road, dec!(0), ServiceTier::Business, dec!(30)),
            (TransportMode::Road, dec!(100), ServiceTier::Economy, dec!(50)),
            (TransportMode::Road, dec!(12.5), ServiceTier::Economy, dec!(32.5)),
        ];

        for (mode, distance, tier, expected) in cases {
            assert_eq!(
                mode.compute(&trip(distance, tier)).unwrap(),
                expected,
                "{} at {} km ({})",
                mode,
                distance,
                tier
            );
        }
    }

    #[test]
    fn test_only_air_charges_business() {
        for mode in TransportMode::ALL {
            let economy = mode.compute(&trip(dec!(40), ServiceTier::Economy)).unwrap();
            let business = mode.compute(&trip(dec!(40), ServiceTier::Business)).unwrap();
            assert_eq!(business - economy, mode.business_surcharge());
        }
    }

    #[test]
    fn test_negative_distance_is_not_rejected() {
        let fare = TransportMode::Road.compute(&trip(dec!(-200), ServiceTier::Economy));
        assert_eq!(fare.unwrap(), dec!(-10));
    }

    #[test]
    fn test_extreme_distances_stay_in_range() {
        for mode in TransportMode::ALL {
            assert!(mode.compute(&trip(Decimal::MAX, ServiceTier::Business)).is_ok());
            assert!(mode.compute(&trip(Decimal::MIN, ServiceTier::Economy)).is_ok());
        }
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("plane".parse::<TransportMode>().unwrap(), TransportMode::Air);
        assert_eq!("Train".parse::<TransportMode>().unwrap(), TransportMode::Rail);
        assert_eq!("bus".parse::<TransportMode>().unwrap(), TransportMode::Road);
        assert_eq!("3".parse::<TransportMode>().unwrap(), TransportMode::Road);
        assert!("boat".parse::<TransportMode>().is_err());
    }
}
