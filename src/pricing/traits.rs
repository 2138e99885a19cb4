use rust_decimal::Decimal;

use crate::common::errors::Result;
use crate::pricing::types::TripParameters;

/// Pluggable fare algorithm
///
/// Implementations are pure: the same trip parameters always produce the
/// same price. The only failure is arithmetic overflow, reported as
/// [`DeskError::AmountOutOfRange`](crate::common::errors::DeskError::AmountOutOfRange).
pub trait CostStrategy: Send + Sync {
    /// Short identifier used in logs and quotes
    fn name(&self) -> &str;

    /// Price of the trip before any discount
    fn compute(&self, trip: &TripParameters) -> Result<Decimal>;
}

/// Boxed cost strategy for dynamic dispatch
pub type BoxedCostStrategy = Box<dyn CostStrategy>;
