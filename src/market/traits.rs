use rust_decimal::Decimal;
use std::sync::Arc;

use crate::market::types::Reaction;

/// Receiver of price change notifications
///
/// `on_price_changed` is called synchronously by the registry after the
/// new price has been stored. It must not panic; its only effect is the
/// returned [`Reaction`].
pub trait PriceListener: Send + Sync {
    /// Name shown in reactions and logs
    fn name(&self) -> &str;

    fn on_price_changed(&self, symbol: &str, price: Decimal) -> Reaction;
}

/// Shared listener handle
///
/// Identity is the allocation: attaching the same handle twice registers
/// it twice, and detaching compares with [`Arc::ptr_eq`].
pub type SharedListener = Arc<dyn PriceListener>;

/// Owner of a listener roster
pub trait PriceSubject {
    /// Append a listener to the roster
    fn attach(&mut self, listener: SharedListener);

    /// Remove the first roster entry that is the same handle
    ///
    /// Returns false (and changes nothing) when the handle is not attached.
    fn detach(&mut self, listener: &SharedListener) -> bool;

    /// Deliver `(symbol, price)` to every listener in attachment order
    fn notify_listeners(&self, symbol: &str, price: Decimal) -> Vec<Reaction>;
}
