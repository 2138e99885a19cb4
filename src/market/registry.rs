use parking_lot::ReentrantMutex;
use rust_decimal::Decimal;
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

use crate::market::traits::{PriceSubject, SharedListener};
use crate::market::types::Reaction;

/// Last known price per symbol plus the listener roster
#[derive(Default)]
pub struct MarketRegistry {
    prices: HashMap<String, Decimal>,
    listeners: Vec<SharedListener>,
}

impl MarketRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a listener; the same handle may be attached more than once
    pub fn attach(&mut self, listener: SharedListener) {
        info!("Attached listener {}", listener.name());
        self.listeners.push(listener);
    }

    /// Remove the first entry that is the same handle as `listener`
    pub fn detach(&mut self, listener: &SharedListener) -> bool {
        match self.listeners.iter().position(|l| Arc::ptr_eq(l, listener)) {
            Some(index) => {
                self.listeners.remove(index);
                info!("Detached listener {}", listener.name());
                true
            }
            None => {
                debug!("Listener {} was not attached, nothing to detach", listener.name());
                false
            }
        }
    }

    pub fn notify_listeners(&self, symbol: &str, price: Decimal) -> Vec<Reaction> {
        deliver(&self.listeners, symbol, price)
    }

    /// Store `price` for `symbol`, then notify every listener
    ///
    /// The table write completes before the first notification. Listeners
    /// cannot reach this registry while it is mutably borrowed; a listener
    /// that needs to read prices during notification should observe a
    /// [`SharedMarketRegistry`] instead.
    pub fn update_price(&mut self, symbol: impl Into<String>, price: Decimal) -> Vec<Reaction> {
        let symbol = symbol.into();
        self.store_price(&symbol, price);
        self.notify_listeners(&symbol, price)
    }

    fn store_price(&mut self, symbol: &str, price: Decimal) {
        let previous = self.prices.insert(symbol.to_string(), price);
        info!(
            "Price of {} updated to {} (was {:?}), notifying {} listeners",
            symbol,
            price,
            previous,
            self.listeners.len()
        );
    }

    /// Last stored price, or zero if the symbol was never updated
    pub fn get_price(&self, symbol: &str) -> Decimal {
        self.prices.get(symbol).copied().unwrap_or_default()
    }

    pub fn has_price(&self, symbol: &str) -> bool {
        self.prices.contains_key(symbol)
    }

    /// Snapshot of all stored prices, sorted by symbol
    pub fn prices(&self) -> Vec<(String, Decimal)> {
        let mut prices: Vec<_> = self.prices.iter().map(|(s, p)| (s.clone(), *p)).collect();
        prices.sort_by(|a, b| a.0.cmp(&b.0));
        prices
    }

    pub fn listeners(&self) -> &[SharedListener] {
        &self.listeners
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Detach the listener at `index` in attachment order
    pub fn detach_at(&mut self, index: usize) -> Option<SharedListener> {
        if index < self.listeners.len() {
            let listener = self.listeners.remove(index);
            info!("Detached listener {} at position {}", listener.name(), index);
            Some(listener)
        } else {
            None
        }
    }
}

impl PriceSubject for MarketRegistry {
    fn attach(&mut self, listener: SharedListener) {
        MarketRegistry::attach(self, listener);
    }

    fn detach(&mut self, listener: &SharedListener) -> bool {
        MarketRegistry::detach(self, listener)
    }

    fn notify_listeners(&self, symbol: &str, price: Decimal) -> Vec<Reaction> {
        MarketRegistry::notify_listeners(self, symbol, price)
    }
}

fn deliver(listeners: &[SharedListener], symbol: &str, price: Decimal) -> Vec<Reaction> {
    listeners
        .iter()
        .map(|listener| {
            let reaction = listener.on_price_changed(symbol, price);
            debug!("{}", reaction);
            reaction
        })
        .collect()
}

impl std::fmt::Debug for MarketRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.listeners.iter().map(|l| l.name()).collect();
        f.debug_struct("MarketRegistry")
            .field("prices", &self.prices)
            .field("listeners", &names)
            .finish()
    }
}

/// Thread-safe handle to a [`MarketRegistry`]
///
/// One lock covers both the table write and the notification loop, so
/// concurrent updates are delivered whole and in the order they were
/// applied. The lock is re-entrant and no borrow of the registry is held
/// while listeners run: a listener may read prices (and sees the new
/// one), attach, detach or even update from inside its notification.
/// Listeners attached during a notification first hear the next update.
#[derive(Clone)]
pub struct SharedMarketRegistry {
    inner: Arc<ReentrantMutex<RefCell<MarketRegistry>>>,
}

impl SharedMarketRegistry {
    pub fn new() -> Self {
        Self::from_registry(MarketRegistry::new())
    }

    pub fn from_registry(registry: MarketRegistry) -> Self {
        Self {
            inner: Arc::new(ReentrantMutex::new(RefCell::new(registry))),
        }
    }

    pub fn attach(&self, listener: SharedListener) {
        self.inner.lock().borrow_mut().attach(listener);
    }

    pub fn detach(&self, listener: &SharedListener) -> bool {
        self.inner.lock().borrow_mut().detach(listener)
    }

    pub fn update_price(&self, symbol: impl Into<String>, price: Decimal) -> Vec<Reaction> {
        let symbol = symbol.into();
        let guard = self.inner.lock();
        let listeners = {
            let mut registry = guard.borrow_mut();
            registry.store_price(&symbol, price);
            registry.listeners.clone()
        };
        deliver(&listeners, &symbol, price)
    }

    pub fn get_price(&self, symbol: &str) -> Decimal {
        self.inner.lock().borrow().get_price(symbol)
    }

    pub fn listener_count(&self) -> usize {
        self.inner.lock().borrow().listener_count()
    }
}

impl Default for SharedMarketRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SharedMarketRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let guard = self.inner.lock();
        let registry = guard.borrow();
        f.debug_tuple("SharedMarketRegistry").field(&*registry).finish()
    }
}
