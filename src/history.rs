//! Bounded price history
//!
//! Sliding window over recent tick prices, used for both current-price
//! display and the chart series.

use rust_decimal::Decimal;
use std::collections::VecDeque;

/// Default number of prices retained
pub const DEFAULT_CAPACITY: usize = 50;

/// Fixed-capacity FIFO window of recent prices
///
/// Appends are O(1); once the window is full the oldest price is dropped
/// before the newest is added. Prices are kept in exact arrival order.
#[derive(Debug, Clone)]
pub struct PriceHistory {
    capacity: usize,
    prices: VecDeque<Decimal>,
}

impl PriceHistory {
    /// Create an empty history with the given capacity
    ///
    /// A zero capacity is treated as 1 so the window can always hold the
    /// latest price.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            prices: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a price, evicting the oldest entry if the window is full
    pub fn append(&mut self, price: Decimal) {
        if self.prices.len() == self.capacity {
            self.prices.pop_front();
        }
        self.prices.push_back(price);
    }

    /// Most recently appended price
    pub fn latest(&self) -> Option<Decimal> {
        self.prices.back().copied()
    }

    /// Number of prices currently retained
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Configured window capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Prices in arrival order, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Decimal> {
        self.prices.iter()
    }

    /// Drop all retained prices
    pub fn clear(&mut self) {
        self.prices.clear();
    }
}

impl Default for PriceHistory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
