use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use crate::core::library::{GateState, PricingError, PricingResult};

const SEED_PRICES: [(u64, f64); 5] = [
    (1, 19.99),
    (2, 24.99),
    (3, 14.99),
    (4, 29.99),
    (5, 9.99),
];

/// Fixed in-memory price list. Read-only once built, so it is shared without locking.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceCatalog {
    prices: HashMap<u64, f64>,
}

impl PriceCatalog {
    pub fn seeded() -> Self {
        Self {
            prices: HashMap::from(SEED_PRICES),
        }
    }

    /// Price used for books missing from the catalog: `10.0 + (book_id % 10) * 2.5`.
    pub fn fallback_price(book_id: u64) -> f64 {
        10.0 + (book_id % 10) as f64 * 2.5
    }

    pub fn lookup(&self, book_id: u64) -> f64 {
        self.prices.get(&book_id).copied().unwrap_or_else(|| Self::fallback_price(book_id))
    }

    pub fn contains(&self, book_id: u64) -> bool {
        self.prices.contains_key(&book_id)
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }
}

/// Process-wide UP/DOWN switch in front of the catalog.
///
/// The flag is flipped with a single atomic read-modify-write, so racing toggles
/// never lose an update. A lookup racing a toggle may see either state. Every gate
/// starts UP.
#[derive(Debug)]
pub struct AvailabilityGate {
    up: AtomicBool,
}

impl AvailabilityGate {
    pub fn new() -> Self {
        Self {
            up: AtomicBool::new(true),
        }
    }

    pub fn is_up(&self) -> bool {
        self.up.load(Ordering::SeqCst)
    }

    pub fn state(&self) -> GateState {
        GateState::from(self.is_up())
    }

    pub fn toggle(&self) -> bool {
        // fetch_xor returns the previous value
        !self.up.fetch_xor(true, Ordering::SeqCst)
    }

    pub fn guarded_lookup(&self, catalog: &PriceCatalog, book_id: u64) -> PricingResult<f64> {
        if !self.is_up() {
            return Err(PricingError::simulated_failure());
        }
        Ok(catalog.lookup(book_id))
    }
}
