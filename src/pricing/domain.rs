pub mod model;
pub mod service;

use crate::core::library::{GateState, PricingResult};

pub trait PricingService: Sync + Send {
    // price for a book, refused while the gate is down
    fn find_price(&self, book_id: u64) -> PricingResult<f64>;
    // flips the gate and returns the new state (true = UP)
    fn toggle_state(&self) -> bool;
    fn is_up(&self) -> bool;
    fn state(&self) -> GateState;
}
