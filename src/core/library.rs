use std::fmt;
use std::fmt::{Display, Formatter};

pub const UNAVAILABLE_MESSAGE: &str = "Pricing service is temporarily unavailable (simulated failure)";

#[derive(Debug, PartialEq)]
pub enum PricingError {
    // Raised while the availability gate is down. It is retry-able: the gate may be
    // toggled back up at any moment, so callers can retry with or without a backoff.
    ServiceUnavailable {
        message: String,
        retryable: bool,
    },
}

impl PricingError {
    pub fn unavailable(message: &str, retryable: bool) -> PricingError {
        PricingError::ServiceUnavailable { message: message.to_string(), retryable }
    }

    pub fn simulated_failure() -> PricingError {
        PricingError::unavailable(UNAVAILABLE_MESSAGE, true)
    }
}

impl Display for PricingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::ServiceUnavailable { message, .. } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// A specialized Result type for pricing operations.
pub type PricingResult<T> = Result<T, PricingError>;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum GateState {
    Up,
    Down,
}

impl From<bool> for GateState {
    fn from(up: bool) -> Self {
        if up { GateState::Up } else { GateState::Down }
    }
}

impl Display for GateState {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            GateState::Up => write!(f, "UP"),
            GateState::Down => write!(f, "DOWN"),
        }
    }
}
