use std::sync::Arc;
use tracing::{error, info, warn};
use crate::core::domain::{Configuration, SERVICE_NAME};
use crate::core::library::{GateState, PricingResult};
use crate::pricing::domain::model::{AvailabilityGate, PriceCatalog};
use crate::pricing::domain::PricingService;

pub(crate) struct PricingServiceImpl {
    catalog: PriceCatalog,
    gate: Arc<AvailabilityGate>,
}

impl PricingServiceImpl {
    pub(crate) fn new(_config: &Configuration, catalog: PriceCatalog, gate: Arc<AvailabilityGate>) -> Self {
        info!(service = SERVICE_NAME, prices = catalog.len(), up = gate.is_up(),
            "pricing service initialized with default prices");
        Self {
            catalog,
            gate,
        }
    }
}

impl PricingService for PricingServiceImpl {
    fn find_price(&self, book_id: u64) -> PricingResult<f64> {
        match self.gate.guarded_lookup(&self.catalog, book_id) {
            Ok(price) => {
                info!(book_id, price, "returning price");
                Ok(price)
            }
            Err(err) => {
                error!(book_id, "pricing service is DOWN - simulating failure");
                Err(err)
            }
        }
    }

    fn toggle_state(&self) -> bool {
        let up = self.gate.toggle();
        warn!(state = %GateState::from(up), "pricing service state toggled");
        up
    }

    fn is_up(&self) -> bool {
        self.gate.is_up()
    }

    fn state(&self) -> GateState {
        self.gate.state()
    }
}
