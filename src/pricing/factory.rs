use std::sync::Arc;
use crate::core::domain::Configuration;
use crate::pricing::domain::model::{AvailabilityGate, PriceCatalog};
use crate::pricing::domain::service::PricingServiceImpl;
use crate::pricing::domain::PricingService;

pub fn create_pricing_service(config: &Configuration) -> Arc<dyn PricingService> {
    let gate = Arc::new(AvailabilityGate::new());
    Arc::new(PricingServiceImpl::new(config, PriceCatalog::seeded(), gate))
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::pricing::factory;

    #[tokio::test]
    async fn test_should_start_up() {
        assert!(factory::create_pricing_service(&Configuration::new()).is_up());
    }
}
