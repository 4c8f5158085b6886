use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::core::command::{Command, CommandError};
use crate::core::domain::SERVICE_NAME;
use crate::pricing::domain::PricingService;
use crate::utils::date::now_millis;

pub struct HealthCheckCommand {
    pricing_service: Arc<dyn PricingService>,
}

impl HealthCheckCommand {
    pub fn new(pricing_service: Arc<dyn PricingService>) -> Self {
        Self {
            pricing_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct HealthCheckCommandRequest {}

// Always reported with 200: a simulated outage is still a healthy process.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckCommandResponse {
    pub service: String,
    pub status: String,
    pub simulated_failure: bool,
    pub timestamp: i64,
}

impl HealthCheckCommandResponse {
    pub fn new(up: bool, timestamp: i64) -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
            status: if up { "UP".to_string() } else { "DOWN (simulated)".to_string() },
            simulated_failure: !up,
            timestamp,
        }
    }
}

#[async_trait]
impl Command<HealthCheckCommandRequest, HealthCheckCommandResponse> for HealthCheckCommand {
    async fn execute(&self, _req: HealthCheckCommandRequest) -> Result<HealthCheckCommandResponse, CommandError> {
        let up = self.pricing_service.is_up();
        Ok(HealthCheckCommandResponse::new(up, now_millis()))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::pricing::command::health_check_cmd::{HealthCheckCommand, HealthCheckCommandRequest};
    use crate::pricing::factory;
    use crate::utils::date::now_millis;

    #[tokio::test]
    async fn test_should_run_health_check() {
        let svc = factory::create_pricing_service(&Configuration::new());
        let cmd = HealthCheckCommand::new(svc.clone());
        let before = now_millis();

        let res = cmd.execute(HealthCheckCommandRequest::default()).await.expect("should check health");
        assert_eq!("pricing-service", res.service.as_str());
        assert_eq!("UP", res.status.as_str());
        assert!(!res.simulated_failure);
        assert!(res.timestamp >= before);

        let _ = svc.toggle_state();
        let res = cmd.execute(HealthCheckCommandRequest::default()).await.expect("should check health");
        assert_eq!("DOWN (simulated)", res.status.as_str());
        assert!(res.simulated_failure);
    }
}
