use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::core::command::{Command, CommandError};
use crate::core::library::GateState;
use crate::pricing::domain::PricingService;

pub struct ToggleStateCommand {
    pricing_service: Arc<dyn PricingService>,
}

impl ToggleStateCommand {
    pub fn new(pricing_service: Arc<dyn PricingService>) -> Self {
        Self {
            pricing_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct ToggleStateCommandRequest {}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleStateCommandResponse {
    pub service_up: bool,
    pub status: String,
    pub message: String,
}

impl ToggleStateCommandResponse {
    pub fn new(service_up: bool) -> Self {
        let message = if service_up {
            "Service is now UP - pricing requests will succeed"
        } else {
            "Service is now DOWN - pricing requests will fail (simulated failure)"
        };
        Self {
            service_up,
            status: GateState::from(service_up).to_string(),
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl Command<ToggleStateCommandRequest, ToggleStateCommandResponse> for ToggleStateCommand {
    async fn execute(&self, _req: ToggleStateCommandRequest) -> Result<ToggleStateCommandResponse, CommandError> {
        Ok(ToggleStateCommandResponse::new(self.pricing_service.toggle_state()))
    }
}
