use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::core::command::{Command, CommandError};
use crate::core::domain::CURRENCY;
use crate::pricing::domain::PricingService;

pub struct GetPriceCommand {
    pricing_service: Arc<dyn PricingService>,
}

impl GetPriceCommand {
    pub fn new(pricing_service: Arc<dyn PricingService>) -> Self {
        Self {
            pricing_service,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct GetPriceCommandRequest {
    pub book_id: u64,
}

impl GetPriceCommandRequest {
    pub fn new(book_id: u64) -> Self {
        Self {
            book_id,
        }
    }

    // book ids are non-negative integers
    pub fn parse(raw: &str) -> Result<Self, CommandError> {
        raw.parse::<u64>()
            .map(Self::new)
            .map_err(|err| CommandError::Validation { message: format!("invalid book id {:?}: {}", raw, err) })
    }
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPriceCommandResponse {
    pub book_id: u64,
    pub price: f64,
    pub currency: String,
    pub status: String,
}

impl GetPriceCommandResponse {
    pub fn new(book_id: u64, price: f64) -> Self {
        Self {
            book_id,
            price,
            currency: CURRENCY.to_string(),
            status: "success".to_string(),
        }
    }
}

#[async_trait]
impl Command<GetPriceCommandRequest, GetPriceCommandResponse> for GetPriceCommand {
    async fn execute(&self, req: GetPriceCommandRequest) -> Result<GetPriceCommandResponse, CommandError> {
        self.pricing_service.find_price(req.book_id)
            .map_err(CommandError::from)
            .map(|price| GetPriceCommandResponse::new(req.book_id, price))
    }
}
