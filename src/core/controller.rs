use std::sync::Arc;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::pricing::domain::PricingService;
use crate::pricing::factory;

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub service: Arc<dyn PricingService>,
}

impl AppState {
    pub fn new(config: Configuration) -> AppState {
        let service = factory::create_pricing_service(&config);
        AppState {
            config,
            service,
        }
    }
}

pub type ServerError = (StatusCode, Json<Value>);

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        let status = match err {
            CommandError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            CommandError::Validation { .. } => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({ "error": err.message(), "status": "error" })))
    }
}

// same as From<CommandError> with the requested book echoed back
pub fn book_error(book_id: impl Into<Value>, err: CommandError) -> ServerError {
    let (status, Json(mut body)) = ServerError::from(err);
    body["bookId"] = book_id.into();
    (status, Json(body))
}
