use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tracing::{error, info, warn};
use crate::core::command::Command;
use crate::core::controller::{book_error, AppState, ServerError};
use crate::core::domain::{SERVICE_NAME, SERVICE_VERSION};
use crate::pricing::command::get_price_cmd::{GetPriceCommand, GetPriceCommandRequest, GetPriceCommandResponse};
use crate::pricing::command::health_check_cmd::{HealthCheckCommand, HealthCheckCommandRequest, HealthCheckCommandResponse};
use crate::pricing::command::toggle_state_cmd::{ToggleStateCommand, ToggleStateCommandRequest, ToggleStateCommandResponse};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/price/:book_id", get(get_price))
        .route("/toggleDown", post(toggle_down))
        .route("/health-check", get(health_check))
        .with_state(state)
}

pub(crate) async fn get_price(
    State(state): State<AppState>,
    Path(raw_book_id): Path<String>) -> Result<Json<GetPriceCommandResponse>, ServerError> {
    let req = GetPriceCommandRequest::parse(raw_book_id.as_str()).map_err(|err| {
        warn!(book_id = raw_book_id.as_str(), error = err.message(), "rejected price request");
        book_error(raw_book_id.as_str(), err)
    })?;
    let book_id = req.book_id;
    info!(book_id, "received price request");
    let res = GetPriceCommand::new(state.service.clone()).execute(req).await.map_err(|err| {
        error!(book_id, error = err.message(), retryable = err.retryable(), "error getting price");
        book_error(book_id, err)
    })?;
    Ok(Json(res))
}

pub(crate) async fn toggle_down(
    State(state): State<AppState>) -> Result<Json<ToggleStateCommandResponse>, ServerError> {
    let res = ToggleStateCommand::new(state.service.clone()).execute(ToggleStateCommandRequest::default()).await?;
    warn!(status = res.status.as_str(), "service state toggled via api");
    Ok(Json(res))
}

pub(crate) async fn health_check(
    State(state): State<AppState>) -> Result<Json<HealthCheckCommandResponse>, ServerError> {
    let res = HealthCheckCommand::new(state.service.clone()).execute(HealthCheckCommandRequest::default()).await?;
    Ok(Json(res))
}

#[derive(Debug, Serialize)]
pub(crate) struct ServiceInfo {
    service: String,
    version: String,
    status: String,
}

pub(crate) async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: SERVICE_NAME.to_string(),
        version: SERVICE_VERSION.to_string(),
        status: "running".to_string(),
    })
}
