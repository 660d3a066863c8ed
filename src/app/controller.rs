use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::Value;

use crate::AppState;

use super::{models::api_error::ApiError, service};

pub async fn get_root(State(_state): State<Arc<AppState>>) -> Result<(), ApiError> {
    Ok(())
}

pub async fn get_health(State(_state): State<Arc<AppState>>) -> Json<Value> {
    Json(service::get_health_state())
}
