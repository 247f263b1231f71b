pub mod users;

use axum::Json;
use serde_json::{Value, json};

use crate::infra::errors::AppError;

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn not_found() -> AppError {
    AppError::not_found("no such route")
}
