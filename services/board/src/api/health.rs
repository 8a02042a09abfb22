//! 健康检查端点

use axum::{Json, extract::State, http::StatusCode};
use dadamda_adapter_postgres::check_connection;
use dadamda_telemetry::HealthStatus;
use serde_json::{Value, json};

use super::state::AppState;

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "UP" }))
}

/// `GET /ready`
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    let mut status = HealthStatus::new();

    if let Some(pool) = &state.db {
        match check_connection(pool).await {
            Ok(()) => status.add_check("database", true, None),
            Err(e) => status.add_check("database", false, Some(e.to_string())),
        }
    }

    let code = if status.healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status))
}
