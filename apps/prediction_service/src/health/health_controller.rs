use astro_prediction::HealthResponse;
use axum::Json;
use chrono::{SecondsFormat, Utc};

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
