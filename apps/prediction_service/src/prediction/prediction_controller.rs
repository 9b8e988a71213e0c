use astro_prediction::{ErrorResponse, PredictRequestBody, PredictResponse};
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};

use super::prediction_service::PredictionError;
use crate::app_module::AppState;

pub async fn predict(
    Extension(ctx): Extension<AppState>,
    payload: Result<Json<PredictRequestBody>, JsonRejection>,
) -> Response {
    // A body sent without a JSON content type carries no fields and fails validation.
    let body = match payload {
        Ok(Json(body)) => body,
        Err(JsonRejection::MissingJsonContentType(_)) => PredictRequestBody::default(),
        Err(rejection) => {
            tracing::warn!("Rejected prediction body: {}", rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(rejection.body_text())),
            )
                .into_response();
        }
    };

    match ctx.service.prediction_service.predict(body).await {
        Ok(prediction) => (StatusCode::OK, Json(PredictResponse::from(prediction))).into_response(),
        Err(PredictionError::Validation(e)) => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(e.to_string()))).into_response()
        }
        Err(PredictionError::Upstream(e)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to get prediction".to_string(),
                message: Some("Please check your connection and try again".to_string()),
                details: Some(e.to_string()),
            }),
        )
            .into_response(),
    }
}
