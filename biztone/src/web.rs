use std::{path::Path, sync::Arc};

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tone::{Conversion, ConversionRequest, ConvertError, ToneConverter};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};

/// Name reported by the health check.
pub const SERVICE_NAME: &str = "BizTone Converter API";

/// State shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub converter: Arc<ToneConverter>,
}

impl AppState {
    pub fn new(converter: ToneConverter) -> Self {
        Self {
            converter: Arc::new(converter),
        }
    }
}

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub service: &'static str,
}

/// A failed request, rendered as `{"error": "..."}` with a matching status.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<ConvertError> for ApiError {
    fn from(err: ConvertError) -> Self {
        let status = match err {
            ConvertError::InvalidRequest => StatusCode::BAD_REQUEST,
            ConvertError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ConvertError::ServiceError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            format!("Invalid request body: {}", rejection.body_text()),
        )
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_client_error() {
            warn!(status = %self.status, error = %self.message, "rejected request");
        }
        let body = Json(ErrorBody {
            error: &self.message,
        });
        (self.status, body).into_response()
    }
}

pub async fn health() -> Json<Health> {
    Json(Health {
        status: "healthy",
        service: SERVICE_NAME,
    })
}

/// `POST /api/convert`: rewrite `text` for `target_persona`.
pub async fn convert(
    State(state): State<AppState>,
    payload: Result<Json<ConversionRequest>, JsonRejection>,
) -> Result<Json<Conversion>, ApiError> {
    let Json(request) = payload?;
    let conversion = state.converter.convert(request).await?;
    info!(chars = conversion.converted_text.len(), "conversion complete");
    Ok(Json(conversion))
}

/// Build the application router: the API plus static files from `static_dir`.
pub fn app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/convert", post(convert))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
