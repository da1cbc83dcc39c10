use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Failed to read request body: {0}")]
    RequestBody(String),

    #[error("Invalid upstream response: {0}")]
    UpstreamResponse(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ProxyError::Upstream(ref e) => {
                tracing::error!("Upstream request failed: {:?}", e);
                (StatusCode::BAD_GATEWAY, "Backend unreachable")
            }
            ProxyError::UpstreamResponse(ref msg) => {
                tracing::error!("Invalid upstream response: {}", msg);
                (StatusCode::BAD_GATEWAY, "Invalid backend response")
            }
            ProxyError::RequestBody(ref msg) => {
                tracing::warn!("Failed to read request body: {}", msg);
                (StatusCode::BAD_REQUEST, "Invalid request body")
            }
            ProxyError::Config(ref msg) => {
                tracing::error!("Configuration error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ProxyError>;
