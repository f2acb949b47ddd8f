use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use campaigns_core::CampaignError;

/// Boundary error: the only place failure kinds become HTTP statuses.
#[derive(Debug)]
pub enum ApiError {
    Campaign(CampaignError),
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Campaign(e) => match e {
                CampaignError::MissingRequiredFields { .. } => {
                    (StatusCode::BAD_REQUEST, "Missing required keys")
                }
                CampaignError::InvalidBody { .. } => (StatusCode::BAD_REQUEST, "Invalid request body"),
                CampaignError::NotFound => (StatusCode::NOT_FOUND, "Campaign Not Found"),
                CampaignError::InvalidQueryParameter { .. } => {
                    (StatusCode::FORBIDDEN, "Invalid query parameter")
                }
                CampaignError::ClassificationUnavailable { .. } => {
                    (StatusCode::NOT_IMPLEMENTED, "Couldn't extract dummy category")
                }
            },
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        }
    }
}

impl From<CampaignError> for ApiError {
    fn from(err: CampaignError) -> Self {
        ApiError::Campaign(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        let detail = match &self {
            ApiError::Campaign(e) => e.to_string(),
            ApiError::Internal(e) => format!("{e:#}"),
        };
        tracing::warn!(status = status.as_u16(), %detail, "request failed");
        (
            status,
            Json(serde_json::json!({ "error": message, "detail": detail })),
        )
            .into_response()
    }
}
