use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use super::extract::ExtractError;
use super::types::ErrorBody;
use crate::llm::LlmError;

pub const LOCATION_REQUIRED: &str = "location information is required";
pub const RECOMMEND_FAILED: &str = "failed to recommend places";

#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    ExternalApi(#[from] LlmError),
    #[error("{0}")]
    Parse(String),
    #[error("{0}")]
    Shape(String),
}

impl From<ExtractError> for RecommendError {
    fn from(err: ExtractError) -> Self {
        RecommendError::Parse(err.to_string())
    }
}

impl RecommendError {
    pub fn status(&self) -> StatusCode {
        match self {
            RecommendError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ErrorBody {
        match self {
            RecommendError::Validation(msg) => ErrorBody {
                error: msg.clone(),
                details: None,
            },
            other => ErrorBody {
                error: RECOMMEND_FAILED.to_string(),
                details: Some(other.to_string()),
            },
        }
    }
}

impl IntoResponse for RecommendError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            RecommendError::Validation(msg) => warn!(reason = %msg, "Rejected recommend request"),
            RecommendError::ExternalApi(e) => error!(error = %e, "Text generation failed"),
            RecommendError::Parse(e) => error!(error = %e, "Could not parse model output"),
            RecommendError::Shape(e) => error!(error = %e, "Model output does not match place schema"),
        }
        (status, Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_is_400_without_details() {
        let err = RecommendError::Validation(LOCATION_REQUIRED.to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.body(),
            ErrorBody {
                error: LOCATION_REQUIRED.to_string(),
                details: None
            }
        );
    }

    #[test]
    fn test_upstream_message_becomes_details() {
        let err = RecommendError::from(LlmError::RequestFailed("quota exceeded".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = err.body();
        assert_eq!(body.error, RECOMMEND_FAILED);
        assert_eq!(body.details.as_deref(), Some("quota exceeded"));
    }

    #[test]
    fn test_extract_error_maps_to_parse() {
        let err = RecommendError::from(ExtractError::NoObject);
        assert!(matches!(err, RecommendError::Parse(_)));
        assert_eq!(err.body().details.as_deref(), Some("could not parse JSON format"));
    }
}
