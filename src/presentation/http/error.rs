use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::access::AccessError;
use crate::application::use_cases::job_applications::list_applications::ListApplicationsError;
use crate::application::use_cases::job_applications::submit_application::SubmitApplicationError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("unauthorized access")]
    Unauthenticated,
    #[error("Forbidden access")]
    Forbidden,
    #[error("You have already added job")]
    DuplicateApplication,
    #[error("{0}")]
    InvalidArgument(String),
    #[error("internal server error")]
    Internal(#[source] anyhow::Error),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
}

impl ApiError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::DuplicateApplication | ApiError::InvalidArgument(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        ApiError::Internal(e)
    }
}

impl From<AccessError> for ApiError {
    fn from(e: AccessError) -> Self {
        match e {
            AccessError::Unauthenticated => ApiError::Unauthenticated,
            AccessError::Forbidden => ApiError::Forbidden,
        }
    }
}

impl From<SubmitApplicationError> for ApiError {
    fn from(e: SubmitApplicationError) -> Self {
        match e {
            SubmitApplicationError::Duplicate => ApiError::DuplicateApplication,
            SubmitApplicationError::Store(inner) => ApiError::Internal(inner),
        }
    }
}

impl From<ListApplicationsError> for ApiError {
    fn from(e: ListApplicationsError) -> Self {
        match e {
            ListApplicationsError::Access(inner) => inner.into(),
            ListApplicationsError::Store(inner) => ApiError::Internal(inner),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let ApiError::Internal(e) = &self {
            tracing::error!(error = ?e, "request_failed");
        }
        let body = ErrorBody {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
