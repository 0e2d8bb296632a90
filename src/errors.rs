use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up")]
    AlreadySignedUp,

    #[error("Activity is full")]
    ActivityFull,

    #[error("Student is not registered for this activity")]
    NotRegistered,

    #[error("Invalid email address")]
    InvalidEmail(#[from] ValidationErrors),

    #[error("{0}")]
    InvalidQuery(#[from] QueryRejection),

    #[error("{0}")]
    InvalidPath(#[from] PathRejection),

    #[error("Not Found")]
    RouteNotFound,
}

impl AppError {
    pub fn get_status_code_and_message(&self) -> (StatusCode, String) {
        let status = match self {
            Self::ActivityNotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::AlreadySignedUp | Self::ActivityFull | Self::NotRegistered => {
                StatusCode::BAD_REQUEST
            }
            Self::InvalidEmail(_) | Self::InvalidQuery(_) | Self::InvalidPath(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        };
        (status, self.to_string())
    }
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub detail: String,
}

impl ErrorMessage {
    pub fn new(detail: String) -> Self {
        Self { detail }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.get_status_code_and_message();
        (status, Json(ErrorMessage::new(message))).into_response()
    }
}
