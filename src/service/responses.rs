use axum::{extract::FromRequestParts, response::Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub type AppResult<T> = std::result::Result<Json<T>, AppError>;

/// Query string extractor whose failures render as `{"detail": ...}`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: String) -> Self {
        Self { message }
    }

    pub fn response(message: String) -> AppResult<Self> {
        Ok(Json(Self::new(message)))
    }
}
