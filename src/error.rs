//! Error types for the student service
//!
//! Provides unified error handling using thiserror. The cache never produces
//! one of these; every variant originates in the store or in request checks.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Student Error Enum ==
#[derive(Error, Debug)]
pub enum StudentError {
    /// No record with this id
    #[error("Student {0} not found")]
    NotFound(i64),

    /// Create with an id that is already taken
    #[error("Student with id {0} already exists")]
    DuplicateIdentifier(i64),

    /// The persistent store could not be reached or failed the query
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl StudentError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            StudentError::NotFound(_) => StatusCode::NOT_FOUND,
            StudentError::DuplicateIdentifier(_) => StatusCode::CONFLICT,
            StudentError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            StudentError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<sqlx::Error> for StudentError {
    fn from(err: sqlx::Error) -> Self {
        StudentError::StoreUnavailable(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for StudentError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::new(self.to_string()));
        (status, body).into_response()
    }
}

// == Result Type Alias ==
pub type Result<T> = std::result::Result<T, StudentError>;
