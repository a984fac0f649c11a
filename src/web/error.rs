use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::web::models::ErrorResponse;

pub const QUESTION_REQUIRED: &str = "Question required";

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("{}", QUESTION_REQUIRED)]
    BadRequest,

    /// Non-200 reply from the inference API, carrying its raw body.
    #[error("API error: {0}")]
    Upstream(String),

    #[error("{0}")]
    Internal(String),
}

impl From<reqwest::Error> for ChatError {
    fn from(e: reqwest::Error) -> Self {
        ChatError::Internal(e.to_string())
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(e: serde_json::Error) -> Self {
        ChatError::Internal(e.to_string())
    }
}

impl ResponseError for ChatError {
    fn status_code(&self) -> StatusCode {
        match self {
            ChatError::BadRequest => StatusCode::BAD_REQUEST,
            ChatError::Upstream(_) | ChatError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            success: false,
            error: self.to_string(),
        })
    }
}
