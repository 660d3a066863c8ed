use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildPromptError {
    EmptySubject,
}

impl BuildPromptError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::EmptySubject => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Please describe your scene first.".to_string(),
            },
        }
    }
}
