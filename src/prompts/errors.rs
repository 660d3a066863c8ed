use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum PromptApiError {
    SubjectRequired,
}

impl PromptApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::SubjectRequired => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "subject is required.".to_string(),
            },
        }
    }
}
