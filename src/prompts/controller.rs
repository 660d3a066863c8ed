use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::build_prompt_dto::BuildPromptDto, service,
    structs::build_prompt_response::BuildPromptResponse,
};

pub async fn build_prompt(
    State(_state): State<Arc<AppState>>,
    JsonFromRequest(dto): JsonFromRequest<BuildPromptDto>,
) -> Result<Json<BuildPromptResponse>, ApiError> {
    match dto.validate() {
        Ok(_) => match service::build_prompt(&dto) {
            Ok(response) => Ok(Json(response)),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}
