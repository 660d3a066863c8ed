use serde::Serialize;

use crate::prompts::dtos::build_prompt_dto::BuildPromptDto;

#[derive(Debug, Serialize)]
pub struct BuildPromptResponse {
    pub prompt: String,
    pub source: String,
    pub echo: BuildPromptDto,
}
