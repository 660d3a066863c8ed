use reqwest::Response;

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

use super::{
    enums::prompt_source::PromptSource,
    errors::BuildPromptError,
    models::{built_prompt::BuiltPrompt, field_set::FieldSet},
    structs::compose_prompt_response::ComposePromptResponse,
};

// one attempt against the compose service, then the local rule; the
// fallback is a degraded mode, not an error, so nothing propagates
pub async fn build_prompt(
    field_set: &FieldSet,
    base_url: &str,
) -> Result<BuiltPrompt, BuildPromptError> {
    if !field_set.has_subject() {
        return Err(BuildPromptError::EmptySubject);
    }

    match compose_prompt_remote(field_set, base_url).await {
        Ok(prompt) => Ok(BuiltPrompt {
            prompt,
            source: PromptSource::Remote,
        }),
        Err(_) => Ok(BuiltPrompt {
            prompt: compose_prompt_local(field_set),
            source: PromptSource::Local,
        }),
    }
}

async fn compose_prompt_remote(field_set: &FieldSet, base_url: &str) -> Result<String, ApiError> {
    let client = reqwest::Client::new();
    let url = format!("{}/api/prompt/build", base_url);
    let result = client.post(url).json(field_set).send().await;

    match result {
        Ok(res) => {
            if !res.status().is_success() {
                tracing::warn!("compose service responded with {}", res.status());
                return Err(DefaultApiError::InternalServerError.value());
            }

            match parse_response_to_compose_prompt_response(res).await {
                Ok(compose_prompt_response) => Ok(compose_prompt_response.prompt),
                Err(e) => Err(e),
            }
        }
        Err(e) => {
            tracing::warn!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

// subject, style and mood only, raw values, empty segments kept
fn compose_prompt_local(field_set: &FieldSet) -> String {
    return [
        field_set.subject.as_str(),
        ", ",
        field_set.style.as_str(),
        ", ",
        field_set.mood.as_str(),
        ".",
    ]
    .concat();
}

async fn parse_response_to_compose_prompt_response(
    res: Response,
) -> Result<ComposePromptResponse, ApiError> {
    match res.text().await {
        Ok(text) => match serde_json::from_str(&text) {
            Ok(compose_prompt_response) => Ok(compose_prompt_response),
            Err(_) => {
                tracing::warn!(%text);
                Err(DefaultApiError::InternalServerError.value())
            }
        },
        Err(e) => {
            tracing::warn!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}
