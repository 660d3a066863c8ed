use serde::Deserialize;

// only `prompt` is consumed, the service may attach whatever else it wants
#[derive(Debug, Deserialize)]
pub struct ComposePromptResponse {
    #[serde(rename(deserialize = "prompt"))]
    pub prompt: String,
}
