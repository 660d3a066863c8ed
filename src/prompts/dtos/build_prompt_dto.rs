use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BuildPromptDto {
    #[validate(length(
        min = 1,
        max = 1000,
        message = "subject must be between 1 and 1000 characters."
    ))]
    pub subject: String,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub setting: String,
    #[serde(default)]
    pub composition: String,
    #[serde(default)]
    pub color_palette: String,
    #[serde(default)]
    pub lighting: String,
    // accepted for forward compatibility, not composed yet
    #[serde(default)]
    pub camera: String,
    #[serde(default)]
    pub detail_level: String,
    #[serde(default)]
    pub texture: String,
    #[serde(default)]
    pub era: String,
    #[serde(default)]
    pub artist_reference: String,
    #[serde(default)]
    pub special_instructions: String,
    #[serde(default)]
    pub negatives: String,
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: String,
    #[serde(default = "default_platform")]
    pub platform: String,
    #[serde(default)]
    pub seed: String,
    #[serde(default)]
    pub stylize: String,
    #[serde(default)]
    pub quality: String,
    #[serde(default = "default_steps")]
    pub steps: String,
    #[serde(default = "default_cfg")]
    pub cfg: String,
}

fn default_aspect_ratio() -> String {
    "1:1".to_string()
}

fn default_platform() -> String {
    "generic".to_string()
}

fn default_steps() -> String {
    "28".to_string()
}

fn default_cfg() -> String {
    "7.0".to_string()
}
