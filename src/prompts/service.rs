use std::collections::HashMap;

use crate::app::{enums::compose_mode::ComposeMode, models::api_error::ApiError};

use super::{
    dtos::build_prompt_dto::BuildPromptDto, errors::PromptApiError,
    structs::build_prompt_response::BuildPromptResponse, NEGATIVE_DEFAULT,
};

lazy_static! {
    static ref STYLE_PACK: HashMap<&'static str, &'static str> = HashMap::from([
        ("cinematic", "cinematic look"),
        ("photorealistic", "photorealistic look"),
        ("anime", "anime style"),
    ]);
    static ref MOOD_PACK: HashMap<&'static str, &'static str> = HashMap::from([
        ("dramatic", "a dramatic mood"),
        ("serene", "a serene mood"),
        ("mysterious", "a mysterious mood"),
    ]);
    static ref LIGHTING_PACK: HashMap<&'static str, &'static str> = HashMap::from([
        ("volumetric", "volumetric lighting"),
        ("golden hour", "golden-hour lighting"),
    ]);
    static ref COMPOSITION_PACK: HashMap<&'static str, &'static str> = HashMap::from([
        ("wide angle", "a wide-angle composition"),
        ("rule of thirds", "a rule-of-thirds composition"),
    ]);
}

pub fn build_prompt(dto: &BuildPromptDto) -> Result<BuildPromptResponse, ApiError> {
    if dto.subject.trim().is_empty() {
        return Err(PromptApiError::SubjectRequired.value());
    }

    Ok(BuildPromptResponse {
        prompt: compose_sentence(dto),
        source: ComposeMode::Deterministic.value(),
        echo: dto.clone(),
    })
}

// short known values expand to stock phrasing, everything else passes through
fn expand_pack(value: &str, pack: &HashMap<&'static str, &'static str>) -> String {
    if value.trim().is_empty() {
        return String::new();
    }

    let mut expanded: Vec<String> = Vec::new();

    for part in value.split(',') {
        let part = part.trim();

        if part.is_empty() {
            continue;
        }

        match pack.get(part.to_lowercase().as_str()) {
            Some(known) => expanded.push(known.to_string()),
            None => expanded.push(part.to_string()),
        }
    }

    expanded.join(" and ")
}

fn compose_sentence(dto: &BuildPromptDto) -> String {
    let subject = dto.subject.trim();
    let style = expand_pack(&dto.style, &STYLE_PACK);
    let mood = expand_pack(&dto.mood, &MOOD_PACK);
    let setting = dto.setting.trim();
    let composition = expand_pack(&dto.composition, &COMPOSITION_PACK);
    let lighting = expand_pack(&dto.lighting, &LIGHTING_PACK);
    let color_palette = dto.color_palette.trim();
    let detail_level = dto.detail_level.trim();
    let texture = dto.texture.trim();
    let era = dto.era.trim();
    let artist_reference = dto.artist_reference.trim();
    let special_instructions = dto.special_instructions.trim();
    let negatives = match dto.negatives.trim() {
        "" => NEGATIVE_DEFAULT,
        trimmed => trimmed,
    };

    let mut parts = vec![["A ", subject].concat()];

    if !setting.is_empty() {
        parts.push(["set in ", setting].concat());
    }

    if !style.is_empty() {
        parts.push(["with ", style.as_str()].concat());
    }

    if !mood.is_empty() {
        parts.push(["having ", mood.as_str()].concat());
    }

    if !composition.is_empty() {
        parts.push(["shot with ", composition.as_str()].concat());
    }

    if !lighting.is_empty() {
        parts.push(["under ", lighting.as_str()].concat());
    }

    if !color_palette.is_empty() {
        parts.push(["using a ", color_palette, " color palette"].concat());
    }

    if !detail_level.is_empty() {
        parts.push(["at ", detail_level, " detail"].concat());
    }

    if !texture.is_empty() {
        parts.push(["featuring ", texture].concat());
    }

    if !era.is_empty() {
        parts.push(["in a ", era, " style"].concat());
    }

    if !artist_reference.is_empty() {
        parts.push(["in the style of ", artist_reference].concat());
    }

    if !special_instructions.is_empty() {
        parts.push(["and ", special_instructions].concat());
    }

    let sentence = [parts.join(" ").as_str(), ". Negative: ", negatives, "."].concat();

    sentence.split_whitespace().collect::<Vec<&str>>().join(" ")
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use super::*;

    fn dto(body: serde_json::Value) -> BuildPromptDto {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn composes_subject_only_sentence() {
        let response = build_prompt(&dto(json!({ "subject": "cat" }))).unwrap();

        assert_eq!(
            response.prompt,
            [
                "A cat. Negative: low-res, blurry, overexposed, underexposed, ",
                "watermark, logo, extra limbs, distorted anatomy."
            ]
            .concat()
        );
        assert_eq!(response.source, "deterministic");
        assert_eq!(response.echo.subject, "cat");
    }

    #[test]
    fn expands_known_pack_values() {
        let response = build_prompt(&dto(json!({
            "subject": "Mountain at dusk",
            "style": "Cinematic",
            "mood": "Serene",
            "composition": "rule of thirds",
            "lighting": "golden hour",
        })))
        .unwrap();

        assert!(response.prompt.starts_with(
            [
                "A Mountain at dusk with cinematic look having a serene mood ",
                "shot with a rule-of-thirds composition under golden-hour lighting."
            ]
            .concat()
            .as_str()
        ));
    }

    #[test]
    fn expands_comma_separated_pack_values() {
        let response = build_prompt(&dto(json!({
            "subject": "cat",
            "style": "cinematic, anime",
        })))
        .unwrap();

        assert!(response
            .prompt
            .starts_with("A cat with cinematic look and anime style."));
    }

    #[test]
    fn passes_unknown_values_through_and_keeps_custom_negatives() {
        let response = build_prompt(&dto(json!({
            "subject": "cat",
            "style": "Baroque",
            "negatives": "text, frames",
        })))
        .unwrap();

        assert_eq!(response.prompt, "A cat with Baroque. Negative: text, frames.");
    }

    #[test]
    fn composes_every_layer_in_order() {
        let response = build_prompt(&dto(json!({
            "subject": "ancient temple",
            "setting": "a misty forest",
            "style": "photorealistic",
            "mood": "mysterious",
            "composition": "wide angle",
            "lighting": "volumetric",
            "color_palette": "teal and orange",
            "detail_level": "high",
            "texture": "wet stone",
            "era": "baroque",
            "artist_reference": "Greg Rutkowski",
            "special_instructions": "include fireflies",
        })))
        .unwrap();

        assert!(response.prompt.starts_with(
            [
                "A ancient temple set in a misty forest with photorealistic look ",
                "having a mysterious mood shot with a wide-angle composition ",
                "under volumetric lighting using a teal and orange color palette ",
                "at high detail featuring wet stone in a baroque style ",
                "in the style of Greg Rutkowski and include fireflies."
            ]
            .concat()
            .as_str()
        ));
    }

    #[test]
    fn collapses_repeated_whitespace() {
        let response = build_prompt(&dto(json!({ "subject": "a   spaced    subject" }))).unwrap();

        assert!(response.prompt.starts_with("A a spaced subject."));
    }

    #[test]
    fn rejects_blank_subject() {
        let e = build_prompt(&dto(json!({ "subject": "   " }))).unwrap_err();

        assert_eq!(e.code, StatusCode::BAD_REQUEST);
        assert_eq!(e.message, "subject is required.");
    }

    #[test]
    fn applies_passthrough_defaults() {
        let parsed = dto(json!({ "subject": "cat" }));

        assert_eq!(parsed.aspect_ratio, "1:1");
        assert_eq!(parsed.platform, "generic");
        assert_eq!(parsed.steps, "28");
        assert_eq!(parsed.cfg, "7.0");
    }
}
