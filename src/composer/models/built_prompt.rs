use crate::composer::enums::prompt_source::PromptSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltPrompt {
    pub prompt: String,
    pub source: PromptSource,
}
