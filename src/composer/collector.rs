use super::{enums::prompt_field::PromptField, models::field_set::FieldSet};

// the UI writes fields one at a time; builds read a value snapshot,
// so in-flight edits never show up in a build already under way
#[derive(Debug, Default)]
pub struct FieldCollector {
    fields: FieldSet,
}

impl FieldCollector {
    pub fn new() -> Self {
        return Self {
            fields: FieldSet::default(),
        };
    }

    pub fn set_field(&mut self, field: PromptField, value: &str) {
        match field {
            PromptField::Subject => self.fields.subject = value.to_string(),
            PromptField::Style => self.fields.style = value.to_string(),
            PromptField::Mood => self.fields.mood = value.to_string(),
            PromptField::Lighting => self.fields.lighting = value.to_string(),
            PromptField::Composition => self.fields.composition = value.to_string(),
            PromptField::DetailLevel => self.fields.detail_level = value.to_string(),
            PromptField::ArtistReference => self.fields.artist_reference = value.to_string(),
        }
    }

    pub fn snapshot(&self) -> FieldSet {
        return self.fields.clone();
    }
}
