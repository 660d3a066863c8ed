use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldSet {
    pub subject: String,
    pub style: String,
    pub mood: String,
    pub lighting: String,
    pub composition: String,
    pub detail_level: String,
    pub artist_reference: String,
}

impl FieldSet {
    pub fn has_subject(&self) -> bool {
        return !self.subject.trim().is_empty();
    }
}
