#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptField {
    Subject,
    Style,
    Mood,
    Lighting,
    Composition,
    DetailLevel,
    ArtistReference,
}
