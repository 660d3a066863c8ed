pub mod prompt_field;
pub mod prompt_source;
