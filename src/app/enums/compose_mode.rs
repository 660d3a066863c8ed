#[derive(Clone)]
pub enum ComposeMode {
    Deterministic,
}

impl ComposeMode {
    pub fn value(&self) -> String {
        match *self {
            Self::Deterministic => "deterministic".to_string(),
        }
    }
}
