use super::{
    collector::FieldCollector, config, enums::prompt_field::PromptField, errors::BuildPromptError,
    models::built_prompt::BuiltPrompt, service,
};

// what the UI talks to: field edits in, one prompt string out
pub struct PromptSession {
    collector: FieldCollector,
    base_url: String,
    generated_prompt: Option<String>,
}

impl PromptSession {
    pub fn new() -> Self {
        return Self::with_base_url(config::API_URL);
    }

    pub fn with_base_url(base_url: &str) -> Self {
        return Self {
            collector: FieldCollector::new(),
            base_url: base_url.to_string(),
            generated_prompt: None,
        };
    }

    pub fn on_field_change(&mut self, field: PromptField, value: &str) {
        self.collector.set_field(field, value);
    }

    pub async fn on_build_requested(&mut self) -> Result<BuiltPrompt, BuildPromptError> {
        let snapshot = self.collector.snapshot();

        match service::build_prompt(&snapshot, &self.base_url).await {
            Ok(built) => {
                self.generated_prompt = Some(built.prompt.to_string());
                Ok(built)
            }
            Err(e) => Err(e),
        }
    }

    // clipboard handoff for the caller, nothing composed here
    pub fn current_prompt(&self) -> Option<&str> {
        return self.generated_prompt.as_deref();
    }
}

#[cfg(test)]
mod tests {
    use std::{net::SocketAddr, sync::Arc};

    use axum::{routing::post, Router};

    use crate::{app::env::Envy, composer::enums::prompt_source::PromptSource, prompts, AppState};

    use super::*;

    async fn spawn_compose_service() -> String {
        let state = Arc::new(AppState {
            envy: Arc::new(Envy {
                app_env: "test".to_string(),
                port: None,
            }),
        });
        let app = Router::new()
            .route("/api/prompt/build", post(prompts::controller::build_prompt))
            .with_state(state);

        let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
            .serve(app.into_make_service());
        let addr = server.local_addr();

        tokio::spawn(server);

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn builds_from_the_current_fields_and_stores_the_result() {
        let base_url = spawn_compose_service().await;
        let mut session = PromptSession::with_base_url(&base_url);

        assert_eq!(session.current_prompt(), None);

        session.on_field_change(PromptField::Subject, "cat");
        let built = session.on_build_requested().await.unwrap();

        assert_eq!(built.source, PromptSource::Remote);
        assert_eq!(session.current_prompt(), Some(built.prompt.as_str()));
    }

    #[tokio::test]
    async fn overwrites_the_stored_prompt_on_each_build() {
        let base_url = spawn_compose_service().await;
        let mut session = PromptSession::with_base_url(&base_url);

        session.on_field_change(PromptField::Subject, "cat");
        let first = session.on_build_requested().await.unwrap();

        session.on_field_change(PromptField::Subject, "dog");
        let second = session.on_build_requested().await.unwrap();

        assert_ne!(first.prompt, second.prompt);
        assert_eq!(session.current_prompt(), Some(second.prompt.as_str()));
    }

    #[tokio::test]
    async fn a_rejected_build_leaves_the_stored_prompt_alone() {
        let base_url = spawn_compose_service().await;
        let mut session = PromptSession::with_base_url(&base_url);

        let result = session.on_build_requested().await;

        assert_eq!(result.unwrap_err(), BuildPromptError::EmptySubject);
        assert_eq!(session.current_prompt(), None);
    }
}
