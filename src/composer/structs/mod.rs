pub mod compose_prompt_response;
