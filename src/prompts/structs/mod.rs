pub mod build_prompt_response;
