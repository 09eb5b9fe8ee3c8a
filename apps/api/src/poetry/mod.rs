// Poem generation: prompt assembly, form enforcement, word validation.
// All model calls go through llm_client — no direct HTTP calls here.

pub mod form;
pub mod generator;
pub mod handlers;
pub mod prompt_builder;
pub mod prompts;
pub mod translate;
pub mod types;
pub mod validation;
