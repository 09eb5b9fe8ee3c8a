//! Poem Generation — orchestrates the interactive pipeline.
//!
//! Flow: clean words → translate (optional) → build prompt → model call →
//!       empty check → enforce form lines → word-presence check.
//!
//! `generate_once` is the shared core; the dataset builder calls it directly
//! with its own model, budgets and sampling parameters.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;
use crate::llm_client::{GenerateOptions, LlmError, Oracle};
use crate::poetry::form::enforce_form_lines;
use crate::poetry::prompt_builder::build_poem_prompt;
use crate::poetry::translate::translate_words_if_needed;
use crate::poetry::types::{Language, Mood, PoeticForm, TokenBudgets};
use crate::poetry::validation::{collect_seed_words, missing_words};

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

/// Everything that can stop a poem from being produced.
#[derive(Debug, Error)]
pub enum PoemError {
    #[error("no usable seed words")]
    NoWords,

    #[error(transparent)]
    Oracle(#[from] LlmError),

    #[error("model returned an empty response")]
    EmptyOutput,

    /// Word-presence validation failed beyond the caller's tolerance.
    #[error("too many missing words: {}", .0.join(", "))]
    MissingWords(Vec<String>),
}

impl PoemError {
    /// Plain-text message shown in place of a poem.
    pub fn user_message(&self) -> String {
        match self {
            PoemError::NoWords => "Please enter at least one non-empty word.".to_string(),
            PoemError::Oracle(LlmError::Connectivity(_)) => {
                "Could not connect to Ollama. Please make sure the Ollama app is running."
                    .to_string()
            }
            PoemError::Oracle(LlmError::Timeout(limit)) => format!(
                "The model did not respond within {} seconds. Try again or pick a shorter form.",
                limit.as_secs()
            ),
            PoemError::Oracle(e) => format!("Error talking to the model: {e}"),
            PoemError::EmptyOutput => "Model returned an empty response.".to_string(),
            PoemError::MissingWords(missing) => format!(
                "The model left out too many of your words: {}",
                missing.join(", ")
            ),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// One poem request as submitted by the front-end.
#[derive(Debug, Clone)]
pub struct PoemRequest {
    pub words: Vec<String>,
    pub language: Language,
    pub form: PoeticForm,
    pub mood: Mood,
    pub temperature: f64,
    pub top_p: f64,
}

/// Outcome of a single model call after post-processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub raw_text: String,
    pub trimmed_text: String,
    pub missing_words: Vec<String>,
}

impl GenerationResult {
    /// Poem text plus a trailing note listing any seed words the model skipped.
    pub fn annotated(&self) -> String {
        if self.missing_words.is_empty() {
            return self.trimmed_text.clone();
        }
        format!(
            "{}\n\n[Note: the model may have missed these word(s): {}]",
            self.trimmed_text,
            self.missing_words.join(", ")
        )
    }
}

/// Interactive pipeline settings, resolved once from `Config`.
#[derive(Debug, Clone)]
pub struct PoetSettings {
    pub poetry_model: String,
    pub translation_model: String,
    pub translate_words: bool,
    pub budgets: TokenBudgets,
}

impl PoetSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            poetry_model: config.poetry_model.clone(),
            translation_model: config.translation_model.clone(),
            translate_words: config.translate_words,
            budgets: TokenBudgets::interactive(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// One model round-trip plus post-processing for an already assembled prompt.
///
/// Fails on model errors and blank replies. Missing words are reported in the
/// result; whether they are fatal is the caller's decision.
pub async fn generate_once(
    oracle: &dyn Oracle,
    model: &str,
    prompt: &str,
    words: &[String],
    form: &PoeticForm,
    options: &GenerateOptions,
) -> Result<GenerationResult, PoemError> {
    let raw_text = oracle.generate(model, prompt, options).await?;
    let raw_text = raw_text.trim().to_string();
    if raw_text.is_empty() {
        return Err(PoemError::EmptyOutput);
    }

    let trimmed_text = enforce_form_lines(&raw_text, form);
    let missing = missing_words(&trimmed_text, words);

    Ok(GenerationResult {
        raw_text,
        trimmed_text,
        missing_words: missing,
    })
}

/// Runs the full interactive pipeline for one request.
pub async fn generate_poem(
    oracle: &dyn Oracle,
    settings: &PoetSettings,
    request: PoemRequest,
) -> Result<GenerationResult, PoemError> {
    let words = collect_seed_words(&request.words);
    if words.is_empty() {
        return Err(PoemError::NoWords);
    }

    let words = if settings.translate_words {
        translate_words_if_needed(oracle, &settings.translation_model, words, &request.language)
            .await
    } else {
        words
    };

    let prompt = build_poem_prompt(&words, &request.language, &request.form, &request.mood);
    let options = GenerateOptions::new(request.temperature, request.top_p)
        .with_token_budget(settings.budgets.for_form(&request.form));

    info!(
        "Generating {} | {} | {} with words [{}]",
        request.language,
        request.form,
        request.mood,
        words.join(", ")
    );

    let result = generate_once(
        oracle,
        &settings.poetry_model,
        &prompt,
        &words,
        &request.form,
        &options,
    )
    .await?;

    if !result.missing_words.is_empty() {
        warn!("Poem is missing seed words: {:?}", result.missing_words);
    }

    Ok(result)
}

/// Interactive entry point: never fails, every error becomes a user-facing message.
pub async fn render_poem(
    oracle: &dyn Oracle,
    settings: &PoetSettings,
    request: PoemRequest,
) -> (String, Vec<String>) {
    match generate_poem(oracle, settings, request).await {
        Ok(result) => {
            let text = result.annotated();
            (text, result.missing_words)
        }
        Err(e) => {
            warn!("Poem generation failed: {e}");
            (e.user_message(), Vec::new())
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
