//! Axum route handlers for the Poem API.

use std::ops::RangeInclusive;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::poetry::generator::{render_poem, PoemRequest};
use crate::poetry::types::{Language, Mood, PoeticForm};
use crate::poetry::validation::MAX_SEED_WORDS;
use crate::state::AppState;

pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 0.3..=1.1;
pub const TOP_P_RANGE: RangeInclusive<f64> = 0.7..=1.0;
pub const DEFAULT_TEMPERATURE: f64 = 0.9;
pub const DEFAULT_TOP_P: f64 = 0.95;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GeneratePoemBody {
    #[serde(default)]
    pub words: Vec<String>,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub form: PoeticForm,
    #[serde(default)]
    pub mood: Mood,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_top_p")]
    pub top_p: f64,
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

fn default_top_p() -> f64 {
    DEFAULT_TOP_P
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeneratePoemResponse {
    /// Poem text, or a plain-text explanation when generation failed.
    pub poem: String,
    pub missing_words: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PoemOptionsResponse {
    pub languages: Vec<Language>,
    pub forms: Vec<PoeticForm>,
    pub moods: Vec<Mood>,
    pub max_words: usize,
    pub temperature: SliderRange,
    pub top_p: SliderRange,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/poems/options
///
/// Dropdown choices and slider ranges for the front-end form.
pub async fn handle_poem_options() -> Json<PoemOptionsResponse> {
    Json(PoemOptionsResponse {
        languages: Language::ALL.to_vec(),
        forms: PoeticForm::ALL.to_vec(),
        moods: Mood::ALL.to_vec(),
        max_words: MAX_SEED_WORDS,
        temperature: SliderRange {
            min: *TEMPERATURE_RANGE.start(),
            max: *TEMPERATURE_RANGE.end(),
            default: DEFAULT_TEMPERATURE,
        },
        top_p: SliderRange {
            min: *TOP_P_RANGE.start(),
            max: *TOP_P_RANGE.end(),
            default: DEFAULT_TOP_P,
        },
    })
}

/// POST /api/v1/poems
///
/// Generates one poem. Model failures are not HTTP errors: they come back as a
/// 200 whose `poem` field explains what went wrong. Only malformed input is rejected.
pub async fn handle_generate_poem(
    State(state): State<AppState>,
    Json(body): Json<GeneratePoemBody>,
) -> Result<Json<GeneratePoemResponse>, AppError> {
    if body.words.len() > MAX_SEED_WORDS {
        return Err(AppError::Validation(format!(
            "at most {MAX_SEED_WORDS} words may be submitted"
        )));
    }
    check_slider("temperature", body.temperature, &TEMPERATURE_RANGE)?;
    check_slider("top_p", body.top_p, &TOP_P_RANGE)?;

    let request = PoemRequest {
        words: body.words,
        language: body.language,
        form: body.form,
        mood: body.mood,
        temperature: body.temperature,
        top_p: body.top_p,
    };

    let (poem, missing_words) =
        render_poem(state.oracle.as_ref(), &state.poet_settings, request).await;

    Ok(Json(GeneratePoemResponse {
        poem,
        missing_words,
    }))
}

fn check_slider(name: &str, value: f64, range: &RangeInclusive<f64>) -> Result<(), AppError> {
    if value.is_finite() && range.contains(&value) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "{name} must be between {} and {}",
            range.start(),
            range.end()
        )))
    }
}
