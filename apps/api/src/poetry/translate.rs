//! Seed-word translation — keeps the poem monolingual by translating the user's
//! words into the target language before prompting.
//!
//! Best effort only: any model failure or a reply with the wrong number of
//! words falls back to the original words.

use tracing::{debug, warn};

use crate::llm_client::prompts::fill_template;
use crate::llm_client::{GenerateOptions, Oracle};
use crate::poetry::prompts::TRANSLATION_PROMPT_TEMPLATE;
use crate::poetry::types::Language;
use crate::poetry::validation::clean_word;

const TRANSLATION_TEMPERATURE: f64 = 0.3;
const TRANSLATION_TOP_P: f64 = 0.8;
const TRANSLATION_TOKEN_BUDGET: u32 = 80;

/// Language name as spelled in the translation prompt. `None` means no translation.
pub fn translation_target(language: &Language) -> Option<&'static str> {
    match language {
        Language::German => Some("German"),
        Language::Hindi => Some("Hindi (use Devanagari script only)"),
        Language::Russian => Some("Russian (use Cyrillic script only)"),
        Language::Chinese => Some("Chinese (use simplified Chinese characters only)"),
        Language::English | Language::Other(_) => None,
    }
}

pub fn build_translation_prompt(words: &[String], target_language: &str) -> String {
    let words_str = words.join(", ");
    fill_template(
        TRANSLATION_PROMPT_TEMPLATE,
        &[
            ("target_language", target_language),
            ("words", words_str.as_str()),
        ],
    )
}

/// Splits a comma-separated model reply. Accepts ASCII, full-width and ideographic commas.
pub fn parse_translated_words(reply: &str) -> Vec<String> {
    reply
        .split([',', '，', '、'])
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

pub async fn translate_words_if_needed(
    oracle: &dyn Oracle,
    model: &str,
    words: Vec<String>,
    language: &Language,
) -> Vec<String> {
    if words.is_empty() {
        return words;
    }
    let Some(target) = translation_target(language) else {
        return words;
    };

    let prompt = build_translation_prompt(&words, target);
    let options = GenerateOptions::new(TRANSLATION_TEMPERATURE, TRANSLATION_TOP_P)
        .with_token_budget(TRANSLATION_TOKEN_BUDGET);

    let reply = match oracle.generate(model, &prompt, &options).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!("Seed-word translation failed, keeping original words: {e}");
            return words;
        }
    };

    let translated: Vec<String> = parse_translated_words(&reply)
        .iter()
        .map(|w| clean_word(w))
        .filter(|w| !w.is_empty())
        .collect();

    if translated.len() != words.len() {
        warn!(
            "Translation returned {} words for {} inputs, keeping originals",
            translated.len(),
            words.len()
        );
        return words;
    }

    debug!("Translated seed words {:?} -> {:?}", words, translated);
    translated
}
