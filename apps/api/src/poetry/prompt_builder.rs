//! Prompt assembly — renders (words, language, form, mood) into the poem instruction.
//!
//! Pure and deterministic: identical inputs always give byte-identical prompts.
//! Sampling parameters never reach the prompt text.

use crate::llm_client::prompts::{fill_template, NO_EXPLANATION_INSTRUCTION};
use crate::poetry::prompts::*;
use crate::poetry::types::{Language, Mood, PoeticForm};

pub fn form_instruction(form: &PoeticForm) -> &'static str {
    match form {
        PoeticForm::Haiku => HAIKU_INSTRUCTION,
        PoeticForm::Quatrain => QUATRAIN_INSTRUCTION,
        PoeticForm::Couplets => COUPLETS_INSTRUCTION,
        PoeticForm::Sonnet => SONNET_INSTRUCTION,
        PoeticForm::FreeForm => FREE_FORM_INSTRUCTION,
        PoeticForm::Other(_) => GENERIC_FORM_INSTRUCTION,
    }
}

/// Script/purity instruction. Unrecognized languages get the English default.
pub fn language_instruction(language: &Language) -> &'static str {
    match language {
        Language::Hindi => HINDI_INSTRUCTION,
        Language::German => GERMAN_INSTRUCTION,
        Language::Russian => RUSSIAN_INSTRUCTION,
        Language::Chinese => CHINESE_INSTRUCTION,
        Language::English | Language::Other(_) => ENGLISH_INSTRUCTION,
    }
}

pub fn mood_phrase(mood: &Mood) -> String {
    match mood {
        Mood::Nature => NATURE_MOOD_PHRASE.to_string(),
        other => other.label().to_lowercase(),
    }
}

/// Builds the full poem prompt for already-cleaned seed words.
pub fn build_poem_prompt<S: AsRef<str>>(
    words: &[S],
    language: &Language,
    form: &PoeticForm,
    mood: &Mood,
) -> String {
    let words_str = words
        .iter()
        .map(|w| w.as_ref())
        .collect::<Vec<_>>()
        .join(", ");
    let mood_phrase = mood_phrase(mood);

    fill_template(
        POEM_PROMPT_TEMPLATE,
        &[
            ("language", language.label()),
            ("form", form.label()),
            ("mood", mood.label()),
            ("words", words_str.as_str()),
            ("form_instruction", form_instruction(form)),
            ("mood_phrase", mood_phrase.as_str()),
            ("language_instruction", language_instruction(language)),
            ("closing_instruction", NO_EXPLANATION_INSTRUCTION),
        ],
    )
    .trim()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn haiku_prompt() -> String {
        build_poem_prompt(
            &["dawn", "river", "flame"],
            &Language::English,
            &PoeticForm::Haiku,
            &Mood::Romantic,
        )
    }

    #[test]
    fn test_english_haiku_prompt_contains_structured_fields() {
        let prompt = haiku_prompt();
        assert!(prompt.contains("Language: English"));
        assert!(prompt.contains("Poetic form: Haiku-like (3 lines)"));
        assert!(prompt.contains("Mood: Romantic"));
        assert!(prompt.contains("Words: dawn, river, flame"));
        assert!(prompt.contains(
            "The poem MUST have exactly 3 short lines, like a haiku. Focus on imagery and simplicity."
        ));
        assert!(prompt.contains("The tone should clearly feel romantic."));
        assert!(prompt.contains("Write only in English; do NOT mix other languages."));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(haiku_prompt(), haiku_prompt());
    }

    #[test]
    fn test_prompt_starts_with_role_and_ends_with_directive() {
        let prompt = haiku_prompt();
        assert!(prompt.starts_with("You are a skilled poet.\n\nLanguage: English"));
        assert!(prompt.ends_with("- Do NOT explain anything, only output the poem text."));
    }

    #[test]
    fn test_full_haiku_prompt_layout() {
        let expected = "You are a skilled poet.

Language: English
Poetic form: Haiku-like (3 lines)
Mood: Romantic
Words: dawn, river, flame

Task:
Write a poem in the specified language that follows the given poetic form and mood.
- The poem MUST have exactly 3 short lines, like a haiku. Focus on imagery and simplicity.
- The poem must naturally use ALL of the given words.
- The tone should clearly feel romantic.
- Write only in English; do NOT mix other languages.
- Do NOT explain anything, only output the poem text.";
        assert_eq!(haiku_prompt(), expected);
    }

    #[test]
    fn test_nature_mood_uses_descriptive_phrase() {
        let prompt = build_poem_prompt(
            &["Regen"],
            &Language::German,
            &PoeticForm::Quatrain,
            &Mood::Nature,
        );
        assert!(prompt.contains("Mood: Nature"));
        assert!(prompt.contains(
            "feel nature-inspired, focusing on landscapes, seasons, and the natural world."
        ));
        assert!(prompt.contains("Write only in German; do NOT mix other languages."));
    }

    #[test]
    fn test_script_instructions_for_non_latin_languages() {
        let hindi = build_poem_prompt(&["नदी"], &Language::Hindi, &PoeticForm::Sonnet, &Mood::Melancholic);
        assert!(hindi.contains("Devanagari script only"));
        assert!(hindi.contains("feel melancholic."));

        let russian = build_poem_prompt(&["река"], &Language::Russian, &PoeticForm::Haiku, &Mood::Romantic);
        assert!(russian.contains("Language: Русский (Russian)"));
        assert!(russian.contains("Cyrillic script"));

        let chinese = build_poem_prompt(&["河流"], &Language::Chinese, &PoeticForm::FreeForm, &Mood::Romantic);
        assert!(chinese.contains("do NOT use pinyin or Latin letters"));
    }

    #[test]
    fn test_unknown_form_and_language_fall_back() {
        let prompt = build_poem_prompt(
            &["stone"],
            &Language::Other("Elvish".into()),
            &PoeticForm::Other("Villanelle".into()),
            &Mood::Other("Playful".into()),
        );
        assert!(prompt.contains("Poetic form: Villanelle"));
        assert!(prompt.contains("- Write a short poem.\n"));
        assert!(prompt.contains("Language: Elvish"));
        assert!(prompt.contains("Write only in English; do NOT mix other languages."));
        assert!(prompt.contains("feel playful."));
    }

    #[test]
    fn test_braces_in_words_are_not_expanded() {
        let prompt = build_poem_prompt(
            &["{mood}"],
            &Language::English,
            &PoeticForm::Haiku,
            &Mood::Romantic,
        );
        assert!(prompt.contains("Words: {mood}\n"));
    }
}
