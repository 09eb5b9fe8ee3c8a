// All model prompt text for the poetry pipeline.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Poem prompt template.
/// Fill: {language}, {form}, {mood}, {words}, {form_instruction},
///       {mood_phrase}, {language_instruction}, {closing_instruction}
pub const POEM_PROMPT_TEMPLATE: &str = "You are a skilled poet.

Language: {language}
Poetic form: {form}
Mood: {mood}
Words: {words}

Task:
Write a poem in the specified language that follows the given poetic form and mood.
- {form_instruction}
- The poem must naturally use ALL of the given words.
- The tone should clearly feel {mood_phrase}.
- {language_instruction}
- {closing_instruction}";

pub const HAIKU_INSTRUCTION: &str = "The poem MUST have exactly 3 short lines, like a haiku. \
    Focus on imagery and simplicity.";

pub const QUATRAIN_INSTRUCTION: &str = "The poem MUST have exactly 4 lines, like a quatrain. \
    You may use gentle rhythm or rhyme, but structure is more important.";

pub const COUPLETS_INSTRUCTION: &str = "The poem MUST have 2 to 4 lines, written as rhyming couplets \
    (pairs of lines that rhyme as much as possible).";

pub const SONNET_INSTRUCTION: &str = "The poem MUST have exactly 14 lines, like a sonnet. \
    You may use rhyme and a gentle rhythm, but focus on clear imagery and flow.";

pub const FREE_FORM_INSTRUCTION: &str = "The poem may have up to 10 lines, free form, \
    without a strict rhyme scheme. Focus on natural flow and vivid imagery.";

/// Used for any form label outside the known set.
pub const GENERIC_FORM_INSTRUCTION: &str = "Write a short poem.";

pub const ENGLISH_INSTRUCTION: &str = "Write only in English; do NOT mix other languages.";

pub const GERMAN_INSTRUCTION: &str = "Write only in German; do NOT mix other languages.";

pub const HINDI_INSTRUCTION: &str =
    "Write the poem in Hindi using Devanagari script only (no Latin letters / Hinglish).";

pub const RUSSIAN_INSTRUCTION: &str =
    "Write only in Russian using Cyrillic script; do NOT use Latin letters.";

pub const CHINESE_INSTRUCTION: &str = "Write only in Chinese using Chinese characters \
    (simplified is fine); do NOT use pinyin or Latin letters.";

pub const NATURE_MOOD_PHRASE: &str =
    "nature-inspired, focusing on landscapes, seasons, and the natural world";

/// Seed-word translation prompt. Fill: {target_language}, {words}
pub const TRANSLATION_PROMPT_TEMPLATE: &str = "Translate the following words into {target_language}.
Return only a comma-separated list of the translated words, in the same order,
with no explanations and no extra text.

Words: {words}";
