//! Seed-word hygiene and word-presence checks.
//!
//! Presence is a case-folded substring test, deliberately lenient: "river" is
//! found inside "rivers" or "riverbank". No Unicode normalization is applied, so
//! composed vs decomposed forms of the same letter do not match.

/// Longest seed word kept, in characters.
pub const MAX_WORD_CHARS: usize = 30;

/// Most seed words a single poem request carries.
pub const MAX_SEED_WORDS: usize = 3;

/// Trims, keeps the first whitespace-separated token and caps its length.
/// Returns an empty string for blank input.
pub fn clean_word(raw: &str) -> String {
    raw.split_whitespace()
        .next()
        .map(|token| token.chars().take(MAX_WORD_CHARS).collect())
        .unwrap_or_default()
}

/// Cleans raw word fields into at most three distinct, non-empty seed words.
/// Duplicates are compared case-insensitively; the first spelling wins.
pub fn collect_seed_words<S: AsRef<str>>(raw_words: &[S]) -> Vec<String> {
    let mut words: Vec<String> = Vec::with_capacity(MAX_SEED_WORDS);

    for raw in raw_words {
        let word = clean_word(raw.as_ref());
        if word.is_empty() {
            continue;
        }
        let folded = word.to_lowercase();
        if words.iter().any(|w| w.to_lowercase() == folded) {
            continue;
        }
        words.push(word);
        if words.len() == MAX_SEED_WORDS {
            break;
        }
    }

    words
}

/// Returns the words (in input order) whose lowercase form is not a substring
/// of the lowercased text. Empty words are never reported.
pub fn missing_words<S: AsRef<str>>(text: &str, words: &[S]) -> Vec<String> {
    let folded_text = text.to_lowercase();

    words
        .iter()
        .map(|w| w.as_ref())
        .filter(|w| !w.is_empty() && !folded_text.contains(&w.to_lowercase()))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_words_case_insensitive() {
        assert_eq!(
            missing_words("the RIVER flows", &["river", "mountain"]),
            vec!["mountain".to_string()]
        );
    }

    #[test]
    fn test_missing_words_substring_counts_as_present() {
        assert!(missing_words("Riverbanks at dawn", &["river", "DAWN"]).is_empty());
    }

    #[test]
    fn test_missing_words_preserves_input_order() {
        assert_eq!(
            missing_words("nothing here", &["flame", "dust", "here", "ash"]),
            vec!["flame", "dust", "ash"]
        );
    }

    #[test]
    fn test_missing_words_ignores_empty_words() {
        assert!(missing_words("", &[""]).is_empty());
    }

    #[test]
    fn test_missing_words_cyrillic_case_folding() {
        assert!(missing_words("Река течёт", &["река"]).is_empty());
    }

    #[test]
    fn test_missing_words_no_normalization() {
        // "é" precomposed vs "e" + combining acute
        assert_eq!(missing_words("caf\u{e9}", &["cafe\u{301}"]).len(), 1);
    }

    #[test]
    fn test_clean_word_keeps_first_token() {
        assert_eq!(clean_word("  moon over the sea "), "moon");
    }

    #[test]
    fn test_clean_word_blank_is_empty() {
        assert_eq!(clean_word("   \t "), "");
    }

    #[test]
    fn test_clean_word_truncates_by_chars() {
        let long = "ж".repeat(40);
        let cleaned = clean_word(&long);
        assert_eq!(cleaned.chars().count(), MAX_WORD_CHARS);
    }

    #[test]
    fn test_collect_seed_words_drops_blanks_and_duplicates() {
        let words = collect_seed_words(&["River", " ", "river bank", "flame"]);
        assert_eq!(words, vec!["River", "flame"]);
    }

    #[test]
    fn test_collect_seed_words_caps_at_three() {
        let words = collect_seed_words(&["a", "b", "c", "d"]);
        assert_eq!(words, vec!["a", "b", "c"]);
    }
}
