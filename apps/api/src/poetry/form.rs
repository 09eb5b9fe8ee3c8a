use crate::poetry::types::PoeticForm;

/// Drops blank lines and truncates to the form's line limit.
///
/// Truncate-only: a reply shorter than the form asks for is returned as-is,
/// never padded. Unrecognized forms keep every non-blank line.
pub fn enforce_form_lines(text: &str, form: &PoeticForm) -> String {
    let lines = text.lines().filter(|line| !line.trim().is_empty());

    match form.max_lines() {
        Some(max) => lines.take(max).collect::<Vec<_>>().join("\n"),
        None => lines.collect::<Vec<_>>().join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE_LINES: &str = "one\ntwo\nthree\nfour\nfive";

    #[test]
    fn test_haiku_trims_five_lines_to_three() {
        assert_eq!(enforce_form_lines(FIVE_LINES, &PoeticForm::Haiku), "one\ntwo\nthree");
    }

    #[test]
    fn test_blank_and_whitespace_lines_are_dropped() {
        let text = "first\n\n   \n\tsecond\n \t \nthird";
        assert_eq!(
            enforce_form_lines(text, &PoeticForm::Quatrain),
            "first\n\tsecond\nthird"
        );
    }

    #[test]
    fn test_short_output_is_not_padded() {
        assert_eq!(enforce_form_lines("lonely line", &PoeticForm::Sonnet), "lonely line");
    }

    #[test]
    fn test_couplets_cap_at_four() {
        assert_eq!(
            enforce_form_lines(FIVE_LINES, &PoeticForm::Couplets),
            "one\ntwo\nthree\nfour"
        );
    }

    #[test]
    fn test_free_form_caps_at_ten() {
        let text = (1..=12).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        let out = enforce_form_lines(&text, &PoeticForm::FreeForm);
        assert_eq!(out.lines().count(), 10);
        assert!(out.ends_with("line 10"));
    }

    #[test]
    fn test_unknown_form_passes_through() {
        let text = (1..=20).map(|i| format!("l{i}")).collect::<Vec<_>>().join("\n\n");
        let out = enforce_form_lines(&text, &PoeticForm::Other("Epic".into()));
        assert_eq!(out.lines().count(), 20);
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(
            enforce_form_lines("a\r\nb\r\n\r\nc\r\nd", &PoeticForm::Haiku),
            "a\nb\nc"
        );
    }

    /// Every output line is an input non-blank line, in the original order.
    #[test]
    fn test_output_is_an_ordered_prefix_of_non_blank_lines() {
        let text = "  \nalpha\n\nbeta\n gamma \n\ndelta\nepsilon\n";
        let non_blank: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        for form in PoeticForm::ALL {
            let out = enforce_form_lines(text, &form);
            let kept: Vec<&str> = out.lines().collect();
            let max = form.max_lines().unwrap();
            assert!(kept.len() <= max);
            assert_eq!(kept, &non_blank[..kept.len()]);
        }
    }
}
