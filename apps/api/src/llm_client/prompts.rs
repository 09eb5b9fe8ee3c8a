// Shared prompt fragments and prompt-building utilities.
// Each feature that needs model calls defines its own prompts.rs alongside it.

/// Closing directive appended to every prompt that expects bare model output.
pub const NO_EXPLANATION_INSTRUCTION: &str =
    "Do NOT explain anything, only output the poem text.";

/// Fills `{name}` placeholders in `template` in a single left-to-right pass.
///
/// Substituted values are never re-scanned, so user-supplied text containing
/// `{...}` cannot trigger a second substitution. Unknown placeholders are kept verbatim.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replaced = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (close, *value))
        });

        match replaced {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
