//! Text helpers shared by the public form handlers.

/// True when every value is non-blank after trimming.
pub fn all_present(values: &[&str]) -> bool {
    values.iter().all(|value| !value.trim().is_empty())
}

/// Trimmed `value`, or `fallback` when it is blank.
pub fn or_fallback(value: &str, fallback: &str) -> String {
    let value = value.trim();

    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// Capitalize the first letter of every word, where a word starts after any
/// non-alphanumeric character.
pub fn capitalize_words(value: &str) -> String {
    let mut at_boundary = true;

    value
        .chars()
        .map(|c| {
            let mapped = if at_boundary { c.to_ascii_uppercase() } else { c };
            at_boundary = !(c.is_alphanumeric() || c == '_');
            mapped
        })
        .collect()
}
