//! Text normalization - joins title and description into one matchable blob.

/// Returns `lowercase(title + " " + description)`.
///
/// Punctuation is left untouched; keyword matching relies on word
/// boundaries rather than tokenization.
pub fn normalize(title: &str, description: &str) -> String {
    let mut text = String::with_capacity(title.len() + description.len() + 1);
    text.push_str(title);
    text.push(' ');
    text.push_str(description);
    text.to_lowercase()
}
