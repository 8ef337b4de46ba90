/// Placeholder shown when a name has no usable characters
pub const PLACEHOLDER_INITIAL: &str = "?";

/// Get initials for an avatar placeholder
///
/// Uses the first character of the first and last words, upper-cased.
/// A single word yields one character, an empty or blank name yields "?".
/// The byte order mark counts as whitespace, as it does for browser `trim()`.
pub fn initials_of(name: &str) -> String {
    let mut words = name
        .split(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .filter(|word| !word.is_empty());

    let Some(first) = words.next() else {
        return PLACEHOLDER_INITIAL.to_string();
    };

    let mut initials = leading_upper(first);
    if let Some(last) = words.last() {
        initials.push_str(&leading_upper(last));
    }
    initials
}

fn leading_upper(word: &str) -> String {
    word.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
