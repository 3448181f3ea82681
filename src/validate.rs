//! Name validation for directory and file names

/// Punctuation allowed in addition to letters and digits
const ALLOWED_PUNCTUATION: &[char] = &['-', '_', '.', '+', '@', ',', '='];

fn is_allowed(c: char) -> bool {
    c.is_alphanumeric() || ALLOWED_PUNCTUATION.contains(&c)
}

/// Return true when `name` cannot be used as a new directory or file name.
///
/// Any character outside the safe set makes the name invalid, wherever it
/// appears. Validity depends on nothing else.
pub fn is_invalid(name: &str) -> bool {
    !name.chars().all(is_allowed)
}
