//! Validation of alias annotations.

/// Check if a string is a legal alias
///
/// The first character must be alphabetic (an underscore is rejected here),
/// every following character alphabetic, numeric or an underscore.
#[must_use]
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_alphabetic() {
        return false;
    }
    chars.all(|c| c.is_alphabetic() || c.is_numeric() || c == '_')
}
