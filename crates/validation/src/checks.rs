//! Common field-validity checks.
//!
//! Pure boolean functions; the caller pairs each with the business error to
//! raise when the check fails.

/// Characters never allowed in user-supplied field values.
const ILLEGAL_CHARS: &[char] = &['<', '>', '"', '\'', '&', '\\'];

/// Whether the string carries a value (non-empty after trimming).
pub fn has_value(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Whether the char count is within `min..=max`.
pub fn is_length_valid(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}

/// Whether the string contains a control character or one of the
/// always-rejected characters.
pub fn contains_illegal_chars(value: &str) -> bool {
    value
        .chars()
        .any(|c| c.is_control() || ILLEGAL_CHARS.contains(&c))
}

/// Whether an optional value is present. The non-null check for fields a
/// command may omit.
pub fn is_present<T>(value: &Option<T>) -> bool {
    value.is_some()
}
