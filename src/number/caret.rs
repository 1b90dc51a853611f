//! Caret re-anchoring after a reformat changes the field length.

/// Compute the caret offset after reformatting.
///
/// Returns `old_caret + (new_len - old_len)` clamped into `[0, new_len]`, so
/// the caret stays on the same logical digit when separators are inserted or
/// removed ahead of it. Offsets and lengths are measured in characters.
///
/// ```rust
/// use phone_field::number::adjust_caret;
///
/// assert_eq!(adjust_caret(3, 5, 9), 7);
/// assert_eq!(adjust_caret(1, 9, 3), 0);
/// assert_eq!(adjust_caret(12, 10, 10), 10);
/// ```
pub fn adjust_caret(old_caret: usize, old_len: usize, new_len: usize) -> usize {
    old_caret
        .saturating_add(new_len)
        .saturating_sub(old_len)
        .min(new_len)
}

/// Length of a field value in characters, the unit carets are measured in.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
