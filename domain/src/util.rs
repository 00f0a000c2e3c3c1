//! Shared utility functions.

use std::borrow::Cow;

/// Shorten a string for log previews.
///
/// Cuts at a UTF-8 character boundary at or below `max_bytes` and
/// marks the cut with an ellipsis. Short strings pass through without
/// allocating.
pub fn preview(s: &str, max_bytes: usize) -> Cow<'_, str> {
    if s.len() <= max_bytes {
        return Cow::Borrowed(s);
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    Cow::Owned(format!("{}...", &s[..end]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(preview("hi", 10), "hi");
        assert!(matches!(preview("hi", 10), Cow::Borrowed(_)));
    }

    #[test]
    fn long_strings_get_marked() {
        assert_eq!(preview("hello world", 5), "hello...");
    }

    #[test]
    fn cut_respects_multibyte_boundaries() {
        // Each kana is 3 bytes; cutting at 4 backs up to 3
        assert_eq!(preview("あのね", 4), "あ...");
    }

    #[test]
    fn empty_input() {
        assert_eq!(preview("", 10), "");
    }
}
