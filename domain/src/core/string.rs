//! String utilities for the domain layer.

/// Marker appended to text cut by [`truncate_chars`].
pub const ELLIPSIS: &str = "...";

/// Truncate a string to at most `max_chars` characters, appending [`ELLIPSIS`]
/// when anything was cut.
///
/// Counts Unicode scalar values, so the result never splits a character and
/// the kept prefix is exactly `max_chars` long when truncation happens.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some((end, _)) => format!("{}{}", &s[..end], ELLIPSIS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello world", 5), "hello...");
    }

    #[test]
    fn test_truncate_exact_length_is_untouched() {
        assert_eq!(truncate_chars("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_chars("日本語テスト", 3), "日本語...");
        assert_eq!(truncate_chars("crème brûlée", 5), "crème...");
    }

    #[test]
    fn test_truncate_emoji() {
        assert_eq!(truncate_chars("🍅🥕🧄", 2), "🍅🥕...");
    }

    #[test]
    fn test_truncate_empty() {
        assert_eq!(truncate_chars("", 150), "");
    }
}
