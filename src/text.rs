/// Returns true if `text` is absent or empty.
///
/// When `treat_whitespace_as_empty` is true (the conventional default),
/// text consisting solely of whitespace also counts as empty. When it is
/// false only literally zero-length text is empty; absent text is true
/// either way.
pub fn is_text_absent_or_empty(text: Option<&str>, treat_whitespace_as_empty: bool) -> bool {
    match text {
        None => true,
        Some(text) => {
            if treat_whitespace_as_empty {
                text.trim().is_empty()
            } else {
                text.is_empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_text_is_empty() {
        assert!(is_text_absent_or_empty(None, true));
        assert!(is_text_absent_or_empty(None, false));
    }

    #[test]
    fn test_zero_length_text_is_empty() {
        assert!(is_text_absent_or_empty(Some(""), true));
        assert!(is_text_absent_or_empty(Some(""), false));
    }

    #[test]
    fn test_whitespace_only_counts_per_flag() {
        assert!(is_text_absent_or_empty(Some("  \t\n"), true));
        assert!(!is_text_absent_or_empty(Some("  \t\n"), false));
    }

    #[test]
    fn test_non_empty_text() {
        assert!(!is_text_absent_or_empty(Some("Magic"), true));
        assert!(!is_text_absent_or_empty(Some(" Magic "), true));
    }
}
