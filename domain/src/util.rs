//! Shared utility functions.

/// Truncate a string to at most `max_bytes` without splitting a UTF-8
/// character. Used for log previews of user input.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_query_unchanged() {
        assert_eq!(truncate_str("sage hi", 64), "sage hi");
    }

    #[test]
    fn truncate_long_query() {
        assert_eq!(truncate_str("hammer drill", 6), "hammer");
    }

    #[test]
    fn truncate_backs_off_multibyte() {
        // '📦' is 4 bytes
        let s = "📦📦";
        assert_eq!(truncate_str(s, 5), "📦");
        assert_eq!(truncate_str(s, 3), "");
    }
}
