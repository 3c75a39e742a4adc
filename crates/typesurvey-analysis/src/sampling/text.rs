//! Sample-text shaping.

const ELLIPSIS: &str = "...";

/// Trim whitespace and cap at `max_chars` characters, appending `...` when cut.
pub fn truncate_sample(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            let mut sample = String::with_capacity(cut + ELLIPSIS.len());
            sample.push_str(&trimmed[..cut]);
            sample.push_str(ELLIPSIS);
            sample
        }
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_trimmed_only() {
        assert_eq!(truncate_sample("  Hello \n", 256), "Hello");
    }

    #[test]
    fn test_long_text_gets_ellipsis() {
        assert_eq!(truncate_sample("abcdef", 3), "abc...");
        assert_eq!(truncate_sample("abc", 3), "abc");
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(truncate_sample("ééé", 2), "éé...");
    }
}
