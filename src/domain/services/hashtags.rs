use regex::Regex;
use std::sync::LazyLock;

static HASHTAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#(\w+)").expect("valid regex"));

/// Hashtag words (without the `#`) in order of appearance in raw post text.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    HASHTAG_RE
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_reference_example() {
        assert_eq!(
            extract_hashtags("Great #Storm coming! http://x.co @user"),
            vec!["Storm".to_string()]
        );
    }

    #[test]
    fn test_extract_multiple_keeps_order_and_case() {
        assert_eq!(
            extract_hashtags("#Flood in #london, #flood again"),
            vec!["Flood", "london", "flood"]
        );
    }

    #[test]
    fn test_extract_none() {
        assert!(extract_hashtags("no tags here # nope").is_empty());
    }
}
