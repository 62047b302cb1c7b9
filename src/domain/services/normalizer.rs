//! Post text cleaning.

use regex::Regex;
use std::sync::LazyLock;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"http\S+").expect("valid regex"));
static MENTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@\S+").expect("valid regex"));
static NON_ALNUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9\s]").expect("valid regex"));
// Dropping punctuation can glue "ht!tp" back into "http".
static RESIDUAL_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S*").expect("valid regex"));
static NEWLINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\r\n]").expect("valid regex"));

/// Strips URLs, mentions, hashtag markers and anything outside ASCII
/// letters, digits and whitespace, then trims.
///
/// ```
/// use sentiment_trend::domain::services::normalizer::clean;
/// assert_eq!(clean("Great #Storm coming! http://x.co @user"), "Great Storm coming");
/// ```
pub fn clean(text: &str) -> String {
    let text = URL_RE.replace_all(text, "");
    let text = MENTION_RE.replace_all(&text, "");
    let text = text.replace('#', "");
    let text = NON_ALNUM_RE.replace_all(&text, "");
    let text = RESIDUAL_URL_RE.replace_all(&text, "");
    let text = NEWLINE_RE.replace_all(&text, " ");
    text.trim().to_string()
}
