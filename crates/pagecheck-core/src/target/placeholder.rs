//! Unresolved template token detection.

use regex::Regex;
use std::sync::LazyLock;

/// Default value shipped in a fresh config; must be replaced before checks pass.
pub const KNOWN_PLACEHOLDER: &str = "{your-website-url}";

/// `{` followed by at least one non-`}` character and a closing `}`.
static TEMPLATE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]+\}").expect("template token regex"));

/// Returns the first unresolved placeholder in `url`, if any.
pub fn find_placeholder(url: &str) -> Option<&str> {
    if let Some(m) = TEMPLATE_TOKEN.find(url) {
        return Some(m.as_str());
    }
    url.find(KNOWN_PLACEHOLDER)
        .map(|i| &url[i..i + KNOWN_PLACEHOLDER.len()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_known_placeholder() {
        assert_eq!(
            find_placeholder("{your-website-url}"),
            Some("{your-website-url}")
        );
    }

    #[test]
    fn finds_template_tokens_anywhere() {
        assert_eq!(
            find_placeholder("https://{your-user-name}.github.io/{repo}/"),
            Some("{your-user-name}")
        );
        assert_eq!(
            find_placeholder("https://example.com/{placeholder}/"),
            Some("{placeholder}")
        );
    }

    #[test]
    fn clean_urls_have_no_placeholder() {
        assert_eq!(find_placeholder("https://octocat.github.io/hello/"), None);
        assert_eq!(find_placeholder(""), None);
    }

    #[test]
    fn empty_or_unclosed_braces_are_not_tokens() {
        assert_eq!(find_placeholder("https://example.com/{}/"), None);
        assert_eq!(find_placeholder("https://example.com/{open/"), None);
        assert_eq!(find_placeholder("https://example.com/close}/"), None);
    }
}
