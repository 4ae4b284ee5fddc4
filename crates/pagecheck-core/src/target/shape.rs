//! GitHub Pages URL shape.

use regex::Regex;
use std::sync::LazyLock;

/// Letters, digits, `.`, `-` and `_` in both the user and repository part.
static PAGES_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://[a-zA-Z0-9._-]+\.github\.io/[a-zA-Z0-9._-]+/$")
        .expect("pages shape regex")
});

/// Human-readable form of the expected shape, used in failure messages.
pub const PAGES_SHAPE_HINT: &str = "https://<user>.github.io/<repository>/";

/// Returns true if `url` matches `https://<user>.github.io/<repository>/`.
pub fn matches_pages_shape(url: &str) -> bool {
    PAGES_SHAPE.is_match(url)
}
