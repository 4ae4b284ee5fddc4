//! Target URL model.
//!
//! The single address under test, plus the static checks that need no
//! network: the GitHub Pages shape and unresolved placeholder tokens.

mod placeholder;
mod shape;

pub use placeholder::{find_placeholder, KNOWN_PLACEHOLDER};
pub use shape::{matches_pages_shape, PAGES_SHAPE_HINT};

use std::fmt;

/// The deployment URL under test. Immutable once loaded from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetUrl(String);

impl TargetUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the URL still carries an unresolved `{...}` token or the
    /// literal default placeholder.
    pub fn has_placeholder(&self) -> bool {
        find_placeholder(&self.0).is_some()
    }

    /// True if the URL looks like `https://<user>.github.io/<repository>/`.
    pub fn matches_pages_shape(&self) -> bool {
        matches_pages_shape(&self.0)
    }
}

impl fmt::Display for TargetUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TargetUrl {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TargetUrl {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
