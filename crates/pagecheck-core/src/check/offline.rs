//! Checks that only look at the URL string.

use super::CheckError;
use crate::target::{find_placeholder, TargetUrl};

/// Passes if the URL has the `https://<user>.github.io/<repository>/` shape.
pub fn check_shape(target: &TargetUrl) -> Result<(), CheckError> {
    if target.matches_pages_shape() {
        Ok(())
    } else {
        Err(CheckError::ShapeMismatch {
            url: target.to_string(),
        })
    }
}

/// Passes if the URL carries no unresolved `{...}` token.
pub fn check_placeholder(target: &TargetUrl) -> Result<(), CheckError> {
    match find_placeholder(target.as_str()) {
        None => Ok(()),
        Some(token) => Err(CheckError::Placeholder {
            url: target.to_string(),
            token: token.to_string(),
        }),
    }
}
