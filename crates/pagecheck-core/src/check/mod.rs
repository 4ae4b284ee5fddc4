//! The four deployment checks and the runner that executes them.
//!
//! Shape and placeholder checks are pure string checks. Reachability and
//! content checks each perform their own single GET; both refuse to touch
//! the network while the URL still carries a placeholder token.

mod error;
mod live;
mod offline;
mod report;
mod run;

pub use error::CheckError;
pub use live::{check_content, check_reachability, missing_tags, RequiredTag};
pub use offline::{check_placeholder, check_shape};
pub use report::{summarize, CheckReport, ReportRecord, Summary};
pub use run::{run_check, run_checks};

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which check to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    Shape,
    Placeholder,
    Reachability,
    Content,
}

impl CheckKind {
    /// Every check, in reporting order.
    pub const ALL: [CheckKind; 4] = [
        CheckKind::Shape,
        CheckKind::Placeholder,
        CheckKind::Reachability,
        CheckKind::Content,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CheckKind::Shape => "shape",
            CheckKind::Placeholder => "placeholder",
            CheckKind::Reachability => "reachability",
            CheckKind::Content => "content",
        }
    }

    /// True for checks that issue a GET.
    pub fn needs_network(self) -> bool {
        matches!(self, CheckKind::Reachability | CheckKind::Content)
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown check {0:?} (expected shape, placeholder, reachability or content)")]
pub struct UnknownCheck(pub String);

impl FromStr for CheckKind {
    type Err = UnknownCheck;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CheckKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCheck(s.to_string()))
    }
}
