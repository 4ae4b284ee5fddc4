//! Per-check results and their summary.

use super::{CheckError, CheckKind};
use crate::target::TargetUrl;
use serde::Serialize;
use std::time::Duration;

/// Outcome of one check against one URL.
#[derive(Debug)]
pub struct CheckReport {
    pub kind: CheckKind,
    pub url: TargetUrl,
    pub outcome: Result<(), CheckError>,
    pub elapsed: Duration,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Failure message, if the check failed.
    pub fn message(&self) -> Option<String> {
        self.outcome.as_ref().err().map(ToString::to_string)
    }

    /// Flat, serializable view for JSON output.
    pub fn record(&self) -> ReportRecord<'_> {
        let err = self.outcome.as_ref().err();
        ReportRecord {
            check: self.kind,
            url: self.url.as_str(),
            passed: self.passed(),
            elapsed_ms: u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX),
            category: err.map(CheckError::category),
            status: err.and_then(CheckError::status),
            message: self.message(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportRecord<'a> {
    pub check: CheckKind,
    pub url: &'a str,
    pub passed: bool,
    pub elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Pass/fail counts across a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

pub fn summarize(reports: &[CheckReport]) -> Summary {
    reports.iter().fold(Summary::default(), |mut s, r| {
        if r.passed() {
            s.passed += 1;
        } else {
            s.failed += 1;
        }
        s
    })
}
