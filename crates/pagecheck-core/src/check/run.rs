//! Runs checks, timing and logging each one.

use super::{
    check_content, check_placeholder, check_reachability, check_shape, CheckKind, CheckReport,
};
use crate::fetch::FetchSettings;
use crate::target::TargetUrl;
use anyhow::{Context, Result};
use std::time::Instant;

/// Runs a single check and records how it went.
pub async fn run_check(kind: CheckKind, target: &TargetUrl, settings: &FetchSettings) -> CheckReport {
    tracing::debug!(check = %kind, url = %target, "check started");
    let started = Instant::now();

    let outcome = match kind {
        CheckKind::Shape => check_shape(target),
        CheckKind::Placeholder => check_placeholder(target),
        CheckKind::Reachability => check_reachability(target, settings).await,
        CheckKind::Content => check_content(target, settings).await,
    };
    let elapsed = started.elapsed();

    match &outcome {
        Ok(()) => tracing::info!(check = %kind, ?elapsed, "check passed"),
        Err(e) => tracing::warn!(check = %kind, ?elapsed, error = %e, "check failed"),
    }

    CheckReport {
        kind,
        url: target.clone(),
        outcome,
        elapsed,
    }
}

/// Runs `kinds` concurrently, one task per check, and returns reports in
/// the order requested. Duplicate kinds run once.
pub async fn run_checks(
    kinds: &[CheckKind],
    target: &TargetUrl,
    settings: &FetchSettings,
) -> Result<Vec<CheckReport>> {
    let mut unique: Vec<CheckKind> = Vec::with_capacity(kinds.len());
    for &kind in kinds {
        if !unique.contains(&kind) {
            unique.push(kind);
        }
    }

    let mut join_set = tokio::task::JoinSet::new();
    for (slot, &kind) in unique.iter().enumerate() {
        let target = target.clone();
        let settings = *settings;
        join_set.spawn(async move { (slot, run_check(kind, &target, &settings).await) });
    }

    let mut slots: Vec<Option<CheckReport>> = unique.iter().map(|_| None).collect();
    while let Some(joined) = join_set.join_next().await {
        let (slot, report) = joined.context("check task failed")?;
        slots[slot] = Some(report);
    }

    Ok(slots.into_iter().flatten().collect())
}
