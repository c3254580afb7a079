use crate::domain::models::{
    ChangeSet, EvidenceVerdict, GateConfig, GateReport, Level, PrContext, ScanOutcome,
};
use crate::services::event::load_pr_context;
use crate::services::evidence::{check_pr_evidence, EvidencePolicy};
use crate::services::git_diff::{changed_file_status, changed_files};
use crate::services::scanners::Scanners;
use crate::services::scope::{is_bootstrap_pr, should_gate};
use std::path::Path;

/// Reads the event payload, degrading every failure to "no context".
pub fn resolve_context(event_path: &Path, report: &mut GateReport) -> Option<PrContext> {
    match load_pr_context(event_path) {
        Ok(Some(ctx)) => Some(ctx),
        Ok(None) => {
            tracing::warn!(path = %event_path.display(), "no pull request in event payload");
            report.push(
                Level::Warn,
                format!(
                    "no pull request context found at {}",
                    event_path.display()
                ),
            );
            None
        }
        Err(err) => {
            tracing::warn!(error = %err, "event payload unusable");
            report.push(Level::Warn, err.to_string());
            None
        }
    }
}

fn non_blank(sha: &Option<String>) -> Option<&str> {
    sha.as_deref().filter(|s| !s.trim().is_empty())
}

/// Diffs base against head. Missing refs or a failing `git` leave the listing empty.
pub fn resolve_changes(
    repo_root: &Path,
    ctx: Option<&PrContext>,
    report: &mut GateReport,
) -> ChangeSet {
    let Some(ctx) = ctx else {
        return ChangeSet::default();
    };
    let (Some(base), Some(head)) = (non_blank(&ctx.base_sha), non_blank(&ctx.head_sha)) else {
        report.push(
            Level::Warn,
            "pull request payload has no base/head sha; treating change set as empty",
        );
        return ChangeSet::default();
    };

    let files = changed_files(repo_root, base, head).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "name-only diff failed");
        report.push(
            Level::Warn,
            format!("could not compute git diff for changed files: {err}"),
        );
        Vec::new()
    });
    let statuses = changed_file_status(repo_root, base, head).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "name-status diff failed");
        report.push(
            Level::Warn,
            format!("could not compute git diff status for changed files: {err}"),
        );
        Vec::new()
    });
    ChangeSet::new(files, statuses)
}

fn record_scan(report: &mut GateReport, outcome: ScanOutcome) {
    tracing::debug!(?outcome, blocking = outcome.is_blocking(), "scan finished");
    match outcome {
        ScanOutcome::Clean { tool } => report.push(Level::Pass, format!("{tool}: no findings")),
        ScanOutcome::Skipped { reason } => report.push(Level::Info, reason),
        ScanOutcome::Tolerated { tool, output } => {
            report.push(
                Level::Warn,
                format!("{tool} failed; leaving as warning because the toolchain may differ in CI"),
            );
            if !output.is_empty() {
                report.push(Level::Info, output);
            }
        }
        ScanOutcome::Unavailable { tool, reason } => {
            report.push(Level::Warn, format!("could not run {tool} ({reason}); skipping"))
        }
        ScanOutcome::Findings { tool, output } => {
            report.push(Level::Fail, format!("{tool} reported issues"));
            if !output.is_empty() {
                report.push(Level::Info, output);
            }
        }
    }
}

fn check_evidence(
    report: &mut GateReport,
    ctx: Option<&PrContext>,
    changes: &ChangeSet,
    config: &GateConfig,
    evidence: &EvidencePolicy,
) {
    let Some(ctx) = ctx else {
        report.push(Level::Warn, "no PR body available; skipping PR evidence check");
        return;
    };
    if is_bootstrap_pr(&changes.changes, config) {
        report.push(
            Level::Info,
            "bootstrap governance PR detected; skipping strict PR evidence check once",
        );
        return;
    }
    let verdict = check_pr_evidence(&ctx.body, evidence);
    tracing::debug!(?verdict, accepted = verdict.is_accepted(), "PR evidence evaluated");
    match verdict {
        EvidenceVerdict::Structured => {
            report.push(Level::Pass, "PR body carries all required governance sections")
        }
        EvidenceVerdict::Transitional => report.push(
            Level::Info,
            "transitional PR evidence detected; accepting legacy body format",
        ),
        EvidenceVerdict::Missing { category } => {
            report.push(
                Level::Fail,
                format!("missing or incomplete governance section in PR body: {category}"),
            );
            report.push(
                Level::Info,
                "PR body must include the required governance headings and non-placeholder content",
            );
        }
    }
}

/// Runs every check and aggregates the result; only the evidence validator stops early.
pub fn evaluate(
    ctx: Option<&PrContext>,
    changes: &ChangeSet,
    config: &GateConfig,
    evidence: &EvidencePolicy,
    scanners: &dyn Scanners,
    report: &mut GateReport,
) {
    report.push(
        Level::Info,
        format!(
            "reviewed {} changed file(s) in scope candidate set",
            changes.files.len()
        ),
    );

    report.in_scope = should_gate(&changes.files, config);
    if report.in_scope {
        report.push(
            Level::Info,
            "governance-sensitive path changes detected; enforcing PR evidence",
        );
        check_evidence(report, ctx, changes, config, evidence);
    } else {
        report.push(
            Level::Pass,
            "no governance-sensitive path changes detected; skipping PR evidence check",
        );
    }

    record_scan(report, scanners.secret_scan());
    record_scan(report, scanners.dependency_scan(&changes.files));

    if report.passed() {
        report.push(Level::Pass, "all governance gate checks passed");
    } else {
        report.push(Level::Fail, "governance gate failed");
    }
}

pub fn run_gate(
    repo_root: &Path,
    event_path: &Path,
    config: &GateConfig,
    evidence: &EvidencePolicy,
    scanners: &dyn Scanners,
) -> GateReport {
    let mut report = GateReport::default();
    let ctx = resolve_context(event_path, &mut report);
    let changes = resolve_changes(repo_root, ctx.as_ref(), &mut report);
    tracing::debug!(
        files = changes.files.len(),
        statuses = changes.changes.len(),
        "resolved change set"
    );
    evaluate(
        ctx.as_ref(),
        &changes,
        config,
        evidence,
        scanners,
        &mut report,
    );
    report
}
