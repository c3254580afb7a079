use crate::domain::models::{ChangeStatus, ChangedFile, GateConfig};

/// True when any changed path falls under a guarded prefix or is a guarded file.
///
/// Matching is plain `starts_with`: directory guards end in `/`, bare file names
/// only match at the repository root.
pub fn should_gate<S: AsRef<str>>(changed_files: &[S], config: &GateConfig) -> bool {
    changed_files.iter().any(|path| {
        config
            .guard_paths
            .iter()
            .any(|guard| path.as_ref().starts_with(guard.as_str()))
    })
}

/// One-time exemption for the PR that introduces the gate itself.
///
/// The gate script must be newly added, and nothing outside the governance
/// directories and root policy files may ride along.
pub fn is_bootstrap_pr(changes: &[ChangedFile], config: &GateConfig) -> bool {
    let gate_added = changes
        .iter()
        .any(|c| c.path == config.gate_script && c.status == ChangeStatus::Added);
    if !gate_added {
        return false;
    }

    // Both ends of a rename or copy must be allow-listed.
    let allowed = &config.bootstrap;
    changes.iter().all(|change| {
        change.paths().all(|path| {
            let ok = allowed.allowed_files.iter().any(|f| f == path)
                || allowed
                    .allowed_prefixes
                    .iter()
                    .any(|prefix| path.starts_with(prefix.as_str()));
            if !ok {
                tracing::debug!(
                    path,
                    status = %change.status.code(),
                    "change outside bootstrap allowlist"
                );
            }
            ok
        })
    })
}
