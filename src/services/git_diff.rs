use crate::domain::errors::GateError;
use crate::domain::models::{ChangeStatus, ChangedFile};
use std::path::Path;
use std::process::Command;

fn git(repo_root: &Path, args: &[&str]) -> Result<String, GateError> {
    let joined = args.join(" ");
    tracing::debug!(args = %joined, root = %repo_root.display(), "running git");
    let out = Command::new("git")
        .args(args)
        .current_dir(repo_root)
        .output()
        .map_err(|source| GateError::GitSpawn {
            args: joined.clone(),
            source,
        })?;
    if !out.status.success() {
        return Err(GateError::GitFailed {
            args: joined,
            code: out
                .status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string()),
            stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&out.stdout).to_string())
}

/// Parses `git diff --name-status` output. Rename and copy records
/// (`R100\told\tnew`) are keyed by the destination and keep the old path as `source`.
pub fn parse_name_status(raw: &str) -> Vec<ChangedFile> {
    raw.lines()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
            let status = ChangeStatus::from_code(fields.first()?)?;
            let path = *fields.last().filter(|p| !p.is_empty())?;
            if fields.len() < 2 {
                return None;
            }
            let source = match fields.as_slice() {
                [_, old, _, ..] if !old.is_empty() => Some(old.to_string()),
                _ => None,
            };
            Some(ChangedFile {
                path: path.to_string(),
                source,
                status,
            })
        })
        .collect()
}

pub fn parse_name_only(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn changed_file_status(
    repo_root: &Path,
    base: &str,
    head: &str,
) -> Result<Vec<ChangedFile>, GateError> {
    let raw = git(repo_root, &["diff", "--name-status", base, head])?;
    Ok(parse_name_status(&raw))
}

pub fn changed_files(repo_root: &Path, base: &str, head: &str) -> Result<Vec<String>, GateError> {
    let raw = git(repo_root, &["diff", "--name-only", base, head])?;
    Ok(parse_name_only(&raw))
}
