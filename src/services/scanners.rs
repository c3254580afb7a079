use crate::domain::constants::{AUDIT_LEVEL, SECRET_SCANNER_BIN, SECRET_SCAN_REPORT_FILE};
use crate::domain::models::ScanOutcome;
use crate::services::tools::find_executable_in_path;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Optional external scanners consulted after the evidence check.
pub trait Scanners {
    fn secret_scan(&self) -> ScanOutcome;
    fn dependency_scan(&self, changed_files: &[String]) -> ScanOutcome;
}

/// True when a changed path names one of the dependency manifests.
pub fn touches_dependency_manifest(changed_files: &[String], manifests: &[String]) -> bool {
    changed_files
        .iter()
        .any(|f| manifests.iter().any(|m| f.ends_with(m.as_str())))
}

fn combined_output(out: &Output) -> String {
    let stdout = String::from_utf8_lossy(&out.stdout);
    let stderr = String::from_utf8_lossy(&out.stderr);
    [stdout.trim(), stderr.trim()]
        .iter()
        .filter(|s| !s.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
}

/// Scanners resolved from `PATH` and run as blocking child processes.
pub struct SystemScanners {
    repo_root: PathBuf,
    manifests: Vec<String>,
}

impl SystemScanners {
    pub fn new(repo_root: &Path, manifests: &[String]) -> Self {
        Self {
            repo_root: repo_root.to_path_buf(),
            manifests: manifests.to_vec(),
        }
    }

    fn run(&self, bin: &Path, args: &[&str], cwd: Option<&Path>) -> std::io::Result<Output> {
        tracing::debug!(bin = %bin.display(), ?args, "running scanner");
        let mut cmd = Command::new(bin);
        cmd.args(args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        cmd.output()
    }

    fn audit(&self, tool: &str, bin: &Path, blocking: bool) -> ScanOutcome {
        match self.run(
            bin,
            &["audit", "--audit-level", AUDIT_LEVEL],
            Some(&self.repo_root),
        ) {
            Ok(out) if out.status.success() => ScanOutcome::Clean {
                tool: format!("{tool} audit"),
            },
            Ok(out) if blocking => ScanOutcome::Findings {
                tool: format!("{tool} audit"),
                output: combined_output(&out),
            },
            Ok(out) => ScanOutcome::Tolerated {
                tool: format!("{tool} audit"),
                output: combined_output(&out),
            },
            Err(err) => ScanOutcome::Unavailable {
                tool: format!("{tool} audit"),
                reason: err.to_string(),
            },
        }
    }
}

impl Scanners for SystemScanners {
    fn secret_scan(&self) -> ScanOutcome {
        let Some(bin) = find_executable_in_path(SECRET_SCANNER_BIN) else {
            return ScanOutcome::Skipped {
                reason: format!("{SECRET_SCANNER_BIN} not installed; skipping secret scan"),
            };
        };
        let report = std::env::temp_dir().join(SECRET_SCAN_REPORT_FILE);
        let report = report.to_string_lossy();
        let source = self.repo_root.to_string_lossy();
        let args = [
            "detect",
            "--no-git",
            "--redact",
            "--exit-code",
            "1",
            "--report-format",
            "json",
            "--report-path",
            report.as_ref(),
            "--source",
            source.as_ref(),
        ];
        match self.run(&bin, &args, None) {
            Ok(out) if out.status.success() => ScanOutcome::Clean {
                tool: SECRET_SCANNER_BIN.to_string(),
            },
            Ok(out) => ScanOutcome::Findings {
                tool: SECRET_SCANNER_BIN.to_string(),
                output: combined_output(&out),
            },
            Err(err) => ScanOutcome::Unavailable {
                tool: SECRET_SCANNER_BIN.to_string(),
                reason: err.to_string(),
            },
        }
    }

    fn dependency_scan(&self, changed_files: &[String]) -> ScanOutcome {
        if !touches_dependency_manifest(changed_files, &self.manifests) {
            return ScanOutcome::Skipped {
                reason: "no dependency manifests changed".to_string(),
            };
        }

        if self.repo_root.join("pnpm-lock.yaml").exists() {
            if let Some(bin) = find_executable_in_path("pnpm") {
                return self.audit("pnpm", &bin, true);
            }
        }

        // npm results vary with the toolchain installed on the runner, so they only warn.
        if self.repo_root.join("package-lock.json").exists() {
            if let Some(bin) = find_executable_in_path("npm") {
                return self.audit("npm", &bin, false);
            }
        }

        ScanOutcome::Skipped {
            reason: "no supported dependency scanner available for this stack".to_string(),
        }
    }
}
