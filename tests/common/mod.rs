#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command as StdCommand;
use tempfile::TempDir;

pub const COMPLETE_BODY: &str = "## Threat Model\nReplay of signed webhooks; nonces added.\n\
## Security/Privacy\nNo new data leaves the service.\n\
## AI and Data Impact\nModels untouched.\n\
## Verification Evidence\nUnit and fixture runs.\n\
## Release Notes\nNone\n";

/// Throwaway git repository plus a private `PATH` holding only `git` and any stub scanners.
pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    pub repo: PathBuf,
    pub bin: PathBuf,
}

fn which(name: &str) -> PathBuf {
    let path = std::env::var_os("PATH").expect("PATH is set");
    std::env::split_paths(&path)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
        .unwrap_or_else(|| panic!("{name} must be installed to run integration tests"))
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        let repo = root.join("repo");
        let bin = root.join("bin");
        fs::create_dir_all(&repo).expect("create repo dir");
        fs::create_dir_all(&bin).expect("create bin dir");

        #[cfg(unix)]
        std::os::unix::fs::symlink(which("git"), bin.join("git")).expect("link git");

        let env = Self {
            _tmp: tmp,
            root,
            repo,
            bin,
        };
        env.git(&["init", "-q"]);
        env
    }

    pub fn git(&self, args: &[&str]) -> String {
        let out = StdCommand::new("git")
            .args([
                "-c",
                "user.name=Gate Tester",
                "-c",
                "user.email=gate@example.com",
                "-c",
                "commit.gpgsign=false",
            ])
            .args(args)
            .current_dir(&self.repo)
            .output()
            .expect("spawn git");
        assert!(
            out.status.success(),
            "git {args:?} failed: {}",
            String::from_utf8_lossy(&out.stderr)
        );
        String::from_utf8_lossy(&out.stdout).trim().to_string()
    }

    pub fn write(&self, rel: &str, content: &str) {
        let path = self.repo.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(path, content).expect("write repo file");
    }

    /// Stages everything and commits, returning the new head sha.
    pub fn commit(&self, message: &str) -> String {
        self.git(&["add", "-A"]);
        self.git(&["commit", "-q", "--allow-empty", "-m", message]);
        self.git(&["rev-parse", "HEAD"])
    }

    /// Base commit with an unrelated file, then a head commit containing `files`.
    pub fn pr_commits(&self, files: &[(&str, &str)]) -> (String, String) {
        self.write("README.md", "# service\n");
        let base = self.commit("base");
        for (rel, content) in files {
            self.write(rel, content);
        }
        let head = self.commit("head");
        (base, head)
    }

    pub fn write_event(&self, body: Option<&str>, base: &str, head: &str) -> PathBuf {
        let payload = serde_json::json!({
            "pull_request": {
                "body": body,
                "base": {"sha": base},
                "head": {"sha": head}
            }
        });
        let path = self.root.join("event.json");
        fs::write(&path, payload.to_string()).expect("write event payload");
        path
    }

    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.root.join("gates.toml");
        fs::write(&path, content).expect("write gate config");
        path
    }

    /// Drops an executable shell stub into the private `PATH`.
    #[cfg(unix)]
    pub fn stub_tool(&self, name: &str, script: &str) {
        use std::os::unix::fs::PermissionsExt;
        let path = self.bin.join(name);
        fs::write(&path, format!("#!/bin/sh\n{script}\n")).expect("write stub");
        let mut perms = fs::metadata(&path).expect("stub metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("chmod stub");
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("gov-gates");
        cmd.env("PATH", &self.bin)
            .env_remove("GITHUB_EVENT_PATH")
            .env_remove("RUST_LOG")
            .arg("--repo-root")
            .arg(&self.repo);
        cmd
    }

    pub fn run_with_event(&self, event: &Path) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("--event-path").arg(event);
        cmd
    }
}
