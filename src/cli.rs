use crate::domain::constants::{DEFAULT_EVENT_FILE, EVENT_PATH_ENV};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gov-gates",
    version,
    about = "Governance/security gate for pull requests touching policy-sensitive paths"
)]
pub struct Cli {
    #[arg(
        long,
        default_value = ".",
        help = "Repository checkout to diff and scan"
    )]
    pub repo_root: PathBuf,
    #[arg(
        long,
        env = EVENT_PATH_ENV,
        help = "CI event payload (defaults to <repo-root>/event.json)"
    )]
    pub event_path: Option<PathBuf>,
    #[arg(long, help = "TOML gate policy overriding the built-in policy")]
    pub config: Option<PathBuf>,
    #[arg(short, long, help = "Emit debug diagnostics on stderr")]
    pub verbose: bool,
}

impl Cli {
    pub fn resolved_event_path(&self) -> PathBuf {
        self.event_path
            .clone()
            .unwrap_or_else(|| self.repo_root.join(DEFAULT_EVENT_FILE))
    }
}
