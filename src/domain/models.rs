use crate::domain::constants::{
    BOOTSTRAP_ALLOWED_FILES, BOOTSTRAP_ALLOWED_PREFIXES, DEPENDENCY_MANIFESTS, GATE_SCRIPT_PATH,
    GUARD_PATHS, REQUIRED_SECTIONS, TRANSITIONAL_KEYWORDS, TRANSITIONAL_MIN_KEYWORDS,
};
use serde::Deserialize;

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Deserialize, Default)]
pub struct EventPayload {
    #[serde(default)]
    pub pull_request: Option<PullRequest>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PullRequest {
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub base: Option<CommitRef>,
    #[serde(default)]
    pub head: Option<CommitRef>,
}

#[derive(Debug, Deserialize, Default)]
pub struct CommitRef {
    #[serde(default)]
    pub sha: Option<String>,
}

impl CommitRef {
    /// A blank sha is as good as none.
    fn into_sha(self) -> Option<String> {
        self.sha.filter(|sha| !sha.trim().is_empty())
    }
}

/// What the gate knows about the pull request under review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrContext {
    pub body: String,
    pub base_sha: Option<String>,
    pub head_sha: Option<String>,
}

impl From<PullRequest> for PrContext {
    fn from(pr: PullRequest) -> Self {
        Self {
            body: pr.body.unwrap_or_default(),
            base_sha: pr.base.and_then(CommitRef::into_sha),
            head_sha: pr.head.and_then(CommitRef::into_sha),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeStatus {
    Added,
    Modified,
    Deleted,
    Renamed,
    Copied,
    TypeChanged,
    Unmerged,
    Other(char),
}

impl ChangeStatus {
    /// Parses a `git diff --name-status` code; only the leading letter matters
    /// (`R087` is a rename with 87% similarity).
    pub fn from_code(code: &str) -> Option<Self> {
        let c = code.trim().chars().next()?;
        Some(match c.to_ascii_uppercase() {
            'A' => ChangeStatus::Added,
            'M' => ChangeStatus::Modified,
            'D' => ChangeStatus::Deleted,
            'R' => ChangeStatus::Renamed,
            'C' => ChangeStatus::Copied,
            'T' => ChangeStatus::TypeChanged,
            'U' => ChangeStatus::Unmerged,
            other => ChangeStatus::Other(other),
        })
    }

    pub fn code(&self) -> char {
        match self {
            ChangeStatus::Added => 'A',
            ChangeStatus::Modified => 'M',
            ChangeStatus::Deleted => 'D',
            ChangeStatus::Renamed => 'R',
            ChangeStatus::Copied => 'C',
            ChangeStatus::TypeChanged => 'T',
            ChangeStatus::Unmerged => 'U',
            ChangeStatus::Other(c) => *c,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedFile {
    pub path: String,
    /// Origin of a rename or copy.
    pub source: Option<String>,
    pub status: ChangeStatus,
}

impl ChangedFile {
    pub fn new(path: impl Into<String>, status: ChangeStatus) -> Self {
        Self {
            path: path.into(),
            source: None,
            status,
        }
    }

    /// Destination first, then the rename/copy source if there is one.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.path.as_str()).chain(self.source.as_deref())
    }
}

/// Paths changed between base and head, as seen by both diff listings.
#[derive(Debug, Clone, Default)]
pub struct ChangeSet {
    pub files: Vec<String>,
    pub changes: Vec<ChangedFile>,
}

impl ChangeSet {
    pub fn new(files: Vec<String>, changes: Vec<ChangedFile>) -> Self {
        Self { files, changes }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentRule {
    /// Real content: not empty, not a placeholder, not an "n/a"-style dismissal.
    #[default]
    Substantive,
    /// Any deliberate statement, including an explicit "None", as long as it is not template text.
    Intentional,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequiredSectionConfig {
    pub name: String,
    pub patterns: Vec<String>,
    #[serde(default)]
    pub content: ContentRule,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    pub allowed_prefixes: Vec<String>,
    pub allowed_files: Vec<String>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            allowed_prefixes: to_strings(BOOTSTRAP_ALLOWED_PREFIXES),
            allowed_files: to_strings(BOOTSTRAP_ALLOWED_FILES),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransitionalConfig {
    pub keywords: Vec<String>,
    pub min_keywords: usize,
}

impl Default for TransitionalConfig {
    fn default() -> Self {
        Self {
            keywords: to_strings(TRANSITIONAL_KEYWORDS),
            min_keywords: TRANSITIONAL_MIN_KEYWORDS,
        }
    }
}

/// Operator-facing gate policy. Every field falls back to the built-in policy.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    pub gate_script: String,
    pub guard_paths: Vec<String>,
    pub bootstrap: BootstrapConfig,
    pub required_sections: Vec<RequiredSectionConfig>,
    pub transitional: TransitionalConfig,
    pub dependency_manifests: Vec<String>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            gate_script: GATE_SCRIPT_PATH.to_string(),
            guard_paths: to_strings(GUARD_PATHS),
            bootstrap: BootstrapConfig::default(),
            required_sections: REQUIRED_SECTIONS
                .iter()
                .map(|(name, patterns, content)| RequiredSectionConfig {
                    name: name.to_string(),
                    patterns: to_strings(patterns),
                    content: *content,
                })
                .collect(),
            transitional: TransitionalConfig::default(),
            dependency_manifests: to_strings(DEPENDENCY_MANIFESTS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvidenceVerdict {
    /// Every required heading exists with acceptable content.
    Structured,
    /// Structured check failed but the body passes the legacy keyword heuristic.
    Transitional,
    Missing { category: String },
}

impl EvidenceVerdict {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, EvidenceVerdict::Missing { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Clean { tool: String },
    /// Nothing to scan, or no scanner available.
    Skipped { reason: String },
    /// Scanner reported problems that are not allowed to block the PR.
    Tolerated { tool: String, output: String },
    /// Scanner is installed but could not be started.
    Unavailable { tool: String, reason: String },
    Findings { tool: String, output: String },
}

impl ScanOutcome {
    pub fn is_blocking(&self) -> bool {
        matches!(self, ScanOutcome::Findings { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Pass,
    Warn,
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateMessage {
    pub level: Level,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct GateReport {
    pub in_scope: bool,
    pub failed: bool,
    pub messages: Vec<GateMessage>,
}

impl GateReport {
    pub fn push(&mut self, level: Level, text: impl Into<String>) {
        if level == Level::Fail {
            self.failed = true;
        }
        self.messages.push(GateMessage {
            level,
            text: text.into(),
        });
    }

    pub fn passed(&self) -> bool {
        !self.failed
    }

    pub fn exit_code(&self) -> u8 {
        if self.failed {
            1
        } else {
            0
        }
    }
}
