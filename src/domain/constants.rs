use crate::domain::models::ContentRule;

pub const EVENT_PATH_ENV: &str = "GITHUB_EVENT_PATH";
pub const DEFAULT_EVENT_FILE: &str = "event.json";

/// Path of the gate's own entry point inside a governed repository.
pub const GATE_SCRIPT_PATH: &str = ".github/scripts/gov_security_gates.py";

/// Section key for text that appears before the first `##` heading.
pub const PREAMBLE_SECTION: &str = "_preamble";

pub const GUARD_PATHS: &[&str] = &[
    "GOVERNANCE/",
    "COMPLIANCE/",
    "SECURITY/",
    "EVALUATION/",
    ".github/branch-protection-manifest.md",
    ".github/workflows/gov-security-gates.yml",
    GATE_SCRIPT_PATH,
    ".github/PULL_REQUEST_TEMPLATE.md",
    ".github/CODEOWNERS",
    "CODE_OF_CONDUCT.md",
    "CONTRIBUTING.md",
    "SUPPORT.md",
    "SECURITY.md",
    "CODEOWNERS",
];

pub const BOOTSTRAP_ALLOWED_PREFIXES: &[&str] = &[
    ".github/",
    "GOVERNANCE/",
    "COMPLIANCE/",
    "SECURITY/",
    "EVALUATION/",
];

pub const BOOTSTRAP_ALLOWED_FILES: &[&str] = &[
    "CODEOWNERS",
    "SECURITY.md",
    "SUPPORT.md",
    "CONTRIBUTING.md",
    "CODE_OF_CONDUCT.md",
];

/// Normalized section bodies that declare "nothing to report".
pub const INTENTIONALLY_EMPTY: &[&str] = &[
    "n/a",
    "na",
    "none",
    "not applicable",
    "no security impact",
    "no ai impact",
];

pub const TRANSITIONAL_KEYWORDS: &[&str] = &[
    "security",
    "risk",
    "verification",
    "release",
    "data",
    "threat",
];
pub const TRANSITIONAL_MIN_KEYWORDS: usize = 3;

pub const DEPENDENCY_MANIFESTS: &[&str] = &[
    "package.json",
    "package-lock.json",
    "pnpm-lock.yaml",
    "yarn.lock",
    "requirements.txt",
    "poetry.lock",
    "pyproject.toml",
    "Cargo.toml",
    "Cargo.lock",
];

pub const SECRET_SCANNER_BIN: &str = "gitleaks";
pub const SECRET_SCAN_REPORT_FILE: &str = "gov-gitleaks-report.json";
pub const AUDIT_LEVEL: &str = "high";

pub const REQUIRED_SECTIONS: &[(&str, &[&str], ContentRule)] = &[
    (
        "threat model",
        &["threat model", "threat-model"],
        ContentRule::Substantive,
    ),
    (
        "security impact",
        &[r"security\s*/?\s*privacy", "security impact"],
        ContentRule::Substantive,
    ),
    (
        "ai and data impact",
        &["ai", "data impact", "ai/data"],
        ContentRule::Substantive,
    ),
    (
        "verification evidence",
        &["verification evidence", "how to test"],
        ContentRule::Substantive,
    ),
    (
        "release notes",
        &["release notes", "release note"],
        ContentRule::Intentional,
    ),
];
