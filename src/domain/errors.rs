use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum GateError {
    #[error("failed to read event payload {path}: {source}")]
    EventRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("event payload {path} is not valid JSON: {source}")]
    EventParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to run `git {args}`: {source}")]
    GitSpawn {
        args: String,
        source: std::io::Error,
    },
    #[error("`git {args}` exited with {code}: {stderr}")]
    GitFailed {
        args: String,
        code: String,
        stderr: String,
    },
    #[error("failed to read gate config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid gate config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid heading pattern `{pattern}` for section `{section}`: {source}")]
    InvalidPattern {
        section: String,
        pattern: String,
        source: regex::Error,
    },
}
