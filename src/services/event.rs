use crate::domain::errors::GateError;
use crate::domain::models::{EventPayload, PrContext};
use std::path::Path;

/// Reads the CI event payload. `Ok(None)` means there is no pull request to review:
/// the file is missing or carries no `pull_request` object.
pub fn load_pr_context(path: &Path) -> Result<Option<PrContext>, GateError> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(path).map_err(|source| GateError::EventRead {
        path: path.to_path_buf(),
        source,
    })?;
    let payload: EventPayload =
        serde_json::from_str(&raw).map_err(|source| GateError::EventParse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(payload.pull_request.map(PrContext::from))
}
