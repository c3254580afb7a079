use crate::domain::errors::GateError;
use crate::domain::models::GateConfig;
use std::path::Path;

/// Loads the operator gate policy. Without an explicit file the built-in policy applies;
/// the checked-out tree is never searched, since the PR under review could edit it.
pub fn load_gate_config(path: Option<&Path>) -> Result<GateConfig, GateError> {
    let Some(path) = path else {
        tracing::debug!("using built-in gate policy");
        return Ok(GateConfig::default());
    };
    tracing::debug!(path = %path.display(), "loading gate policy");
    let raw = std::fs::read_to_string(path).map_err(|source| GateError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| GateError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::load_gate_config;
    use crate::domain::constants::{GATE_SCRIPT_PATH, GUARD_PATHS};
    use crate::domain::errors::GateError;
    use crate::domain::models::ContentRule;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn no_file_means_built_in_policy() {
        let cfg = load_gate_config(None).expect("defaults");
        assert_eq!(cfg.gate_script, GATE_SCRIPT_PATH);
        assert_eq!(cfg.guard_paths.len(), GUARD_PATHS.len());
        let names: Vec<_> = cfg.required_sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "threat model",
                "security impact",
                "ai and data impact",
                "verification evidence",
                "release notes"
            ]
        );
        assert_eq!(
            cfg.required_sections.last().map(|s| s.content),
            Some(ContentRule::Intentional)
        );
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("gates.toml");
        fs::write(
            &path,
            r#"
guard_paths = ["policy/"]

[transitional]
min_keywords = 4

[[required_sections]]
name = "rollback plan"
patterns = ["roll\\s*back"]

[[required_sections]]
name = "changelog"
patterns = ["changelog"]
content = "intentional"
"#,
        )
        .expect("write config");

        let cfg = load_gate_config(Some(&path)).expect("parse");
        assert_eq!(cfg.guard_paths, vec!["policy/".to_string()]);
        assert_eq!(cfg.transitional.min_keywords, 4);
        assert_eq!(cfg.transitional.keywords.len(), 6);
        assert_eq!(cfg.required_sections.len(), 2);
        assert_eq!(cfg.required_sections[0].content, ContentRule::Substantive);
        assert_eq!(cfg.required_sections[1].content, ContentRule::Intentional);
        assert_eq!(cfg.gate_script, GATE_SCRIPT_PATH);
        assert!(!cfg.bootstrap.allowed_prefixes.is_empty());
    }

    #[test]
    fn unreadable_and_invalid_files_are_errors() {
        let tmp = TempDir::new().expect("tmp");
        let missing = tmp.path().join("missing.toml");
        assert!(matches!(
            load_gate_config(Some(&missing)),
            Err(GateError::ConfigRead { .. })
        ));

        let bad = tmp.path().join("bad.toml");
        fs::write(&bad, "guard_paths = \"not-a-list\"").expect("write");
        assert!(matches!(
            load_gate_config(Some(&bad)),
            Err(GateError::ConfigParse { .. })
        ));
    }
}
