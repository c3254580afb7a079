use crate::domain::errors::GateError;
use crate::domain::models::{
    ContentRule, EvidenceVerdict, GateConfig, RequiredSectionConfig, TransitionalConfig,
};
use crate::services::placeholder::{is_placeholder, satisfies};
use crate::services::sections::{normalize, split_sections, SectionMap};
use regex::{Regex, RegexBuilder};

#[derive(Debug, Clone)]
pub struct RequiredSection {
    pub name: String,
    pub rule: ContentRule,
    patterns: Vec<Regex>,
}

impl RequiredSection {
    pub fn matches_heading(&self, heading: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(heading))
    }
}

/// Compiled, read-only list of evidence categories a PR body must cover.
#[derive(Debug, Clone)]
pub struct EvidenceRequirements {
    sections: Vec<RequiredSection>,
}

impl EvidenceRequirements {
    pub fn compile(configs: &[RequiredSectionConfig]) -> Result<Self, GateError> {
        let mut sections = Vec::with_capacity(configs.len());
        for cfg in configs {
            let mut patterns = Vec::with_capacity(cfg.patterns.len());
            for raw in &cfg.patterns {
                let re = RegexBuilder::new(raw)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| GateError::InvalidPattern {
                        section: cfg.name.clone(),
                        pattern: raw.clone(),
                        source,
                    })?;
                patterns.push(re);
            }
            sections.push(RequiredSection {
                name: cfg.name.clone(),
                rule: cfg.content,
                patterns,
            });
        }
        Ok(Self { sections })
    }

    pub fn iter(&self) -> impl Iterator<Item = &RequiredSection> {
        self.sections.iter()
    }
}

/// Everything `check_pr_evidence` needs: strict requirements plus the legacy fallback.
#[derive(Debug, Clone)]
pub struct EvidencePolicy {
    pub requirements: EvidenceRequirements,
    pub transitional: TransitionalConfig,
}

impl EvidencePolicy {
    pub fn from_config(config: &GateConfig) -> Result<Self, GateError> {
        Ok(Self {
            requirements: EvidenceRequirements::compile(&config.required_sections)?,
            transitional: config.transitional.clone(),
        })
    }
}

/// Checks required categories in declaration order and stops at the first one that is
/// missing or inadequate, returning its name.
pub fn section_present<'a>(
    sections: &SectionMap,
    required: &'a EvidenceRequirements,
) -> Result<(), &'a str> {
    for req in required.iter() {
        let text = sections
            .iter()
            .find(|(heading, _)| req.matches_heading(heading))
            .map(|(_, text)| text);
        match text {
            Some(text) if satisfies(req.rule, text) => {}
            _ => return Err(req.name.as_str()),
        }
    }
    Ok(())
}

pub fn has_transitional_evidence(pr_body: &str, policy: &TransitionalConfig) -> bool {
    if is_placeholder(pr_body) {
        return false;
    }
    let text = normalize(pr_body);
    let hits = policy
        .keywords
        .iter()
        .filter(|kw| text.contains(kw.to_lowercase().as_str()))
        .count();
    hits >= policy.min_keywords
}

pub fn check_pr_evidence(pr_body: &str, policy: &EvidencePolicy) -> EvidenceVerdict {
    let sections = split_sections(pr_body);
    tracing::debug!(
        sections = sections.len(),
        headings = ?sections.headings().collect::<Vec<_>>(),
        "split PR body"
    );
    let missing = match section_present(&sections, &policy.requirements) {
        Ok(()) => return EvidenceVerdict::Structured,
        Err(category) => category,
    };
    if has_transitional_evidence(pr_body, &policy.transitional) {
        return EvidenceVerdict::Transitional;
    }
    EvidenceVerdict::Missing {
        category: missing.to_string(),
    }
}
