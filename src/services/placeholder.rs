use crate::domain::constants::INTENTIONALLY_EMPTY;
use crate::domain::models::ContentRule;
use crate::services::sections::normalize;
use regex::Regex;
use std::sync::LazyLock;

// "add" may be separated from "details" by anything, line breaks included.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\[PROMPT:|TODO:|TBD|replace this|\badd\b.*?\bdetails")
        .expect("placeholder regex is valid")
});

/// True when the text still carries template scaffolding.
pub fn is_placeholder(text: &str) -> bool {
    PLACEHOLDER.is_match(text)
}

pub fn section_has_content(text: &str) -> bool {
    if text.is_empty() || is_placeholder(text) {
        return false;
    }
    let compact = normalize(text);
    !compact.is_empty() && !INTENTIONALLY_EMPTY.contains(&compact.as_str())
}

/// Non-empty and not template text; an explicit "None" qualifies.
pub fn section_is_intentional(text: &str) -> bool {
    !text.is_empty() && !is_placeholder(text)
}

pub fn satisfies(rule: ContentRule, text: &str) -> bool {
    match rule {
        ContentRule::Substantive => section_has_content(text),
        ContentRule::Intentional => section_is_intentional(text),
    }
}
