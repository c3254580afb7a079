use crate::domain::constants::PREAMBLE_SECTION;
use regex::Regex;
use std::sync::LazyLock;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^##\s*(.+)$").expect("heading regex is valid"));

/// Collapses whitespace runs to one space, trims, and lowercases.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Markdown body split on level-2 headings, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    entries: Vec<(String, String)>,
}

impl SectionMap {
    #[cfg(test)]
    pub fn get(&self, heading: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(h, _)| h == heading)
            .map(|(_, text)| text.as_str())
    }

    #[cfg(test)]
    pub fn preamble(&self) -> &str {
        self.get(PREAMBLE_SECTION).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(h, t)| (h.as_str(), t.as_str()))
    }

    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(h, _)| h.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

pub fn split_sections(body: &str) -> SectionMap {
    let mut acc: Vec<(String, Vec<&str>)> = vec![(PREAMBLE_SECTION.to_string(), Vec::new())];
    let mut current = 0;

    for line in body.lines() {
        if let Some(caps) = HEADING.captures(line) {
            let heading = normalize(&caps[1]);
            current = match acc.iter().position(|(h, _)| *h == heading) {
                Some(idx) => idx,
                None => {
                    acc.push((heading, Vec::new()));
                    acc.len() - 1
                }
            };
            continue;
        }
        acc[current].1.push(line);
    }

    SectionMap {
        entries: acc
            .into_iter()
            .map(|(heading, lines)| (heading, lines.join("\n").trim().to_string()))
            .collect(),
    }
}
