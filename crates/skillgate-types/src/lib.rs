//! Skillgate Types - Core types for the skillgate disclosure engine
//!
//! This module defines the data types shared between the disclosure engine
//! and the manifest loader.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Maximum length of a brief description shown in registry listings
pub const BRIEF_DESCRIPTION_MAX: usize = 80;

/// Lexical trigger hints declared by a skill
///
/// Keywords and verbs are matched as whole words; patterns are raw regex
/// sources evaluated case-insensitively against the user message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerSet {
    #[serde(default)]
    pub keywords: BTreeSet<String>,
    #[serde(default)]
    pub verbs: BTreeSet<String>,
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl TriggerSet {
    /// True when no keywords, verbs, or patterns are declared
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty() && self.verbs.is_empty() && self.patterns.is_empty()
    }
}

/// Documentation record for a single registered skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDocumentation {
    /// Canonical skill identifier (lowercase)
    pub id: String,
    /// One-line description for registry listings, capped at
    /// [`BRIEF_DESCRIPTION_MAX`] characters
    pub brief_description: String,
    /// Trigger hints; `None` when the manifest declared none, in which case
    /// the skill only ever matches by name
    pub triggers: Option<TriggerSet>,
    /// Full documentation body, injected verbatim when the skill matches
    pub instructions: String,
}

/// Derive a registry one-liner from the first sentence of `text`
///
/// Takes the first non-empty line, strips leading markdown heading marks,
/// cuts at the first sentence terminator, and caps the result at
/// [`BRIEF_DESCRIPTION_MAX`] characters.
pub fn brief_from(text: &str) -> String {
    let line = text
        .lines()
        .map(|l| l.trim().trim_start_matches('#').trim_start())
        .find(|l| !l.is_empty())
        .unwrap_or("");

    // Cut at the first terminator that ends a sentence, not one inside a
    // token like a version number.
    let mut end = line.len();
    for (i, c) in line.char_indices() {
        if matches!(c, '.' | '!' | '?') {
            let rest = &line[i + c.len_utf8()..];
            if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                end = i;
                break;
            }
        }
    }

    cap_brief(line[..end].trim())
}

/// Cap a brief description at [`BRIEF_DESCRIPTION_MAX`] characters
pub fn cap_brief(text: &str) -> String {
    let text = text.trim();
    if text.chars().count() <= BRIEF_DESCRIPTION_MAX {
        return text.to_string();
    }
    let mut capped: String = text.chars().take(BRIEF_DESCRIPTION_MAX - 3).collect();
    capped.push_str("...");
    capped
}

/// A single registry listing entry: skill id plus its brief description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub id: String,
    pub brief_description: String,
}

/// How much skill documentation to disclose for one request
///
/// Exactly one tier is selected per request; tiers are never persisted or
/// shared across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisclosureTier {
    /// No skills registered; nothing to disclose
    None,
    /// Skills exist but none are relevant; emit a constant-size hint
    Breadcrumb {
        /// Number of registered skills
        available: usize,
    },
    /// The user asked what the assistant can do; list every skill briefly
    Registry {
        /// One entry per registered skill, in registration order
        entries: Vec<RegistryEntry>,
    },
    /// One or more skills matched the message; inject their full docs
    Matched {
        /// Matched skills in registration order, capped at `max_skills`
        docs: Vec<SkillDocumentation>,
        /// Number of matches dropped by the cap
        truncated: usize,
    },
    /// The user asked for all skill documentation
    AllCapped {
        /// Skills in registration order, capped at `max_all_skills`
        docs: Vec<SkillDocumentation>,
        /// Number of skills included
        shown: usize,
        /// Total number of registered skills
        total: usize,
    },
}

/// Disclosure caps, tunable per deployment
///
/// Both caps bound how much documentation a single request may inject into
/// the context.
#[derive(Debug, Clone, Deserialize)]
pub struct DisclosureConfig {
    /// Maximum number of matched skills disclosed in full per request
    #[serde(default = "default_max_skills")]
    pub max_skills: usize,
    /// Maximum number of skills disclosed in full for a "show all" request
    #[serde(default = "default_max_all_skills")]
    pub max_all_skills: usize,
}

fn default_max_skills() -> usize {
    3
}

fn default_max_all_skills() -> usize {
    10
}

impl Default for DisclosureConfig {
    fn default() -> Self {
        Self {
            max_skills: default_max_skills(),
            max_all_skills: default_max_all_skills(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brief_from_first_sentence() {
        let brief = brief_from("Reviews code for best practices. Use when reviewing code.");
        assert_eq!(brief, "Reviews code for best practices");
    }

    #[test]
    fn test_brief_from_skips_heading_marks() {
        let brief = brief_from("# Code Reviewer\n\nReviews code.");
        assert_eq!(brief, "Code Reviewer");
    }

    #[test]
    fn test_brief_from_caps_length() {
        let long = "word ".repeat(40);
        let brief = brief_from(&long);
        assert!(brief.chars().count() <= BRIEF_DESCRIPTION_MAX);
        assert!(brief.ends_with("..."));
    }

    #[test]
    fn test_brief_from_keeps_inline_dots() {
        let brief = brief_from("Builds v2.5 release artifacts. Slow.");
        assert_eq!(brief, "Builds v2.5 release artifacts");
    }

    #[test]
    fn test_brief_from_empty() {
        assert_eq!(brief_from(""), "");
        assert_eq!(brief_from("\n\n"), "");
    }

    #[test]
    fn test_trigger_set_is_empty() {
        assert!(TriggerSet::default().is_empty());

        let mut triggers = TriggerSet::default();
        triggers.keywords.insert("deploy".to_string());
        assert!(!triggers.is_empty());
    }

    #[test]
    fn test_config_defaults() {
        let config = DisclosureConfig::default();
        assert_eq!(config.max_skills, 3);
        assert_eq!(config.max_all_skills, 10);
    }
}
