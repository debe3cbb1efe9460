//! Trigger matching between the current message and the index
//!
//! Per skill, strategies run in a fixed order and the first hit wins: name,
//! then keywords, then verbs, then regex patterns. A skill that declares no
//! trigger set only ever matches by name; its brief description and
//! instructions are never scanned as fallback text.

use regex::{Regex, RegexBuilder};
use skillgate_types::SkillDocumentation;
use tracing::{debug, warn};

use crate::index::DocumentationIndex;

/// A single matching strategy: does `message` make this skill relevant?
pub type MatchStrategy = fn(&SkillDocumentation, &str) -> bool;

/// Ordered strategy list. Adding a future strategy means appending here; the
/// matching loop stays untouched.
const STRATEGIES: &[(&str, MatchStrategy)] = &[
    ("name", name_strategy),
    ("keyword", keyword_strategy),
    ("verb", verb_strategy),
    ("pattern", pattern_strategy),
];

/// Match a user message against every registered skill
///
/// Results keep the index's registration order; ids are unique in the index,
/// so the result carries no duplicates. Matching is case-insensitive
/// throughout. An empty or whitespace-only message matches nothing.
pub fn match_skills<'a>(
    message: &str,
    index: &'a DocumentationIndex,
) -> Vec<&'a SkillDocumentation> {
    if message.trim().is_empty() {
        return Vec::new();
    }

    let mut matched = Vec::new();
    for doc in index.get_all() {
        if let Some((strategy, _)) = STRATEGIES.iter().find(|(_, s)| s(doc, message)) {
            debug!(skill = %doc.id, strategy = *strategy, "skill matched");
            matched.push(doc);
        }
    }
    matched
}

/// Whole-word, case-insensitive containment test
///
/// Word boundaries keep "apple" from matching inside "applesauce". The term
/// is escaped before compilation, so the pattern always compiles; a failure
/// is treated as a non-match rather than unwinding into the request path.
fn word_match(message: &str, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return false;
    }
    let pattern = format!(r"(?i)\b{}\b", regex::escape(term));
    Regex::new(&pattern)
        .map(|re| re.is_match(message))
        .unwrap_or(false)
}

/// The skill id itself, matched as a whole word
fn name_strategy(doc: &SkillDocumentation, message: &str) -> bool {
    word_match(message, &doc.id)
}

fn keyword_strategy(doc: &SkillDocumentation, message: &str) -> bool {
    let Some(triggers) = &doc.triggers else {
        return false;
    };
    triggers.keywords.iter().any(|k| word_match(message, k))
}

fn verb_strategy(doc: &SkillDocumentation, message: &str) -> bool {
    let Some(triggers) = &doc.triggers else {
        return false;
    };
    triggers.verbs.iter().any(|v| word_match(message, v))
}

/// User-supplied regex patterns, evaluated case-insensitively
///
/// A pattern that fails to compile is logged with its skill and source, then
/// skipped; remaining patterns, strategies, and skills proceed unaffected.
fn pattern_strategy(doc: &SkillDocumentation, message: &str) -> bool {
    let Some(triggers) = &doc.triggers else {
        return false;
    };
    triggers.patterns.iter().any(|source| {
        // Compiled per evaluation; the pipeline runs once per LLM turn, so
        // compile cost is negligible at realistic skill counts.
        match RegexBuilder::new(source).case_insensitive(true).build() {
            Ok(re) => re.is_match(message),
            Err(error) => {
                warn!(
                    skill = %doc.id,
                    pattern = %source,
                    %error,
                    "skipping malformed trigger pattern"
                );
                false
            }
        }
    })
}
