//! Skillgate Disclosure Engine
//!
//! Progressive disclosure of skill documentation: given the latest user
//! message and the registered skills, decide how much documentation the next
//! LLM call's context should carry and render it as a bounded text block.
//!
//! ## Tiers
//!
//! - Nothing, when no skills are registered
//! - A constant-size breadcrumb, when skills exist but none are relevant
//! - A brief registry listing, when the user asks what the assistant can do
//! - Full documentation for matched skills, capped
//! - Full documentation for all skills, capped, when explicitly requested
//!
//! ## Architecture
//!
//! The pipeline is a synchronous pure function of the message and the index:
//! classify intent, match triggers, select a tier, render it. It performs no
//! I/O and keeps no state between requests, so concurrent invocation over a
//! shared index needs no locking.

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod assembler;
pub mod index;
pub mod intent;
pub mod matcher;
pub mod selector;

pub use index::DocumentationIndex;
pub use intent::RequestIntent;
pub use skillgate_types::{DisclosureConfig, DisclosureTier, SkillDocumentation, TriggerSet};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{provide_context, DisclosureConfig, DocumentationIndex};
}

/// Produce the skill-documentation context block for one LLM turn
///
/// Returns the assembled text (possibly empty) for the orchestrator to merge
/// into the call's instructions. This function calls no LLM and mutates
/// nothing; invoking it twice with the same message and an unmodified index
/// yields byte-identical output.
pub fn provide_context(
    message: &str,
    index: &DocumentationIndex,
    config: &DisclosureConfig,
) -> String {
    let intent = intent::classify(message);
    let matches = matcher::match_skills(message, index);
    let tier = selector::select_tier(&matches, intent, index, config);
    assembler::render(&tier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillgate_types::TriggerSet;

    fn sample_index() -> DocumentationIndex {
        let mut index = DocumentationIndex::new();

        let mut greeting = TriggerSet::default();
        greeting.keywords.extend(
            ["hello", "greet", "bonjour"]
                .into_iter()
                .map(String::from),
        );
        index.add_skill(
            "hello-extended",
            Some("Greets people in several languages"),
            Some(greeting),
            "Greet the user warmly. Prefer their language if known.",
        );

        index.add_skill(
            "release-notes",
            Some("Drafts release notes"),
            None,
            "Collect merged changes and draft release notes.",
        );

        index.add_skill(
            "triage",
            Some("Sorts incoming bug reports"),
            None,
            "Label and prioritize incoming bug reports.",
        );

        index
    }

    #[test]
    fn test_matched_skill_renders_its_instructions() {
        let text = provide_context(
            "Say bonjour to Alice",
            &sample_index(),
            &DisclosureConfig::default(),
        );

        assert!(text.starts_with("## Skill: hello-extended"));
        assert!(text.contains("Greet the user warmly."));
        assert!(!text.contains("release-notes"));
    }

    #[test]
    fn test_unmatched_message_gets_breadcrumb() {
        let text = provide_context(
            "What is 2+2?",
            &sample_index(),
            &DisclosureConfig::default(),
        );
        assert_eq!(text, "[3 skills available]");
    }

    #[test]
    fn test_capability_intent_beats_trigger_match() {
        // "do" phrasing carries the intent while "greet" would match a
        // skill keyword; the registry listing must win.
        let text = provide_context(
            "What can you do? Can you greet people?",
            &sample_index(),
            &DisclosureConfig::default(),
        );

        assert!(text.starts_with("## Available Skills"));
        assert!(text.contains("- **hello-extended**: Greets people in several languages"));
        assert!(text.contains("- **release-notes**: "));
        assert!(text.contains("- **triage**: "));
        assert!(!text.contains("Greet the user warmly."));
    }

    #[test]
    fn test_empty_index_floor() {
        let index = DocumentationIndex::new();
        let config = DisclosureConfig::default();

        assert_eq!(provide_context("anything", &index, &config), "");
        assert_eq!(provide_context("What can you do?", &index, &config), "");
        assert_eq!(provide_context("show all skills", &index, &config), "");
    }

    #[test]
    fn test_idempotence() {
        let index = sample_index();
        let config = DisclosureConfig::default();

        for message in ["Say bonjour", "What can you do?", "show all skills", "?"] {
            let first = provide_context(message, &index, &config);
            let second = provide_context(message, &index, &config);
            assert_eq!(first, second, "message: {message}");
        }
    }

    #[test]
    fn test_match_cap_keeps_first_in_index_order() {
        let mut index = DocumentationIndex::new();
        for i in 0..5 {
            let mut triggers = TriggerSet::default();
            triggers.keywords.insert("widget".to_string());
            index.add_skill(
                &format!("skill-{i}"),
                None,
                Some(triggers),
                &format!("Handle widgets, variant {i}."),
            );
        }

        let text = provide_context("fix the widget", &index, &DisclosureConfig::default());

        for expected in ["skill-0", "skill-1", "skill-2"] {
            assert!(text.contains(&format!("## Skill: {expected}")));
        }
        assert!(!text.contains("skill-3"));
        assert!(!text.contains("skill-4"));
    }

    #[test]
    fn test_show_all_respects_cap_and_notes_total() {
        let mut index = DocumentationIndex::new();
        for i in 0..12 {
            index.add_skill(&format!("skill-{i:02}"), None, None, "Full body here.");
        }

        let text = provide_context("show all skills", &index, &DisclosureConfig::default());

        assert!(text.contains("## Skill: skill-00"));
        assert!(text.contains("## Skill: skill-09"));
        assert!(!text.contains("## Skill: skill-10"));
        assert!(text.contains("[Showing 10 of 12 skills; 2 more available]"));
    }
}
