//! Tier selection
//!
//! A pure decision table over trigger matches, request intent, and index
//! state. Exactly one tier comes out per request.

use skillgate_types::{DisclosureConfig, DisclosureTier, RegistryEntry, SkillDocumentation};

use crate::index::DocumentationIndex;
use crate::intent::RequestIntent;

/// Select the disclosure tier for one request
///
/// Precedence: explicit capability intents first, then trigger matches, then
/// the breadcrumb hint. An empty index always yields the silent tier,
/// whatever the message says.
pub fn select_tier(
    matches: &[&SkillDocumentation],
    intent: RequestIntent,
    index: &DocumentationIndex,
    config: &DisclosureConfig,
) -> DisclosureTier {
    if !index.has_skills() {
        return DisclosureTier::None;
    }

    match intent {
        RequestIntent::WantsCapabilityList => DisclosureTier::Registry {
            entries: index
                .get_all()
                .iter()
                .map(|doc| RegistryEntry {
                    id: doc.id.clone(),
                    brief_description: doc.brief_description.clone(),
                })
                .collect(),
        },
        RequestIntent::WantsAllDocumentation => {
            let total = index.count();
            let shown = total.min(config.max_all_skills);
            DisclosureTier::AllCapped {
                docs: index.get_all()[..shown].to_vec(),
                shown,
                total,
            }
        }
        RequestIntent::None if !matches.is_empty() => {
            let kept = matches.len().min(config.max_skills);
            DisclosureTier::Matched {
                docs: matches[..kept].iter().map(|doc| (*doc).clone()).collect(),
                truncated: matches.len() - kept,
            }
        }
        RequestIntent::None => DisclosureTier::Breadcrumb {
            available: index.count(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(count: usize) -> DocumentationIndex {
        let mut index = DocumentationIndex::new();
        for i in 0..count {
            index.add_skill(&format!("skill-{i}"), None, None, "Instructions.");
        }
        index
    }

    #[test]
    fn test_empty_index_always_silent() {
        let index = DocumentationIndex::new();
        let config = DisclosureConfig::default();

        for intent in [
            RequestIntent::None,
            RequestIntent::WantsCapabilityList,
            RequestIntent::WantsAllDocumentation,
        ] {
            assert_eq!(
                select_tier(&[], intent, &index, &config),
                DisclosureTier::None
            );
        }
    }

    #[test]
    fn test_capability_intent_lists_all_skills() {
        let index = index_of(3);
        let config = DisclosureConfig::default();

        // Registry covers the whole index even when trigger matches exist.
        let matches: Vec<_> = index.get_all().iter().take(1).collect();
        let tier = select_tier(
            &matches,
            RequestIntent::WantsCapabilityList,
            &index,
            &config,
        );
        match tier {
            DisclosureTier::Registry { entries } => assert_eq!(entries.len(), 3),
            other => panic!("expected Registry, got {other:?}"),
        }
    }

    #[test]
    fn test_all_documentation_caps_and_counts() {
        let index = index_of(12);
        let config = DisclosureConfig::default();

        let tier = select_tier(&[], RequestIntent::WantsAllDocumentation, &index, &config);
        match tier {
            DisclosureTier::AllCapped { docs, shown, total } => {
                assert_eq!(docs.len(), 10);
                assert_eq!(shown, 10);
                assert_eq!(total, 12);
                assert_eq!(docs[0].id, "skill-0");
            }
            other => panic!("expected AllCapped, got {other:?}"),
        }
    }

    #[test]
    fn test_matched_caps_in_index_order() {
        let index = index_of(5);
        let config = DisclosureConfig::default();

        let matches: Vec<_> = index.get_all().iter().collect();
        let tier = select_tier(&matches, RequestIntent::None, &index, &config);
        match tier {
            DisclosureTier::Matched { docs, truncated } => {
                let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
                assert_eq!(ids, vec!["skill-0", "skill-1", "skill-2"]);
                assert_eq!(truncated, 2);
            }
            other => panic!("expected Matched, got {other:?}"),
        }
    }

    #[test]
    fn test_no_match_yields_breadcrumb() {
        let index = index_of(3);
        let config = DisclosureConfig::default();

        assert_eq!(
            select_tier(&[], RequestIntent::None, &index, &config),
            DisclosureTier::Breadcrumb { available: 3 }
        );
    }
}
