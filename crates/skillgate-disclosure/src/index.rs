//! Documentation index for registered skills
//!
//! Built once by the loader during startup, then treated as read-only for
//! the rest of the process lifetime. The matching pipeline never mutates it.

use skillgate_types::{brief_from, cap_brief, SkillDocumentation, TriggerSet};
use std::collections::HashMap;
use tracing::debug;

/// Store of per-skill documentation records
///
/// Keys are lowercase skill ids. Registration order is preserved for
/// deterministic iteration. Re-registering an id overwrites the prior record
/// in place (last write wins), keeping the original position.
#[derive(Debug, Default)]
pub struct DocumentationIndex {
    /// Records in registration order
    entries: Vec<SkillDocumentation>,
    /// Skill id to slot in `entries`
    slots: HashMap<String, usize>,
}

impl DocumentationIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a skill, overwriting any prior record with the same id
    ///
    /// The id is lowercased, and is also injected into the trigger set as an
    /// implicit keyword so that a user referencing the skill by name always
    /// matches it even when the manifest author forgot to list it. A declared
    /// but empty trigger set is treated as absent. When `brief_description`
    /// is absent it is derived from the first sentence of the instructions.
    pub fn add_skill(
        &mut self,
        id: &str,
        brief_description: Option<&str>,
        triggers: Option<TriggerSet>,
        instructions: &str,
    ) {
        let id = id.trim().to_lowercase();

        let brief_description = match brief_description {
            Some(brief) => cap_brief(brief),
            None => brief_from(instructions),
        };

        let triggers = triggers.filter(|set| !set.is_empty()).map(|mut set| {
            set.keywords.insert(id.clone());
            set
        });

        let doc = SkillDocumentation {
            id: id.clone(),
            brief_description,
            triggers,
            instructions: instructions.to_string(),
        };

        match self.slots.get(&id) {
            Some(&slot) => {
                debug!(skill = %id, "overwriting previously registered skill");
                self.entries[slot] = doc;
            }
            None => {
                self.slots.insert(id, self.entries.len());
                self.entries.push(doc);
            }
        }
    }

    /// Look up a skill by id, case-insensitively
    pub fn get(&self, id: &str) -> Option<&SkillDocumentation> {
        self.slots
            .get(&id.trim().to_lowercase())
            .map(|&slot| &self.entries[slot])
    }

    /// All records, in registration order
    pub fn get_all(&self) -> &[SkillDocumentation] {
        &self.entries
    }

    /// True when at least one skill is registered
    pub fn has_skills(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Number of registered skills
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}
