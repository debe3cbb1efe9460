//! Skill manifest parsing
//!
//! Each skill is a folder containing SKILL.md with YAML frontmatter naming
//! the skill and declaring its trigger hints; the markdown body is the
//! documentation injected when the skill matches.

use regex::Regex;
use serde::Deserialize;
use skillgate_disclosure::DocumentationIndex;
use skillgate_types::{brief_from, TriggerSet};
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::error::{ManifestError, Result};

/// Maximum allowed name length
const MAX_NAME_LENGTH: usize = 64;
/// Maximum allowed description length
const MAX_DESCRIPTION_LENGTH: usize = 1024;

/// YAML frontmatter of a SKILL.md file
#[derive(Debug, Deserialize)]
struct Frontmatter {
    name: String,
    description: String,
    #[serde(default)]
    brief_description: Option<String>,
    #[serde(default)]
    triggers: Option<TriggerSet>,
}

/// A parsed skill manifest
#[derive(Debug, Clone)]
pub struct SkillManifest {
    /// Skill name (lowercase letters, digits, and hyphens)
    pub name: String,
    /// What the skill does and when to use it
    pub description: String,
    /// Optional explicit registry one-liner
    pub brief_description: Option<String>,
    /// Optional lexical trigger hints; absent means the skill only ever
    /// matches by name
    pub triggers: Option<TriggerSet>,
    /// Markdown body: the documentation injected when the skill matches
    pub instructions: String,
}

impl SkillManifest {
    /// Load and parse the SKILL.md inside a skill directory
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let manifest_path = dir.join("SKILL.md");

        if !manifest_path.exists() {
            return Err(ManifestError::MissingManifest {
                dir: dir.to_path_buf(),
            });
        }

        let content = fs::read_to_string(&manifest_path)?;
        Self::parse(&content, &manifest_path)
    }

    /// Parse SKILL.md content
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let (yaml, body) = split_frontmatter(content, path)?;

        let frontmatter: Frontmatter =
            serde_yaml::from_str(yaml).map_err(|source| ManifestError::InvalidFrontmatter {
                path: path.to_path_buf(),
                source,
            })?;

        let manifest = Self {
            name: frontmatter.name,
            description: frontmatter.description,
            brief_description: frontmatter.brief_description,
            triggers: frontmatter.triggers,
            instructions: body.trim_start().to_string(),
        };

        manifest.validate(path)?;
        Ok(manifest)
    }

    /// Register this manifest into a documentation index
    ///
    /// The registry one-liner prefers the explicit brief description,
    /// falling back to the first sentence of the full description.
    pub fn register_into(&self, index: &mut DocumentationIndex) {
        let brief = self
            .brief_description
            .clone()
            .unwrap_or_else(|| brief_from(&self.description));

        index.add_skill(
            &self.name,
            Some(&brief),
            self.triggers.clone(),
            &self.instructions,
        );
    }

    /// Validate manifest fields
    fn validate(&self, path: &Path) -> Result<()> {
        if self.name.is_empty() {
            return Err(ManifestError::EmptyField {
                path: path.to_path_buf(),
                field: "name",
            });
        }

        if self.name.len() > MAX_NAME_LENGTH {
            warn!(
                "Skill name '{}' exceeds {} characters (was {})",
                self.name,
                MAX_NAME_LENGTH,
                self.name.len()
            );
        }

        let name_re = Regex::new(r"^[a-z0-9-]+$")?;
        if !name_re.is_match(&self.name) {
            return Err(ManifestError::InvalidName {
                name: self.name.clone(),
            });
        }

        if self.description.is_empty() {
            return Err(ManifestError::EmptyField {
                path: path.to_path_buf(),
                field: "description",
            });
        }

        if self.description.len() > MAX_DESCRIPTION_LENGTH {
            warn!(
                "Skill '{}' description exceeds {} characters (was {})",
                self.name,
                MAX_DESCRIPTION_LENGTH,
                self.description.len()
            );
        }

        Ok(())
    }
}

/// Split SKILL.md content into its YAML frontmatter and markdown body
fn split_frontmatter<'a>(content: &'a str, path: &Path) -> Result<(&'a str, &'a str)> {
    let frontmatter_re = Regex::new(r"^---\s*\n([\s\S]*?)\n---\s*\n?([\s\S]*)$")?;

    let captures = frontmatter_re
        .captures(content)
        .ok_or_else(|| ManifestError::MissingFrontmatter {
            path: path.to_path_buf(),
        })?;

    let yaml = captures
        .get(1)
        .ok_or_else(|| ManifestError::MissingFrontmatter {
            path: path.to_path_buf(),
        })?
        .as_str();

    let body = captures.get(2).map(|m| m.as_str()).unwrap_or("");

    Ok((yaml, body))
}
