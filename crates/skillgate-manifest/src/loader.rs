//! Skill discovery across configured directories
//!
//! Scans each configured directory's immediate subdirectories for SKILL.md
//! and registers every parseable manifest into a documentation index. A
//! manifest that fails to parse is skipped with a log line; discovery never
//! aborts over one bad skill.

use anyhow::{Context, Result};
use skillgate_disclosure::DocumentationIndex;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::manifest::SkillManifest;

/// Builder-style loader over one or more skills directories
pub struct SkillLoader {
    /// Directories to scan
    directories: Vec<PathBuf>,
}

impl SkillLoader {
    /// Create a loader with no directories configured
    pub fn new() -> Self {
        Self {
            directories: Vec::new(),
        }
    }

    /// Add a skills directory to scan
    pub fn add_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.directories.push(dir.into());
        self
    }

    /// Add the personal skills directory: ~/.skillgate/skills/
    pub fn with_personal_skills(self) -> Self {
        if let Some(home) = dirs::home_dir() {
            self.add_directory(home.join(".skillgate").join("skills"))
        } else {
            warn!("Could not find home directory for personal skills");
            self
        }
    }

    /// Add the project skills directory: ./.skillgate/skills/
    pub fn with_project_skills(self) -> Self {
        self.add_directory(PathBuf::from(".skillgate/skills"))
    }

    /// Scan all configured directories and build the documentation index
    ///
    /// This is the only mutation phase the index ever sees; afterwards it is
    /// handed to the disclosure pipeline by shared reference and stays
    /// read-only.
    pub fn load(&self) -> Result<DocumentationIndex> {
        info!(
            "Starting skills discovery in {} directories",
            self.directories.len()
        );

        let mut index = DocumentationIndex::new();

        for dir in &self.directories {
            if !dir.exists() {
                debug!("Skills directory does not exist: {:?}", dir);
                continue;
            }

            if !dir.is_dir() {
                warn!("Skills path is not a directory: {:?}", dir);
                continue;
            }

            scan_directory(dir, &mut index)?;
        }

        info!("Registered {} skills", index.count());
        Ok(index)
    }
}

impl Default for SkillLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan a single directory and register every parseable skill
fn scan_directory(dir: &Path, index: &mut DocumentationIndex) -> Result<()> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("Failed to read directory {:?}", dir))?;

    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        if !path.is_dir() {
            continue;
        }

        match SkillManifest::from_dir(&path) {
            Ok(manifest) => {
                debug!("Registered skill: {} from {:?}", manifest.name, path);
                manifest.register_into(index);
            }
            Err(e) => {
                debug!("Skipping {:?}: {}", path, e);
            }
        }
    }

    Ok(())
}
