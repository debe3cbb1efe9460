//! Error types for skill manifest loading

use std::path::PathBuf;
use thiserror::Error;

/// Skill manifest errors
#[derive(Debug, Error)]
pub enum ManifestError {
    /// SKILL.md missing from a skill directory
    #[error("SKILL.md not found in {dir:?}")]
    MissingManifest {
        /// The skill directory that was scanned
        dir: PathBuf,
    },

    /// Frontmatter block missing or unterminated
    #[error("No valid YAML frontmatter found in {path:?}")]
    MissingFrontmatter {
        /// Path of the offending manifest
        path: PathBuf,
    },

    /// Frontmatter failed to deserialize
    #[error("Invalid frontmatter in {path:?}: {source}")]
    InvalidFrontmatter {
        /// Path of the offending manifest
        path: PathBuf,
        /// The underlying YAML error
        source: serde_yaml::Error,
    },

    /// Name violates the allowed character set
    #[error("Skill name '{name}' must contain only lowercase letters, numbers, and hyphens")]
    InvalidName {
        /// The rejected name
        name: String,
    },

    /// A required field is empty
    #[error("Skill {field} cannot be empty in {path:?}")]
    EmptyField {
        /// Path of the offending manifest
        path: PathBuf,
        /// Which field was empty
        field: &'static str,
    },

    /// A fixed parsing pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, ManifestError>;
