//! Rendering a disclosure tier into the context text block
//!
//! Rendering is total: every tier renders to a string, the empty string
//! included, and no absent field can fail it.

use skillgate_types::{DisclosureTier, SkillDocumentation};

/// Fixed trailer under the registry listing
const REGISTRY_TRAILER: &str = "Ask about a specific skill to see its full documentation.";

/// Render a tier into the text the orchestrator merges into the LLM call's
/// instructions
pub fn render(tier: &DisclosureTier) -> String {
    match tier {
        DisclosureTier::None => String::new(),
        DisclosureTier::Breadcrumb { available } => format!("[{available} skills available]"),
        DisclosureTier::Registry { entries } => {
            let mut out = String::from("## Available Skills\n\n");
            for entry in entries {
                out.push_str(&format!("- **{}**: {}\n", entry.id, entry.brief_description));
            }
            out.push('\n');
            out.push_str(REGISTRY_TRAILER);
            out
        }
        // The cap is silent; the caller simply receives fewer skills.
        DisclosureTier::Matched { docs, .. } => render_full_docs(docs),
        DisclosureTier::AllCapped { docs, shown, total } => {
            let mut out = render_full_docs(docs);
            if shown < total {
                out.push_str(&format!(
                    "\n\n[Showing {shown} of {total} skills; {} more available]",
                    total - shown
                ));
            }
            out
        }
    }
}

/// Heading naming each skill, then its instructions verbatim, blank-line
/// separated
fn render_full_docs(docs: &[SkillDocumentation]) -> String {
    docs.iter()
        .map(|doc| format!("## Skill: {}\n\n{}", doc.id, doc.instructions.trim()))
        .collect::<Vec<_>>()
        .join("\n\n")
}
