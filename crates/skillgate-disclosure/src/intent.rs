//! Intent classification for capability questions
//!
//! Two special request intents bypass ordinary trigger matching: asking what
//! the assistant can do, and asking to see every skill's documentation. The
//! capability-list check runs first, so the two can never both apply to the
//! same message.

use regex::Regex;

/// Special request intents, detected independently of trigger matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestIntent {
    /// No special intent detected
    None,
    /// The user asked for a capability overview
    WantsCapabilityList,
    /// The user asked for every skill's documentation
    WantsAllDocumentation,
}

/// Phrasings meaning "what can you do / list your capabilities"
const CAPABILITY_LIST: &str = r"(?i)\b(what (can|do) you do|what are your (skills|capabilities|abilities)|what skills (do you (have|know|offer)|are (available|there))|list (your |the )?(capabilities|abilities)|what can you help( me)? with)\b";

/// Phrasings meaning "show/list all skills (documentation)"
const ALL_DOCUMENTATION: &str = r"(?i)\b(show|list|display|print)( me)?( all| every)( of)?( your| the)? skills?( documentation| docs)?\b";

/// Classify the current message
///
/// Checked in fixed priority: capability list first, then all-documentation.
/// An empty message carries no intent.
pub fn classify(message: &str) -> RequestIntent {
    if message.trim().is_empty() {
        return RequestIntent::None;
    }
    if phrase_match(CAPABILITY_LIST, message) {
        return RequestIntent::WantsCapabilityList;
    }
    if phrase_match(ALL_DOCUMENTATION, message) {
        return RequestIntent::WantsAllDocumentation;
    }
    RequestIntent::None
}

/// Both alternations are fixed sources; a compile failure is treated as a
/// non-match rather than unwinding into the request path.
fn phrase_match(pattern: &str, message: &str) -> bool {
    // Compiled per call; the pipeline runs once per LLM turn.
    Regex::new(pattern)
        .map(|re| re.is_match(message))
        .unwrap_or(false)
}
