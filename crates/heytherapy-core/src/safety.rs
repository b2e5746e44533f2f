//! Free-text safety screening for check-in narratives.
//!
//! This is a plain substring heuristic. It never blocks a submission; a
//! match only attaches [`EMERGENCY_NOTICE`] to the response.

pub const SELF_HARM_KEYWORD: &str = "suicide";

pub const EMERGENCY_NOTICE: &str = "If you are thinking about harming yourself, please contact \
local emergency services or a crisis line right away. You do not have to go through this alone.";

/// Case-insensitive containment check for the self-harm keyword.
pub fn mentions_self_harm(narrative: &str) -> bool {
    narrative.to_lowercase().contains(SELF_HARM_KEYWORD)
}

pub fn emergency_notice(narrative: &str) -> Option<&'static str> {
    mentions_self_harm(narrative).then_some(EMERGENCY_NOTICE)
}
