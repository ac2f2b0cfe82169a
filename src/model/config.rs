use serde::{Deserialize, Serialize};

/// Default suffix appended when the working tree is dirty
pub const DEFAULT_DIRTY_MARKER: &str = "-dirty";

/// Default abbreviated identifier length
pub const DEFAULT_ABBREV_LENGTH: i32 = 7;

/// Describe options, handed over verbatim by the caller
///
/// `abbrev_length` stays signed so that out-of-range values reach
/// validation in the engine instead of failing at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DescribeConfig {
    /// Fall back to the bare abbreviated id when no tag is reachable
    pub always: bool,
    pub dirty_marker: String,
    /// Glob that candidate tag names must match
    pub match_pattern: Option<String>,
    /// Globs whose matching tag names are dropped
    pub exclude_patterns: Vec<String>,
    pub abbrev_length: i32,
    pub include_lightweight_tags: bool,
    /// Emit `tag-0-gHASH` even when the start commit is tagged
    pub force_long_format: bool,
}

impl Default for DescribeConfig {
    fn default() -> Self {
        Self {
            always: false,
            dirty_marker: DEFAULT_DIRTY_MARKER.to_string(),
            match_pattern: None,
            exclude_patterns: Vec::new(),
            abbrev_length: DEFAULT_ABBREV_LENGTH,
            include_lightweight_tags: false,
            force_long_format: false,
        }
    }
}
