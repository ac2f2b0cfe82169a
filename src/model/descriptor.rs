use std::fmt;

use super::CommitId;

/// Result of a describe call
///
/// Renders through `Display`:
/// - no tag: the abbreviated id
/// - tag at distance 0 in short form: the tag name
/// - otherwise `<tag>-<distance>-g<abbrev>`
///
/// followed by the dirty marker when the working tree was dirty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub tag: Option<String>,
    /// Commit the winning tag points at
    pub tag_commit: Option<CommitId>,
    pub distance: u32,
    pub commit: CommitId,
    pub abbreviated: String,
    pub long_format: bool,
    /// Marker appended when dirty, `None` for a clean tree
    pub dirty_marker: Option<String>,
}

impl Descriptor {
    pub fn is_dirty(&self) -> bool {
        self.dirty_marker.is_some()
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            None => f.write_str(&self.abbreviated)?,
            Some(tag) if self.distance == 0 && !self.long_format => f.write_str(tag)?,
            Some(tag) => write!(f, "{}-{}-g{}", tag, self.distance, self.abbreviated)?,
        }
        if let Some(marker) = &self.dirty_marker {
            f.write_str(marker)?;
        }
        Ok(())
    }
}
