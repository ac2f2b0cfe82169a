/// Failure of a describe call; no partial result is ever returned
#[derive(Debug, thiserror::Error)]
pub enum DescribeError {
    #[error("abbreviation length {0} is out of range (expected 0..=40)")]
    AbbrevOutOfRange(i32),

    #[error("invalid tag pattern {pattern:?}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("no tags found that can describe {start}")]
    NoTags { start: String },

    #[error("failed to read commit graph")]
    GraphRead(#[source] anyhow::Error),

    #[error("failed to determine working tree state")]
    DirtyCheck(#[source] anyhow::Error),
}

impl DescribeError {
    /// Whether the failure comes from the caller's configuration
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::AbbrevOutOfRange(_) | Self::InvalidPattern { .. })
    }
}
