use super::CommitId;

/// A tag as listed by the binding
///
/// Annotated tags carry the tagger timestamp; lightweight tags never do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    /// Commit the tag peels to
    pub target: CommitId,
    pub annotated: bool,
    pub tagger_time: Option<i64>,
}

impl Tag {
    pub fn lightweight(name: &str, target: CommitId) -> Self {
        Self {
            name: name.to_string(),
            target,
            annotated: false,
            tagger_time: None,
        }
    }

    pub fn annotated(name: &str, target: CommitId, tagger_time: Option<i64>) -> Self {
        Self {
            name: name.to_string(),
            target,
            annotated: true,
            tagger_time,
        }
    }
}
