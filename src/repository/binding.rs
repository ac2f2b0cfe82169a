//! Capability interface over a version-control backend
//!
//! Decouples the describe core from any particular repository library.

use anyhow::Result;

use crate::model::{Commit, CommitId, Tag};

/// Read-only access to a commit graph and its tags
pub trait VcsBinding {
    /// Resolve a symbolic name (`HEAD`, a branch, a tag) or a full id to a commit
    fn resolve_commit(&self, reference: &str) -> Result<Commit>;

    /// Parents of `id`, in commit order
    fn parents_of(&self, id: &CommitId) -> Result<Vec<CommitId>>;

    /// Every tag that peels to a commit
    fn list_tags(&self) -> Result<Vec<Tag>>;

    /// Whether tracked files differ from the checked-out commit
    fn is_working_tree_dirty(&self) -> Result<bool>;

    /// Whether the first `hex_len` hex characters of `id` also prefix another object
    ///
    /// Backends that cannot tell report `false`, which leaves abbreviations
    /// at their requested length.
    fn prefix_is_ambiguous(&self, _id: &CommitId, _hex_len: usize) -> Result<bool> {
        Ok(false)
    }
}
