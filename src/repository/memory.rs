//! In-memory commit graph
//!
//! Lets the describe core be exercised without a repository on disk.

use anyhow::{anyhow, bail, Result};
use gix_hash::ObjectId;
use rustc_hash::{FxHashMap, FxHashSet};

use super::VcsBinding;
use crate::model::{Commit, CommitId, Tag};

#[derive(Debug, Default, Clone)]
pub struct MemoryRepository {
    commits: FxHashMap<CommitId, Commit>,
    refs: FxHashMap<String, CommitId>,
    head: Option<CommitId>,
    tags: Vec<Tag>,
    dirty: bool,
    unreadable: FxHashSet<CommitId>,
    dirty_error: Option<String>,
    next_seed: u64,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a commit with a generated id and make it HEAD
    pub fn add_commit(&mut self, parents: &[CommitId], timestamp: i64) -> CommitId {
        let id = self.generate_id();
        self.insert_commit(Commit {
            id,
            parents: parents.to_vec(),
            timestamp,
        });
        self.head = Some(id);
        id
    }

    /// Add a commit with a caller-chosen id
    pub fn insert_commit(&mut self, commit: Commit) {
        self.commits.insert(commit.id, commit);
    }

    pub fn commit(&self, id: &CommitId) -> Option<&Commit> {
        self.commits.get(id)
    }

    pub fn set_head(&mut self, id: CommitId) {
        self.head = Some(id);
    }

    pub fn set_ref(&mut self, name: &str, id: CommitId) {
        self.refs.insert(name.to_string(), id);
    }

    pub fn add_tag(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    /// Make `parents_of(id)` fail
    pub fn mark_unreadable(&mut self, id: CommitId) {
        self.unreadable.insert(id);
    }

    /// Make the working tree check fail with `message`
    pub fn fail_dirty_check(&mut self, message: &str) {
        self.dirty_error = Some(message.to_string());
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Deterministic, well-spread ids (splitmix64 over a counter)
    fn generate_id(&mut self) -> CommitId {
        let mut bytes = [0u8; 20];
        for chunk in bytes.chunks_mut(8) {
            self.next_seed = self.next_seed.wrapping_add(0x9e37_79b9_7f4a_7c15);
            let mut z = self.next_seed;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^= z >> 31;
            chunk.copy_from_slice(&z.to_be_bytes()[..chunk.len()]);
        }
        ObjectId::from_bytes_or_panic(&bytes).into()
    }
}

impl VcsBinding for MemoryRepository {
    fn resolve_commit(&self, reference: &str) -> Result<Commit> {
        let id = if reference == "HEAD" {
            self.head.ok_or_else(|| anyhow!("HEAD does not point at a commit"))?
        } else if let Some(id) = self.refs.get(reference) {
            *id
        } else if let Some(tag) = self.tags.iter().find(|t| t.name == reference) {
            tag.target
        } else {
            reference
                .parse()
                .map_err(|_| anyhow!("unknown revision {}", reference))?
        };
        self.commits
            .get(&id)
            .cloned()
            .ok_or_else(|| anyhow!("commit {} not found", id))
    }

    fn parents_of(&self, id: &CommitId) -> Result<Vec<CommitId>> {
        if self.unreadable.contains(id) {
            bail!("object {} is unreadable", id);
        }
        self.commits
            .get(id)
            .map(|c| c.parents.clone())
            .ok_or_else(|| anyhow!("commit {} not found", id))
    }

    fn list_tags(&self) -> Result<Vec<Tag>> {
        Ok(self.tags.clone())
    }

    fn is_working_tree_dirty(&self) -> Result<bool> {
        match &self.dirty_error {
            Some(message) => bail!("{}", message),
            None => Ok(self.dirty),
        }
    }

    fn prefix_is_ambiguous(&self, id: &CommitId, hex_len: usize) -> Result<bool> {
        let hex = id.to_hex();
        let prefix = &hex[..hex_len];
        Ok(self
            .commits
            .keys()
            .any(|other| other != id && other.to_hex().starts_with(prefix)))
    }
}
