//! Nearest-tag search over the commit DAG
//!
//! Breadth-first over every parent edge with an explicit queue, so the first
//! tagged commit dequeued is the nearest one and ancestry depth never grows
//! the call stack.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use super::{DescribeError, TagIndex};
use crate::model::{Commit, CommitId};
use crate::repository::VcsBinding;

/// Nearest tagged commit and its edge distance from the start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkHit {
    pub commit: CommitId,
    pub distance: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOutcome {
    /// `None` when no tagged commit is reachable
    pub hit: Option<WalkHit>,
    /// Commits taken off the queue
    pub visited: usize,
}

pub struct CommitGraphWalker<'a, B: ?Sized> {
    binding: &'a B,
    index: &'a TagIndex,
}

impl<'a, B: VcsBinding + ?Sized> CommitGraphWalker<'a, B> {
    pub fn new(binding: &'a B, index: &'a TagIndex) -> Self {
        Self { binding, index }
    }

    /// Find the nearest commit reachable from `start` (inclusive) that carries a tag
    pub fn walk(&self, start: &Commit) -> Result<WalkOutcome, DescribeError> {
        let mut queue: VecDeque<(CommitId, u32)> = VecDeque::new();
        // Marked on enqueue: each commit enters the queue once, at its shortest distance
        let mut seen: FxHashSet<CommitId> = FxHashSet::default();
        let mut visited = 0;

        seen.insert(start.id);
        queue.push_back((start.id, 0));

        while let Some((id, distance)) = queue.pop_front() {
            visited += 1;

            if self.index.is_tagged(&id) {
                return Ok(WalkOutcome {
                    hit: Some(WalkHit {
                        commit: id,
                        distance,
                    }),
                    visited,
                });
            }

            let parents = if id == start.id {
                start.parents.clone()
            } else {
                self.binding
                    .parents_of(&id)
                    .map_err(DescribeError::GraphRead)?
            };

            for parent in parents {
                if seen.insert(parent) {
                    queue.push_back((parent, distance + 1));
                }
            }
        }

        Ok(WalkOutcome { hit: None, visited })
    }
}
