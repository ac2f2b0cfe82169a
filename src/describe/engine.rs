use std::time::Instant;

use tracing::debug;

use super::abbrev::{validate_abbrev_length, AbbreviationResolver};
use super::walker::CommitGraphWalker;
use super::{DefaultPriority, DescribeError, TagFilter, TagIndex, TagPriority};
use crate::model::{Commit, DescribeConfig, Descriptor};
use crate::repository::VcsBinding;

/// Computes descriptors for commits of a [`VcsBinding`]
///
/// Holds no per-call state: every call builds its own tag index and
/// visited set, so one engine can serve concurrent callers.
#[derive(Debug, Default, Clone)]
pub struct DescribeEngine<P = DefaultPriority> {
    priority: P,
}

impl DescribeEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: TagPriority> DescribeEngine<P> {
    /// Engine with a custom tie-break among tags on the same commit
    pub fn with_priority(priority: P) -> Self {
        Self { priority }
    }

    /// Resolve `reference` through the binding, then describe it
    pub fn describe_ref<B: VcsBinding + ?Sized>(
        &self,
        binding: &B,
        reference: &str,
        config: &DescribeConfig,
    ) -> Result<Descriptor, DescribeError> {
        validate_abbrev_length(config.abbrev_length)?;
        let start = binding
            .resolve_commit(reference)
            .map_err(DescribeError::GraphRead)?;
        self.describe(binding, &start, config)
    }

    /// Describe `start` relative to its nearest reachable tag
    pub fn describe<B: VcsBinding + ?Sized>(
        &self,
        binding: &B,
        start: &Commit,
        config: &DescribeConfig,
    ) -> Result<Descriptor, DescribeError> {
        let abbrev_length = validate_abbrev_length(config.abbrev_length)?;
        let filter = TagFilter::from_config(config)?;

        let phase_start = Instant::now();
        let tags = binding.list_tags().map_err(DescribeError::GraphRead)?;
        let listed = tags.len();
        let index = TagIndex::build(tags, &filter, &self.priority);
        debug!(
            listed,
            kept = index.len(),
            commits = index.commit_count(),
            elapsed = ?phase_start.elapsed(),
            "built tag index"
        );

        let no_tags = || DescribeError::NoTags {
            start: start.id.to_hex(),
        };

        if index.is_empty() && !config.always {
            return Err(no_tags());
        }

        let hit = if index.is_empty() {
            None
        } else {
            let phase_start = Instant::now();
            let outcome = CommitGraphWalker::new(binding, &index).walk(start)?;
            debug!(
                start = %start.id,
                visited = outcome.visited,
                distance = outcome.hit.map(|h| h.distance),
                elapsed = ?phase_start.elapsed(),
                "walked commit graph"
            );
            outcome.hit
        };

        let winner = match hit {
            Some(hit) => {
                let tag = index.winner(&hit.commit).ok_or_else(no_tags)?;
                Some((tag.name.clone(), hit))
            }
            None if config.always => None,
            None => return Err(no_tags()),
        };

        let abbreviated = AbbreviationResolver::new(binding).abbreviate(&start.id, abbrev_length)?;

        let dirty = binding
            .is_working_tree_dirty()
            .map_err(DescribeError::DirtyCheck)?;

        let (tag, tag_commit, distance) = match winner {
            Some((name, hit)) => (Some(name), Some(hit.commit), hit.distance),
            None => (None, None, 0),
        };

        Ok(Descriptor {
            tag,
            tag_commit,
            distance,
            commit: start.id,
            abbreviated,
            long_format: config.force_long_format,
            dirty_marker: dirty.then(|| config.dirty_marker.clone()),
        })
    }
}
