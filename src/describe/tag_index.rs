//! Tag filtering and per-commit candidate ordering

use std::cmp::Ordering;

use globset::{Glob, GlobMatcher, GlobSet, GlobSetBuilder};
use rustc_hash::FxHashMap;

use super::DescribeError;
use crate::model::{CommitId, DescribeConfig, Tag};

/// Tie-break policy among tags on the same commit
///
/// `Ordering::Less` means `a` outranks `b`.
pub trait TagPriority {
    fn compare(&self, a: &Tag, b: &Tag) -> Ordering;
}

/// Annotated before lightweight, then later tagger time, then greatest name
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultPriority;

impl TagPriority for DefaultPriority {
    fn compare(&self, a: &Tag, b: &Tag) -> Ordering {
        b.annotated
            .cmp(&a.annotated)
            .then_with(|| {
                if a.annotated && b.annotated {
                    b.tagger_time.cmp(&a.tagger_time)
                } else {
                    Ordering::Equal
                }
            })
            .then_with(|| b.name.cmp(&a.name))
    }
}

/// Which tags may take part in a describe
#[derive(Debug, Clone)]
pub struct TagFilter {
    include_lightweight: bool,
    matcher: Option<GlobMatcher>,
    excludes: GlobSet,
}

impl TagFilter {
    pub fn from_config(config: &DescribeConfig) -> Result<Self, DescribeError> {
        let matcher = config
            .match_pattern
            .as_deref()
            .map(|p| compile(p).map(|g| g.compile_matcher()))
            .transpose()?;

        let mut builder = GlobSetBuilder::new();
        for pattern in &config.exclude_patterns {
            builder.add(compile(pattern)?);
        }
        let excludes = builder.build().map_err(|source| DescribeError::InvalidPattern {
            pattern: config.exclude_patterns.join(","),
            source,
        })?;

        Ok(Self {
            include_lightweight: config.include_lightweight_tags,
            matcher,
            excludes,
        })
    }

    pub fn accepts(&self, tag: &Tag) -> bool {
        if !tag.annotated && !self.include_lightweight {
            return false;
        }
        if let Some(matcher) = &self.matcher {
            if !matcher.is_match(&tag.name) {
                return false;
            }
        }
        !self.excludes.is_match(&tag.name)
    }
}

fn compile(pattern: &str) -> Result<Glob, DescribeError> {
    Glob::new(pattern).map_err(|source| DescribeError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Filtered tags grouped by the commit they point at
#[derive(Debug, Default)]
pub struct TagIndex {
    by_commit: FxHashMap<CommitId, Vec<Tag>>,
    len: usize,
}

impl TagIndex {
    /// Index `tags` that pass `filter`, ordered by `priority` within each commit
    pub fn build(
        tags: impl IntoIterator<Item = Tag>,
        filter: &TagFilter,
        priority: &dyn TagPriority,
    ) -> Self {
        let mut by_commit: FxHashMap<CommitId, Vec<Tag>> = FxHashMap::default();
        let mut len = 0;
        for tag in tags.into_iter().filter(|t| filter.accepts(t)) {
            by_commit.entry(tag.target).or_default().push(tag);
            len += 1;
        }
        for candidates in by_commit.values_mut() {
            candidates.sort_by(|a, b| priority.compare(a, b));
        }
        Self { by_commit, len }
    }

    /// Candidate tags at `commit`, best first
    pub fn candidates(&self, commit: &CommitId) -> &[Tag] {
        self.by_commit.get(commit).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn winner(&self, commit: &CommitId) -> Option<&Tag> {
        self.candidates(commit).first()
    }

    #[inline]
    pub fn is_tagged(&self, commit: &CommitId) -> bool {
        self.by_commit.contains_key(commit)
    }

    /// Number of tags kept after filtering
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct tagged commits
    pub fn commit_count(&self) -> usize {
        self.by_commit.len()
    }
}
