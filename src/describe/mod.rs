//! Describe a commit relative to its nearest tag
//!
//! - **tag_index**: tag filtering and per-commit tie-break ordering
//! - **walker**: breadth-first nearest-tag search
//! - **abbrev**: abbreviated id rendering
//! - **engine**: orchestration and descriptor assembly

mod abbrev;
mod engine;
mod error;
mod tag_index;
mod walker;

pub use abbrev::{validate_abbrev_length, AbbreviationResolver};
pub use engine::DescribeEngine;
pub use error::DescribeError;
pub use tag_index::{DefaultPriority, TagFilter, TagIndex, TagPriority};
pub use walker::{CommitGraphWalker, WalkHit, WalkOutcome};
