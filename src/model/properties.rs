//! Immutable build property records
//!
//! Each provider (git info, build info) produces its own `PropertySet`;
//! `PropertySet::merge` combines them in a separate step.

use std::collections::BTreeMap;

use serde::Serialize;

use super::Descriptor;
use crate::util::format_timestamp;

/// Property key holding the descriptor string
pub const DESCRIBE_KEY: &str = "commit.id.describe";

/// Default prefix for every emitted key
pub const DEFAULT_PREFIX: &str = "git";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("property {key} bound to both {first:?} and {second:?}")]
pub struct PropertyConflict {
    pub key: String,
    pub first: String,
    pub second: String,
}

/// Sorted, read-only key/value record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PropertySet(BTreeMap<String, String>);

impl PropertySet {
    /// Build from key/value pairs; a later duplicate key replaces an earlier one
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// Properties published for a describe result
    pub fn from_descriptor(prefix: &str, descriptor: &Descriptor, commit_time: i64) -> Self {
        let key = |suffix: &str| format!("{}.{}", prefix, suffix);
        Self::from_pairs([
            (key(DESCRIBE_KEY), descriptor.to_string()),
            (key("commit.id"), descriptor.commit.to_hex()),
            (key("commit.id.abbrev"), descriptor.abbreviated.clone()),
            (key("commit.time"), format_timestamp(commit_time)),
            (key("dirty"), descriptor.is_dirty().to_string()),
            (key("closest.tag.name"), descriptor.tag.clone().unwrap_or_default()),
            (
                key("closest.tag.commit.id"),
                descriptor.tag_commit.map(|id| id.to_hex()).unwrap_or_default(),
            ),
            (
                key("closest.tag.commit.count"),
                descriptor
                    .tag
                    .as_ref()
                    .map(|_| descriptor.distance.to_string())
                    .unwrap_or_default(),
            ),
        ])
    }

    /// Properties describing this tool's own build
    pub fn build_info(prefix: &str) -> Self {
        Self::from_pairs([(
            format!("{}.build.version", prefix),
            env!("CARGO_PKG_VERSION"),
        )])
    }

    /// Combine records; order of `sets` never changes the outcome
    ///
    /// The same key with the same value in two records is accepted;
    /// with different values it is a conflict.
    pub fn merge<'a>(
        sets: impl IntoIterator<Item = &'a PropertySet>,
    ) -> Result<Self, PropertyConflict> {
        let mut merged = BTreeMap::new();
        for set in sets {
            for (key, value) in &set.0 {
                match merged.get(key) {
                    None => {
                        merged.insert(key.clone(), value.clone());
                    }
                    Some(existing) if existing == value => {}
                    Some(existing) => {
                        let (first, second) = if existing < value {
                            (existing.clone(), value.clone())
                        } else {
                            (value.clone(), existing.clone())
                        };
                        return Err(PropertyConflict {
                            key: key.clone(),
                            first,
                            second,
                        });
                    }
                }
            }
        }
        Ok(Self(merged))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
