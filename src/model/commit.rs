use std::fmt;
use std::str::FromStr;

use gix_hash::ObjectId;

/// Number of hex characters in a full commit identifier
pub const FULL_HEX_LEN: usize = 40;

/// Full SHA-1 commit identifier
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct CommitId(ObjectId);

#[derive(Debug, thiserror::Error)]
#[error("invalid commit id {input:?}: expected 40 hex characters")]
pub struct InvalidCommitId {
    pub input: String,
}

impl CommitId {
    /// Parse a 40-character hex string
    pub fn from_hex(hex: &str) -> Result<Self, InvalidCommitId> {
        let invalid = || InvalidCommitId { input: hex.to_string() };
        if hex.len() != FULL_HEX_LEN {
            return Err(invalid());
        }
        ObjectId::from_hex(hex.to_ascii_lowercase().as_bytes())
            .map(CommitId)
            .map_err(|_| invalid())
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex().to_string()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl FromStr for CommitId {
    type Err = InvalidCommitId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl From<ObjectId> for CommitId {
    fn from(oid: ObjectId) -> Self {
        CommitId(oid)
    }
}

/// A commit as loaded from the binding: id, ordered parents, commit time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub id: CommitId,
    pub parents: Vec<CommitId>,
    /// Seconds since the Unix epoch
    pub timestamp: i64,
}
