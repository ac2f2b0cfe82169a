mod commit;
mod config;
mod descriptor;
mod properties;
mod tag;

pub use commit::{Commit, CommitId, InvalidCommitId, FULL_HEX_LEN};
pub use config::{DescribeConfig, DEFAULT_ABBREV_LENGTH, DEFAULT_DIRTY_MARKER};
pub use descriptor::Descriptor;
pub use properties::{PropertyConflict, PropertySet, DEFAULT_PREFIX, DESCRIBE_KEY};
pub use tag::Tag;
