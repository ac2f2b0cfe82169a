// Library crate exposing modules for the binary, integration tests and benches

pub mod describe;
pub mod model;
pub mod repository;
pub mod util;

pub use describe::{DescribeEngine, DescribeError};
pub use model::{DescribeConfig, Descriptor};
pub use repository::{Git2Repository, MemoryRepository, VcsBinding};
