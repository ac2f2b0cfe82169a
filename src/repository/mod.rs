mod binding;
mod git2_repo;
mod memory;

pub use binding::VcsBinding;
pub use git2_repo::Git2Repository;
pub use memory::MemoryRepository;
