// Shared benchmark helpers
// Functions here are used across different benchmark files
#![allow(dead_code)]

use repodescribe::model::{CommitId, Tag};
use repodescribe::MemoryRepository;

/// Linear history of `len` commits with one annotated tag on the root
pub fn linear_history(len: usize) -> (MemoryRepository, CommitId) {
    let mut repo = MemoryRepository::new();
    let root = repo.add_commit(&[], 0);
    repo.add_tag(Tag::annotated("v0.1", root, Some(0)));
    let mut tip = root;
    for i in 1..len {
        tip = repo.add_commit(&[tip], i as i64);
    }
    (repo, tip)
}

/// Merge-heavy history: `branches` side branches of `branch_len` commits,
/// each merged back into the mainline; only the root is tagged
pub fn merge_history(branches: usize, branch_len: usize) -> (MemoryRepository, CommitId) {
    let mut repo = MemoryRepository::new();
    let root = repo.add_commit(&[], 0);
    repo.add_tag(Tag::annotated("v0.1", root, Some(0)));

    let mut ts = 1;
    let mut main = root;
    for _ in 0..branches {
        let mut side = main;
        for _ in 0..branch_len {
            side = repo.add_commit(&[side], ts);
            ts += 1;
        }
        main = repo.add_commit(&[main], ts);
        ts += 1;
        main = repo.add_commit(&[main, side], ts);
        ts += 1;
    }
    (repo, main)
}

/// `count` tags spread over `commits` commits, mixed kinds
pub fn generate_tags(commits: &[CommitId], count: usize) -> Vec<Tag> {
    (0..count)
        .map(|i| {
            let target = commits[i % commits.len()];
            let name = format!("v{}.{}.{}", i / 100, (i / 10) % 10, i % 10);
            if i % 3 == 0 {
                Tag::lightweight(&name, target)
            } else {
                Tag::annotated(&name, target, Some(i as i64))
            }
        })
        .collect()
}
