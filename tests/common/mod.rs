// Git repository fixtures for the describe integration tests
// Builds commits, merges and tags with controlled tagger times
#![allow(dead_code)]

use git2::{Oid, Repository, Signature, Time};
use std::path::PathBuf;
use tempfile::TempDir;

use repodescribe::model::CommitId;

/// Fresh repository in a temp dir; keep the `TempDir` alive for the test
pub fn create_test_repo() -> (TempDir, PathBuf, Repository) {
    let dir = TempDir::new().unwrap();
    let repo_path = dir.path().to_path_buf();
    let repo = Repository::init(&repo_path).unwrap();

    // committer identity, so `Signature::now` callers match the tagger
    let mut config = repo.config().unwrap();
    config.set_str("user.name", "Test User").unwrap();
    config.set_str("user.email", "test@example.com").unwrap();

    (dir, repo_path, repo)
}

/// Signature at a fixed time, so tagger timestamps are controllable
pub fn signature_at(seconds: i64) -> Signature<'static> {
    Signature::new("Test User", "test@example.com", &Time::new(seconds, 0)).unwrap()
}

/// Write files, stage them and commit on top of HEAD
pub fn add_commit(repo: &Repository, files: &[(&str, &[u8])], message: &str) -> Oid {
    let sig = Signature::now("Test User", "test@example.com").unwrap();

    let mut index = repo.index().unwrap();

    for (path, content) in files {
        // Write file to working directory
        let full_path = repo.workdir().unwrap().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&full_path, content).unwrap();

        index.add_path(std::path::Path::new(path)).unwrap();
    }

    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();

    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents).unwrap()
}

/// Commit a sequence of files, one commit each, returning their ids
pub fn add_linear_commits(repo: &Repository, count: usize) -> Vec<Oid> {
    (0..count)
        .map(|i| {
            let name = format!("file_{}.txt", i);
            let content = format!("content {}", i);
            add_commit(repo, &[(&name, content.as_bytes())], &format!("commit {}", i))
        })
        .collect()
}

/// Commit with explicit parents without moving HEAD, reusing the first parent's tree
pub fn add_merge_commit(repo: &Repository, parents: &[Oid], message: &str) -> Oid {
    let sig = Signature::now("Test User", "test@example.com").unwrap();
    let first = repo.find_commit(parents[0]).unwrap();
    let tree = first.tree().unwrap();
    let parent_commits: Vec<git2::Commit> =
        parents.iter().map(|p| repo.find_commit(*p).unwrap()).collect();
    let parent_refs: Vec<&git2::Commit> = parent_commits.iter().collect();
    repo.commit(None, &sig, &sig, message, &tree, &parent_refs).unwrap()
}

/// Commit on top of `parent` without moving HEAD, reusing the parent's tree
pub fn add_side_commit(repo: &Repository, parent: Oid, message: &str) -> Oid {
    let sig = Signature::now("Test User", "test@example.com").unwrap();
    let parent = repo.find_commit(parent).unwrap();
    let tree = parent.tree().unwrap();
    repo.commit(None, &sig, &sig, message, &tree, &[&parent]).unwrap()
}

pub fn tag_lightweight(repo: &Repository, name: &str, target: Oid) {
    let object = repo.find_object(target, None).unwrap();
    repo.tag_lightweight(name, &object, false).unwrap();
}

pub fn tag_annotated(repo: &Repository, name: &str, target: Oid, tagger_time: i64) {
    let object = repo.find_object(target, None).unwrap();
    repo.tag(name, &object, &signature_at(tagger_time), name, false).unwrap();
}

/// Write a blob whose id starts with the first `len` hex characters of `target`
///
/// Candidates are hashed without touching the object database; only the
/// matching one is written.
pub fn add_blob_sharing_prefix(repo: &Repository, target: Oid, len: usize) -> Oid {
    let prefix = target.to_string()[..len].to_string();
    for i in 0u64.. {
        let content = format!("filler {}", i);
        let oid = Oid::hash_object(git2::ObjectType::Blob, content.as_bytes()).unwrap();
        if oid.to_string().starts_with(&prefix) {
            let written = repo.blob(content.as_bytes()).unwrap();
            assert_eq!(written, oid);
            return written;
        }
    }
    unreachable!()
}

/// Number of leading hex characters two ids share
pub fn common_hex_prefix(a: Oid, b: Oid) -> usize {
    a.to_string()
        .chars()
        .zip(b.to_string().chars())
        .take_while(|(x, y)| x == y)
        .count()
}

pub fn commit_id(oid: Oid) -> CommitId {
    CommitId::from_hex(&oid.to_string()).unwrap()
}

pub fn short(oid: Oid) -> String {
    oid.to_string()[..7].to_string()
}
