use std::path::Path;

use anyhow::{Context, Result};
use git2::{ErrorCode, Oid, Repository, Status, StatusOptions};
use tracing::debug;

use super::VcsBinding;
use crate::model::{Commit, CommitId, Tag};

/// On-disk repository read through libgit2
pub struct Git2Repository {
    repo: Repository,
}

impl Git2Repository {
    /// Open the repository containing `path`, searching parent directories
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let repo = Repository::discover(path)
            .with_context(|| format!("Failed to open git repository at {}", path.display()))?;
        debug!(git_dir = %repo.path().display(), "opened repository");
        Ok(Self { repo })
    }

    fn find_commit(&self, id: &CommitId) -> Result<git2::Commit<'_>> {
        let oid = Oid::from_bytes(id.as_bytes())?;
        self.repo
            .find_commit(oid)
            .with_context(|| format!("Failed to read commit {}", id))
    }
}

fn to_commit_id(oid: Oid) -> Result<CommitId> {
    Ok(CommitId::from_hex(&oid.to_string())?)
}

fn parent_ids(commit: &git2::Commit<'_>) -> Result<Vec<CommitId>> {
    commit.parent_ids().map(to_commit_id).collect()
}

impl VcsBinding for Git2Repository {
    fn resolve_commit(&self, reference: &str) -> Result<Commit> {
        let commit = self
            .repo
            .revparse_single(reference)
            .and_then(|object| object.peel_to_commit())
            .with_context(|| format!("Failed to resolve {} to a commit", reference))?;

        Ok(Commit {
            id: to_commit_id(commit.id())?,
            parents: parent_ids(&commit)?,
            timestamp: commit.time().seconds(),
        })
    }

    fn parents_of(&self, id: &CommitId) -> Result<Vec<CommitId>> {
        let commit = self.find_commit(id)?;
        parent_ids(&commit)
    }

    fn list_tags(&self) -> Result<Vec<Tag>> {
        let mut tags = Vec::new();
        for reference in self.repo.references_glob("refs/tags/*")? {
            let reference = reference.context("Failed to read tag reference")?;
            let (Some(name), Some(target)) = (reference.shorthand(), reference.target()) else {
                continue;
            };

            let object = self
                .repo
                .find_object(target, None)
                .with_context(|| format!("Failed to read tag {}", name))?;
            // Some(tagger time) for annotated tags, None for lightweight ones
            let tagger_time = object
                .as_tag()
                .map(|tag| tag.tagger().map(|sig| sig.when().seconds()));

            let commit = match object.peel_to_commit() {
                Ok(commit) => commit,
                Err(e) => {
                    debug!(tag = name, error = %e, "skipping tag that does not point at a commit");
                    continue;
                }
            };

            tags.push(Tag {
                name: name.to_string(),
                target: to_commit_id(commit.id())?,
                annotated: tagger_time.is_some(),
                tagger_time: tagger_time.flatten(),
            });
        }
        Ok(tags)
    }

    fn is_working_tree_dirty(&self) -> Result<bool> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(false)
            .include_ignored(false)
            .exclude_submodules(true);
        let statuses = self
            .repo
            .statuses(Some(&mut opts))
            .context("Failed to read working tree status")?;
        Ok(statuses.iter().any(|entry| entry.status() != Status::CURRENT))
    }

    fn prefix_is_ambiguous(&self, id: &CommitId, hex_len: usize) -> Result<bool> {
        let hex = id.to_hex();
        let short = Oid::from_str(&hex[..hex_len])?;
        let odb = self.repo.odb()?;
        match odb.exists_prefix(short, hex_len) {
            Ok(_) => Ok(false),
            // libgit2 also reports prefixes under four characters as ambiguous
            Err(e) if e.code() == ErrorCode::Ambiguous => Ok(true),
            Err(e) => Err(e).context("Failed to check abbreviated id"),
        }
    }
}
