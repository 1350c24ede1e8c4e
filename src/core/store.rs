//! Content access and the draft to post move.
//!
//! [ContentStore] is the seam the dashboard talks to for file contents and publishing.
//! [FsStore] is the real implementation: plain reads, and a rename that keeps the Git
//! index in step the same way `git mv` does when the draft is tracked.

use crate::core::error::{PublisherError, Result};

use git2::Repository;
use std::fs;
use std::path::{Path, PathBuf};

pub trait ContentStore {
    /// Reads the whole file at `path`.
    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Moves `site_root/draft_rel` to `site_root/post_rel`.
    ///
    /// Either the destination exists and the source is gone, or nothing changed.
    fn publish(&self, draft_rel: &Path, post_rel: &Path, site_root: &Path) -> Result<()>;
}

/// Filesystem backed [ContentStore].
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStore;

impl ContentStore for FsStore {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|e| PublisherError::from_io(path, e))
    }

    fn publish(&self, draft_rel: &Path, post_rel: &Path, site_root: &Path) -> Result<()> {
        let from = site_root.join(draft_rel);
        let to = site_root.join(post_rel);

        if !from.is_file() {
            return Err(PublisherError::move_failed(
                draft_rel,
                post_rel,
                "source does not exist",
            ));
        }
        if to.exists() {
            return Err(PublisherError::conflict(post_rel));
        }
        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| PublisherError::move_failed(draft_rel, post_rel, e))?;
        }

        let tracked = TrackedMove::resolve(site_root, draft_rel, post_rel);

        fs::rename(&from, &to).map_err(|e| PublisherError::move_failed(draft_rel, post_rel, e))?;

        if let Some(tracked) = tracked
            && let Err(e) = tracked.update_index()
        {
            if let Err(rollback) = fs::rename(&to, &from) {
                log::error!(
                    "Rollback of '{}' failed, file left at '{}': {}",
                    from.display(),
                    to.display(),
                    rollback
                );
            }
            return Err(PublisherError::move_failed(draft_rel, post_rel, e));
        }

        Ok(())
    }
}

/// A move of a file the Git index knows about, with both paths relative to the workdir.
struct TrackedMove {
    repo: Repository,
    from: PathBuf,
    to: PathBuf,
}

impl TrackedMove {
    /// Returns `None` when the site is not inside a repository or the draft is untracked,
    /// in which case a plain rename is all there is to do.
    fn resolve(site_root: &Path, draft_rel: &Path, post_rel: &Path) -> Option<Self> {
        let root = site_root.canonicalize().ok()?;
        let repo = Repository::discover(&root).ok()?;
        let workdir = repo.workdir()?.canonicalize().ok()?;

        let rel_from = root.join(draft_rel).strip_prefix(&workdir).ok()?.to_path_buf();
        let rel_to = root.join(post_rel).strip_prefix(&workdir).ok()?.to_path_buf();

        let is_tracked = repo.index().ok()?.get_path(&rel_from, 0).is_some();
        if !is_tracked {
            return None;
        }

        Some(Self {
            repo,
            from: rel_from,
            to: rel_to,
        })
    }

    fn update_index(&self) -> std::result::Result<(), git2::Error> {
        let mut index = self.repo.index()?;
        index.remove_path(&self.from)?;
        index.add_path(&self.to)?;
        index.write()
    }
}
