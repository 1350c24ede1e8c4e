//! Repository status snapshots for the dashboard's repo pane.
//!
//! [RepoStatusProvider] turns a site root into a [RepoStatus]: the branch and one
//! porcelain style line per changed path. [GitStatusProvider] reads it with `git2`.
//! A site that is not inside a repository yields [PublisherError::NotARepository],
//! which the dashboard shows as plain text rather than treating as a failure.

use crate::core::error::{PublisherError, Result};

use git2::{ErrorCode, Repository, Status, StatusOptions};
use std::path::{Path, PathBuf};

pub trait RepoStatusProvider {
    fn status(&self, site_root: &Path) -> Result<RepoStatus>;
}

/// Two column status code plus path, e.g. `"R  _drafts/a.md -> _posts/2024-01-01-a.md"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub index: char,
    pub worktree: char,
    pub path: String,
}

impl StatusLine {
    /// Derives the porcelain columns from the raw `git2` flags.
    pub fn from_flags(flags: Status, path: String) -> Option<Self> {
        if flags.contains(Status::CONFLICTED) {
            return Some(Self {
                index: 'U',
                worktree: 'U',
                path,
            });
        }
        if flags.contains(Status::WT_NEW) {
            return Some(Self {
                index: '?',
                worktree: '?',
                path,
            });
        }

        let index = if flags.contains(Status::INDEX_NEW) {
            'A'
        } else if flags.contains(Status::INDEX_MODIFIED) {
            'M'
        } else if flags.contains(Status::INDEX_DELETED) {
            'D'
        } else if flags.contains(Status::INDEX_RENAMED) {
            'R'
        } else if flags.contains(Status::INDEX_TYPECHANGE) {
            'T'
        } else {
            ' '
        };

        let worktree = if flags.contains(Status::WT_MODIFIED) {
            'M'
        } else if flags.contains(Status::WT_DELETED) {
            'D'
        } else if flags.contains(Status::WT_RENAMED) {
            'R'
        } else if flags.contains(Status::WT_TYPECHANGE) {
            'T'
        } else {
            ' '
        };

        if index == ' ' && worktree == ' ' {
            return None;
        }
        Some(Self {
            index,
            worktree,
            path,
        })
    }

    pub fn render(&self) -> String {
        format!("{}{} {}", self.index, self.worktree, self.path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoStatus {
    pub root: PathBuf,
    pub branch: String,
    pub changes: Vec<StatusLine>,
}

impl RepoStatus {
    /// The text shown in the repo pane.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("The directory {} is a Git repository.", self.root.display()),
            format!("On branch {}", self.branch),
            String::new(),
        ];

        if self.changes.is_empty() {
            lines.push("nothing to commit, working tree clean".to_string());
        } else {
            lines.push("Status:".to_string());
            lines.extend(self.changes.iter().map(StatusLine::render));
        }
        lines
    }
}

/// `git2` backed [RepoStatusProvider].
#[derive(Debug, Default, Clone, Copy)]
pub struct GitStatusProvider;

impl RepoStatusProvider for GitStatusProvider {
    fn status(&self, site_root: &Path) -> Result<RepoStatus> {
        let repo = Repository::discover(site_root).map_err(|e| match e.code() {
            ErrorCode::NotFound => PublisherError::NotARepository {
                path: site_root.to_path_buf(),
            },
            _ => PublisherError::Git(e),
        })?;

        let mut opts = StatusOptions::new();
        opts.include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(false)
            .renames_head_to_index(true);

        let statuses = repo.statuses(Some(&mut opts))?;
        let mut changes = Vec::new();

        for entry in statuses.iter() {
            let flags = entry.status();
            let path = match entry.head_to_index() {
                Some(delta) if flags.contains(Status::INDEX_RENAMED) => {
                    let old = delta.old_file().path().map(|p| p.display().to_string());
                    let new = delta.new_file().path().map(|p| p.display().to_string());
                    match (old, new) {
                        (Some(old), Some(new)) => format!("{old} -> {new}"),
                        (old, new) => new.or(old).unwrap_or_default(),
                    }
                }
                _ => entry.path().unwrap_or_default().to_string(),
            };

            if let Some(line) = StatusLine::from_flags(flags, path) {
                changes.push(line);
            }
        }

        Ok(RepoStatus {
            root: site_root.to_path_buf(),
            branch: current_branch(&repo)?,
            changes,
        })
    }
}

fn current_branch(repo: &Repository) -> Result<String> {
    match repo.head() {
        Ok(head) if head.is_branch() => Ok(head.shorthand().unwrap_or("-none-").to_string()),
        Ok(head) => Ok(head
            .target()
            .map(|oid| format!("detached at {:.7}", oid.to_string()))
            .unwrap_or_else(|| "-none-".to_string())),
        Err(e) if e.code() == ErrorCode::UnbornBranch => Ok("(no commits yet)".to_string()),
        Err(e) => Err(e.into()),
    }
}
