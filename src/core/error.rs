//! Error types for jekyll-publisher.
//!
//! [PublisherError] covers everything the collaborators around the dashboard can fail with:
//! - file lookups and reads ([PublisherError::NotFound], [PublisherError::Io])
//! - the repository status reader ([PublisherError::NotARepository])
//! - the draft to post move ([PublisherError::Move], [PublisherError::Conflict])
//!
//! Tree precondition failures are their own [TreeError] and only show up here when a
//! committed move could not be mirrored in the browser.

use crate::app::tree::TreeError;

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PublisherError {
    #[error("No such file or directory: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Could not read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("The directory {} is not a Git repository. Consider running 'git init'.", path.display())]
    NotARepository { path: PathBuf },

    #[error("Could not move '{}' to '{}': {reason}", from.display(), to.display())]
    Move {
        from: PathBuf,
        to: PathBuf,
        reason: String,
    },

    #[error("A post named '{}' already exists", path.display())]
    Conflict { path: PathBuf },

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Browser out of sync with the site: {0}")]
    Tree(#[from] TreeError),
}

pub type Result<T> = std::result::Result<T, PublisherError>;

impl PublisherError {
    /// Maps an io error for `path` onto [PublisherError::NotFound] or [PublisherError::Io].
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub fn move_failed(from: &Path, to: &Path, reason: impl ToString) -> Self {
        Self::Move {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub fn conflict(path: impl Into<PathBuf>) -> Self {
        Self::Conflict { path: path.into() }
    }
}
