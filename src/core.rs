//! Core runtime logic for jekyll-publisher.
//!
//! The non-UI pieces the dashboard is built on:
//! - [error]: [PublisherError] and the crate wide [Result] alias.
//! - [index]: listing the drafts and posts of a site.
//! - [store]: reading files and moving a draft into the posts directory.
//! - [repo]: repository status snapshots via `git2`.
//! - [terminal]: terminal setup/teardown and the main crossterm/ratatui event loop.

pub mod error;
pub mod index;
pub mod repo;
pub mod store;
pub mod terminal;

pub use error::{PublisherError, Result};
pub use index::{SiteIndex, list_filenames};
pub use repo::{GitStatusProvider, RepoStatus, RepoStatusProvider, StatusLine};
pub use store::{ContentStore, FsStore};
