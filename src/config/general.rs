//! The general configuration settings for jekyll-publisher.
//!
//! Defines where drafts and posts live inside the site root and how the dashboard
//! behaves around a publish.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Seconds a status line note stays visible before the hint comes back.
pub const DEFAULT_NOTE_SECONDS: u64 = 5;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct General {
    drafts_dir: String,
    posts_dir: String,
    refresh_repo_after_publish: bool,
    note_seconds: u64,
    log_file: Option<PathBuf>,
}

impl Default for General {
    fn default() -> Self {
        General {
            drafts_dir: "_drafts".into(),
            posts_dir: "_posts".into(),
            refresh_repo_after_publish: true,
            note_seconds: DEFAULT_NOTE_SECONDS,
            log_file: None,
        }
    }
}

impl General {
    #[inline]
    pub fn drafts_dir(&self) -> &str {
        &self.drafts_dir
    }

    #[inline]
    pub fn posts_dir(&self) -> &str {
        &self.posts_dir
    }

    #[inline]
    pub fn refresh_repo_after_publish(&self) -> bool {
        self.refresh_repo_after_publish
    }

    /// Never zero, so a note is always readable for at least a second.
    #[inline]
    pub fn note_seconds(&self) -> u64 {
        self.note_seconds.max(1)
    }

    #[inline]
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }
}
