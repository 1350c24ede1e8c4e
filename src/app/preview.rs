//! State for the content preview pane.
//!
//! Holds the lines of the last file that was read successfully, the path it came from
//! and the vertical scroll offset. A failed read never touches it.

use crate::utils::content_lines;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Clone)]
pub struct PreviewState {
    lines: Vec<String>,
    path: Option<PathBuf>,
    scroll: u16,
}

impl PreviewState {
    // Getters/ Accessors

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    // Setters / mutators

    /// Replaces the preview with the content of `path` and scrolls back to the top.
    pub fn set_content(&mut self, path: PathBuf, bytes: &[u8]) {
        self.lines = content_lines(bytes);
        self.path = Some(path);
        self.scroll = 0;
    }

    pub fn scroll_down(&mut self) {
        let max = self.lines.len().saturating_sub(1);
        let max = u16::try_from(max).unwrap_or(u16::MAX);
        self.scroll = self.scroll.saturating_add(1).min(max);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Points the preview at `to` if it is showing `from`. Content and scroll are kept.
    pub fn follow_move(&mut self, from: &Path, to: PathBuf) {
        if self.path.as_deref() == Some(from) {
            self.path = Some(to);
        }
    }
}
