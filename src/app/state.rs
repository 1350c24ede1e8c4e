//! Dashboard state and main controller module for jekyll-publisher.
//!
//! [DashboardState] owns everything the dashboard needs while it runs:
//! - a reference to the loaded [Config] and the [Keymap] built from it
//! - the [BrowserTree] of drafts and posts
//! - the preview, repo status and status line contents
//! - the focus ring position and the [PublishFlow]
//! - the [ContentStore] and [RepoStatusProvider] collaborators
//!
//! It is passed by `&mut` into every handler (see the handlers module) and by `&` into
//! the renderer.

use crate::app::keymap::Keymap;
use crate::app::preview::PreviewState;
use crate::app::publish::PublishFlow;
use crate::app::tree::BrowserTree;
use crate::config::Config;
use crate::core::error::{PublisherError, Result};
use crate::core::index::SiteIndex;
use crate::core::repo::{GitStatusProvider, RepoStatusProvider};
use crate::core::store::{ContentStore, FsStore};

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Enumeration for each individual keypress result processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypressResult {
    /// Nothing handled the key.
    Continue,
    Consumed,
    Quit,
}

/// The three focusable panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Browser,
    Preview,
    RepoStatus,
}

impl FocusTarget {
    /// Next pane in the ring `RepoStatus -> Browser -> Preview -> RepoStatus`.
    pub fn next(self) -> Self {
        match self {
            FocusTarget::RepoStatus => FocusTarget::Browser,
            FocusTarget::Browser => FocusTarget::Preview,
            FocusTarget::Preview => FocusTarget::RepoStatus,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FocusTarget::Browser => "Site",
            FocusTarget::Preview => "Content",
            FocusTarget::RepoStatus => "Git",
        }
    }
}

/// Scrollable block of text, used for the repo status pane.
#[derive(Debug, Default, Clone)]
pub struct TextPane {
    lines: Vec<String>,
    scroll: u16,
}

impl TextPane {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn set_lines(&mut self, lines: Vec<String>) {
        self.lines = lines;
        self.scroll = 0;
    }

    pub fn scroll_down(&mut self) {
        let max = u16::try_from(self.lines.len().saturating_sub(1)).unwrap_or(u16::MAX);
        self.scroll = self.scroll.saturating_add(1).min(max);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

/// Main struct which holds the dashboard state.
pub struct DashboardState<'a> {
    pub(super) config: &'a Config,
    pub(super) keymap: Keymap,
    pub(super) site_root: PathBuf,

    pub(super) tree: BrowserTree,
    pub(super) focus: FocusTarget,
    pub(super) publish: PublishFlow,

    pub(super) preview: PreviewState,
    pub(super) repo_pane: TextPane,

    pub(super) hint: Option<String>,
    pub(super) note: Option<(String, Instant)>,

    pub(super) store: Box<dyn ContentStore>,
    pub(super) repo: Box<dyn RepoStatusProvider>,
}

impl<'a> DashboardState<'a> {
    /// Builds the dashboard around an already loaded [SiteIndex].
    ///
    /// Focus starts on the repo status pane and the repo pane is filled right away.
    pub fn new(
        config: &'a Config,
        site_root: impl Into<PathBuf>,
        index: SiteIndex,
        store: Box<dyn ContentStore>,
        repo: Box<dyn RepoStatusProvider>,
    ) -> Self {
        let mut app = Self {
            config,
            keymap: Keymap::from_config(config),
            site_root: site_root.into(),
            tree: BrowserTree::build(index.drafts, index.posts),
            focus: FocusTarget::RepoStatus,
            publish: PublishFlow::default(),
            preview: PreviewState::default(),
            repo_pane: TextPane::default(),
            hint: None,
            note: None,
            store,
            repo,
        };
        app.refresh_repo_status();
        app
    }

    /// Indexes `site_root` and wires up the filesystem and `git2` collaborators.
    ///
    /// Fails if either content directory cannot be listed.
    pub fn from_site(config: &'a Config, site_root: &Path) -> Result<Self> {
        let index = SiteIndex::load(site_root, config.general())?;
        log::info!(
            "Opened site {} with {} drafts and {} posts",
            site_root.display(),
            index.drafts.len(),
            index.posts.len()
        );
        Ok(Self::new(
            config,
            site_root,
            index,
            Box::new(FsStore),
            Box::new(GitStatusProvider),
        ))
    }

    // Getters/ accessors

    #[inline]
    pub fn config(&self) -> &Config {
        self.config
    }

    #[inline]
    pub fn site_root(&self) -> &Path {
        &self.site_root
    }

    #[inline]
    pub fn tree(&self) -> &BrowserTree {
        &self.tree
    }

    #[inline]
    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    #[inline]
    pub fn publish(&self) -> &PublishFlow {
        &self.publish
    }

    #[inline]
    pub fn preview(&self) -> &PreviewState {
        &self.preview
    }

    #[inline]
    pub fn repo_pane(&self) -> &TextPane {
        &self.repo_pane
    }

    #[inline]
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_ref().map(|(text, _)| text.as_str())
    }

    /// What the status line shows: a live note wins over the hint.
    pub fn status_text(&self) -> Option<&str> {
        self.note().or(self.hint())
    }

    // Setters / mutators

    pub fn set_focus(&mut self, focus: FocusTarget) {
        self.focus = focus;
    }

    /// Shows `text` on the status line for `general.note_seconds`.
    pub fn push_note(&mut self, text: impl Into<String>) {
        let ttl = Duration::from_secs(self.config.general().note_seconds());
        self.note = Some((text.into(), Instant::now() + ttl));
    }

    /// Clears an expired note. Returns true if the screen needs a redraw.
    pub fn tick(&mut self) -> bool {
        let expired = self
            .note
            .as_ref()
            .is_some_and(|(_, expiry)| Instant::now() >= *expiry);
        if expired {
            self.note = None;
        }
        expired
    }

    /// Re-reads the repository status into the repo pane.
    ///
    /// A site outside any repository is not an error here: the pane just says so.
    pub fn refresh_repo_status(&mut self) {
        let lines = match self.repo.status(&self.site_root) {
            Ok(status) => {
                log::debug!(
                    "Repository status refreshed: {} changed paths",
                    status.changes.len()
                );
                status.lines()
            }
            Err(e @ PublisherError::NotARepository { .. }) => vec![e.to_string()],
            Err(e) => {
                log::warn!("Could not read repository status: {}", e);
                vec![format!("Repository status unavailable: {}", e)]
            }
        };
        self.repo_pane.set_lines(lines);
    }
}
