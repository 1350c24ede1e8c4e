//! Draft publishing flow for jekyll-publisher.
//!
//! Publishing is a small state machine owned by the dashboard:
//!
//! ```text
//! Idle ──begin──▶ ConfirmPending ──Publish──▶ Committed
//!                      │   └──────move failed──▶ Idle
//!                      └──Cancel──▶ Idle
//! ```
//!
//! While a publish is pending the confirmation modal owns all input.

use crate::app::tree::{BrowserTree, Category, Entry, NodeId};
use crate::core::error::{PublisherError, Result};
use crate::core::store::ContentStore;

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// The two buttons of the confirmation modal, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalButton {
    Publish,
    Cancel,
}

impl ModalButton {
    pub const ALL: [ModalButton; 2] = [ModalButton::Publish, ModalButton::Cancel];

    pub fn label(self) -> &'static str {
        match self {
            ModalButton::Publish => "Publish",
            ModalButton::Cancel => "Cancel",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ModalButton::Publish => ModalButton::Cancel,
            ModalButton::Cancel => ModalButton::Publish,
        }
    }
}

/// `YYYY-MM-DD-<name>`.
pub fn dated_name(name: &str, today: NaiveDate) -> String {
    format!("{}-{}", today.format("%Y-%m-%d"), name)
}

/// A publish waiting on the user's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingPublish {
    pub node: NodeId,
    pub entry: Entry,
    pub proposed_name: String,
    pub proposed_path: PathBuf,
}

impl PendingPublish {
    pub fn new(node: NodeId, entry: Entry, today: NaiveDate, posts_dir: &str) -> Self {
        let proposed_name = dated_name(&entry.name, today);
        let proposed_path = Path::new(posts_dir).join(&proposed_name);
        Self {
            node,
            entry,
            proposed_name,
            proposed_path,
        }
    }

    pub fn draft_path(&self, drafts_dir: &str) -> PathBuf {
        Path::new(drafts_dir).join(&self.entry.name)
    }

    pub fn prompt(&self) -> String {
        format!("Do you want to publish the draft '{}'?", self.entry.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishPhase {
    Idle,
    ConfirmPending {
        pending: PendingPublish,
        focused: ModalButton,
    },
    Committed {
        node: NodeId,
        name: String,
    },
}

#[derive(Debug, Clone)]
pub struct PublishFlow {
    phase: PublishPhase,
}

impl Default for PublishFlow {
    fn default() -> Self {
        Self {
            phase: PublishPhase::Idle,
        }
    }
}

impl PublishFlow {
    #[inline]
    pub fn phase(&self) -> &PublishPhase {
        &self.phase
    }

    /// True while the confirmation modal is up.
    #[inline]
    pub fn is_modal(&self) -> bool {
        matches!(self.phase, PublishPhase::ConfirmPending { .. })
    }

    pub fn pending(&self) -> Option<&PendingPublish> {
        match &self.phase {
            PublishPhase::ConfirmPending { pending, .. } => Some(pending),
            _ => None,
        }
    }

    pub fn focused_button(&self) -> Option<ModalButton> {
        match &self.phase {
            PublishPhase::ConfirmPending { focused, .. } => Some(*focused),
            _ => None,
        }
    }

    pub fn toggle_button(&mut self) {
        if let PublishPhase::ConfirmPending { focused, .. } = &mut self.phase {
            *focused = focused.toggled();
        }
    }

    /// Opens the confirmation for `node`.
    ///
    /// Returns `Ok(false)` without changing anything when `node` is not a draft or a
    /// publish is already pending. A dated name that is already taken by a post is
    /// refused up front with [PublisherError::Conflict].
    pub fn begin(
        &mut self,
        tree: &BrowserTree,
        node: NodeId,
        today: NaiveDate,
        posts_dir: &str,
    ) -> Result<bool> {
        if self.is_modal() {
            return Ok(false);
        }
        let Some(entry) = tree.entry(node).filter(|e| e.kind == Category::Drafts) else {
            return Ok(false);
        };

        let pending = PendingPublish::new(node, entry, today, posts_dir);
        if tree.contains(Category::Posts, &pending.proposed_name) {
            return Err(PublisherError::conflict(pending.proposed_path));
        }

        self.phase = PublishPhase::ConfirmPending {
            pending,
            focused: ModalButton::Publish,
        };
        Ok(true)
    }

    /// Drops the pending publish. Returns what was discarded, if anything.
    pub fn cancel(&mut self) -> Option<PendingPublish> {
        match std::mem::replace(&mut self.phase, PublishPhase::Idle) {
            PublishPhase::ConfirmPending { pending, .. } => Some(pending),
            other => {
                self.phase = other;
                None
            }
        }
    }

    /// Performs the pending publish: moves the file through `store`, then the node.
    ///
    /// The tree is only touched once the store reports success. Any failure leaves the
    /// flow [PublishPhase::Idle]. Returns `Ok(None)` if nothing was pending.
    pub fn confirm(
        &mut self,
        store: &dyn ContentStore,
        tree: &mut BrowserTree,
        site_root: &Path,
        drafts_dir: &str,
    ) -> Result<Option<String>> {
        let Some(pending) = self.cancel() else {
            return Ok(None);
        };

        store.publish(
            &pending.draft_path(drafts_dir),
            &pending.proposed_path,
            site_root,
        )?;
        tree.move_entry(pending.node, &pending.proposed_name)?;

        self.phase = PublishPhase::Committed {
            node: pending.node,
            name: pending.proposed_name.clone(),
        };
        Ok(Some(pending.proposed_name))
    }
}
