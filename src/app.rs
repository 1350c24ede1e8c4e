//! Application state and input handling for jekyll-publisher.
//!
//! - [tree]: the arena backed browser tree of drafts and posts
//! - [publish]: the confirm and commit flow that turns a draft into a post
//! - [state]: [DashboardState], the single owner of everything the dashboard shows
//! - [handlers]: key dispatch and the actions behind it
//! - [keymap]: config driven key bindings
//! - [preview]: the content preview pane

pub mod handlers;
pub mod keymap;
pub mod preview;
pub mod publish;
pub mod state;
pub mod tree;

pub use keymap::{Action, DashAction, Keymap, ModalAction, NavAction, SystemAction};
pub use preview::PreviewState;
pub use publish::{ModalButton, PendingPublish, PublishFlow, PublishPhase};
pub use state::{DashboardState, FocusTarget, KeypressResult, TextPane};
pub use tree::{BrowserTree, Category, Entry, NodeId, NodeKind, TreeError};
