//! Input action handler methods for jekyll-publisher.
//!
//! This module implements [DashboardState] methods that turn key events into state changes.
//! [DashboardState::handle_keypress] is what the event loop calls; it routes keys to the
//! publish modal while one is open and otherwise through the keymap into
//! [DashboardState::dispatch].

use crate::app::keymap::{
    Action, DashAction, ModalAction, NavAction, SystemAction, modal_action,
};
use crate::app::publish::ModalButton;
use crate::app::state::{DashboardState, FocusTarget, KeypressResult};
use crate::app::tree::{Category, Entry, NodeKind};

use chrono::{Local, NaiveDate};
use crossterm::event::KeyEvent;
use std::path::{Path, PathBuf};

/// DashboardState input and action handlers
impl<'a> DashboardState<'a> {
    /// Central key handler.
    pub fn handle_keypress(&mut self, key: KeyEvent) -> KeypressResult {
        if self.publish.is_modal() {
            return match modal_action(&key) {
                Some(action) => self.handle_modal_action(action),
                None => KeypressResult::Consumed,
            };
        }

        match self.keymap.lookup(key) {
            Some(action) => self.dispatch(action),
            None => KeypressResult::Continue,
        }
    }

    /// Runs a mapped [Action]. While the publish modal is open every action is swallowed.
    pub fn dispatch(&mut self, action: Action) -> KeypressResult {
        if self.publish.is_modal() {
            return KeypressResult::Consumed;
        }

        match action {
            Action::Nav(nav_act) => self.handle_nav_action(nav_act),
            Action::Dash(dash_act) => self.handle_dash_action(dash_act),
            Action::System(SystemAction::Quit) => KeypressResult::Quit,
        }
    }

    /// Handles keys of the confirmation modal. Does nothing when no modal is open.
    pub fn handle_modal_action(&mut self, action: ModalAction) -> KeypressResult {
        if !self.publish.is_modal() {
            return KeypressResult::Continue;
        }

        match action {
            ModalAction::Toggle => self.publish.toggle_button(),
            ModalAction::Activate => match self.publish.focused_button() {
                Some(ModalButton::Publish) => self.confirm_publish(),
                Some(ModalButton::Cancel) => self.cancel_publish(),
                None => {}
            },
            ModalAction::Publish => self.confirm_publish(),
            ModalAction::Cancel => self.cancel_publish(),
        }
        KeypressResult::Consumed
    }

    fn handle_nav_action(&mut self, action: NavAction) -> KeypressResult {
        match action {
            NavAction::GoUp => match self.focus {
                FocusTarget::Browser => {
                    self.tree.select_prev();
                    self.hint = None;
                }
                FocusTarget::Preview => self.preview.scroll_up(),
                FocusTarget::RepoStatus => self.repo_pane.scroll_up(),
            },
            NavAction::GoDown => match self.focus {
                FocusTarget::Browser => {
                    self.tree.select_next();
                    self.hint = None;
                }
                FocusTarget::Preview => self.preview.scroll_down(),
                FocusTarget::RepoStatus => self.repo_pane.scroll_down(),
            },
            NavAction::Select => return self.select_current(),
        }
        KeypressResult::Consumed
    }

    fn handle_dash_action(&mut self, action: DashAction) -> KeypressResult {
        match action {
            DashAction::CycleFocus => self.cycle_focus(),
            DashAction::Publish => self.request_publish(),
        }
        KeypressResult::Consumed
    }

    /// Moves focus to the next pane of the ring.
    pub fn cycle_focus(&mut self) {
        if self.publish.is_modal() {
            return;
        }
        self.focus = self.focus.next();
    }

    /// Acts on the current browser node.
    ///
    /// Exit quits no matter which pane has focus. Files are loaded into the preview,
    /// categories and the root do nothing.
    pub fn select_current(&mut self) -> KeypressResult {
        let current = self.tree.current();
        match self.tree.node(current).kind() {
            NodeKind::Exit => KeypressResult::Quit,
            NodeKind::Entry(_) => {
                if let Some(entry) = self.tree.entry(current) {
                    self.load_preview(&entry);
                }
                KeypressResult::Consumed
            }
            NodeKind::Root | NodeKind::Category(_) => KeypressResult::Consumed,
        }
    }

    /// Site relative path of an entry, e.g. `_drafts/hello.md`.
    pub fn entry_path(&self, entry: &Entry) -> PathBuf {
        let general = self.config.general();
        let dir = match entry.kind {
            Category::Drafts => general.drafts_dir(),
            Category::Posts => general.posts_dir(),
        };
        Path::new(dir).join(&entry.name)
    }

    fn load_preview(&mut self, entry: &Entry) {
        let rel = self.entry_path(entry);
        let full = self.site_root.join(&rel);

        match self.store.read(&full) {
            Ok(bytes) => {
                log::debug!("Loaded {} ({} bytes) into the preview", rel.display(), bytes.len());
                self.preview.set_content(rel, &bytes);
                self.hint = match entry.kind {
                    Category::Drafts => Some(format!(
                        "Press '{}' to publish this draft",
                        self.config.keys().publish_hint()
                    )),
                    Category::Posts => None,
                };
            }
            Err(e) => {
                log::error!("Could not read {}: {}", rel.display(), e);
                self.push_note(e.to_string());
            }
        }
    }

    /// Opens the publish modal for the current draft, dated today.
    pub fn request_publish(&mut self) {
        self.request_publish_on(Local::now().date_naive());
    }

    /// Opens the publish modal for the current draft, dated `today`.
    ///
    /// Only reacts while the browser has focus and a draft is selected.
    pub fn request_publish_on(&mut self, today: NaiveDate) {
        if self.focus != FocusTarget::Browser || self.publish.is_modal() {
            return;
        }

        let current = self.tree.current();
        let posts_dir = self.config.general().posts_dir();
        match self.publish.begin(&self.tree, current, today, posts_dir) {
            Ok(true) => {
                if let Some(pending) = self.publish.pending() {
                    log::info!(
                        "Publish requested: {} as {}",
                        pending.entry.name,
                        pending.proposed_path.display()
                    );
                }
            }
            Ok(false) => {}
            Err(e) => {
                log::warn!("Publish refused: {}", e);
                self.push_note(e.to_string());
            }
        }
    }

    /// Performs the pending publish and mirrors it in the browser.
    ///
    /// On failure the tree stays as it was and the user can try again.
    pub fn confirm_publish(&mut self) {
        let Some(draft) = self.publish.pending().map(|p| p.entry.name.clone()) else {
            return;
        };

        let drafts_dir = self.config.general().drafts_dir();
        let result = self.publish.confirm(
            self.store.as_ref(),
            &mut self.tree,
            &self.site_root,
            drafts_dir,
        );

        match result {
            Ok(Some(name)) => {
                log::info!("Published {} as {}", draft, name);
                let general = self.config.general();
                self.preview.follow_move(
                    &Path::new(drafts_dir).join(&draft),
                    Path::new(general.posts_dir()).join(&name),
                );
                self.hint = None;
                self.push_note(format!("Published '{}' as '{}'", draft, name));
                if self.config.general().refresh_repo_after_publish() {
                    self.refresh_repo_status();
                }
            }
            Ok(None) => {}
            Err(e) => {
                log::error!("Publishing {} failed: {}", draft, e);
                self.push_note(format!("Publish failed: {}", e));
            }
        }
    }

    /// Closes the modal without touching anything.
    pub fn cancel_publish(&mut self) {
        if let Some(pending) = self.publish.cancel() {
            log::info!("Publish of {} cancelled", pending.entry.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::keymap::{Action, DashAction, NavAction, SystemAction};
    use crate::app::state::{DashboardState, FocusTarget, KeypressResult};
    use crate::app::tree::Category;
    use crate::config::Config;
    use crate::core::error::{PublisherError, Result};
    use crate::core::index::SiteIndex;
    use crate::core::repo::{RepoStatus, RepoStatusProvider};
    use crate::core::store::ContentStore;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::path::Path;

    struct MemoryStore;

    impl ContentStore for MemoryStore {
        fn read(&self, path: &Path) -> Result<Vec<u8>> {
            if path.ends_with("missing.md") {
                return Err(PublisherError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            Ok(format!("content of {}", path.display()).into_bytes())
        }

        fn publish(&self, _draft_rel: &Path, _post_rel: &Path, _site_root: &Path) -> Result<()> {
            Ok(())
        }
    }

    struct NoRepo;

    impl RepoStatusProvider for NoRepo {
        fn status(&self, site_root: &Path) -> Result<RepoStatus> {
            Err(PublisherError::NotARepository {
                path: site_root.to_path_buf(),
            })
        }
    }

    fn dashboard(config: &Config) -> DashboardState<'_> {
        let index = SiteIndex {
            drafts: vec!["hello.md".into(), "missing.md".into()],
            posts: vec!["2024-01-01-first.md".into()],
        };
        DashboardState::new(config, "/site", index, Box::new(MemoryStore), Box::new(NoRepo))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Moves the browser selection onto the row labelled `label`.
    fn select(app: &mut DashboardState<'_>, label: &str) {
        app.set_focus(FocusTarget::Browser);
        for _ in 0..10 {
            if app.tree().node(app.tree().current()).label() == label {
                return;
            }
            app.dispatch(Action::Nav(NavAction::GoDown));
        }
        panic!("row {label} not found");
    }

    #[test]
    fn unmapped_key_continues() {
        let config = Config::default();
        let mut app = dashboard(&config);
        assert_eq!(
            app.handle_keypress(press(KeyCode::Char('z'))),
            KeypressResult::Continue
        );
    }

    #[test]
    fn selecting_a_draft_loads_preview_and_hint() {
        let config = Config::default();
        let mut app = dashboard(&config);
        select(&mut app, "hello.md");

        assert_eq!(app.handle_keypress(press(KeyCode::Enter)), KeypressResult::Consumed);
        assert_eq!(
            app.preview().path(),
            Some(Path::new("_drafts/hello.md"))
        );
        assert_eq!(app.hint(), Some("Press 'p' to publish this draft"));

        select(&mut app, "2024-01-01-first.md");
        app.dispatch(Action::Nav(NavAction::Select));
        assert_eq!(
            app.preview().path(),
            Some(Path::new("_posts/2024-01-01-first.md"))
        );
        assert_eq!(app.hint(), None);
    }

    #[test]
    fn failed_read_keeps_preview_and_notes() {
        let config = Config::default();
        let mut app = dashboard(&config);
        select(&mut app, "hello.md");
        app.dispatch(Action::Nav(NavAction::Select));

        select(&mut app, "missing.md");
        app.dispatch(Action::Nav(NavAction::Select));

        assert_eq!(app.preview().path(), Some(Path::new("_drafts/hello.md")));
        assert!(app.note().is_some_and(|n| n.contains("missing.md")));
    }

    #[test]
    fn selecting_a_category_is_a_no_op() {
        let config = Config::default();
        let mut app = dashboard(&config);
        select(&mut app, "Drafts");
        assert_eq!(
            app.dispatch(Action::Nav(NavAction::Select)),
            KeypressResult::Consumed
        );
        assert!(app.preview().is_empty());
        assert_eq!(app.hint(), None);
    }

    #[test]
    fn movement_scrolls_unfocused_tree_panes() {
        let config = Config::default();
        let mut app = dashboard(&config);
        let before = app.tree().current();

        app.set_focus(FocusTarget::Preview);
        app.dispatch(Action::Nav(NavAction::GoDown));
        assert_eq!(app.tree().current(), before);

        app.set_focus(FocusTarget::Browser);
        app.dispatch(Action::Nav(NavAction::GoDown));
        assert_eq!(app.tree().current(), app.tree().category_node(Category::Drafts));
    }

    #[test]
    fn modal_swallows_other_actions() {
        let config = Config::default();
        let mut app = dashboard(&config);
        select(&mut app, "hello.md");
        app.dispatch(Action::Dash(DashAction::Publish));
        assert!(app.publish().is_modal());

        assert_eq!(
            app.dispatch(Action::System(SystemAction::Quit)),
            KeypressResult::Consumed
        );
        app.dispatch(Action::Dash(DashAction::CycleFocus));
        assert_eq!(app.focus(), FocusTarget::Browser);
        assert_eq!(
            app.handle_keypress(press(KeyCode::Char('q'))),
            KeypressResult::Consumed
        );

        app.handle_keypress(press(KeyCode::Esc));
        assert!(!app.publish().is_modal());
        assert_eq!(app.tree().labels(Category::Drafts), vec!["hello.md", "missing.md"]);
    }

    #[test]
    fn modal_enter_on_cancel_button_cancels() {
        let config = Config::default();
        let mut app = dashboard(&config);
        select(&mut app, "hello.md");
        app.dispatch(Action::Dash(DashAction::Publish));

        app.handle_keypress(press(KeyCode::Right));
        app.handle_keypress(press(KeyCode::Enter));

        assert!(!app.publish().is_modal());
        assert_eq!(app.tree().labels(Category::Posts), vec!["2024-01-01-first.md"]);
    }

    #[test]
    fn modal_enter_on_publish_button_commits() {
        let config = Config::default();
        let mut app = dashboard(&config);
        select(&mut app, "hello.md");
        app.dispatch(Action::Dash(DashAction::Publish));
        let proposed = app
            .publish()
            .pending()
            .map(|p| p.proposed_name.clone())
            .unwrap_or_default();

        app.handle_keypress(press(KeyCode::Enter));

        assert!(!app.publish().is_modal());
        assert_eq!(app.tree().labels(Category::Drafts), vec!["missing.md"]);
        assert!(app.tree().contains(Category::Posts, &proposed));
        assert_eq!(app.tree().node(app.tree().current()).label(), proposed);
        assert!(app.note().is_some_and(|n| n.starts_with("Published")));
    }

    #[test]
    fn publishing_the_previewed_draft_moves_the_preview_path() {
        let config = Config::default();
        let mut app = dashboard(&config);
        select(&mut app, "hello.md");
        app.dispatch(Action::Nav(NavAction::Select));
        assert_eq!(app.preview().path(), Some(Path::new("_drafts/hello.md")));

        app.dispatch(Action::Dash(DashAction::Publish));
        let proposed = app
            .publish()
            .pending()
            .map(|p| p.proposed_name.clone())
            .unwrap_or_default();
        app.handle_keypress(press(KeyCode::Enter));

        let expected = Path::new("_posts").join(&proposed);
        assert_eq!(app.preview().path(), Some(expected.as_path()));
        assert_eq!(app.preview().lines(), ["content of /site/_drafts/hello.md".to_string()]);
    }
}
