//! UI renderer implementation.
//!
//! Contains the top-level `render` entry point used by the terminal loop and the
//! layout helper that splits the screen into the browser, preview, repo status and
//! status line areas.
//!
//! This module should stay "pure rendering": it reads state + config and produces
//! widgets, without mutating the dashboard.

use crate::app::DashboardState;
use crate::ui::{panes, widgets};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

/// Screen areas of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLayout {
    pub browser: Rect,
    pub preview: Rect,
    pub repo: Rect,
    pub status: Rect,
}

/// Splits `area` into a browser column on the left, preview over repo status on the
/// right and a one line status bar at the bottom.
pub fn layout_chunks(area: Rect) -> DashboardLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(rows[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(columns[1]);

    DashboardLayout {
        browser: columns[0],
        preview: right[0],
        repo: right[1],
        status: rows[1],
    }
}

/// Render function which draws the entire dashboard on each frame.
pub fn render(frame: &mut Frame, app: &DashboardState) {
    let area = frame.area();
    let chunks = layout_chunks(area);

    panes::draw_browser(frame, chunks.browser, app);
    panes::draw_preview(frame, chunks.preview, app);
    panes::draw_repo_status(frame, chunks.repo, app);
    widgets::draw_status_line(frame, chunks.status, app);

    if let (Some(pending), Some(focused)) =
        (app.publish().pending(), app.publish().focused_button())
    {
        widgets::draw_publish_modal(frame, area, pending, focused, app.config().theme());
    }
}
