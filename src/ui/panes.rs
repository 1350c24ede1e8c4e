//! Pane rendering for jekyll-publisher: the site browser, the content preview and the
//! repository status.

use crate::app::{DashboardState, FocusTarget, NodeKind};
use crate::ui::widgets::pane_block;
use crate::utils::shorten_home_path;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
};

/// Indent per tree level in the browser.
const INDENT: &str = "  ";

/// Draws the drafts/posts tree with the current node highlighted. The title carries the
/// site path.
pub fn draw_browser(frame: &mut Frame, area: Rect, app: &DashboardState) {
    let theme = app.config().theme();
    let tree = app.tree();
    let title = format!(
        "{}: {}",
        FocusTarget::Browser.title(),
        shorten_home_path(app.site_root())
    );
    let block = pane_block(&title, app.focus() == FocusTarget::Browser, theme);

    let rows = tree.rows();
    let mut items = Vec::with_capacity(rows.len());
    for row in &rows {
        let node = tree.node(row.id);
        let style = match node.kind() {
            NodeKind::Category(_) => theme.category_style(),
            _ => Style::default(),
        };
        let label = match node.kind() {
            NodeKind::Category(_) => format!("{} ({})", node.label(), node.children().len()),
            _ => node.label().to_string(),
        };
        items.push(ListItem::new(Line::from(vec![
            Span::raw(INDENT.repeat(row.depth)),
            Span::styled(label, style),
        ])));
    }

    let mut state = ListState::default();
    state.select(tree.current_row());

    frame.render_stateful_widget(
        List::new(items)
            .block(block)
            .highlight_style(theme.selection_style())
            .highlight_symbol("> "),
        area,
        &mut state,
    );
}

/// Draws the content of the last selected file.
pub fn draw_preview(frame: &mut Frame, area: Rect, app: &DashboardState) {
    let preview = app.preview();
    let title = match preview.path() {
        Some(path) => format!("{}: {}", FocusTarget::Preview.title(), path.display()),
        None => FocusTarget::Preview.title().to_string(),
    };
    let block = pane_block(&title, app.focus() == FocusTarget::Preview, app.config().theme());

    let text = if preview.is_empty() && preview.path().is_none() {
        Text::styled(
            "Select a draft or post to see its content.",
            app.config().theme().accent_style(),
        )
    } else {
        Text::from(
            preview
                .lines()
                .iter()
                .map(|l| Line::from(l.as_str()))
                .collect::<Vec<_>>(),
        )
    };

    frame.render_widget(
        Paragraph::new(text)
            .block(block)
            .scroll((preview.scroll(), 0)),
        area,
    );
}

/// Draws the repository status text.
pub fn draw_repo_status(frame: &mut Frame, area: Rect, app: &DashboardState) {
    let pane = app.repo_pane();
    let block = pane_block(
        FocusTarget::RepoStatus.title(),
        app.focus() == FocusTarget::RepoStatus,
        app.config().theme(),
    );

    let lines: Vec<Line> = pane.lines().iter().map(|l| Line::from(l.as_str())).collect();
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((pane.scroll(), 0)),
        area,
    );
}
