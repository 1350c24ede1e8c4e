//! Small widgets shared by the renderer: pane blocks, the status line and the publish
//! confirmation popup.

use crate::app::{Category, DashboardState, ModalButton, PendingPublish};
use crate::config::Theme;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

/// Height of the publish popup, borders included.
const MODAL_HEIGHT: u16 = 8;

/// Bordered block for one of the three panes. The focused pane gets the focus color and
/// a thick border.
pub fn pane_block(title: &str, focused: bool, theme: &Theme) -> Block<'static> {
    let (style, border_type) = if focused {
        (theme.focus_style(), BorderType::Thick)
    } else {
        (theme.accent_style(), BorderType::Plain)
    };

    Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(style)
        .title(Span::styled(format!(" {} ", title), style))
}

/// A rect of `width_pct` percent of `area`, `height` rows tall, centered in it.
pub fn centered_rect(area: Rect, width_pct: u16, height: u16) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height.min(area.height)),
            Constraint::Fill(1),
        ])
        .split(area);

    let side = 100u16.saturating_sub(width_pct) / 2;
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(side),
            Constraint::Percentage(width_pct),
            Constraint::Percentage(side),
        ])
        .split(vertical_chunks[1])[1]
}

/// One line at the bottom: the current note or hint on the left, entry counts on the right.
pub fn draw_status_line(frame: &mut Frame, area: Rect, app: &DashboardState) {
    let style = app.config().theme().status_line_style();

    let text = match app.status_text() {
        Some(text) => text.to_string(),
        None => {
            let keys = app.config().keys();
            format!(
                "{}: switch pane | {}: open | {}: quit",
                first_key(keys.cycle_focus()),
                first_key(keys.select()),
                first_key(keys.quit())
            )
        }
    };

    let counts = format!(
        "{} drafts, {} posts ",
        app.tree().entries(Category::Drafts).len(),
        app.tree().entries(Category::Posts).len()
    );

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(counts.len() as u16)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(format!(" {}", text), style))),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(counts, style))).alignment(Alignment::Right),
        chunks[1],
    );
}

fn first_key(keys: &[String]) -> &str {
    keys.first().map(String::as_str).unwrap_or("?")
}

/// The "publish this draft?" popup with its two buttons.
pub fn draw_publish_modal(
    frame: &mut Frame,
    area: Rect,
    pending: &PendingPublish,
    focused: ModalButton,
    theme: &Theme,
) {
    let popup_area = centered_rect(area, 60, MODAL_HEIGHT);
    frame.render_widget(Clear, popup_area);

    let modal_style = theme.modal_style();
    let block = Block::default()
        .title(" Publish ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(modal_style);

    let mut buttons = Vec::with_capacity(ModalButton::ALL.len() * 2);
    for (idx, button) in ModalButton::ALL.iter().enumerate() {
        if idx > 0 {
            buttons.push(Span::raw("   "));
        }
        let style = if *button == focused {
            theme
                .selection_style()
                .patch(modal_style)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        };
        buttons.push(Span::styled(format!("[ {} ]", button.label()), style));
    }

    let lines = vec![
        Line::from(pending.prompt()),
        Line::from(Span::styled(
            format!("-> {}", pending.proposed_path.display()),
            theme.accent_style(),
        )),
        Line::default(),
        Line::from(buttons),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        popup_area,
    );
}
