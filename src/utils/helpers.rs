//! Helpers for jekyll-publisher.
//!
//! - Color parsing from strings or hex codes
//! - Cleaning file content before it is shown in a pane
//! - Displaying home directories as "~" in paths

use ratatui::style::Color;
use std::path::{MAIN_SEPARATOR, Path};
use unicode_width::UnicodeWidthChar;

/// Tab stops used when expanding tabs in the preview.
pub const TAB_WIDTH: usize = 4;

/// Parses a string (color name or hex) into a ratatui::style::color
///
/// Supports standard names (red, green, etc.) as well as hex values (#RRGGBB or #RGB)
pub fn parse_color(s: &str) -> Color {
    match s.to_lowercase().as_str() {
        "default" | "reset" => Color::Reset,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "black" => Color::Black,
        "gray" => Color::Gray,
        "darkgray" => Color::DarkGray,
        _ => {
            if let Some(color) = s.strip_prefix('#') {
                let expanded = match color.len() {
                    6 => color.to_string(),
                    3 => color.chars().flat_map(|c| [c, c]).collect(),
                    _ => return Color::Reset,
                };
                if let Ok(rgb) = u32::from_str_radix(&expanded, 16) {
                    return Color::Rgb(
                        ((rgb >> 16) & 0xFF) as u8,
                        ((rgb >> 8) & 0xFF) as u8,
                        (rgb & 0xFF) as u8,
                    );
                }
            }
            // fallback
            Color::Reset
        }
    }
}

/// Expands tabs to [TAB_WIDTH] stops and drops control characters so a line renders
/// at the width the terminal will actually give it.
pub fn sanitize_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut current_w = 0;

    for ch in line.chars() {
        if ch == '\t' {
            let space_count = TAB_WIDTH - (current_w % TAB_WIDTH);
            out.push_str(&" ".repeat(space_count));
            current_w += space_count;
            continue;
        }
        if ch.is_control() {
            continue;
        }
        out.push(ch);
        current_w += ch.width().unwrap_or(0);
    }
    out
}

/// Splits file content into display lines. Invalid UTF-8 is replaced, not rejected.
pub fn content_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(sanitize_line)
        .collect()
}

/// Util function to shorten home directory to ~.
/// Used for the site path in the browser pane title.
pub fn shorten_home_path<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    if let Some(home_dir) = dirs::home_dir()
        && let Ok(stripped) = path.strip_prefix(&home_dir)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        } else {
            let mut short = stripped.display().to_string();
            if short.starts_with(MAIN_SEPARATOR) {
                short.remove(0);
            }
            return format!("~{}{}", MAIN_SEPARATOR, short);
        }
    }
    path.display().to_string()
}
