//! Theme configuration options for jekyll-publisher
//!
//! Colors for the pane borders, the focused pane, the browser selection, the status line
//! and the publish modal. Values are color names or hex codes.
//!
//! # Examples
//! ```toml
//! [theme.focus]
//! fg = "yellow"
//! [theme.selection]
//! bg = "#3c3836"
//! ```

use crate::utils::parse_color;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use std::sync::LazyLock;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Theme {
    accent: ColorPair,
    focus: ColorPair,
    selection: ColorPair,
    category: ColorPair,
    status_line: ColorPair,
    modal: ColorPair,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            accent: ColorPair {
                fg: Color::Indexed(238),
                ..ColorPair::default()
            },
            focus: ColorPair {
                fg: Color::Cyan,
                ..ColorPair::default()
            },
            selection: ColorPair {
                bg: Color::Indexed(236),
                ..ColorPair::default()
            },
            category: ColorPair {
                fg: Color::Blue,
                ..ColorPair::default()
            },
            status_line: ColorPair {
                fg: Color::Gray,
                ..ColorPair::default()
            },
            modal: ColorPair {
                fg: Color::Yellow,
                ..ColorPair::default()
            },
        }
    }
}

impl Theme {
    /// Internal defaults, used wherever a user color is left at `default`.
    pub fn internal_defaults() -> &'static Self {
        static DEFAULT: LazyLock<Theme> = LazyLock::new(Theme::default);
        &DEFAULT
    }

    pub fn accent_style(&self) -> Style {
        self.accent.style_or(&Theme::internal_defaults().accent)
    }

    pub fn focus_style(&self) -> Style {
        self.focus
            .style_or(&Theme::internal_defaults().focus)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selection_style(&self) -> Style {
        self.selection
            .style_or(&Theme::internal_defaults().selection)
    }

    pub fn category_style(&self) -> Style {
        self.category
            .style_or(&Theme::internal_defaults().category)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_line_style(&self) -> Style {
        self.status_line
            .style_or(&Theme::internal_defaults().status_line)
    }

    pub fn modal_style(&self) -> Style {
        self.modal.style_or(&Theme::internal_defaults().modal)
    }
}

/// Foreground and background color pair.
/// `default`/`reset` means "use the internal default".
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    #[serde(default, deserialize_with = "deserialize_color_field")]
    fg: Color,
    #[serde(default, deserialize_with = "deserialize_color_field")]
    bg: Color,
}

impl Default for ColorPair {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

impl ColorPair {
    /// Replaces Reset colors with those from `other`.
    pub fn resolve(&self, other: &ColorPair) -> Self {
        Self {
            fg: if self.fg == Color::Reset {
                other.fg
            } else {
                self.fg
            },
            bg: if self.bg == Color::Reset {
                other.bg
            } else {
                self.bg
            },
        }
    }

    pub fn style_or(&self, fallback: &ColorPair) -> Style {
        let resolved = self.resolve(fallback);
        Style::default().fg(resolved.fg).bg(resolved.bg)
    }
}

fn deserialize_color_field<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(parse_color(&s))
}
