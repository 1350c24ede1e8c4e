//! Configuration module for jekyll-publisher.
//!
//! Settings are read once at startup from `config.toml` in the user's config directory:
//! - [load]: the [Config] struct and file lookup.
//! - [general]: site layout and dashboard behavior.
//! - [input]: key bindings.
//! - [theme]: pane and modal colors.
//!
//! A missing or broken file falls back to the internal defaults.

pub mod general;
pub mod input;
pub mod load;
pub mod theme;

pub use general::General;
pub use input::Keys;
pub use load::Config;
pub use theme::Theme;
