//! Miscellaneous utilities for jekyll-publisher.
//!
//! - [cli]: argument handling for the binary
//! - [helpers]: color parsing, line cleanup, home path shortening
//! - [logging]: file-backed `env_logger` setup

pub mod cli;
pub mod helpers;
pub mod logging;

pub use helpers::{content_lines, parse_color, sanitize_line, shorten_home_path};
pub use logging::init_logging;
