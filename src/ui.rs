//! Terminal UI for jekyll-publisher.
//!
//! [render] draws one frame from a [crate::app::DashboardState]; [panes] and [widgets]
//! hold the pieces it is built from.

pub mod panes;
pub mod render;
pub mod widgets;

pub use render::{DashboardLayout, layout_chunks, render};
