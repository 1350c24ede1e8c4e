//! Input configuration options for jekyll-publisher
//!
//! Key bindings for the dashboard, read from the `[keys]` table. Each action takes a list
//! of key strings such as `"tab"`, `"p"`, `"<c-c>"` or `"ctrl+q"`.
//!
//! The confirmation modal has fixed keys and is not configured here.

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Keys {
    cycle_focus: Vec<String>,
    publish: Vec<String>,
    select: Vec<String>,
    go_up: Vec<String>,
    go_down: Vec<String>,
    quit: Vec<String>,
}

macro_rules! accessor {
    ($($name:ident),+ $(,)?) => {
        impl Keys {
            $(
                #[inline]
                pub fn $name(&self) -> &[String] {
                    &self.$name
                }
            )+
        }
    };
}

accessor!(cycle_focus, publish, select, go_up, go_down, quit);

impl Default for Keys {
    fn default() -> Self {
        Keys {
            cycle_focus: vec!["Tab".into()],
            publish: vec!["p".into()],
            select: vec!["Enter".into()],
            go_up: vec!["k".into(), "Up".into()],
            go_down: vec!["j".into(), "Down".into()],
            quit: vec!["q".into(), "Esc".into()],
        }
    }
}

impl Keys {
    /// The first binding for publish, used in the status line hint.
    pub fn publish_hint(&self) -> &str {
        self.publish.first().map(String::as_str).unwrap_or("p")
    }
}
