//! Log setup for jekyll-publisher.
//!
//! The terminal is owned by the dashboard while it runs, so log records go to a file
//! instead of stderr. The filter comes from `RUST_LOG` and defaults to `info`.

use crate::config::General;

use env_logger::{Builder, Env, Target};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// `<cache dir>/jekyll-publisher/publisher.log`
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("jekyll-publisher").join("publisher.log"))
}

/// Installs the global logger, appending to `general.log_file` or [default_log_path].
///
/// Returns the path in use. When no path can be resolved logging stays disabled.
pub fn init_logging(general: &General) -> io::Result<Option<PathBuf>> {
    let Some(path) = general
        .log_file()
        .map(Path::to_path_buf)
        .or_else(default_log_path) else {
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_secs()
        .try_init()
        .map_err(io::Error::other)?;

    Ok(Some(path))
}
