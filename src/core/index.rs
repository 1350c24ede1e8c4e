//! Site indexing for jekyll-publisher.
//!
//! Walks the drafts and posts directories of a site root and collects the base names of
//! every file found. Directories themselves are skipped. The walk is sorted by file name
//! so the dashboard always starts from the same order.

use crate::config::General;
use crate::core::error::{PublisherError, Result};

use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// The file names found under the drafts and posts directories of a site.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteIndex {
    pub drafts: Vec<String>,
    pub posts: Vec<String>,
}

impl SiteIndex {
    /// Indexes both directories configured in [General].
    ///
    /// Either directory failing to enumerate fails the whole index.
    pub fn load(site_root: &Path, general: &General) -> Result<Self> {
        Ok(Self {
            drafts: list_filenames(site_root, general.drafts_dir())?,
            posts: list_filenames(site_root, general.posts_dir())?,
        })
    }
}

/// Lists the base names of all files below `site_root/dir_name`.
pub fn list_filenames(site_root: &Path, dir_name: &str) -> Result<Vec<String>> {
    let dir_path = site_root.join(dir_name);
    let mut filenames = Vec::new();

    for entry in WalkDir::new(&dir_path).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(&dir_path).to_path_buf();
            PublisherError::from_io(&path, io::Error::from(e))
        })?;

        if entry.file_type().is_dir() {
            continue;
        }
        filenames.push(entry.file_name().to_string_lossy().into_owned());
    }

    Ok(filenames)
}
