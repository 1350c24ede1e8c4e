//! Shared fixtures for the integration tests: scratch Jekyll sites, optionally inside a
//! Git repository, and small helpers for driving the dashboard.

#![allow(dead_code)]

use git2::{Repository, Signature};
use jekyll_publisher::app::{Action, DashboardState, FocusTarget, NavAction};
use std::error::Error;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A site root with `_drafts` and `_posts`. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestSite {
    pub temp_dir: TempDir,
}

impl TestSite {
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Sorted relative paths of every file below the site root, `.git` excluded.
    pub fn files(&self) -> Result<Vec<String>, Box<dyn Error>> {
        let mut files = Vec::new();
        for entry in walkdir::WalkDir::new(self.path()).sort_by_file_name() {
            let entry = entry?;
            let rel = entry.path().strip_prefix(self.path())?;
            if rel.starts_with(".git") || !entry.file_type().is_file() {
                continue;
            }
            files.push(rel.to_string_lossy().replace('\\', "/"));
        }
        Ok(files)
    }
}

/// Creates a site with the given `(name, content)` drafts and posts.
pub fn setup_site(
    drafts: &[(&str, &str)],
    posts: &[(&str, &str)],
) -> Result<TestSite, Box<dyn Error>> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    fs::create_dir_all(root.join("_drafts"))?;
    fs::create_dir_all(root.join("_posts"))?;

    for (name, content) in drafts {
        fs::write(root.join("_drafts").join(name), content)?;
    }
    for (name, content) in posts {
        fs::write(root.join("_posts").join(name), content)?;
    }
    Ok(TestSite { temp_dir })
}

/// Turns the site into a repository with everything committed.
pub fn commit_all(path: &Path) -> Result<Repository, git2::Error> {
    let repo = Repository::init(path)?;
    {
        let mut index = repo.index()?;
        index.add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)?;
        index.write()?;
        let tree_id = index.write_tree()?;
        let tree = repo.find_tree(tree_id)?;
        let sig = Signature::now("Test User", "test@example.com")?;
        repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])?;
    }
    Ok(repo)
}

/// Focuses the browser and walks down until the row labelled `label` is current.
pub fn select_row(app: &mut DashboardState<'_>, label: &str) {
    app.set_focus(FocusTarget::Browser);
    for _ in 0..64 {
        if app.tree().node(app.tree().current()).label() == label {
            return;
        }
        app.dispatch(Action::Nav(NavAction::GoDown));
    }
    panic!("no browser row labelled {label}");
}
