//! Browser tree model for jekyll-publisher.
//!
//! The tree is stored as a flat arena of [BrowserNode]s addressed by [NodeId] handles.
//! Each node keeps the id of its parent so [BrowserTree::path] can walk back to the root
//! without any shared ownership.
//!
//! Shape:
//! ```text
//! root
//! ├── Drafts   (Category::Drafts)
//! │   └── <draft file names, in input order>
//! ├── Posts    (Category::Posts)
//! │   └── <post file names, in input order>
//! Exit         (sentinel row, parented to root but not one of its children)
//! ```

use thiserror::Error;

/// Handle into the [BrowserTree] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Drafts,
    Posts,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Drafts => "Drafts",
            Category::Posts => "Posts",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Category(Category),
    Entry(Category),
    Exit,
}

/// A draft or post file, identified by its category and file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    pub name: String,
    pub kind: Category,
}

#[derive(Debug, Clone)]
pub struct BrowserNode {
    label: String,
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl BrowserNode {
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Entry(_) | NodeKind::Exit)
    }
}

/// One visible line of the browser pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeRow {
    pub id: NodeId,
    pub depth: usize,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TreeError {
    #[error("node is not a file entry")]
    NotAnEntry,

    #[error("'{0}' is not a draft")]
    NotADraft(String),
}

pub const EXIT_LABEL: &str = "Exit";

#[derive(Debug, Clone)]
pub struct BrowserTree {
    nodes: Vec<BrowserNode>,
    root: NodeId,
    drafts: NodeId,
    posts: NodeId,
    exit: NodeId,
    current: NodeId,
}

impl BrowserTree {
    /// Builds the tree, keeping both name lists in the order given.
    pub fn build<D, P>(drafts: D, posts: P) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let mut tree = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            drafts: NodeId(0),
            posts: NodeId(0),
            exit: NodeId(0),
            current: NodeId(0),
        };

        let root = tree.alloc(String::new(), NodeKind::Root, None);
        let drafts_id = tree.add_child(
            root,
            Category::Drafts.label(),
            NodeKind::Category(Category::Drafts),
        );
        let posts_id = tree.add_child(
            root,
            Category::Posts.label(),
            NodeKind::Category(Category::Posts),
        );

        for name in drafts {
            tree.add_child(drafts_id, name, NodeKind::Entry(Category::Drafts));
        }
        for name in posts {
            tree.add_child(posts_id, name, NodeKind::Entry(Category::Posts));
        }

        // Not pushed into root.children: the root only ever owns the two categories.
        let exit = tree.alloc(EXIT_LABEL.to_string(), NodeKind::Exit, Some(root));

        tree.root = root;
        tree.drafts = drafts_id;
        tree.posts = posts_id;
        tree.exit = exit;
        tree.current = root;
        tree
    }

    fn alloc(&mut self, label: String, kind: NodeKind, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(BrowserNode {
            label,
            kind,
            parent,
            children: Vec::new(),
        });
        id
    }

    fn add_child(&mut self, parent: NodeId, label: impl Into<String>, kind: NodeKind) -> NodeId {
        let id = self.alloc(label.into(), kind, Some(parent));
        self.nodes[parent.0].children.push(id);
        id
    }

    // Accessors

    #[inline]
    pub fn node(&self, id: NodeId) -> &BrowserNode {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn exit(&self) -> NodeId {
        self.exit
    }

    #[inline]
    pub fn current(&self) -> NodeId {
        self.current
    }

    pub fn set_current(&mut self, id: NodeId) {
        if id.0 < self.nodes.len() {
            self.current = id;
        }
    }

    pub fn category_node(&self, category: Category) -> NodeId {
        match category {
            Category::Drafts => self.drafts,
            Category::Posts => self.posts,
        }
    }

    /// Entry ids of a category, in display order.
    pub fn entries(&self, category: Category) -> &[NodeId] {
        self.node(self.category_node(category)).children()
    }

    pub fn labels(&self, category: Category) -> Vec<&str> {
        self.entries(category)
            .iter()
            .map(|id| self.node(*id).label())
            .collect()
    }

    pub fn contains(&self, category: Category, name: &str) -> bool {
        self.entries(category)
            .iter()
            .any(|id| self.node(*id).label() == name)
    }

    pub fn leaf_count(&self) -> usize {
        self.entries(Category::Drafts).len() + self.entries(Category::Posts).len()
    }

    /// Ancestor chain from the root down to `id`, both ends included.
    pub fn path(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = vec![id];
        let mut cursor = self.node(id).parent();
        while let Some(parent) = cursor {
            chain.push(parent);
            cursor = self.node(parent).parent();
        }
        chain.reverse();
        chain
    }

    /// The category an entry currently sits under, read off its path.
    pub fn category_of(&self, id: NodeId) -> Option<Category> {
        let path = self.path(id);
        match path.as_slice() {
            [_, category, _] => match self.node(*category).kind() {
                NodeKind::Category(c) => Some(c),
                _ => None,
            },
            _ => None,
        }
    }

    /// The [Entry] behind a leaf node, or `None` for root, categories and Exit.
    pub fn entry(&self, id: NodeId) -> Option<Entry> {
        match self.node(id).kind() {
            NodeKind::Entry(_) => self.category_of(id).map(|kind| Entry {
                name: self.node(id).label().to_string(),
                kind,
            }),
            _ => None,
        }
    }

    /// Moves a draft under Posts as `new_name` and selects it.
    ///
    /// Fails for anything that is not an entry currently under Drafts, so calling it twice
    /// on the same node never duplicates it.
    pub fn move_entry(&mut self, id: NodeId, new_name: &str) -> Result<(), TreeError> {
        let entry = self.entry(id).ok_or(TreeError::NotAnEntry)?;
        if entry.kind != Category::Drafts {
            return Err(TreeError::NotADraft(entry.name));
        }

        let drafts = self.drafts;
        let posts = self.posts;

        self.nodes[drafts.0].children.retain(|child| *child != id);

        let node = &mut self.nodes[id.0];
        node.label = new_name.to_string();
        node.kind = NodeKind::Entry(Category::Posts);
        node.parent = Some(posts);

        self.nodes[posts.0].children.push(id);
        self.current = id;
        Ok(())
    }

    // Navigation

    /// Visible rows in display order: the categories with their entries, then Exit.
    /// The root itself has no row.
    pub fn rows(&self) -> Vec<TreeRow> {
        let mut rows = Vec::with_capacity(self.leaf_count() + 3);
        for &category in self.node(self.root).children() {
            rows.push(TreeRow {
                id: category,
                depth: 0,
            });
            rows.extend(
                self.node(category)
                    .children()
                    .iter()
                    .map(|&id| TreeRow { id, depth: 1 }),
            );
        }
        rows.push(TreeRow {
            id: self.exit,
            depth: 0,
        });
        rows
    }

    /// Row index of the current node, `None` while the root is current.
    pub fn current_row(&self) -> Option<usize> {
        self.rows().iter().position(|row| row.id == self.current)
    }

    pub fn select_next(&mut self) {
        let rows = self.rows();
        let next = match self.current_row() {
            Some(idx) => (idx + 1).min(rows.len() - 1),
            None => 0,
        };
        self.current = rows[next].id;
    }

    pub fn select_prev(&mut self) {
        let rows = self.rows();
        let prev = match self.current_row() {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        };
        self.current = rows[prev].id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BrowserTree {
        BrowserTree::build(["zeta.md", "alpha.md"], ["2024-01-01-old.md"])
    }

    fn find(tree: &BrowserTree, category: Category, name: &str) -> NodeId {
        *tree
            .entries(category)
            .iter()
            .find(|id| tree.node(**id).label() == name)
            .expect("entry should exist")
    }

    #[test]
    fn build_keeps_two_categories_in_input_order() {
        let tree = sample();
        let root = tree.node(tree.root());
        assert_eq!(root.children().len(), 2);
        assert_eq!(tree.node(root.children()[0]).label(), "Drafts");
        assert_eq!(tree.node(root.children()[1]).label(), "Posts");
        assert_eq!(tree.labels(Category::Drafts), vec!["zeta.md", "alpha.md"]);
        assert_eq!(tree.labels(Category::Posts), vec!["2024-01-01-old.md"]);
        assert_eq!(tree.current(), tree.root());
    }

    #[test]
    fn build_with_empty_lists() {
        let tree = BrowserTree::build(Vec::<String>::new(), Vec::<String>::new());
        assert_eq!(tree.node(tree.root()).children().len(), 2);
        assert_eq!(tree.leaf_count(), 0);
        assert_eq!(tree.rows().len(), 3);
    }

    #[test]
    fn path_runs_root_to_entry() {
        let tree = sample();
        let alpha = find(&tree, Category::Drafts, "alpha.md");
        let path = tree.path(alpha);
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], tree.root());
        assert_eq!(path[1], tree.category_node(Category::Drafts));
        assert_eq!(path[2], alpha);
        assert_eq!(tree.category_of(alpha), Some(Category::Drafts));
    }

    #[test]
    fn categories_and_exit_are_not_entries() {
        let tree = sample();
        assert_eq!(tree.entry(tree.root()), None);
        assert_eq!(tree.entry(tree.category_node(Category::Posts)), None);
        assert_eq!(tree.entry(tree.exit()), None);
        assert!(tree.node(tree.exit()).is_leaf());
    }

    #[test]
    fn move_entry_relocates_and_selects() -> Result<(), TreeError> {
        let mut tree = sample();
        let zeta = find(&tree, Category::Drafts, "zeta.md");
        let before = tree.leaf_count();

        tree.move_entry(zeta, "2024-03-02-zeta.md")?;

        assert_eq!(tree.labels(Category::Drafts), vec!["alpha.md"]);
        assert_eq!(
            tree.labels(Category::Posts),
            vec!["2024-01-01-old.md", "2024-03-02-zeta.md"]
        );
        assert_eq!(tree.current(), zeta);
        assert_eq!(tree.category_of(zeta), Some(Category::Posts));
        assert_eq!(tree.leaf_count(), before);
        Ok(())
    }

    #[test]
    fn move_entry_twice_fails_precondition() -> Result<(), TreeError> {
        let mut tree = sample();
        let zeta = find(&tree, Category::Drafts, "zeta.md");
        tree.move_entry(zeta, "2024-03-02-zeta.md")?;

        let second = tree.move_entry(zeta, "2024-03-02-zeta.md");
        assert_eq!(
            second,
            Err(TreeError::NotADraft("2024-03-02-zeta.md".to_string()))
        );
        assert_eq!(
            tree.labels(Category::Posts)
                .iter()
                .filter(|l| **l == "2024-03-02-zeta.md")
                .count(),
            1
        );
        Ok(())
    }

    #[test]
    fn move_entry_rejects_non_entries() {
        let mut tree = sample();
        let drafts = tree.category_node(Category::Drafts);
        assert_eq!(tree.move_entry(drafts, "x"), Err(TreeError::NotAnEntry));
        assert_eq!(tree.move_entry(tree.root(), "x"), Err(TreeError::NotAnEntry));
        assert_eq!(tree.move_entry(tree.exit(), "x"), Err(TreeError::NotAnEntry));
    }

    #[test]
    fn row_navigation_walks_categories_and_stops_at_exit() {
        let mut tree = sample();
        tree.select_next();
        assert_eq!(tree.current(), tree.category_node(Category::Drafts));
        tree.select_next();
        assert_eq!(tree.node(tree.current()).label(), "zeta.md");

        for _ in 0..10 {
            tree.select_next();
        }
        assert_eq!(tree.current(), tree.exit());

        tree.select_prev();
        assert_eq!(tree.node(tree.current()).label(), "2024-01-01-old.md");
    }

    #[test]
    fn set_current_ignores_unknown_ids() {
        let mut tree = sample();
        let alpha = find(&tree, Category::Drafts, "alpha.md");
        tree.set_current(alpha);
        assert_eq!(tree.current(), alpha);
        assert_eq!(tree.current_row(), Some(2));

        tree.set_current(NodeId(999));
        assert_eq!(tree.current(), alpha);

        tree.set_current(tree.exit());
        assert_eq!(tree.current(), tree.exit());
    }
}
