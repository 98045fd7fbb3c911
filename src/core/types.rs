use serde::{Deserialize, Serialize};

/// A labelled node owning its children in display order.
///
/// Dropping a node is iterative, so arbitrarily deep trees can be freed. The
/// derived `Clone`, `PartialEq`, `Debug` and serde impls recurse once per
/// level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

/// One line of an outline: a label and its indentation level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeveledListItem {
    pub level: i64,
    pub label: String,
}

pub type LeveledList = Vec<LeveledListItem>;

impl TreeNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    pub fn add_child(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// True for the degenerate node produced from an empty list.
    pub fn is_empty(&self) -> bool {
        self.label.is_empty() && self.children.is_empty()
    }

    /// Number of nodes on the longest path from this node to a leaf.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];

        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.children.iter().map(|child| (child, depth + 1)));
        }

        deepest
    }
}

impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl LeveledListItem {
    pub fn new(level: i64, label: impl Into<String>) -> Self {
        Self {
            level,
            label: label.into(),
        }
    }
}

impl<S: Into<String>> From<(i64, S)> for LeveledListItem {
    fn from((level, label): (i64, S)) -> Self {
        Self::new(level, label)
    }
}
