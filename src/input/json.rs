//! JSON input: a leveled list or a ready-made tree.

use crate::core::parser;
use crate::core::types::{LeveledList, TreeNode};
use crate::error::{LeveltreeError, Result};
use log::debug;
use serde::Deserialize;

/// Accepted JSON documents.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum JsonInput {
    /// `[{"level": 0, "label": "..."}, ...]`
    List(LeveledList),
    /// `{"label": "...", "children": [...]}`
    Tree(TreeNode),
}

impl JsonInput {
    pub fn into_tree(self) -> TreeNode {
        match self {
            JsonInput::List(items) => {
                debug!("JSON input is a leveled list of {} item(s)", items.len());
                parser::parse(&items)
            }
            JsonInput::Tree(node) => {
                debug!("JSON input is a tree");
                node
            }
        }
    }
}

/// Parse a JSON document into a tree.
///
/// # Errors
///
/// Returns [`LeveltreeError::InvalidInput`] if the document is neither a
/// leveled list nor a tree.
pub fn read_json(text: &str) -> Result<TreeNode> {
    serde_json::from_str::<JsonInput>(text)
        .map(JsonInput::into_tree)
        .map_err(|e| LeveltreeError::InvalidInput {
            message: format!("expected a leveled list or a tree ({e})"),
        })
}
