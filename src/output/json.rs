//! JSON output for parsed trees.

use crate::core::types::TreeNode;
use crate::error::{LeveltreeError, Result};
use std::io::{self, Write};

/// Deepest tree [`to_json`] will serialize. Serialization recurses once per
/// level, so deeper trees are refused instead of risking the stack.
pub const MAX_JSON_DEPTH: usize = 128;

/// Serialize a tree as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`LeveltreeError::InvalidInput`] if the tree is deeper than
/// [`MAX_JSON_DEPTH`], or an error if JSON serialization fails.
pub fn to_json(node: &TreeNode) -> Result<String> {
    let depth = node.depth();
    if depth > MAX_JSON_DEPTH {
        return Err(LeveltreeError::InvalidInput {
            message: format!(
                "tree is {depth} levels deep; JSON output supports at most {MAX_JSON_DEPTH}"
            ),
        });
    }
    Ok(serde_json::to_string_pretty(node)?)
}

/// Print a tree as JSON to stdout.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn print_json(node: &TreeNode) -> Result<()> {
    let json = to_json(node)?;
    writeln!(io::stdout().lock(), "{json}").map_err(|e| LeveltreeError::Io {
        context: "Failed to write JSON".to_string(),
        source: e,
    })
}
