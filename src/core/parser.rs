use crate::core::types::{LeveledListItem, TreeNode};
use log::{debug, trace};

/// Repair the levels of a leveled list in a single left-to-right pass.
///
/// The first item becomes the root and is always level 0. No item may sit
/// more than one level below its predecessor, and every item after the first
/// is at least level 1, since the root has no siblings.
pub fn normalize_levels(items: &[LeveledListItem]) -> Vec<LeveledListItem> {
    let mut normalized: Vec<LeveledListItem> = Vec::with_capacity(items.len());

    for item in items {
        // The root's declared level is never used.
        let level = match normalized.last() {
            Some(previous) => item.level.max(1).min(previous.level.saturating_add(1)),
            None => 0,
        };

        if level != item.level {
            trace!(
                "Level of {:?} rewritten from {} to {}",
                item.label, item.level, level
            );
        }

        normalized.push(LeveledListItem {
            level,
            label: item.label.clone(),
        });
    }

    normalized
}

/// Build a tree from a leveled list.
///
/// The first item becomes the root. An item at level `L` is appended as the
/// last child of the node reached by following the most recent child `L - 1`
/// times from the root. Malformed levels are repaired by [`normalize_levels`]
/// rather than rejected, so this never fails. An empty list yields an empty
/// node.
pub fn parse(items: &[LeveledListItem]) -> TreeNode {
    debug!("Parsing leveled list of {} item(s)", items.len());

    let mut normalized = normalize_levels(items).into_iter();
    let Some(first) = normalized.next() else {
        return TreeNode::default();
    };

    // stack[d] is the open node at depth d; closed nodes are folded into
    // their parent so no reference into the tree outlives an insertion.
    let mut stack = vec![TreeNode::new(first.label)];

    for item in normalized {
        let depth = usize::try_from(item.level).unwrap_or(1);
        close_to_depth(&mut stack, depth);
        stack.push(TreeNode::new(item.label));
    }

    close_to_depth(&mut stack, 1);
    stack.pop().unwrap_or_default()
}

fn close_to_depth(stack: &mut Vec<TreeNode>, depth: usize) {
    while stack.len() > depth.max(1) {
        let Some(node) = stack.pop() else { break };
        if let Some(parent) = stack.last_mut() {
            parent.add_child(node);
        }
    }
}
