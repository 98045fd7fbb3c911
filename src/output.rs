//! Line-art rendering and output of trees.

pub mod formatter;
pub mod json;
pub mod renderer;
pub mod styles;

/// What to print for a parsed tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Box-drawing line art (default)
    #[default]
    Tree,
    /// The tree structure as JSON
    Json,
}
