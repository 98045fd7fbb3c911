//! Render outlines and leveled lists as box-drawing trees.
//!
//! ```
//! use leveltree::{LeveledListItem, RenderConfig, parse, render};
//!
//! let items: Vec<LeveledListItem> = vec![(0, "A").into(), (1, "B").into(), (1, "C").into(), (2, "D").into()];
//! let tree = parse(&items);
//!
//! assert_eq!(tree.label, "A");
//! assert_eq!(render(&tree, &RenderConfig::default())?, "├──B\n└─┬C\n  └──D\n");
//! # Ok::<_, leveltree::LeveltreeError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod input;
pub mod output;

pub use crate::core::decorate::{Decorator, Plain};
pub use crate::core::parser::{normalize_levels, parse};
pub use crate::core::types::{LeveledList, LeveledListItem, TreeNode};
pub use crate::error::{LeveltreeError, Result};
pub use crate::output::renderer::{RenderConfig, render};
pub use crate::output::styles::{AnsiStyle, TreeChars};
