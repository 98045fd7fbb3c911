use crate::core::types::TreeNode;
use crate::error::{LeveltreeError, Result};
use crate::output::renderer::{self, RenderConfig};
use log::debug;
use std::io::{self, Write};

/// Render `node` and write it, followed by a newline, to `out`.
///
/// With `show_root` the root label is written on its own line first.
///
/// # Errors
///
/// Returns a decoration error from rendering, or an I/O error from `out`.
pub fn write_tree<W: Write>(
    out: &mut W,
    node: &TreeNode,
    config: &RenderConfig,
    show_root: bool,
) -> Result<()> {
    let rendered = renderer::render(node, config)?;
    debug!("Rendered {} line(s)", rendered.lines().count());

    if show_root {
        writeln!(out, "{}", node.label).map_err(write_error)?;
    }
    writeln!(out, "{rendered}").map_err(write_error)?;
    out.flush().map_err(write_error)
}

/// [`write_tree`] to stdout.
///
/// # Errors
///
/// Same as [`write_tree`].
pub fn print_tree(node: &TreeNode, config: &RenderConfig, show_root: bool) -> Result<()> {
    let stdout = io::stdout();
    write_tree(&mut stdout.lock(), node, config, show_root)
}

fn write_error(e: io::Error) -> LeveltreeError {
    LeveltreeError::Io {
        context: "Failed to write tree".to_string(),
        source: e,
    }
}
