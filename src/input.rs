//! Reading trees from outlines and JSON.

pub mod json;
pub mod outline;

use crate::error::{LeveltreeError, Result};
use log::debug;
use std::io::{self, Read};
use std::path::Path;

/// Input format for the tree source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum InputFormat {
    /// Indented text, one item per line (default)
    #[default]
    Outline,
    /// A JSON leveled list or tree
    Json,
}

/// Read the whole source into a string. `None` or `-` reads stdin.
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            debug!("Reading input from {}", path.display());
            std::fs::read_to_string(path).map_err(|e| LeveltreeError::Io {
                context: format!("Failed to read {}", path.display()),
                source: e,
            })
        }
        _ => {
            debug!("Reading input from stdin");
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| LeveltreeError::Io {
                    context: "Failed to read stdin".to_string(),
                    source: e,
                })?;
            Ok(text)
        }
    }
}
