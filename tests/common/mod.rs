//! Shared test utilities and fixtures for leveltree tests.
#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::path::PathBuf;

/// Write a text file into the temp dir and return its path.
pub fn write_input(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let file = dir.child(name);
    file.write_str(content).unwrap();
    file.to_path_buf()
}

/// The leveltree binary under test.
pub fn leveltree() -> Command {
    Command::cargo_bin("leveltree").unwrap()
}

// Test data constants

/// Outline with two siblings and one nested child
pub const BRANCHING_OUTLINE: &str = "A\n  B\n  C\n    D\n";

/// Line art for `BRANCHING_OUTLINE` with default glyphs and indent 2,
/// including the newline added by the print sink
pub const BRANCHING_TREE: &str = "├──B\n└─┬C\n  └──D\n\n";

/// The same structure as a JSON leveled list
pub const BRANCHING_JSON: &str = r#"[
    {"level": 0, "label": "A"},
    {"level": 1, "label": "B"},
    {"level": 1, "label": "C"},
    {"level": 2, "label": "D"}
]"#;
