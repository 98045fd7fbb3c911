use crate::input::InputFormat;
use crate::input::outline::DEFAULT_SPACES_PER_LEVEL;
use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "leveltree")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Input file; reads stdin when omitted or `-`
    pub input: Option<PathBuf>,

    /// Format of the input
    #[arg(long, value_enum, default_value_t = InputFormat::Outline)]
    pub input_format: InputFormat,

    /// Leading spaces that make up one outline level
    #[arg(long, default_value_t = DEFAULT_SPACES_PER_LEVEL)]
    pub spaces_per_level: usize,

    /// Width of the horizontal run between connector and label (minimum 1)
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    pub indent: i64,

    /// Use ASCII glyphs instead of box-drawing characters
    #[arg(long)]
    pub ascii: bool,

    /// Glyph for the last child of a parent
    #[arg(long)]
    pub corner: Option<String>,

    /// Glyph repeated between connector and label
    #[arg(long)]
    pub horizontal: Option<String>,

    /// Glyph for a child with siblings below it
    #[arg(long)]
    pub tee: Option<String>,

    /// Glyph closing the connector of a node with children
    #[arg(long)]
    pub fork: Option<String>,

    /// Glyph continuing a parent's line past open children
    #[arg(long)]
    pub vertical: Option<String>,

    /// Color connectors and labels
    #[arg(long)]
    pub color: bool,

    /// Print the root label above the tree
    #[arg(long)]
    pub show_root: bool,

    /// Print the parsed tree as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parse command-line arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Get the output format based on flags.
    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Tree
        }
    }
}
