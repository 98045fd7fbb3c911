pub mod args;

use crate::core::parser;
use crate::core::types::TreeNode;
use crate::error::Result;
use crate::input::{self, InputFormat, json as json_input, outline};
use crate::output::renderer::RenderConfig;
use crate::output::styles::{AnsiStyle, TreeChars};
use crate::output::{OutputFormat, formatter, json};
use log::debug;

pub struct Cli {
    args: args::Args,
}

impl Cli {
    pub fn with_args(args: args::Args) -> Self {
        Cli { args }
    }

    pub fn run(&self) -> Result<()> {
        let text = input::read_source(self.args.input.as_deref())?;
        let tree = self.build_tree(&text)?;
        debug!(
            "Built tree {:?} with {} top-level node(s)",
            tree.label,
            tree.children.len()
        );

        match self.args.output_format() {
            OutputFormat::Json => json::print_json(&tree),
            OutputFormat::Tree => {
                formatter::print_tree(&tree, &self.render_config(), self.args.show_root)
            }
        }
    }

    fn build_tree(&self, text: &str) -> Result<TreeNode> {
        match self.args.input_format {
            InputFormat::Outline => {
                let items = outline::read_outline(text, self.args.spaces_per_level);
                Ok(parser::parse(&items))
            }
            InputFormat::Json => json_input::read_json(text),
        }
    }

    /// Map the command-line flags onto a render config.
    pub fn render_config(&self) -> RenderConfig {
        let args = &self.args;
        let chars = if args.ascii {
            TreeChars::ascii()
        } else {
            TreeChars::default()
        };

        let mut config = RenderConfig::default()
            .with_chars(chars)
            .with_indent(args.indent);

        if let Some(glyph) = &args.corner {
            config = config.with_corner(glyph.as_str());
        }
        if let Some(glyph) = &args.horizontal {
            config = config.with_horizontal(glyph.as_str());
        }
        if let Some(glyph) = &args.tee {
            config = config.with_tee(glyph.as_str());
        }
        if let Some(glyph) = &args.fork {
            config = config.with_fork(glyph.as_str());
        }
        if let Some(glyph) = &args.vertical {
            config = config.with_vertical(glyph.as_str());
        }

        if args.color {
            config = config
                .with_structure_style(AnsiStyle::structure())
                .with_text_style(AnsiStyle::text());
        }

        debug!("Render config: {config:?}");
        config
    }
}
