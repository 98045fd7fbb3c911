use crate::core::decorate::{Decorator, Plain};
use crate::core::types::TreeNode;
use crate::error::Result;
use crate::output::styles::TreeChars;
use log::{debug, trace};
use std::fmt;
use std::sync::Arc;

pub const DEFAULT_INDENT: usize = 2;

/// Everything that controls how a tree is drawn.
///
/// `RenderConfig::default()` is the standard box-drawing set with an indent
/// of 2 and no decoration. A config is only read during [`render`], so one
/// value can be shared between concurrent renders.
#[derive(Clone)]
pub struct RenderConfig {
    chars: TreeChars,
    indent: usize,
    structure_style: Arc<dyn Decorator>,
    text_style: Arc<dyn Decorator>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            chars: TreeChars::default(),
            indent: DEFAULT_INDENT,
            structure_style: Arc::new(Plain),
            text_style: Arc::new(Plain),
        }
    }
}

impl fmt::Debug for RenderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderConfig")
            .field("chars", &self.chars)
            .field("indent", &self.indent)
            .finish_non_exhaustive()
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_chars(mut self, chars: TreeChars) -> Self {
        self.chars = chars;
        self
    }

    #[must_use]
    pub fn with_corner(mut self, glyph: impl Into<String>) -> Self {
        self.chars.corner = glyph.into();
        self
    }

    #[must_use]
    pub fn with_horizontal(mut self, glyph: impl Into<String>) -> Self {
        self.chars.horizontal = glyph.into();
        self
    }

    #[must_use]
    pub fn with_tee(mut self, glyph: impl Into<String>) -> Self {
        self.chars.tee = glyph.into();
        self
    }

    #[must_use]
    pub fn with_fork(mut self, glyph: impl Into<String>) -> Self {
        self.chars.fork = glyph.into();
        self
    }

    #[must_use]
    pub fn with_vertical(mut self, glyph: impl Into<String>) -> Self {
        self.chars.vertical = glyph.into();
        self
    }

    /// Set the horizontal run between a connector and its label.
    /// Values below 1 are treated as 1.
    #[must_use]
    pub fn with_indent(mut self, indent: i64) -> Self {
        self.indent = usize::try_from(indent.max(1)).unwrap_or(DEFAULT_INDENT);
        self
    }

    #[must_use]
    pub fn with_structure_style(mut self, style: impl Decorator + 'static) -> Self {
        self.structure_style = Arc::new(style);
        self
    }

    #[must_use]
    pub fn with_text_style(mut self, style: impl Decorator + 'static) -> Self {
        self.text_style = Arc::new(style);
        self
    }

    pub fn chars(&self) -> &TreeChars {
        &self.chars
    }

    pub const fn indent(&self) -> usize {
        self.indent
    }

    fn connector(&self, is_last: bool, has_children: bool) -> String {
        let chars = &self.chars;
        let lead = if is_last { &chars.corner } else { &chars.tee };

        if has_children {
            format!(
                "{lead}{}{}",
                chars.horizontal.repeat(self.indent - 1),
                chars.fork
            )
        } else {
            format!("{lead}{}", chars.horizontal.repeat(self.indent))
        }
    }
}

/// Draw the descendants of `node` as line art, one line per node.
///
/// The label of `node` itself is not part of the output; callers that want
/// it print it first. Each line ends with `\n`, and a node without children
/// renders as the empty string.
///
/// The walk keeps its own stack, so deep trees do not grow the call stack.
///
/// # Errors
///
/// Returns the first error raised by one of the config's decorators.
pub fn render(node: &TreeNode, config: &RenderConfig) -> Result<String> {
    debug!(
        "Rendering {} top-level node(s) with indent {}",
        node.children.len(),
        config.indent
    );

    let mut out = String::new();
    let mut stack = vec![(node.children.iter(), String::new())];

    while let Some((siblings, prefix)) = stack.last_mut() {
        let Some(child) = siblings.next() else {
            stack.pop();
            continue;
        };
        let is_last = siblings.len() == 0;
        let has_children = !child.is_leaf();
        let prefix = prefix.clone();

        trace!(
            "Node {:?}: depth={}, is_last={is_last}, has_children={has_children}",
            child.label,
            stack.len()
        );

        let connector = config.connector(is_last, has_children);
        out.push_str(&prefix);
        out.push_str(&config.structure_style.decorate(&connector)?);
        out.push_str(&config.text_style.decorate(&child.label)?);
        out.push('\n');

        if has_children {
            let extension = if is_last {
                " ".repeat(config.indent)
            } else {
                format!(
                    "{}{}",
                    config.structure_style.decorate(&config.chars.vertical)?,
                    " ".repeat(config.indent - 1)
                )
            };
            stack.push((child.children.iter(), prefix + &extension));
        }
    }

    Ok(out)
}
