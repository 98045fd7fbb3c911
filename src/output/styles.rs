use crate::core::decorate::Decorator;
use crate::error::Result;
use colored::{Color, Colorize};

/// Glyphs used to draw the connectors of a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeChars {
    /// Marks the last child of a parent.
    pub corner: String,
    /// Repeated between a connector and its label.
    pub horizontal: String,
    /// Marks a child with further siblings below it.
    pub tee: String,
    /// Closes the connector of a child that has children of its own.
    pub fork: String,
    /// Continues a parent's line past its open children.
    pub vertical: String,
}

impl Default for TreeChars {
    fn default() -> Self {
        Self {
            corner: "└".to_string(),
            horizontal: "─".to_string(),
            tee: "├".to_string(),
            fork: "┬".to_string(),
            vertical: "│".to_string(),
        }
    }
}

impl TreeChars {
    /// Glyphs for terminals without box-drawing support.
    pub fn ascii() -> Self {
        Self {
            corner: "`".to_string(),
            horizontal: "-".to_string(),
            tee: "|".to_string(),
            fork: "+".to_string(),
            vertical: "|".to_string(),
        }
    }
}

/// Decorates text with an ANSI foreground color.
#[derive(Debug, Clone, Copy)]
pub struct AnsiStyle {
    color: Color,
}

impl AnsiStyle {
    pub const fn new(color: Color) -> Self {
        Self { color }
    }

    /// Style used for connectors by the default theme.
    pub const fn structure() -> Self {
        Self::new(Color::Cyan)
    }

    /// Style used for labels by the default theme.
    pub const fn text() -> Self {
        Self::new(Color::BrightMagenta)
    }
}

impl Decorator for AnsiStyle {
    fn decorate(&self, text: &str) -> Result<String> {
        Ok(text.color(self.color).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chars_are_box_drawing() {
        let chars = TreeChars::default();
        assert_eq!(
            [
                chars.corner.as_str(),
                chars.horizontal.as_str(),
                chars.tee.as_str(),
                chars.fork.as_str(),
                chars.vertical.as_str(),
            ],
            ["└", "─", "├", "┬", "│"]
        );
    }

    #[test]
    fn test_ascii_chars_are_ascii() {
        let chars = TreeChars::ascii();
        for glyph in [
            &chars.corner,
            &chars.horizontal,
            &chars.tee,
            &chars.fork,
            &chars.vertical,
        ] {
            assert!(glyph.is_ascii());
        }
    }

    #[test]
    fn test_ansi_style_wraps_text() {
        colored::control::set_override(true);
        let styled = AnsiStyle::structure().decorate("├──").unwrap();
        colored::control::unset_override();

        assert!(styled.contains("├──"));
        assert!(styled.starts_with("\u{1b}["));
        assert!(styled.ends_with("\u{1b}[0m"));
    }
}
