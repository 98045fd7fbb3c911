use crate::error::Result;

/// Transforms a piece of text without changing what it means, e.g. by
/// wrapping it in color codes.
///
/// A failing decorator aborts the render and its error is returned to the
/// caller as is.
pub trait Decorator: Send + Sync {
    /// Decorate `text`.
    ///
    /// # Errors
    ///
    /// Returns an error if the decoration cannot be applied.
    fn decorate(&self, text: &str) -> Result<String>;
}

/// The identity decorator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Decorator for Plain {
    fn decorate(&self, text: &str) -> Result<String> {
        Ok(text.to_string())
    }
}

impl<F> Decorator for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn decorate(&self, text: &str) -> Result<String> {
        Ok(self(text))
    }
}
