use thiserror::Error;

/// Errors surfaced while decorating the page tree.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetError {
    /// A card carried a color code outside the five known colors.
    /// Aborts the hydration pass for the element being processed.
    #[error("Invalid color: {code}")]
    InvalidColor { code: i8 },
}
