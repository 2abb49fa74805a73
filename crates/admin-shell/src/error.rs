/// Problems found while reading or checking a shell configuration.
///
/// None of these ever stop the layout from rendering: unknown glyphs fall back
/// to [`Glyph::Placeholder`](crate::glyph::Glyph::Placeholder) and validation
/// failures are only logged.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// The key does not name a glyph in the icon set.
    #[error("unknown glyph: {0}")]
    UnknownGlyph(String),
    /// More than one navigation item is flagged active.
    #[error("navigation items `{first}` and `{second}` are both active")]
    MultipleActive { first: String, second: String },
    /// The navigation list is non-empty but no item is active.
    #[error("no navigation item is active")]
    NoActiveItem,
    /// The JSON configuration could not be parsed.
    #[error("invalid shell config: {0}")]
    Config(#[from] serde_json::Error),
}
