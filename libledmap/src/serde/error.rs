use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
/// Errors raised while parsing LED map text
pub enum Error {
    /// The text is not a mapping of quoted names to lists of bytes
    #[error("invalid LED map syntax: {0}")]
    Syntax(String),
    /// The same sprite name appears twice
    #[error("sprite name '{0}' appears more than once")]
    DuplicateName(String),
}
