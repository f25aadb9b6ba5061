use thiserror::Error;

/// Errors produced while driving a [`crate::buffer::BufferReader`] or
/// [`crate::buffer::BufferWriter`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BufferError {
    #[error("read past the end of the input at byte {index}")]
    Underflow { index: usize },
    #[error("cursor moved out of bounds to {target} (length is {length})")]
    OutOfBounds { target: usize, length: usize },
    #[error("invalid bit count {count} (must be 1..=64)")]
    InvalidBitCount { count: u32 },
    #[error("invalid blueprint type tag {tag}")]
    InvalidBlueprintTag { tag: u8 },
    #[error("invalid utf-8 bytes in a string field")]
    InvalidUtf8,
    #[error("a read was short-circuited by an earlier failure")]
    PreviouslyFailed,
}

/// One accumulated error from a [`crate::text::StringReader`], with the line/column it was
/// found at.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{line}:{column}: {message}")]
pub struct TextError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl TextError {
    pub fn new(line: usize, column: usize, message: impl Into<String>) -> Self {
        TextError { line, column, message: message.into() }
    }
}

/// One accumulated error from a [`crate::blueprint_reader::BlueprintReader`], addressed by the
/// navigation path that produced it.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("at {path}: {message}")]
pub struct BlueprintError {
    pub path: String,
    pub message: String,
}

impl BlueprintError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        BlueprintError { path: path.into(), message: message.into() }
    }
}
