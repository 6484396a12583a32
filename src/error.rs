//! Error types for building a particle field.
//!
//! Physics itself never fails; only setup (fonts, configuration, the text
//! backend) can.

use core::fmt;

/// Errors that can occur while building a particle field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// Font data could not be parsed as a TrueType/OpenType face.
    FontParse,
    /// Block size must be at least one pixel.
    InvalidBlockSize,
    /// Font size must be positive and finite.
    InvalidFontSize,
    /// Mask buffer length does not match its dimensions.
    MaskSize { expected: usize, actual: usize },
    /// The text backend could not render.
    Backend(&'static str),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::FontParse => write!(f, "font data is not a valid TrueType/OpenType face"),
            FieldError::InvalidBlockSize => write!(f, "block size must be at least 1 pixel"),
            FieldError::InvalidFontSize => write!(f, "font size must be positive and finite"),
            FieldError::MaskSize { expected, actual } => {
                write!(f, "mask buffer holds {} bytes, expected {}", actual, expected)
            }
            FieldError::Backend(msg) => write!(f, "text backend failed: {}", msg),
        }
    }
}
