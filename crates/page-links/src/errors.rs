use std::string::FromUtf8Error;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("invalid percent escape {sequence:?} at byte {offset}")]
    InvalidEscape { offset: usize, sequence: String },
    #[error("path does not decode to UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}

impl LinkError {
    /// Whether the path failed percent-decoding. Every current variant does;
    /// callers map this to a client error.
    pub fn is_decoding(&self) -> bool {
        matches!(self, Self::InvalidEscape { .. } | Self::InvalidUtf8(_))
    }
}
