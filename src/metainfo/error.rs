use thiserror::Error;

use crate::bencode::BencodeError;

/// Errors that can occur when decoding a torrent file.
#[derive(Debug, Error)]
pub enum MetainfoError {
    /// The file is not valid bencode.
    #[error("bencode error: {0}")]
    Bencode(#[from] BencodeError),

    /// A required field is missing.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A field has the wrong type or an invalid value.
    #[error("invalid field: {0}")]
    InvalidField(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
