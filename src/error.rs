use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum TranscriptError {
    ReadError(io::Error),
}

impl Error for TranscriptError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TranscriptError::ReadError(err) => Some(err),
        }
    }
}

impl fmt::Display for TranscriptError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TranscriptError::ReadError(_) => write!(fmt, "Failed to read subtitle data"),
        }
    }
}
