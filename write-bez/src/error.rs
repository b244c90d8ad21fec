//! Errors that occur during writing

use crate::memory::AllocError;

/// An error that aborts writing a program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The output buffer could not grow.
    OutOfMemory(AllocError),
    /// A rendered hint mask did not fit the mask scratch space.
    HintOverflow { len: usize },
}

/// A recoverable problem found while writing.
///
/// Writing continues; the affected item is partially written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Warning {
    /// A hint of an unknown category; only its element annotation is
    /// written.
    UnknownHintKind { tag: u8 },
}

impl From<AllocError> for Error {
    fn from(value: AllocError) -> Self {
        Self::OutOfMemory(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::OutOfMemory(error) => error.fmt(f),
            Error::HintOverflow { len } => write!(
                f,
                "Hint information overflowing buffer ({len} bytes, max {})",
                crate::mask::MAX_MASK_LEN
            ),
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::UnknownHintKind { tag } => {
                write!(f, "Illegal point list data (hint tag {:?}).", *tag as char)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::OutOfMemory(error) => Some(error),
            Error::HintOverflow { .. } => None,
        }
    }
}
