//! Errors returned by the hinting entry points.

use std::fmt;

use write_bez::AllocError;

use crate::{engine::EngineError, font_info::FontInfoError, merge::MergeError};

/// Integer result codes of the entry points.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[repr(i32)]
pub enum ResultCode {
    Success = 0,
    FontinfoParseFail = 1,
    FatalError = 2,
    MemoryError = 3,
    UnknownError = 4,
    DestBuffOfloError = 5,
    InvalidParameterError = 6,
}

impl ResultCode {
    pub fn to_i32(self) -> i32 {
        self as i32
    }
}

/// An error that ended a hinting call.
#[derive(Clone, Debug)]
pub enum Error {
    /// A required input was missing or inconsistent.
    InvalidParameter(&'static str),
    /// The output buffer could not be created.
    Memory(AllocError),
    /// The caller's destination could not be grown to hold the result.
    DestinationOverflow(AllocError),
    FontInfo(FontInfoError),
    /// The source program could not be read.
    Read(read_bez::Error),
    /// Writing the hinted program failed.
    Write(write_bez::Error),
    Engine(EngineError),
    Merge(MergeError),
}

impl Error {
    /// Returns the result code reported for this error.
    pub fn code(&self) -> ResultCode {
        match self {
            Self::InvalidParameter(_) => ResultCode::InvalidParameterError,
            Self::Memory(_) => ResultCode::MemoryError,
            Self::DestinationOverflow(_) => ResultCode::DestBuffOfloError,
            Self::FontInfo(_) => ResultCode::FontinfoParseFail,
            Self::Read(_) | Self::Write(_) | Self::Engine(_) | Self::Merge(_) => {
                ResultCode::FatalError
            }
        }
    }
}

impl From<FontInfoError> for Error {
    fn from(value: FontInfoError) -> Self {
        Self::FontInfo(value)
    }
}

impl From<read_bez::Error> for Error {
    fn from(value: read_bez::Error) -> Self {
        Self::Read(value)
    }
}

impl From<write_bez::Error> for Error {
    fn from(value: write_bez::Error) -> Self {
        Self::Write(value)
    }
}

impl From<EngineError> for Error {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<MergeError> for Error {
    fn from(value: MergeError) -> Self {
        Self::Merge(value)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter(what) => write!(f, "invalid parameter: {what}"),
            Self::Memory(e) => write!(f, "memory error: {e}"),
            Self::DestinationOverflow(e) => write!(f, "destination buffer overflow: {e}"),
            Self::FontInfo(e) => write!(f, "font info parse failure: {e}"),
            Self::Read(e) => write!(f, "invalid glyph program: {e}"),
            Self::Write(e) => e.fmt(f),
            Self::Engine(e) => e.fmt(f),
            Self::Merge(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidParameter(_) => None,
            Self::Memory(e) | Self::DestinationOverflow(e) => Some(e),
            Self::FontInfo(e) => Some(e),
            Self::Read(e) => Some(e),
            Self::Write(e) => Some(e),
            Self::Engine(e) => Some(e),
            Self::Merge(e) => Some(e),
        }
    }
}
