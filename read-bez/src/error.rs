//! Errors that occur while reading a program.

use std::fmt;

/// An error encountered while evaluating program text.
///
/// Every variant carries the 1-based line on which the problem was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A token that looked like a number could not be parsed.
    InvalidNumber { line: usize, text: String },
    /// More operands were pushed than the stack can hold.
    StackOverflow { line: usize },
    /// An operator was missing some of its operands.
    StackUnderflow {
        line: usize,
        operator: &'static str,
    },
    /// `div` with a zero divisor.
    DivideByZero { line: usize },
    /// A coordinate or hint edge does not fit the 24.8 range.
    Overflow { line: usize },
    /// A flex call did not carry its 17 operands.
    InvalidFlex { line: usize },
    /// The glyph starts more hint substitutions than can be indexed.
    TooManyHintMasks,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber { line, text } => {
                write!(f, "line {line}: invalid number '{text}'")
            }
            Self::StackOverflow { line } => write!(f, "line {line}: operand stack overflow"),
            Self::StackUnderflow { line, operator } => {
                write!(f, "line {line}: not enough operands for '{operator}'")
            }
            Self::DivideByZero { line } => write!(f, "line {line}: division by zero"),
            Self::Overflow { line } => write!(f, "line {line}: coordinate out of range"),
            Self::InvalidFlex { line } => {
                write!(f, "line {line}: flex requires 17 operands")
            }
            Self::TooManyHintMasks => write!(f, "too many hint substitutions in glyph"),
        }
    }
}

impl std::error::Error for Error {}
