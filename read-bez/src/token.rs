//! Splitting program text into tokens.

use types::Fixed;

use super::Error;

/// Largest magnitude that fits the integer part of a [`Fixed`].
const MAX_INTEGER: i32 = (1 << 23) - 1;

/// A single lexical item of a program.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Token<'a> {
    Number(Fixed),
    Operator(&'a str),
    /// Text following a `%`, up to the end of the line, trimmed.
    Comment(&'a str),
}

/// Iterator over the tokens of a program.
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    text: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            line: 1,
        }
    }

    /// Returns the 1-based line of the most recently returned token.
    pub fn line(&self) -> usize {
        self.line
    }

    fn skip_whitespace(&mut self) {
        let bytes = self.text.as_bytes();
        while let Some(&b) = bytes.get(self.pos) {
            if !b.is_ascii_whitespace() {
                break;
            }
            if b == b'\n' {
                self.line += 1;
            }
            self.pos += 1;
        }
    }

    fn parse_number(&self, text: &str) -> Result<Fixed, Error> {
        let invalid = || Error::InvalidNumber {
            line: self.line,
            text: text.to_owned(),
        };
        if text.contains('.') {
            let value: f64 = text.parse().map_err(|_| invalid())?;
            if !value.is_finite() || value.abs() > MAX_INTEGER as f64 {
                return Err(invalid());
            }
            Ok(Fixed::from_f64(value))
        } else {
            let value: i32 = text.parse().map_err(|_| invalid())?;
            if value.abs() > MAX_INTEGER {
                return Err(invalid());
            }
            Ok(Fixed::from_i32(value))
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        let rest = self.text.get(self.pos..)?;
        if rest.is_empty() {
            return None;
        }
        if let Some(comment) = rest.strip_prefix('%') {
            let len = comment.find('\n').unwrap_or(comment.len());
            self.pos += 1 + len;
            return Some(Ok(Token::Comment(comment[..len].trim())));
        }
        let len = rest
            .find(|c: char| c.is_ascii_whitespace() || c == '%')
            .unwrap_or(rest.len());
        let word = &rest[..len];
        self.pos += len;
        let starts_numeric = word
            .as_bytes()
            .first()
            .is_some_and(|&b| b.is_ascii_digit() || matches!(b, b'-' | b'+' | b'.'));
        if starts_numeric {
            Some(self.parse_number(word).map(Token::Number))
        } else {
            Some(Ok(Token::Operator(word)))
        }
    }
}
