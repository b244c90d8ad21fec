//! Font wide metrics that guide hinting.
//!
//! The text form is a sequence of `Key value` pairs separated by
//! whitespace. A value is a single token, a bracketed array such as
//! `[40, 46]` or a parenthesised list such as `( m n )`:
//!
//! ```text
//! FontName TestSans-Regular
//! FlexOK true
//! DominantV [80]
//! VCounterChars ( m n )
//! ```

use std::collections::BTreeMap;

/// A value in the font info text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontInfoValue {
    Token(String),
    /// Items of a `[ ... ]` array.
    Array(Vec<String>),
    /// Items of a `( ... )` list.
    List(Vec<String>),
}

/// Errors produced when parsing font info.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontInfoError {
    /// A key at the end of the text had no value.
    MissingValue { key: String },
    /// A `[` or `(` was never closed.
    Unterminated { key: String, close: char },
}

impl std::fmt::Display for FontInfoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingValue { key } => write!(f, "font info key '{key}' has no value"),
            Self::Unterminated { key, close } => {
                write!(f, "font info value for '{key}' is missing '{close}'")
            }
        }
    }
}

impl std::error::Error for FontInfoError {}

/// Parsed font info.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FontInfo {
    entries: BTreeMap<String, FontInfoValue>,
}

impl FontInfo {
    /// Parses font info text. Empty text gives empty info.
    pub fn parse(text: &str) -> Result<Self, FontInfoError> {
        let mut entries = BTreeMap::new();
        let mut rest = text.trim_start();
        while !rest.is_empty() {
            let (key, tail) = split_token(rest);
            let tail = tail.trim_start();
            let (value, tail) = match tail.chars().next() {
                None => {
                    return Err(FontInfoError::MissingValue { key: key.into() });
                }
                Some(open @ ('[' | '(')) => {
                    let close = if open == '[' { ']' } else { ')' };
                    let end = tail.find(close).ok_or_else(|| FontInfoError::Unterminated {
                        key: key.into(),
                        close,
                    })?;
                    let items = tail[1..end]
                        .split(|c: char| c.is_whitespace() || c == ',')
                        .filter(|item| !item.is_empty())
                        .map(String::from)
                        .collect();
                    let value = if open == '[' {
                        FontInfoValue::Array(items)
                    } else {
                        FontInfoValue::List(items)
                    };
                    (value, &tail[end + 1..])
                }
                Some(_) => {
                    let (token, tail) = split_token(tail);
                    (FontInfoValue::Token(token.into()), tail)
                }
            };
            log::trace!("font info {key}: {value:?}");
            entries.insert(key.to_owned(), value);
            rest = tail.trim_start();
        }
        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&FontInfoValue> {
        self.entries.get(key)
    }

    /// Returns a single token value.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            FontInfoValue::Token(token) => Some(token),
            _ => None,
        }
    }

    /// Returns a token value as an integer.
    pub fn get_int(&self, key: &str) -> Option<i32> {
        self.get_str(key)?.parse().ok()
    }

    /// Returns an array of integers; any non-integer item gives `None`.
    pub fn get_array(&self, key: &str) -> Option<Vec<i32>> {
        match self.get(key)? {
            FontInfoValue::Array(items) => items.iter().map(|item| item.parse().ok()).collect(),
            _ => None,
        }
    }

    /// Returns the items of a parenthesised list.
    pub fn get_list(&self, key: &str) -> Option<&[String]> {
        match self.get(key)? {
            FontInfoValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// True if flex hints may be used. Off unless `FlexOK true`.
    pub fn flex_ok(&self) -> bool {
        self.get_str("FlexOK") == Some("true")
    }

    pub fn font_name(&self) -> Option<&str> {
        self.get_str("FontName")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn split_token(text: &str) -> (&str, &str) {
    let end = text.find(char::is_whitespace).unwrap_or(text.len());
    text.split_at(end)
}
