//! Reading bez glyph programs.
//!
//! A bez program is a whitespace separated sequence of numbers, operators and
//! `%` comments:
//!
//! ```text
//! % a
//! 0 50 rb % 1 2
//! sc
//! 10 0 mt
//! 200 0 dt
//! 200 50 dt
//! cp
//! ed
//! ```
//!
//! [`evaluate`] runs a program and sends the resulting commands to a
//! [`CommandSink`]; [`read_glyph`] collects them into a [`Glyph`].

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod builder;
mod error;
mod program;
mod stack;
mod token;

pub use builder::GlyphBuilder;
pub use error::Error;
pub use program::{evaluate, CommandSink};
pub use token::{Token, Tokenizer};

/// Expose the underlying types crate.
pub extern crate bez_types as types;

use types::Glyph;

/// Reads a complete glyph from program text.
pub fn read_glyph(text: &str) -> Result<Glyph, Error> {
    let mut builder = GlyphBuilder::new();
    evaluate(text, &mut builder)?;
    builder.finish()
}
