//! Writing bez glyph programs.
//!
//! [`BezWriter`] turns a hinted [`Glyph`](types::Glyph) into program text:
//! the initial hint mask, the path with hint substitutions where the active
//! mask changes, and flex calls for flagged curve pairs. Text accumulates in
//! an [`OutputBuffer`] whose growth can be limited with a
//! [`MemoryManager`].

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod buffer;
mod error;
mod flex;
mod mask;
pub mod memory;
mod number;
mod options;
mod writer;

pub use buffer::OutputBuffer;
pub use error::{Error, Warning};
pub use mask::MAX_MASK_LEN;
pub use memory::{AllocError, MemoryLimit, MemoryManager, SystemMemory};
pub use options::{FlexParams, WriteOptions};
pub use writer::{write_glyph, BezWriter};

/// Expose the underlying types crate.
pub extern crate bez_types as types;
