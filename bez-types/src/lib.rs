//! Common types for reading, hinting and writing bez glyph programs.
//!
//! A bez program is the textual, stack based description of a single glyph
//! outline together with its stem and zone hints. This crate holds the
//! pieces that every stage agrees on: the 24.8 [`Fixed`] scalar, points and
//! bounds, and the in-memory [`Glyph`] model that the hinting engine edits
//! and the serializer walks.
//!
//! Path coordinates are stored in the *internal* convention used by the
//! hinter, where the y axis is flipped relative to the program text. Hint
//! edges are stored exactly as they appear in the program.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod bbox;
mod fixed;
mod glyph;
mod hint;
mod pen;
mod point;


pub use bbox::BoundingBox;
pub use fixed::Fixed;
pub use glyph::{ElementId, Glyph, PathElement, Segment};
pub use hint::{HintKind, HintPoint, HintTable};
pub use pen::Pen;
pub use point::Point;
