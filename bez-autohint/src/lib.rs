//! Hinting entry points for bez glyph programs.
//!
//! An [`Autohinter`] reads a glyph program, hands the glyph to a
//! [`HintEngine`] and writes the hinted result back out as program text:
//!
//! ```
//! use bez_autohint::{Autohinter, HintOptions};
//!
//! let glyph = "% l\nsc\n0 0 mt\n80 0 dt\n80 700 dt\ncp\ned\n";
//! let mut hinter = Autohinter::new();
//! let hinted = hinter
//!     .hint_bez_glyph("FontName Example", glyph, &HintOptions::default())
//!     .unwrap();
//! assert!(hinted.starts_with("% l\n"));
//! ```
//!
//! For the masters of an interpolatable family,
//! [`Autohinter::autohint_string_mm`] places the hints of one hinted master
//! on the others by path position (see [`merge`]).

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod callbacks;
mod engine;
mod error;
mod font_info;
mod hinter;
pub mod merge;
mod options;

pub use callbacks::{Callbacks, ReportFn, RetryFn, StemFn, StemReporting};
pub use engine::{EngineError, HintContext, HintEngine, PassthroughEngine};
pub use error::{Error, ResultCode};
pub use font_info::{FontInfo, FontInfoError, FontInfoValue};
pub use hinter::Autohinter;
pub use options::HintOptions;

pub use write_bez::{AllocError, FlexParams, MemoryLimit, MemoryManager, SystemMemory};

/// Expose the underlying types crate.
pub extern crate bez_types as types;

/// Returns the version of this crate.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #[test]
    fn version_matches_manifest() {
        assert_eq!(super::version(), "0.1.0");
    }
}
