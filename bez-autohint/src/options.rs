//! Options for a hinting call.

use write_bez::{FlexParams, WriteOptions};

/// Options that control hinting and the resulting program.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct HintOptions {
    /// The engine may change the outline.
    pub allow_edit: bool,
    /// The engine may switch hint sets partway through the path.
    pub allow_hint_sub: bool,
    /// Round written coordinates to integers.
    pub round_coords: bool,
    pub flex: FlexParams,
}

impl Default for HintOptions {
    fn default() -> Self {
        Self {
            allow_edit: true,
            allow_hint_sub: true,
            round_coords: true,
            flex: FlexParams::default(),
        }
    }
}

impl From<&HintOptions> for WriteOptions {
    fn from(value: &HintOptions) -> Self {
        Self {
            round_coords: value.round_coords,
            flex: value.flex,
        }
    }
}

impl From<HintOptions> for WriteOptions {
    fn from(value: HintOptions) -> Self {
        (&value).into()
    }
}
