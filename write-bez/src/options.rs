//! Serializer configuration.

/// Tunables written into every flex call.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FlexParams {
    /// Minimum flex height, in font units, below which the pair is drawn
    /// flat.
    pub min_distance: i32,
    /// Distance used to place the reference point between the curves.
    pub delta: i32,
}

impl Default for FlexParams {
    fn default() -> Self {
        Self {
            min_distance: 50,
            delta: 0,
        }
    }
}

/// Options for writing a glyph program.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct WriteOptions {
    /// Round path coordinates to integers.
    pub round_coords: bool,
    pub flex: FlexParams,
}

impl WriteOptions {
    pub fn new(round_coords: bool) -> Self {
        Self {
            round_coords,
            ..Default::default()
        }
    }
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            round_coords: true,
            flex: FlexParams::default(),
        }
    }
}

impl From<FlexParams> for WriteOptions {
    fn from(value: FlexParams) -> Self {
        Self {
            flex: value,
            ..Default::default()
        }
    }
}
