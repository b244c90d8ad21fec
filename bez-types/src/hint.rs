//! Stem and zone hints attached to a glyph.

use core::num::NonZeroU16;

use crate::{ElementId, Fixed};

/// Category of a hint edge pair.
///
/// Each category is identified by a single tag byte; the serializer orders
/// hints by this tag, so the numeric values matter.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HintKind {
    /// Horizontal stem, bounds are y values (`rb`).
    HStem,
    /// Horizontal counter stem, as in Type 1 `hstem3` (`rv`).
    HStem3,
    /// Vertical stem, bounds are x values (`ry`).
    VStem,
    /// Vertical counter stem, as in Type 1 `vstem3` (`rm`).
    VStem3,
    /// A tag this crate does not know about.
    Unknown(u8),
}

impl HintKind {
    pub fn from_tag(tag: u8) -> Self {
        match tag {
            b'b' => Self::HStem,
            b'v' => Self::HStem3,
            b'y' => Self::VStem,
            b'm' => Self::VStem3,
            other => Self::Unknown(other),
        }
    }

    /// Returns the kind for a hint operator in program text.
    pub fn from_operator(operator: &str) -> Option<Self> {
        Some(match operator {
            "rb" => Self::HStem,
            "rv" => Self::HStem3,
            "ry" => Self::VStem,
            "rm" => Self::VStem3,
            _ => return None,
        })
    }

    pub fn tag(self) -> u8 {
        match self {
            Self::HStem => b'b',
            Self::HStem3 => b'v',
            Self::VStem => b'y',
            Self::VStem3 => b'm',
            Self::Unknown(tag) => tag,
        }
    }

    /// Returns the program operator for this kind.
    pub fn operator(self) -> Option<&'static str> {
        match self {
            Self::HStem => Some("rb"),
            Self::HStem3 => Some("rv"),
            Self::VStem => Some("ry"),
            Self::VStem3 => Some("rm"),
            Self::Unknown(_) => None,
        }
    }

    /// True if the bounds of this kind are x coordinates.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::VStem | Self::VStem3)
    }
}

/// One stem or zone edge pair.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HintPoint {
    pub kind: HintKind,
    pub low: Fixed,
    pub high: Fixed,
    /// Path element that establishes the low edge.
    pub low_element: Option<ElementId>,
    /// Path element that establishes the high edge.
    pub high_element: Option<ElementId>,
}

impl HintPoint {
    pub fn new(kind: HintKind, low: Fixed, high: Fixed) -> Self {
        Self {
            kind,
            low,
            high,
            low_element: None,
            high_element: None,
        }
    }

    pub fn with_elements(self, low: Option<ElementId>, high: Option<ElementId>) -> Self {
        Self {
            low_element: low,
            high_element: high,
            ..self
        }
    }

    /// Returns the smaller of the two bounds.
    pub fn min_edge(&self) -> Fixed {
        self.low.min(self.high)
    }
}

/// Hint masks of a glyph, indexed by the values stored in
/// [`PathElement::new_hints`](crate::PathElement::new_hints).
///
/// Mask 0 always exists and holds the hints active at the start of the
/// path.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HintTable {
    masks: Vec<Vec<HintPoint>>,
}

impl HintTable {
    pub fn new() -> Self {
        Self {
            masks: vec![Vec::new()],
        }
    }

    /// Returns the number of masks, including the initial one.
    pub fn len(&self) -> usize {
        self.masks.len()
    }

    /// True if no mask holds any hint.
    pub fn is_empty(&self) -> bool {
        self.masks.iter().all(Vec::is_empty)
    }

    /// Returns the hints of a mask; unknown masks are empty.
    pub fn mask(&self, index: u16) -> &[HintPoint] {
        self.masks
            .get(index as usize)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn mask_mut(&mut self, index: u16) -> Option<&mut Vec<HintPoint>> {
        self.masks.get_mut(index as usize)
    }

    /// Returns the hints active at the start of the path.
    pub fn initial(&self) -> &[HintPoint] {
        self.mask(0)
    }

    /// Adds an empty mask, returning its index.
    ///
    /// Returns `None` once the index space is exhausted.
    pub fn push_mask(&mut self) -> Option<NonZeroU16> {
        let index = NonZeroU16::new(u16::try_from(self.masks.len()).ok()?)?;
        self.masks.push(Vec::new());
        Some(index)
    }

    /// Adds a hint to an existing mask.
    ///
    /// Returns false if the mask does not exist.
    pub fn add(&mut self, mask: u16, point: HintPoint) -> bool {
        match self.mask_mut(mask) {
            Some(points) => {
                points.push(point);
                true
            }
            None => false,
        }
    }

    /// Iterates over `(index, hints)` for every mask.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &[HintPoint])> + '_ {
        self.masks
            .iter()
            .enumerate()
            .map(|(ix, points)| (ix as u16, points.as_slice()))
    }
}

impl Default for HintTable {
    fn default() -> Self {
        Self::new()
    }
}
