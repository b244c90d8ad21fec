//! Carrying hints from a hinted master onto its compatible siblings.
//!
//! Masters of an interpolatable family share path structure, so a hint edge
//! that the reference places on element *n* lands on element *n* of every
//! other master. Nothing is recomputed from the geometry.

use std::fmt;

use bez_types::{ElementId, Fixed, Glyph, HintPoint, Point};

/// Errors produced when merging hints onto a master.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MergeError {
    /// The master has no element at a position the reference uses.
    MissingElement { element: ElementId },
    /// A hint of the reference names an element outside its own path.
    InvalidReference { element: ElementId },
}

impl fmt::Display for MergeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement { element } => write!(
                f,
                "master has no path element {} to place a hint on",
                element.number()
            ),
            Self::InvalidReference { element } => write!(
                f,
                "reference hint names missing path element {}",
                element.number()
            ),
        }
    }
}

impl std::error::Error for MergeError {}

/// Which point of an element establishes a hint edge.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Anchor {
    Start,
    End,
}

/// Returns `master` with the hints of `reference` placed on it.
///
/// The path of the master is kept; its hint table is replaced and the
/// substitution points and flex flags are copied from the reference
/// element at the same position.
pub fn merge_glyph(reference: &Glyph, master: &Glyph) -> Result<Glyph, MergeError> {
    let mut merged = master.clone();
    for (ix, source) in reference.elements.iter().enumerate() {
        let element = merged
            .elements
            .get_mut(ix)
            .ok_or(MergeError::MissingElement {
                element: ElementId::new(ix as u32),
            })?;
        element.new_hints = source.new_hints;
        element.is_flex = source.is_flex;
        element.y_flex = source.y_flex;
    }
    if merged.elements.len() != reference.elements.len() {
        log::warn!(
            "master '{}' has {} path elements, reference has {}",
            master.name,
            master.elements.len(),
            reference.elements.len()
        );
    }
    let mut hints = reference.hints.clone();
    for index in 0..hints.len() {
        let Some(points) = hints.mask_mut(index as u16) else {
            continue;
        };
        for point in points.iter_mut() {
            *point = merge_point(reference, master, point)?;
        }
    }
    merged.hints = hints;
    log::debug!(
        "merged {} hint masks onto master '{}'",
        merged.hints.len(),
        merged.name
    );
    Ok(merged)
}

fn merge_point(
    reference: &Glyph,
    master: &Glyph,
    point: &HintPoint,
) -> Result<HintPoint, MergeError> {
    let vertical = point.kind.is_vertical();
    let mut merged = *point;
    if let Some(element) = point.low_element {
        merged.low = merge_edge(reference, master, element, point.low, vertical)?;
    }
    if let Some(element) = point.high_element {
        merged.high = merge_edge(reference, master, element, point.high, vertical)?;
    }
    Ok(merged)
}

fn merge_edge(
    reference: &Glyph,
    master: &Glyph,
    element: ElementId,
    value: Fixed,
    vertical: bool,
) -> Result<Fixed, MergeError> {
    let (Some(start), Some(end)) = (reference.start_point(element), reference.end_point(element))
    else {
        return Err(MergeError::InvalidReference { element });
    };
    let anchor = choose_anchor(
        coordinate(start, vertical),
        coordinate(end, vertical),
        value,
    );
    let target = match anchor {
        Anchor::Start => master.start_point(element),
        Anchor::End => master.end_point(element),
    }
    .ok_or(MergeError::MissingElement { element })?;
    Ok(coordinate(target, vertical))
}

/// The coordinate a hint of the given orientation reads, in the program
/// convention.
fn coordinate(point: Point<Fixed>, vertical: bool) -> Fixed {
    if vertical {
        point.x
    } else {
        -point.y
    }
}

fn choose_anchor(start: Fixed, end: Fixed, value: Fixed) -> Anchor {
    if end == value {
        Anchor::End
    } else if start == value {
        Anchor::Start
    } else if distance(start, value) < distance(end, value) {
        Anchor::Start
    } else {
        Anchor::End
    }
}

fn distance(a: Fixed, b: Fixed) -> i64 {
    (a.to_bits() as i64 - b.to_bits() as i64).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bez_types::HintKind;
    use read_bez::read_glyph;

    fn fx(value: i32) -> Fixed {
        Fixed::from_i32(value)
    }

    #[test]
    fn places_hints_on_master() {
        let reference = read_glyph(bez_test_data::HINTED_A).unwrap();
        let master = read_glyph(bez_test_data::MASTER_A_BOLD).unwrap();
        let merged = merge_glyph(&reference, &master).unwrap();
        let initial = merged.hints.initial();
        assert_eq!(initial.len(), 2);
        assert_eq!(initial[0].kind, HintKind::VStem);
        assert_eq!((initial[0].low, initial[0].high), (fx(40), fx(100)));
        assert_eq!(initial[1].kind, HintKind::HStem);
        assert_eq!((initial[1].low, initial[1].high), (fx(0), fx(520)));
        let sub = merged.hints.mask(1);
        assert_eq!((sub[0].low, sub[0].high), (fx(40), fx(100)));
        assert_eq!(
            merged.elements[3].new_hints,
            reference.elements[3].new_hints
        );
        assert_eq!(merged.name, "a");
    }

    #[test]
    fn short_master() {
        let reference = read_glyph(bez_test_data::HINTED_A).unwrap();
        let master = read_glyph(bez_test_data::MASTER_A_SHORT).unwrap();
        assert_eq!(
            merge_glyph(&reference, &master),
            Err(MergeError::MissingElement {
                element: ElementId::new(3)
            })
        );
    }

    #[test]
    fn unanchored_bounds_keep_reference_values() {
        let reference = read_glyph("% b\n10 20 rb\nsc\n0 0 mt\n5 5 dt\ncp\ned\n").unwrap();
        let master = read_glyph("% b\nsc\n0 0 mt\n7 9 dt\ncp\ned\n").unwrap();
        let merged = merge_glyph(&reference, &master).unwrap();
        assert_eq!(merged.hints.initial(), reference.hints.initial());
    }

    #[test]
    fn start_point_anchor() {
        // the low edge sits at the start of element 2
        let reference =
            read_glyph("% c\n0 40 rb % 2 2\nsc\n0 0 mt\n100 40 dt\n0 40 dt\ncp\ned\n").unwrap();
        let master = read_glyph("% c\nsc\n0 -5 mt\n100 45 dt\n0 45 dt\ncp\ned\n").unwrap();
        let merged = merge_glyph(&reference, &master).unwrap();
        let hint = merged.hints.initial()[0];
        assert_eq!((hint.low, hint.high), (fx(-5), fx(45)));
    }

    #[test]
    fn bad_reference() {
        let reference = read_glyph("% d\n0 40 rb % 9 0\nsc\n0 0 mt\n0 40 dt\ned\n").unwrap();
        assert_eq!(
            merge_glyph(&reference, &reference),
            Err(MergeError::InvalidReference {
                element: ElementId::new(8)
            })
        );
    }

    #[test]
    fn nearest_anchor() {
        assert_eq!(choose_anchor(fx(0), fx(10), fx(2)), Anchor::Start);
        assert_eq!(choose_anchor(fx(0), fx(10), fx(7)), Anchor::End);
        assert_eq!(choose_anchor(fx(0), fx(10), fx(5)), Anchor::End);
        assert_eq!(choose_anchor(fx(3), fx(3), fx(3)), Anchor::End);
    }

    #[test]
    fn anchors_far_apart() {
        assert_eq!(
            choose_anchor(Fixed::MAX, -Fixed::MAX, Fixed::ZERO),
            Anchor::End
        );
        assert_eq!(
            choose_anchor(fx(0), -Fixed::MAX, Fixed::MAX),
            Anchor::Start
        );
        assert_eq!(choose_anchor(Fixed::MIN, fx(0), Fixed::MAX), Anchor::End);
    }

    #[test]
    fn hint_far_from_its_elements() {
        let text = "% c\n8388607 0 rb % 2 0\nsc\n0 0 mt\n0 -8388607 dt\ncp\ned\n";
        let glyph = read_glyph(text).unwrap();
        let merged = merge_glyph(&glyph, &glyph).unwrap();
        let hint = merged.hints.initial()[0];
        assert_eq!(hint.low, fx(0));
        assert_eq!(hint.high, fx(8388607));
    }
}
