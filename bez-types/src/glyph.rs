//! The in-memory glyph model exchanged with the hinting engine.

use core::num::NonZeroU16;

use crate::{BoundingBox, Fixed, HintTable, Pen, Point};

/// Position of an element within a glyph path.
///
/// Elements are numbered from 1 in program text (hint comments refer to
/// them this way) while the id itself is a zero based index.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementId(u32);

impl ElementId {
    /// Creates an id from a zero based index.
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Creates an id from a 1-based sequence number, where 0 means "no
    /// element".
    pub fn from_number(number: u32) -> Option<Self> {
        number.checked_sub(1).map(Self)
    }

    /// Returns the zero based index of the element.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the 1-based sequence number of the element.
    pub const fn number(self) -> u32 {
        self.0 + 1
    }
}

/// Drawing command of a single path element.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Segment {
    /// Begin a new subpath at the point.
    MoveTo(Point<Fixed>),
    /// Line from the current point.
    LineTo(Point<Fixed>),
    /// Cubic curve with two control points and an end point.
    CurveTo(Point<Fixed>, Point<Fixed>, Point<Fixed>),
    /// Close the current subpath.
    Close,
}

impl Segment {
    /// Returns the final point of the segment, if it has one.
    pub fn end_point(&self) -> Option<Point<Fixed>> {
        match self {
            Self::MoveTo(p) | Self::LineTo(p) | Self::CurveTo(_, _, p) => Some(*p),
            Self::Close => None,
        }
    }
}

/// One node of a glyph path.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathElement {
    pub segment: Segment,
    /// Set on both curves of a flex pair.
    pub is_flex: bool,
    /// True when the flex pair varies along the y axis.
    pub y_flex: bool,
    /// Index of the hint mask that becomes active at this element.
    ///
    /// Mask 0 is the initial hint set and is never named here.
    pub new_hints: Option<NonZeroU16>,
}

impl PathElement {
    pub fn new(segment: Segment) -> Self {
        Self {
            segment,
            is_flex: false,
            y_flex: false,
            new_hints: None,
        }
    }
}

/// A glyph outline with its hint annotations.
///
/// Coordinates of the path use the internal convention, where y is negated
/// relative to the program text.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyph {
    pub name: String,
    pub elements: Vec<PathElement>,
    pub hints: HintTable,
}

impl Glyph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elements: Vec::new(),
            hints: HintTable::new(),
        }
    }

    /// Appends a segment to the path, returning its id.
    pub fn push(&mut self, segment: Segment) -> ElementId {
        self.elements.push(PathElement::new(segment));
        ElementId::new(self.elements.len() as u32 - 1)
    }

    pub fn element(&self, id: ElementId) -> Option<&PathElement> {
        self.elements.get(id.index())
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut PathElement> {
        self.elements.get_mut(id.index())
    }

    /// Returns the point at which the element ends.
    ///
    /// A close ends where its subpath started.
    pub fn end_point(&self, id: ElementId) -> Option<Point<Fixed>> {
        let element = self.element(id)?;
        if let Some(point) = element.segment.end_point() {
            return Some(point);
        }
        self.elements[..id.index()]
            .iter()
            .rev()
            .find_map(|element| match element.segment {
                Segment::MoveTo(p) => Some(p),
                _ => None,
            })
    }

    /// Returns the point at which the element starts.
    ///
    /// This is the end of the previous element; the first element starts
    /// where it ends.
    pub fn start_point(&self, id: ElementId) -> Option<Point<Fixed>> {
        self.element(id)?;
        match id.index().checked_sub(1) {
            Some(prev) => self.end_point(ElementId::new(prev as u32)),
            None => self.end_point(id),
        }
    }

    /// Returns the bounds of all path points in the y-up program convention.
    pub fn bounds(&self) -> Option<BoundingBox<Fixed>> {
        BoundingBox::from_points(self.elements.iter().flat_map(|element| {
            let points = match element.segment {
                Segment::MoveTo(p) | Segment::LineTo(p) => [Some(p), None, None],
                Segment::CurveTo(a, b, c) => [Some(a), Some(b), Some(c)],
                Segment::Close => [None, None, None],
            };
            points.into_iter().flatten().map(Point::flip_y)
        }))
    }

    /// Replays the outline into a pen, in the y-up program convention.
    pub fn draw(&self, pen: &mut impl Pen) {
        for element in &self.elements {
            match element.segment {
                Segment::MoveTo(p) => {
                    let p = p.flip_y();
                    pen.move_to(p.x.to_f32(), p.y.to_f32());
                }
                Segment::LineTo(p) => {
                    let p = p.flip_y();
                    pen.line_to(p.x.to_f32(), p.y.to_f32());
                }
                Segment::CurveTo(a, b, c) => {
                    let (a, b, c) = (a.flip_y(), b.flip_y(), c.flip_y());
                    pen.curve_to(
                        a.x.to_f32(),
                        a.y.to_f32(),
                        b.x.to_f32(),
                        b.y.to_f32(),
                        c.x.to_f32(),
                        c.y.to_f32(),
                    );
                }
                Segment::Close => pen.close(),
            }
        }
    }

    /// Converts the outline to a [`kurbo::BezPath`] in the program convention.
    #[cfg(feature = "kurbo")]
    pub fn to_bez_path(&self) -> kurbo::BezPath {
        let mut path = kurbo::BezPath::new();
        self.draw(&mut path);
        path
    }

    fn current_point(&self) -> Point<Fixed> {
        self.elements
            .len()
            .checked_sub(1)
            .and_then(|last| self.end_point(ElementId::new(last as u32)))
            .unwrap_or_default()
    }
}

/// Builds the path from pen commands given in the y-up convention.
///
/// Quadratic segments are raised to cubics.
impl Pen for Glyph {
    fn move_to(&mut self, x: f32, y: f32) {
        self.push(Segment::MoveTo(Point::from_f32(x, y).flip_y()));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push(Segment::LineTo(Point::from_f32(x, y).flip_y()));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        let start = self.current_point().flip_y();
        let (x0, y0) = (start.x.to_f32(), start.y.to_f32());
        let c1 = (x0 + 2.0 / 3.0 * (cx0 - x0), y0 + 2.0 / 3.0 * (cy0 - y0));
        let c2 = (x + 2.0 / 3.0 * (cx0 - x), y + 2.0 / 3.0 * (cy0 - y));
        self.curve_to(c1.0, c1.1, c2.0, c2.1, x, y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.push(Segment::CurveTo(
            Point::from_f32(cx0, cy0).flip_y(),
            Point::from_f32(cx1, cy1).flip_y(),
            Point::from_f32(x, y).flip_y(),
        ));
    }

    fn close(&mut self) {
        self.push(Segment::Close);
    }
}
