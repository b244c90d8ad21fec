//! Collecting evaluated commands into a glyph.

use core::num::NonZeroU16;

use types::{ElementId, Fixed, Glyph, HintKind, HintPoint, Point, Segment};

use super::{CommandSink, Error};

/// Command sink that builds a [`Glyph`].
///
/// Path coordinates are converted to the internal convention (y negated).
/// Hint bounds are kept as written.
#[derive(Default, Debug)]
pub struct GlyphBuilder {
    glyph: Glyph,
    current_mask: u16,
    pending_mask: Option<NonZeroU16>,
    overflowed: bool,
}

impl GlyphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the completed glyph.
    pub fn finish(self) -> Result<Glyph, Error> {
        if self.overflowed {
            return Err(Error::TooManyHintMasks);
        }
        Ok(self.glyph)
    }

    fn push(&mut self, segment: Segment) -> ElementId {
        let id = self.glyph.push(segment);
        if let Some(mask) = self.pending_mask.take() {
            if let Some(element) = self.glyph.element_mut(id) {
                element.new_hints = Some(mask);
            }
        }
        id
    }
}

fn internal(x: Fixed, y: Fixed) -> Point<Fixed> {
    Point::new(x, -y)
}

impl CommandSink for GlyphBuilder {
    fn move_to(&mut self, x: Fixed, y: Fixed) {
        self.push(Segment::MoveTo(internal(x, y)));
    }

    fn line_to(&mut self, x: Fixed, y: Fixed) {
        self.push(Segment::LineTo(internal(x, y)));
    }

    fn curve_to(&mut self, cx0: Fixed, cy0: Fixed, cx1: Fixed, cy1: Fixed, x: Fixed, y: Fixed) {
        self.push(Segment::CurveTo(
            internal(cx0, cy0),
            internal(cx1, cy1),
            internal(x, y),
        ));
    }

    fn close(&mut self) {
        self.push(Segment::Close);
    }

    fn flex(&mut self, points: [Point<Fixed>; 6], y_flex: bool) {
        let [a, b, c, d, e, f] = points.map(|p| p.flip_y());
        for segment in [Segment::CurveTo(a, b, c), Segment::CurveTo(d, e, f)] {
            let id = self.push(segment);
            if let Some(element) = self.glyph.element_mut(id) {
                element.is_flex = true;
                element.y_flex = y_flex;
            }
        }
    }

    fn glyph_name(&mut self, name: &str) {
        self.glyph.name = name.to_owned();
    }

    fn hint(
        &mut self,
        kind: HintKind,
        low: Fixed,
        high: Fixed,
        elements: (Option<ElementId>, Option<ElementId>),
    ) {
        let point = HintPoint::new(kind, low, high).with_elements(elements.0, elements.1);
        self.glyph.hints.add(self.current_mask, point);
    }

    fn begin_hint_substitution(&mut self) {
        match self.glyph.hints.push_mask() {
            Some(index) => self.current_mask = index.get(),
            None => self.overflowed = true,
        }
    }

    fn new_hints(&mut self) {
        self.pending_mask = NonZeroU16::new(self.current_mask);
    }
}
