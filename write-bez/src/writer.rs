//! Serializing a glyph as a bez program.

use core::num::NonZeroU16;

use types::{Glyph, Segment};

use crate::{
    flex::FlexCombiner,
    mask::{render_mask, MaskHistory},
    number::CoordinateWriter,
    Error, OutputBuffer, Warning, WriteOptions,
};

/// Writes glyphs as program text into an [`OutputBuffer`].
///
/// Paths are stored with y pointing down; every written y is negated.
#[derive(Debug)]
pub struct BezWriter {
    buffer: OutputBuffer,
    options: WriteOptions,
    warnings: Vec<Warning>,
}

/// State that lives for the writing of one glyph.
struct GlyphState {
    coords: CoordinateWriter,
    masks: MaskHistory,
    flex: FlexCombiner,
    /// Masks are only written for paths with more than one element.
    write_hints: bool,
}

impl BezWriter {
    pub fn new(buffer: OutputBuffer, options: WriteOptions) -> Self {
        Self {
            buffer,
            options,
            warnings: Vec::new(),
        }
    }

    pub fn options(&self) -> &WriteOptions {
        &self.options
    }

    /// Recoverable problems found so far.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn buffer(&self) -> &OutputBuffer {
        &self.buffer
    }

    /// Returns the buffer holding everything written.
    pub fn finish(self) -> OutputBuffer {
        self.buffer
    }

    /// Appends the program for one glyph.
    pub fn write_glyph(&mut self, glyph: &Glyph) -> Result<(), Error> {
        log::trace!("writing '{}' ({} elements)", glyph.name, glyph.elements.len());
        let mut state = GlyphState {
            coords: CoordinateWriter::new(self.options.round_coords),
            masks: MaskHistory::default(),
            flex: FlexCombiner::default(),
            write_hints: glyph.elements.len() > 1,
        };
        self.buffer.append("% ")?;
        self.buffer.append(&glyph.name)?;
        self.buffer.append("\n")?;
        let first_has_mask = glyph
            .elements
            .first()
            .is_some_and(|element| element.new_hints.is_some());
        if state.write_hints && !first_has_mask {
            let mask = render_mask(glyph.hints.initial(), &mut self.warnings)?;
            self.buffer.append(&mask)?;
            state.masks.set(&mask);
        }
        self.buffer.append("sc\n")?;
        let mut text = String::new();
        for (ix, element) in glyph.elements.iter().enumerate() {
            text.clear();
            if let Some(mask) = element.new_hints {
                self.write_new_hints(glyph, mask, &mut state, &mut text)?;
            }
            let coords = &mut state.coords;
            match element.segment {
                Segment::MoveTo(p) => {
                    coords.write_point(&mut text, p.flip_y());
                    text.push_str("mt\n");
                }
                Segment::LineTo(p) => {
                    coords.write_point(&mut text, p.flip_y());
                    text.push_str("dt\n");
                }
                Segment::CurveTo(a, b, c) => {
                    let points = [a, b, c].map(|p| p.flip_y());
                    if element.is_flex && state.flex.is_pair(glyph, ix) {
                        state.flex.curve(
                            points,
                            element.y_flex,
                            &self.options.flex,
                            coords,
                            &mut text,
                        );
                    } else {
                        for point in points {
                            coords.write_point(&mut text, point);
                        }
                        text.push_str("ct\n");
                    }
                }
                Segment::Close => text.push_str("cp\n"),
            }
            self.buffer.append(&text)?;
        }
        self.buffer.append("ed\n")
    }

    fn write_new_hints(
        &mut self,
        glyph: &Glyph,
        mask: NonZeroU16,
        state: &mut GlyphState,
        out: &mut String,
    ) -> Result<(), Error> {
        if !state.write_hints {
            return Ok(());
        }
        let text = render_mask(glyph.hints.mask(mask.get()), &mut self.warnings)?;
        if let Some(block) = state.masks.substitution(text) {
            out.push_str(&block);
        }
        Ok(())
    }
}

/// Writes a single glyph into a new string.
pub fn write_glyph(glyph: &Glyph, options: WriteOptions) -> Result<String, Error> {
    let buffer = OutputBuffer::new(256)?;
    let mut writer = BezWriter::new(buffer, options);
    writer.write_glyph(glyph)?;
    Ok(writer.finish().into_string())
}
