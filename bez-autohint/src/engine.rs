//! The seam between the entry points and the hinting engine.

use std::fmt;

use bez_types::{Fixed, Glyph, HintKind};

use crate::{Callbacks, FontInfo, HintOptions, StemReporting};

/// An error reported by a hinting engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// The glyph cannot be hinted as given.
    InvalidGlyph(String),
    /// Hinting started but could not complete.
    Failed(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGlyph(msg) => write!(f, "cannot hint glyph: {msg}"),
            Self::Failed(msg) => write!(f, "hinting failed: {msg}"),
        }
    }
}

impl std::error::Error for EngineError {}

/// Computes hints for a glyph.
///
/// The engine edits the glyph in place: its hint table, the hint
/// substitution points on path elements and the flex flags.
pub trait HintEngine {
    fn hint(&mut self, glyph: &mut Glyph, ctx: &mut HintContext<'_>) -> Result<(), EngineError>;
}

impl<T: HintEngine + ?Sized> HintEngine for &mut T {
    fn hint(&mut self, glyph: &mut Glyph, ctx: &mut HintContext<'_>) -> Result<(), EngineError> {
        (**self).hint(glyph, ctx)
    }
}

/// What an engine can see and report to while hinting one glyph.
pub struct HintContext<'a> {
    font_info: &'a FontInfo,
    options: &'a HintOptions,
    callbacks: &'a mut Callbacks,
    glyph_name: String,
}

impl<'a> HintContext<'a> {
    pub fn new(
        font_info: &'a FontInfo,
        options: &'a HintOptions,
        callbacks: &'a mut Callbacks,
        glyph_name: impl Into<String>,
    ) -> Self {
        Self {
            font_info,
            options,
            callbacks,
            glyph_name: glyph_name.into(),
        }
    }

    pub fn font_info(&self) -> &FontInfo {
        self.font_info
    }

    pub fn options(&self) -> &HintOptions {
        self.options
    }

    pub fn glyph_name(&self) -> &str {
        &self.glyph_name
    }

    /// Sends a message to the report callback.
    pub fn report(&mut self, message: &str) {
        log::info!("{}: {message}", self.glyph_name);
        self.callbacks.report(message);
    }

    pub fn is_reporting_stems(&self) -> bool {
        matches!(self.callbacks.reporting, StemReporting::Stems { .. })
    }

    pub fn is_reporting_zones(&self) -> bool {
        matches!(self.callbacks.reporting, StemReporting::Zones { .. })
    }

    /// True if every candidate stem should be reported.
    pub fn all_stems(&self) -> bool {
        matches!(
            self.callbacks.reporting,
            StemReporting::Stems {
                all_stems: true,
                ..
            }
        )
    }

    pub fn report_hstem(&mut self, top: Fixed, bottom: Fixed) {
        if let StemReporting::Stems {
            hstem: Some(hstem), ..
        } = &mut self.callbacks.reporting
        {
            hstem(top, bottom, &self.glyph_name);
        }
    }

    pub fn report_vstem(&mut self, right: Fixed, left: Fixed) {
        if let StemReporting::Stems {
            vstem: Some(vstem), ..
        } = &mut self.callbacks.reporting
        {
            vstem(right, left, &self.glyph_name);
        }
    }

    pub fn report_glyph_zone(&mut self, top: Fixed, bottom: Fixed) {
        if let StemReporting::Zones {
            glyph: Some(glyph), ..
        } = &mut self.callbacks.reporting
        {
            glyph(top, bottom, &self.glyph_name);
        }
    }

    pub fn report_stem_zone(&mut self, top: Fixed, bottom: Fixed) {
        if let StemReporting::Zones {
            stem: Some(stem), ..
        } = &mut self.callbacks.reporting
        {
            stem(top, bottom, &self.glyph_name);
        }
    }

    pub fn notify_retry(&mut self) {
        log::debug!("{}: retrying", self.glyph_name);
        if let Some(retry) = self.callbacks.retry.as_mut() {
            retry();
        }
    }
}

/// An engine that keeps the hints already present in the source program.
///
/// Hint substitution and flex are removed when the options or font info
/// disallow them, and the existing hints are reported through the
/// configured callbacks.
#[derive(Clone, Copy, Default, Debug)]
pub struct PassthroughEngine;

impl HintEngine for PassthroughEngine {
    fn hint(&mut self, glyph: &mut Glyph, ctx: &mut HintContext<'_>) -> Result<(), EngineError> {
        restrict(glyph, ctx.options(), ctx.font_info());
        if ctx.is_reporting_stems() {
            let masks = if ctx.all_stems() { glyph.hints.len() } else { 1 };
            for (_, hints) in glyph.hints.iter().take(masks) {
                for hint in hints {
                    match hint.kind {
                        HintKind::HStem | HintKind::HStem3 => ctx.report_hstem(hint.high, hint.low),
                        HintKind::VStem | HintKind::VStem3 => ctx.report_vstem(hint.high, hint.low),
                        HintKind::Unknown(_) => {}
                    }
                }
            }
        }
        if ctx.is_reporting_zones() {
            if let Some(bounds) = glyph.bounds() {
                ctx.report_glyph_zone(bounds.y_max, bounds.y_min);
            }
            for hint in glyph.hints.initial() {
                if matches!(hint.kind, HintKind::HStem | HintKind::HStem3) {
                    ctx.report_stem_zone(hint.high, hint.low);
                }
            }
        }
        log::debug!(
            "{}: kept {} hint masks",
            ctx.glyph_name(),
            glyph.hints.len()
        );
        Ok(())
    }
}

/// Removes hint substitution and flex where `options` or `font_info`
/// disallow them.
pub(crate) fn restrict(glyph: &mut Glyph, options: &HintOptions, font_info: &FontInfo) {
    let flex_ok = font_info.flex_ok();
    for element in &mut glyph.elements {
        if !options.allow_hint_sub {
            element.new_hints = None;
        }
        if !flex_ok {
            element.is_flex = false;
            element.y_flex = false;
        }
    }
}
