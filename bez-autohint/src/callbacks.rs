//! Reporting hooks installed on an [`Autohinter`](crate::Autohinter).

use bez_types::Fixed;

/// Receives every message reported during hinting.
pub type ReportFn = Box<dyn FnMut(&str)>;

/// Receives a stem or zone as `(top, bottom, glyph_name)`.
pub type StemFn = Box<dyn FnMut(Fixed, Fixed, &str)>;

/// Called when the engine retries a glyph.
pub type RetryFn = Box<dyn FnMut()>;

/// Which geometry, if any, is reported while hinting.
///
/// Stem and zone reporting exclude each other.
#[derive(Default)]
pub enum StemReporting {
    #[default]
    None,
    /// Report horizontal and vertical stems.
    Stems {
        hstem: Option<StemFn>,
        vstem: Option<StemFn>,
        /// Report every candidate stem, not just those that end up hinted.
        all_stems: bool,
    },
    /// Report glyph extremes and stem zones.
    Zones {
        glyph: Option<StemFn>,
        stem: Option<StemFn>,
    },
}

impl std::fmt::Debug for StemReporting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Stems { all_stems, .. } => f
                .debug_struct("Stems")
                .field("all_stems", all_stems)
                .finish_non_exhaustive(),
            Self::Zones { .. } => f.debug_struct("Zones").finish_non_exhaustive(),
        }
    }
}

/// The full set of hooks.
#[derive(Default)]
pub struct Callbacks {
    pub report: Option<ReportFn>,
    pub reporting: StemReporting,
    pub retry: Option<RetryFn>,
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores every hook to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn report(&mut self, message: &str) {
        if let Some(report) = self.report.as_mut() {
            report(message);
        }
    }
}

impl std::fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks")
            .field("report", &self.report.is_some())
            .field("reporting", &self.reporting)
            .field("retry", &self.retry.is_some())
            .finish()
    }
}
