//! The hinting entry points.

use std::sync::Arc;

use bez_types::{Fixed, Glyph};
use write_bez::{BezWriter, MemoryManager, OutputBuffer, SystemMemory, WriteOptions};

use crate::{
    engine::{restrict, HintContext, HintEngine, PassthroughEngine},
    merge::merge_glyph,
    Callbacks, Error, FontInfo, HintOptions, StemReporting,
};

/// Runs a hinting engine over bez programs and writes the results.
///
/// An `Autohinter` owns its configuration (memory manager and reporting
/// callbacks), so separate instances can be used independently. Configure
/// it before hinting; the setters take `&mut self` and cannot be called
/// while a glyph is being processed.
pub struct Autohinter<E = PassthroughEngine> {
    engine: E,
    memory: Arc<dyn MemoryManager>,
    callbacks: Callbacks,
}

impl Autohinter {
    /// Creates a hinter that keeps the hints present in the source programs.
    pub fn new() -> Self {
        Self::with_engine(PassthroughEngine)
    }
}

impl Default for Autohinter {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: HintEngine> Autohinter<E> {
    pub fn with_engine(engine: E) -> Self {
        Self {
            engine,
            memory: Arc::new(SystemMemory),
            callbacks: Callbacks::default(),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Sets the manager consulted before every output allocation.
    pub fn set_memory_manager(&mut self, memory: Arc<dyn MemoryManager>) {
        self.memory = memory;
    }

    pub fn set_report_callback(&mut self, report: impl FnMut(&str) + 'static) {
        self.callbacks.report = Some(Box::new(report));
    }

    /// Reports stems as they are found. Replaces zone reporting.
    pub fn set_report_stems_callbacks(
        &mut self,
        hstem: impl FnMut(Fixed, Fixed, &str) + 'static,
        vstem: impl FnMut(Fixed, Fixed, &str) + 'static,
        all_stems: bool,
    ) {
        self.callbacks.reporting = StemReporting::Stems {
            hstem: Some(Box::new(hstem)),
            vstem: Some(Box::new(vstem)),
            all_stems,
        };
    }

    /// Reports glyph extremes and stem zones. Replaces stem reporting.
    pub fn set_report_zones_callbacks(
        &mut self,
        glyph: impl FnMut(Fixed, Fixed, &str) + 'static,
        stem: impl FnMut(Fixed, Fixed, &str) + 'static,
    ) {
        self.callbacks.reporting = StemReporting::Zones {
            glyph: Some(Box::new(glyph)),
            stem: Some(Box::new(stem)),
        };
    }

    pub fn set_report_retry_callback(&mut self, retry: impl FnMut() + 'static) {
        self.callbacks.retry = Some(Box::new(retry));
    }

    /// Removes every callback.
    pub fn reset_callbacks(&mut self) {
        self.callbacks.reset();
    }

    pub fn callbacks(&self) -> &Callbacks {
        &self.callbacks
    }

    /// Hints one glyph program.
    ///
    /// On entry `dst.len()` is the output size the caller expects; the
    /// working buffer starts at that size and `dst` is grown if the result
    /// does not fit. On success `dst` holds the program followed by a NUL
    /// byte and the returned length includes that byte. On failure `dst`
    /// is left untouched.
    pub fn autohint_string(
        &mut self,
        glyph: &str,
        font_info: &str,
        options: &HintOptions,
        dst: &mut Vec<u8>,
    ) -> Result<usize, Error> {
        let result = self.hint_single(glyph, font_info, options, dst);
        self.log_outcome("glyph", &result);
        result
    }

    fn hint_single(
        &mut self,
        glyph: &str,
        font_info: &str,
        options: &HintOptions,
        dst: &mut Vec<u8>,
    ) -> Result<usize, Error> {
        if glyph.trim().is_empty() {
            return Err(Error::InvalidParameter("glyph program is empty"));
        }
        let font_info = FontInfo::parse(font_info)?;
        let buffer = OutputBuffer::with_memory(dst.len(), self.memory.clone())
            .map_err(Error::Memory)?;
        let mut glyph = read_bez::read_glyph(glyph)?;
        let mut ctx = HintContext::new(&font_info, options, &mut self.callbacks, &glyph.name);
        self.engine.hint(&mut glyph, &mut ctx)?;
        let buffer = self.write(buffer, &glyph, options)?;
        buffer.copy_to(dst).map_err(Error::DestinationOverflow)
    }

    /// Carries the hints of a hinted reference master onto its siblings.
    ///
    /// `glyphs[0]` is the reference master, already hinted; the engine is
    /// not run. `masters` names each master and `outputs` receives one
    /// NUL terminated program per master, sized and grown as in
    /// [`autohint_string`](Self::autohint_string). Outputs are only
    /// written when every master succeeds; the returned lengths include
    /// the NUL byte of each.
    ///
    /// Hint substitution and flex are dropped from every master when
    /// `options` or `font_info` disallow them.
    pub fn autohint_string_mm(
        &mut self,
        glyphs: &[&str],
        font_info: &str,
        masters: &[&str],
        options: &HintOptions,
        outputs: &mut [Vec<u8>],
    ) -> Result<Vec<usize>, Error> {
        let result = self.hint_masters(glyphs, font_info, masters, options, outputs);
        self.log_outcome("masters", &result);
        result
    }

    fn hint_masters(
        &mut self,
        glyphs: &[&str],
        font_info: &str,
        masters: &[&str],
        options: &HintOptions,
        outputs: &mut [Vec<u8>],
    ) -> Result<Vec<usize>, Error> {
        if glyphs.is_empty() {
            return Err(Error::InvalidParameter("no master glyphs"));
        }
        if glyphs.len() != masters.len() || glyphs.len() != outputs.len() {
            return Err(Error::InvalidParameter(
                "glyph, master and output counts differ",
            ));
        }
        if glyphs.iter().any(|glyph| glyph.trim().is_empty()) {
            return Err(Error::InvalidParameter("glyph program is empty"));
        }
        let font_info = FontInfo::parse(font_info)?;
        let reference = read_bez::read_glyph(glyphs[0])?;
        let mut staged = Vec::with_capacity(glyphs.len());
        for ((source, name), output) in glyphs.iter().zip(masters).zip(outputs.iter()) {
            let buffer = OutputBuffer::with_memory(output.len(), self.memory.clone())
                .map_err(Error::Memory)?;
            let master = read_bez::read_glyph(source)?;
            let mut merged = merge_glyph(&reference, &master)?;
            restrict(&mut merged, options, &font_info);
            log::debug!("placed hints of '{}' on master {name}", reference.name);
            let buffer = self.write(buffer, &merged, options)?;
            let mut dst = output.clone();
            let len = buffer
                .copy_to(&mut dst)
                .map_err(Error::DestinationOverflow)?;
            staged.push((dst, len));
        }
        let mut lens = Vec::with_capacity(staged.len());
        for (output, (dst, len)) in outputs.iter_mut().zip(staged) {
            *output = dst;
            lens.push(len);
        }
        Ok(lens)
    }

    /// Hints a glyph and returns the resulting program.
    pub fn hint_bez_glyph(
        &mut self,
        font_info: &str,
        glyph: &str,
        options: &HintOptions,
    ) -> Result<String, Error> {
        let mut dst = vec![0; initial_len(glyph)];
        let len = self.autohint_string(glyph, font_info, options, &mut dst)?;
        Ok(program_text(&dst, len))
    }

    /// Places the hints of `glyphs[0]` on every master and returns the
    /// resulting programs, one per master.
    pub fn hint_compatible_bez_glyphs(
        &mut self,
        font_info: &str,
        glyphs: &[&str],
        masters: &[&str],
    ) -> Result<Vec<String>, Error> {
        let mut outputs: Vec<Vec<u8>> = glyphs
            .iter()
            .map(|glyph| vec![0; initial_len(glyph)])
            .collect();
        let lens = self.autohint_string_mm(
            glyphs,
            font_info,
            masters,
            &HintOptions::default(),
            &mut outputs,
        )?;
        Ok(outputs
            .iter()
            .zip(lens)
            .map(|(output, len)| program_text(output, len))
            .collect())
    }

    fn write(
        &mut self,
        buffer: OutputBuffer,
        glyph: &Glyph,
        options: &HintOptions,
    ) -> Result<OutputBuffer, Error> {
        let mut writer = BezWriter::new(buffer, WriteOptions::from(options));
        let result = writer.write_glyph(glyph);
        for warning in writer.warnings() {
            log::warn!("{}: {warning}", glyph.name);
            self.callbacks.report(&warning.to_string());
        }
        result?;
        Ok(writer.finish())
    }

    fn log_outcome<T>(&self, what: &str, result: &Result<T, Error>) {
        match result {
            Ok(_) => log::info!("hinted {what}"),
            Err(e) => log::error!("hinting {what} failed ({:?}): {e}", e.code()),
        }
    }
}

impl<E> std::fmt::Debug for Autohinter<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Autohinter")
            .field("callbacks", &self.callbacks)
            .finish_non_exhaustive()
    }
}

/// Hinted programs rarely exceed four times the source size.
fn initial_len(glyph: &str) -> usize {
    (glyph.len() * 4).max(1)
}

/// Text of a NUL terminated output of `len` bytes.
fn program_text(dst: &[u8], len: usize) -> String {
    let end = len.saturating_sub(1).min(dst.len());
    String::from_utf8_lossy(&dst[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{engine::EngineError, ResultCode};
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_hints() {
        let mut hinter = Autohinter::new();
        let text = hinter
            .hint_bez_glyph(
                bez_test_data::FONT_INFO,
                bez_test_data::HINTED_A,
                &HintOptions::default(),
            )
            .unwrap();
        assert_eq!(text, bez_test_data::HINTED_A);
    }

    #[test]
    fn output_is_nul_terminated() {
        let mut hinter = Autohinter::new();
        let mut dst = vec![0xff; 8];
        let len = hinter
            .autohint_string(
                bez_test_data::UNHINTED_O,
                "",
                &HintOptions::default(),
                &mut dst,
            )
            .unwrap();
        assert_eq!(len, bez_test_data::UNHINTED_O.len() + 1);
        assert_eq!(dst[len - 1], 0);
        assert_eq!(&dst[..len - 1], bez_test_data::UNHINTED_O.as_bytes());
    }

    #[test]
    fn zero_length_destination() {
        let mut hinter = Autohinter::new();
        let mut dst = Vec::new();
        let err = hinter
            .autohint_string(bez_test_data::HINTED_A, "", &HintOptions::default(), &mut dst)
            .unwrap_err();
        assert_eq!(err.code(), ResultCode::MemoryError);
        assert!(dst.is_empty());
    }

    struct FailingEngine;

    impl HintEngine for FailingEngine {
        fn hint(
            &mut self,
            _glyph: &mut Glyph,
            ctx: &mut HintContext<'_>,
        ) -> Result<(), EngineError> {
            ctx.notify_retry();
            Err(EngineError::Failed("no stems".into()))
        }
    }

    #[test]
    fn engine_failure_is_fatal() {
        let mut hinter = Autohinter::with_engine(FailingEngine);
        let retried = std::rc::Rc::new(std::cell::Cell::new(false));
        let flag = retried.clone();
        hinter.set_report_retry_callback(move || flag.set(true));
        let mut dst = vec![0; 16];
        let err = hinter
            .autohint_string(bez_test_data::HINTED_A, "", &HintOptions::default(), &mut dst)
            .unwrap_err();
        assert_eq!(err.code(), ResultCode::FatalError);
        assert!(retried.get());
        assert_eq!(dst, vec![0; 16]);
    }

    #[test]
    fn reset_removes_callbacks() {
        let mut hinter = Autohinter::new();
        hinter.set_report_callback(|_| {});
        hinter.set_report_zones_callbacks(|_, _, _| {}, |_, _, _| {});
        hinter.set_report_stems_callbacks(|_, _, _| {}, |_, _, _| {}, true);
        assert!(matches!(
            hinter.callbacks().reporting,
            StemReporting::Stems {
                all_stems: true,
                ..
            }
        ));
        hinter.reset_callbacks();
        assert!(hinter.callbacks().report.is_none());
        assert!(matches!(hinter.callbacks().reporting, StemReporting::None));
    }

    #[test]
    fn mismatched_master_counts() {
        let mut hinter = Autohinter::new();
        let mut outputs = vec![vec![0; 8]];
        let err = hinter
            .autohint_string_mm(
                &[bez_test_data::HINTED_A, bez_test_data::MASTER_A_BOLD],
                "",
                &["Regular", "Bold"],
                &HintOptions::default(),
                &mut outputs,
            )
            .unwrap_err();
        assert_eq!(err.code(), ResultCode::InvalidParameterError);
    }

    #[test]
    fn master_lengths() {
        let mut hinter = Autohinter::new();
        let mut outputs = vec![vec![0xff; 512], vec![0xff; 512]];
        let lens = hinter
            .autohint_string_mm(
                &[bez_test_data::HINTED_A, bez_test_data::MASTER_A_BOLD],
                bez_test_data::FONT_INFO,
                &["Regular", "Bold"],
                &HintOptions::default(),
                &mut outputs,
            )
            .unwrap();
        assert_eq!(
            lens,
            [
                bez_test_data::HINTED_A.len() + 1,
                bez_test_data::MERGED_A_BOLD.len() + 1
            ]
        );
        assert_eq!(program_text(&outputs[1], lens[1]), bez_test_data::MERGED_A_BOLD);
        // bytes past the terminator are left as they were
        assert!(outputs[1][lens[1]..].iter().all(|b| *b == 0xff));
    }

    #[test]
    fn program_text_trims_terminator() {
        assert_eq!(program_text(b"ed\n\0", 4), "ed\n");
        assert_eq!(program_text(b"", 0), "");
    }
}
