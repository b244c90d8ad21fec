//! Rendering of hint masks.

use types::HintPoint;

use crate::{
    number::{write_int, write_value, write_width},
    Error, Warning,
};

/// Largest rendered mask, in bytes, including a terminator.
pub const MAX_MASK_LEN: usize = 2048;

/// Returns the order in which hints are written.
///
/// Repeatedly selects, among the hints not yet taken, the one with the
/// greatest tag; ties go to the smaller low edge and then to the earlier
/// hint.
pub(crate) fn write_order(points: &[HintPoint]) -> Vec<usize> {
    let mut done = vec![false; points.len()];
    let mut order = Vec::with_capacity(points.len());
    while let Some(first) = done.iter().position(|done| !done) {
        let mut best = first;
        for (ix, point) in points.iter().enumerate().skip(first + 1) {
            if done[ix] {
                continue;
            }
            let (tag, best_tag) = (point.kind.tag(), points[best].kind.tag());
            if tag > best_tag || (tag == best_tag && point.min_edge() < points[best].min_edge()) {
                best = ix;
            }
        }
        done[best] = true;
        order.push(best);
    }
    order
}

/// Accumulates mask text within the fixed scratch limit.
struct MaskText(String);

impl MaskText {
    fn push(&mut self, text: &str) -> Result<(), Error> {
        let len = self.0.len() + text.len();
        if len + 1 > MAX_MASK_LEN {
            log::error!("Hint information overflowing buffer.");
            return Err(Error::HintOverflow { len });
        }
        self.0.push_str(text);
        Ok(())
    }
}

/// Renders a set of hints as program text, one hint per line.
///
/// Each line ends with a comment naming the elements that set the low and
/// high edge, by sequence number.
pub(crate) fn render_mask(points: &[HintPoint], warnings: &mut Vec<Warning>) -> Result<String, Error> {
    let mut text = MaskText(String::new());
    let mut scratch = String::new();
    for ix in write_order(points) {
        let point = &points[ix];
        scratch.clear();
        match point.kind.operator() {
            Some(operator) => {
                write_value(&mut scratch, point.low);
                write_width(&mut scratch, point.low, point.high);
                scratch.push_str(operator);
            }
            None => {
                let warning = Warning::UnknownHintKind {
                    tag: point.kind.tag(),
                };
                log::error!("{warning}");
                warnings.push(warning);
            }
        }
        scratch.push_str(" % ");
        write_int(&mut scratch, point.low_element.map_or(0, |e| e.number() as i32));
        write_int(&mut scratch, point.high_element.map_or(0, |e| e.number() as i32));
        scratch.push('\n');
        text.push(&scratch)?;
    }
    Ok(text.0)
}

/// Remembers the last mask written, so that repeating it can be skipped.
#[derive(Clone, Debug, Default)]
pub(crate) struct MaskHistory {
    previous: String,
}

impl MaskHistory {
    pub fn clear(&mut self) {
        self.previous.clear();
    }

    /// Records a mask written without a substitution block.
    pub fn set(&mut self, text: &str) {
        self.previous.clear();
        self.previous.push_str(text);
    }

    /// Returns the substitution block that switches to `text`, or `None`
    /// when it is the mask already in effect.
    pub fn substitution(&mut self, text: String) -> Option<String> {
        if text == self.previous {
            log::debug!("skipping repeated hint mask");
            return None;
        }
        let block = format!("beginsubr snc\n{text}endsubr enc\nnewcolors\n");
        self.previous = text;
        Some(block)
    }
}
