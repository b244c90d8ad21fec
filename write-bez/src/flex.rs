//! Combining flex curve pairs into a single flex call.

use types::{Fixed, Glyph, Point};

use crate::{
    number::{write_int, CoordinateWriter},
    FlexParams,
};

/// First half of a flex pair, held until its partner arrives.
#[derive(Clone, Copy, Debug)]
struct FirstHalf {
    pen: Point<Fixed>,
    points: [Point<Fixed>; 3],
}

/// Tracks which half of a flex pair comes next.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct FlexCombiner {
    first_half: Option<FirstHalf>,
}

impl FlexCombiner {
    /// True if the element at `ix` and its partner are both flex curves.
    ///
    /// The partner is the following element when a pair is about to start
    /// and the preceding one when a pair is open.
    pub fn is_pair(&self, glyph: &Glyph, ix: usize) -> bool {
        let (first, second) = match self.first_half {
            None => (Some(ix), ix.checked_add(1)),
            Some(_) => (ix.checked_sub(1), Some(ix)),
        };
        let is_flex = |ix: Option<usize>| {
            ix.and_then(|ix| glyph.elements.get(ix))
                .is_some_and(|element| element.is_flex)
        };
        is_flex(first) && is_flex(second)
    }

    /// Handles one curve of a flex pair, given in the program convention.
    ///
    /// The first curve is only recorded. The second writes the complete
    /// flex call for both.
    pub fn curve(
        &mut self,
        points: [Point<Fixed>; 3],
        y_flex: bool,
        params: &FlexParams,
        coords: &mut CoordinateWriter,
        out: &mut String,
    ) {
        let Some(first) = self.first_half.take() else {
            self.first_half = Some(FirstHalf {
                pen: coords.pen(),
                points,
            });
            return;
        };
        let [fc1, fc2, fc3] = first.points;
        let [c1, c2, c3] = points;
        out.push_str("preflx1\n");
        let joint = joint_point(fc3, c3, y_flex, params.delta);
        for point in [joint, fc1, fc2, fc3, c1, c2, c3] {
            coords.write_point(out, point);
            out.push_str("rmt\npreflx2a\n");
        }
        coords.set_pen(first.pen);
        for point in [fc1, fc2, fc3, c1, c2, c3] {
            coords.write_point(out, point);
        }
        let pen = coords.pen();
        write_int(out, params.min_distance);
        write_int(out, params.delta);
        write_int(out, y_flex as i32);
        write_int(out, coords.round(pen.x).to_i32());
        write_int(out, coords.round(pen.y).to_i32());
        out.push_str("flxa\n");
    }
}

/// Returns the reference point written before the pair.
///
/// On the varying axis the end of the first curve is pulled toward the end
/// of the second by `delta`; the other axis follows the first curve.
fn joint_point(fc3: Point<Fixed>, c3: Point<Fixed>, y_flex: bool, delta: i32) -> Point<Fixed> {
    if y_flex {
        Point::new(fc3.x, extrapolate(fc3.y, c3.y, delta))
    } else {
        Point::new(extrapolate(fc3.x, c3.x, delta), fc3.y)
    }
}

fn extrapolate(first: Fixed, second: Fixed, delta: i32) -> Fixed {
    if first == second {
        return second;
    }
    let diff = first.to_f64() - second.to_f64();
    let shrink = (delta as f64 / diff).abs();
    Fixed::from_f64(diff * shrink + second.to_f64())
}
