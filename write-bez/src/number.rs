//! Text rendering of 24.8 values.
//!
//! The 8 bit fraction cannot carry more than two decimal places, so
//! non-integers are always written with exactly two.

use std::fmt::Write;

use types::{Fixed, Point};

/// Writes an integer followed by a space.
pub(crate) fn write_int(out: &mut String, value: i32) {
    let _ = write!(out, "{value} ");
}

/// Writes a value as an integer when it has no fraction, otherwise with two
/// decimals.
pub(crate) fn write_value(out: &mut String, value: Fixed) {
    if value.is_integer() {
        write_int(out, value.to_i32());
    } else {
        write_decimal(out, value);
    }
}

/// Writes the distance from `low` to `high`, which may exceed the 24.8
/// range when the edges lie far apart.
pub(crate) fn write_width(out: &mut String, low: Fixed, high: Fixed) {
    match high.checked_sub(low) {
        Some(width) => write_value(out, width),
        None => {
            let width = high.to_f64() - low.to_f64();
            if width.fract() == 0.0 {
                let _ = write!(out, "{width:.0} ");
            } else {
                let _ = write!(out, "{:.2} ", (width * 100.0).round() / 100.0);
            }
        }
    }
}

fn write_decimal(out: &mut String, value: Fixed) {
    let hundredths = (value.to_f64() * 100.0).round() / 100.0;
    let _ = write!(out, "{hundredths:.2} ");
}

/// Writes path coordinates and tracks the pen position they leave behind.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct CoordinateWriter {
    round: bool,
    pen: Point<Fixed>,
}

impl CoordinateWriter {
    pub fn new(round: bool) -> Self {
        Self {
            round,
            pen: Point::default(),
        }
    }

    /// Returns the last written position.
    pub fn pen(&self) -> Point<Fixed> {
        self.pen
    }

    pub fn set_pen(&mut self, pen: Point<Fixed>) {
        self.pen = pen;
    }

    /// Rounds half up when rounding is enabled.
    pub fn round(&self, value: Fixed) -> Fixed {
        if self.round {
            value.round()
        } else {
            value
        }
    }

    /// Writes one coordinate, returning the value now held by the pen.
    ///
    /// Integers are written as such in either mode; the pen then holds the
    /// rounded value. Otherwise the pen holds the value as given.
    fn write_coord(&self, out: &mut String, value: Fixed) -> Fixed {
        if self.round || value.is_integer() {
            let rounded = self.round(value);
            write_int(out, rounded.to_i32());
            rounded
        } else {
            write_decimal(out, value);
            value
        }
    }

    pub fn write_x(&mut self, out: &mut String, x: Fixed) {
        self.pen.x = self.write_coord(out, x);
    }

    pub fn write_y(&mut self, out: &mut String, y: Fixed) {
        self.pen.y = self.write_coord(out, y);
    }

    /// Writes a point already converted to the program convention.
    pub fn write_point(&mut self, out: &mut String, point: Point<Fixed>) {
        self.write_x(out, point.x);
        self.write_y(out, point.y);
    }
}
