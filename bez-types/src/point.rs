use core::ops::{Add, Neg, Sub};

use crate::Fixed;

/// Two dimensional point with a generic coordinate type.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T> {
    /// X coordinate.
    pub x: T,
    /// Y coordinate.
    pub y: T,
}

impl<T> Point<T> {
    /// Creates a new point with the given x and y coordinates.
    #[inline(always)]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Maps `Point<T>` to `Point<U>` by applying a function to each coordinate.
    #[inline(always)]
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Point<U> {
        Point {
            x: f(self.x),
            y: f(self.y),
        }
    }
}

impl Point<Fixed> {
    /// Returns the point with its y coordinate negated.
    ///
    /// This converts between the program text convention and the internal
    /// convention in either direction.
    pub fn flip_y(self) -> Self {
        Self::new(self.x, -self.y)
    }

    /// Creates a point from float coordinates.
    pub fn from_f32(x: f32, y: f32) -> Self {
        Self::new(Fixed::from_f32(x), Fixed::from_f32(y))
    }
}

impl<T> Add for Point<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T> Sub for Point<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T> Neg for Point<T>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

#[cfg(feature = "kurbo")]
impl From<Point<Fixed>> for kurbo::Point {
    fn from(value: Point<Fixed>) -> Self {
        kurbo::Point::new(value.x.to_f64(), value.y.to_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_is_an_involution() {
        let p = Point::new(Fixed::from_i32(10), Fixed::from_f64(-20.5));
        assert_eq!(p.flip_y().y, Fixed::from_f64(20.5));
        assert_eq!(p.flip_y().flip_y(), p);
    }

    #[test]
    fn arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(10, 20);
        assert_eq!(a + b, Point::new(11, 22));
        assert_eq!(b - a, Point::new(9, 18));
        assert_eq!(-a, Point::new(-1, -2));
        assert_eq!(a.map(|v| v * 3), Point::new(3, 6));
    }
}
