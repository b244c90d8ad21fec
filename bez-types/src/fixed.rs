//! fixed-point numerical type

use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// 32-bit signed fixed point number with 8 bits of fraction.
///
/// This is the coordinate format shared by the hinting engine and the
/// serializer. Conversions to and from floats are only used at the text
/// boundary.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fixed(i32);

impl Fixed {
    /// Minimum value.
    pub const MIN: Self = Self(i32::MIN);

    /// Maximum value.
    pub const MAX: Self = Self(i32::MAX);

    /// This type's smallest representable value
    pub const EPSILON: Self = Self(1);

    /// Zero.
    pub const ZERO: Self = Self(0);

    /// One.
    pub const ONE: Self = Self(Self::ONE_BITS);

    const INT_MASK: i32 = !0 << Self::FRACT_BITS;
    const ROUND: i32 = 1 << (Self::FRACT_BITS - 1);
    const ONE_BITS: i32 = 1 << Self::FRACT_BITS;
    const FRACT_BITS: u32 = 8;

    /// Creates a value from the raw 24.8 representation.
    pub const fn from_bits(bits: i32) -> Self {
        Self(bits)
    }

    /// Returns the raw 24.8 representation.
    pub const fn to_bits(self) -> i32 {
        self.0
    }

    /// Creates a value from an integer.
    pub const fn from_i32(value: i32) -> Self {
        Self(value.wrapping_shl(Self::FRACT_BITS))
    }

    /// Returns the integer part, rounding toward negative infinity.
    pub const fn to_i32(self) -> i32 {
        self.0 >> Self::FRACT_BITS
    }

    /// Returns the nearest integer value, with halves rounding up.
    pub fn round(self) -> Self {
        Self(self.0.wrapping_add(Self::ROUND) & Self::INT_MASK)
    }

    /// Returns the largest integer less than or equal to the number.
    pub fn floor(self) -> Self {
        Self(self.0 & Self::INT_MASK)
    }

    /// Returns the fractional part of the number.
    pub fn fract(self) -> Self {
        Self(self.0 - self.floor().0)
    }

    /// Returns true if the number has no fractional part.
    pub fn is_integer(self) -> bool {
        self.0 & !Self::INT_MASK == 0
    }

    /// Returns the absolute value of the number.
    pub fn abs(self) -> Self {
        Self(self.0.wrapping_abs())
    }

    /// Checked addition; returns `None` on overflow.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction; returns `None` on overflow.
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Creates a fixed point value from an f64.
    ///
    /// The float is rounded to the nearest representable value and clamped
    /// to `-MAX..=MAX`, so the result can always be negated.
    pub fn from_f64(x: f64) -> Self {
        let limit = i32::MAX as f64;
        Self((x * Self::ONE_BITS as f64).round().clamp(-limit, limit) as i32)
    }

    /// Returns the value as an f64.
    ///
    /// This operation is lossless: all representable values can be
    /// round-tripped.
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::ONE_BITS as f64
    }

    /// Creates a fixed point value from an f32.
    pub fn from_f32(x: f32) -> Self {
        Self::from_f64(x as f64)
    }

    /// Returns the value as an f32.
    pub fn to_f32(self) -> f32 {
        self.to_f64() as f32
    }
}

impl Add for Fixed {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        // same overflow semantics as std: panic in debug, wrap in release
        Self(self.0 + other.0)
    }
}

impl AddAssign for Fixed {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Fixed {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Fixed {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Fixed {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl From<i32> for Fixed {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

//hack: we can losslessly go to float, so use those fmt impls
impl core::fmt::Display for Fixed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        self.to_f64().fmt(f)
    }
}

impl core::fmt::Debug for Fixed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        self.to_f64().fmt(f)
    }
}
