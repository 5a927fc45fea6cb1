//! Small value types shared by the renderers
//!
//! `Complex` carries just the arithmetic escape-time iteration needs (no division),
//! `PixelPoint` is an integer pixel coordinate as delivered by the pointer.

use std::ops::{Add, Mul};

/// Complex number with f64 parts
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Squared magnitude, |z|²
    #[inline]
    pub fn norm_sqr(self) -> f64 {
        self.re * self.re + self.im * self.im
    }
}

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Mul for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

/// Integer pixel coordinate. May lie outside any surface; writes are checked there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Pointer position to pixel: truncates toward zero, saturating at the i32 range.
    /// NaN maps to 0.
    pub fn truncate(x: f64, y: f64) -> Self {
        Self::new(x as i32, y as i32)
    }
}

impl From<(i32, i32)> for PixelPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_square() {
        let z = Complex::new(1.0, 2.0);
        assert_eq!(z * z, Complex::new(-3.0, 4.0));
        assert_eq!(z.norm_sqr(), 5.0);
    }

    #[test]
    fn test_complex_add() {
        let sum = Complex::new(0.5, -1.0) + Complex::new(0.25, 3.0);
        assert_eq!(sum, Complex::new(0.75, 2.0));
    }

    #[test]
    fn test_truncate_toward_zero() {
        assert_eq!(PixelPoint::truncate(12.9, 3.2), PixelPoint::new(12, 3));
        assert_eq!(PixelPoint::truncate(-0.7, -1.5), PixelPoint::new(0, -1));
    }

    #[test]
    fn test_truncate_saturates() {
        let p = PixelPoint::truncate(1e20, f64::NAN);
        assert_eq!(p, PixelPoint::new(i32::MAX, 0));
    }
}
