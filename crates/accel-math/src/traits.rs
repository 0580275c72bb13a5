//! Scalar traits the geometric types are generic over.

use std::{fmt, ops};

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// This is implemented for all primitive integer types and for [`f32`] and [`f64`]. Operations that
/// need negation (cross products, inverses, padding a rectangle) additionally require [`Signed`].
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
    /// Returns `1 + 1`.
    #[inline]
    fn two() -> Self {
        Self::ONE + Self::ONE
    }
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// [`Number`]s that can be negated: signed integers and floats.
pub trait Signed: Number + ops::Neg<Output = Self> {}
impl<T> Signed for T where T: Number + ops::Neg<Output = Self> {}

/// Types that support the trigonometric functions.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atanh(self) -> Self;
    fn atan2(self, other: Self) -> Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively). Built-in integer types implement it in terms of
/// [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// Real numbers: the scalar types that can represent angles, lengths and projections.
///
/// The constants are evaluated in the target precision, so `DEG_TO_RAD` for [`f32`] is exactly
/// `f32::consts::PI / 180.0`.
pub trait Real:
    Signed
    + Trig
    + Sqrt
    + MinMax
    + PartialOrd
    + ops::Rem<Output = Self>
    + fmt::Debug
    + fmt::Display
{
    /// Archimedes' constant (π).
    const PI: Self;
    /// The full circle constant (τ = 2π).
    const TAU: Self;
    /// Number of degrees in a full turn (`360`).
    const FULL_TURN_DEGREES: Self;
    /// Multiplying a value in degrees by this factor yields radians (π/180).
    const DEG_TO_RAD: Self;
    /// Multiplying a value in radians by this factor yields degrees (180/π).
    const RAD_TO_DEG: Self;
}

macro_rules! int_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
int_impls!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! float_impls {
    ($($types:ident),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }

            impl Trig for $types {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn tan(self) -> Self {
                    self.tan()
                }

                fn asin(self) -> Self {
                    self.asin()
                }

                fn acos(self) -> Self {
                    self.acos()
                }

                fn atan(self) -> Self {
                    self.atan()
                }

                fn atanh(self) -> Self {
                    self.atanh()
                }

                fn atan2(self, other: Self) -> Self {
                    self.atan2(other)
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Real for $types {
                const PI: Self = std::$types::consts::PI;
                const TAU: Self = std::$types::consts::TAU;
                const FULL_TURN_DEGREES: Self = 360.0;
                const DEG_TO_RAD: Self = std::$types::consts::PI / 180.0;
                const RAD_TO_DEG: Self = 180.0 / std::$types::consts::PI;
            }
        )+
    };
}
float_impls!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(<f32 as Real>::PI, std::f32::consts::PI);
        assert_eq!(<f64 as Real>::TAU, std::f64::consts::TAU);
        approx::assert_relative_eq!(180.0 * <f64 as Real>::DEG_TO_RAD, std::f64::consts::PI);
        approx::assert_relative_eq!(<f32 as Real>::PI * <f32 as Real>::RAD_TO_DEG, 180.0);
        assert_eq!(i32::two(), 2);
        assert_eq!(f32::two(), 2.0);
        assert_eq!(u8::two(), 2);
    }

    #[test]
    fn min_max() {
        assert_eq!(MinMax::min(3, -1), -1);
        assert_eq!(MinMax::max(3u8, 7), 7);
        assert_eq!(MinMax::clamp(1.5f32, 0.0, 1.0), 1.0);
        assert_eq!(MinMax::min(f32::NAN, 1.0), 1.0);
    }
}
