//! Angles tagged with their unit.
//!
//! Mixing up radians and degrees is one of the most common sources of bugs in geometry code. This
//! module makes the unit part of the type: an [`Angle<T, Radians>`] and an [`Angle<T, Degrees>`]
//! cannot be added together without an explicit conversion, while equality and ordering
//! comparisons between them convert the right-hand side automatically.

mod ops;

use std::{fmt, marker::PhantomData};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::Real;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Radians {}
    impl Sealed for super::Degrees {}
}

#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Radians,
    Degrees,
}

/// Marker trait for the units an [`Angle`] can be measured in.
///
/// This trait is sealed: the only units are [`Radians`] and [`Degrees`].
pub trait AngleUnit: sealed::Sealed + Copy + Default + fmt::Debug + 'static {
    /// Name of the unit, used by the [`Debug`][fmt::Debug] impl of [`Angle`].
    const NAME: &'static str;
    /// Suffix appended to the value by the [`Display`][fmt::Display] impl of [`Angle`].
    const SUFFIX: &'static str;
    #[doc(hidden)]
    const KIND: UnitKind;

    /// Returns the size of a full turn in this unit (2π or 360).
    fn full_turn<T: Real>() -> T;
}

/// Unit marker for angles measured in radians.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Radians;

/// Unit marker for angles measured in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Degrees;

impl AngleUnit for Radians {
    const NAME: &'static str = "Radians";
    const SUFFIX: &'static str = " rad";
    const KIND: UnitKind = UnitKind::Radians;

    #[inline]
    fn full_turn<T: Real>() -> T {
        T::TAU
    }
}

impl AngleUnit for Degrees {
    const NAME: &'static str = "Degrees";
    const SUFFIX: &'static str = "°";
    const KIND: UnitKind = UnitKind::Degrees;

    #[inline]
    fn full_turn<T: Real>() -> T {
        T::FULL_TURN_DEGREES
    }
}

/// Converts a raw value from unit `F` to unit `U`.
#[inline]
fn convert_value<T: Real, F: AngleUnit, U: AngleUnit>(value: T) -> T {
    match (F::KIND, U::KIND) {
        (UnitKind::Degrees, UnitKind::Radians) => value * T::DEG_TO_RAD,
        (UnitKind::Radians, UnitKind::Degrees) => value * T::RAD_TO_DEG,
        _ => value,
    }
}

/// An angle in radians.
pub type Rad<T> = Angle<T, Radians>;
/// An angle in radians, with an [`f32`] value.
pub type Radf = Rad<f32>;
/// An angle in radians, with an [`f64`] value.
pub type Radd = Rad<f64>;
/// An angle in degrees.
pub type Deg<T> = Angle<T, Degrees>;
/// An angle in degrees, with an [`f32`] value.
pub type Degf = Deg<f32>;
/// An angle in degrees, with an [`f64`] value.
pub type Degd = Deg<f64>;

/// A rotation quantity, stored as a scalar of type `T` in the unit `U`.
///
/// # Construction
///
/// - [`Angle::new`], [`rad`] and [`deg`] wrap a raw value, which is assumed to already be in the
///   tagged unit.
/// - The [`From`] impls between [`Rad`] and [`Deg`] (as well as [`Angle::convert`],
///   [`Angle::to_radians`] and [`Angle::to_degrees`]) convert exactly, by multiplying with π/180 or
///   180/π.
/// - [`Angle::pi`], [`Angle::asin`], [`Angle::acos`], [`Angle::atan`], [`Angle::atanh`] and
///   [`Angle::atan2`] always produce radians.
///
/// # Comparison
///
/// Comparing two angles converts the right-hand side into the unit of the left-hand side first.
/// Comparing an angle to a raw scalar compares the stored value without any conversion.
///
/// ```
/// # use accel_math::*;
/// assert!(deg(180.0) == Radf::pi());
/// assert!(deg(90.0) < rad(2.0));
/// assert_eq!(deg(90.0f32), 90.0);
/// ```
///
/// # Arithmetic
///
/// The arithmetic operators (`+`, `-`, `*`, `/`, `%`) only combine angles of the same unit.
/// Division by a zero angle is not guarded and follows the floating-point semantics of `T`.
#[derive(Clone, Copy, Default)]
#[repr(transparent)]
pub struct Angle<T, U: AngleUnit = Radians> {
    value: T,
    unit: PhantomData<U>,
}

impl<T, U: AngleUnit> Angle<T, U> {
    /// Creates an angle from a raw value in unit `U`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            unit: PhantomData,
        }
    }

    /// Returns the raw value, in unit `U`.
    #[inline]
    pub fn value(self) -> T {
        self.value
    }
}

impl<T: Real, U: AngleUnit> Angle<T, U> {
    /// Converts this angle into another unit.
    ///
    /// Converting into the same unit returns the value unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// let right = deg(90.0f64).convert::<Radians>();
    /// assert_eq!(right.value(), 90.0 * (std::f64::consts::PI / 180.0));
    /// ```
    #[inline]
    pub fn convert<V: AngleUnit>(self) -> Angle<T, V> {
        Angle::new(convert_value::<T, U, V>(self.value))
    }

    /// Converts this angle to radians.
    #[inline]
    pub fn to_radians(self) -> Rad<T> {
        self.convert()
    }

    /// Converts this angle to degrees.
    #[inline]
    pub fn to_degrees(self) -> Deg<T> {
        self.convert()
    }

    /// Returns the raw value of this angle converted to radians.
    #[inline]
    pub fn radians(self) -> T {
        self.to_radians().value
    }

    /// Computes the sine of this angle.
    #[inline]
    pub fn sin(self) -> T {
        self.radians().sin()
    }

    /// Computes the cosine of this angle.
    #[inline]
    pub fn cos(self) -> T {
        self.radians().cos()
    }

    /// Computes the tangent of this angle.
    #[inline]
    pub fn tan(self) -> T {
        self.radians().tan()
    }

    /// Computes the sine and cosine of this angle.
    #[inline]
    pub fn sin_cos(self) -> (T, T) {
        let radians = self.radians();
        (radians.sin(), radians.cos())
    }

    /// Reduces the angle modulo a full turn (2π radians or 360 degrees).
    ///
    /// This uses the `%` operator of `T`, so the sign of the result follows the sign of the input:
    /// negative angles stay negative. Use [`Angle::normalize_positive`] to get a result in
    /// `[0, full turn)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// assert_eq!(deg(450.0).normalize(), deg(90.0));
    /// assert_eq!(deg(-450.0).normalize(), deg(-90.0));
    /// ```
    #[must_use]
    pub fn normalize(self) -> Self {
        Self::new(self.value % U::full_turn::<T>())
    }

    /// Reduces the angle into the range `[0, full turn)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// assert_eq!(deg(-90.0).normalize_positive(), deg(270.0));
    /// assert_eq!(deg(720.0).normalize_positive(), deg(0.0));
    /// ```
    #[must_use]
    pub fn normalize_positive(self) -> Self {
        let full_turn = U::full_turn::<T>();
        let mut value = self.value % full_turn;
        if value < T::ZERO {
            value = value + full_turn;
            // Adding a full turn to a tiny negative value can round up to exactly a full turn.
            if value >= full_turn {
                value = T::ZERO;
            }
        }
        Self::new(value)
    }
}

impl<T: Real> Angle<T, Radians> {
    /// Returns an angle of π radians (half a turn).
    #[inline]
    pub fn pi() -> Self {
        Self::new(T::PI)
    }

    /// Computes the arcsine of `value`.
    #[inline]
    pub fn asin(value: T) -> Self {
        Self::new(value.asin())
    }

    /// Computes the arccosine of `value`.
    #[inline]
    pub fn acos(value: T) -> Self {
        Self::new(value.acos())
    }

    /// Computes the arctangent of `value`.
    #[inline]
    pub fn atan(value: T) -> Self {
        Self::new(value.atan())
    }

    /// Computes the inverse hyperbolic tangent of `value`.
    #[inline]
    pub fn atanh(value: T) -> Self {
        Self::new(value.atanh())
    }

    /// Computes the four quadrant arctangent of `y` and `x`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// use approx::assert_relative_eq;
    ///
    /// assert_relative_eq!(Radf::atan2(1.0, 0.0), deg(90.0).to_radians());
    /// ```
    #[inline]
    pub fn atan2(y: T, x: T) -> Self {
        Self::new(y.atan2(x))
    }
}

impl<T: Real> From<Deg<T>> for Rad<T> {
    #[inline]
    fn from(angle: Deg<T>) -> Self {
        angle.convert()
    }
}

impl<T: Real> From<Rad<T>> for Deg<T> {
    #[inline]
    fn from(angle: Rad<T>) -> Self {
        angle.convert()
    }
}

impl<T: fmt::Debug, U: AngleUnit> fmt::Debug for Angle<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(U::NAME).field(&self.value).finish()
    }
}

impl<T: fmt::Display, U: AngleUnit> fmt::Display for Angle<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)?;
        f.write_str(U::SUFFIX)
    }
}

impl<T, U> AbsDiffEq for Angle<T, U>
where
    T: Real + AbsDiffEq,
    U: AngleUnit,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.value.abs_diff_eq(&other.value, epsilon)
    }
}

impl<T, U> RelativeEq for Angle<T, U>
where
    T: Real + RelativeEq,
    U: AngleUnit,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.value.relative_eq(&other.value, epsilon, max_relative)
    }
}

impl<T, U> UlpsEq for Angle<T, U>
where
    T: Real + UlpsEq,
    U: AngleUnit,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.value.ulps_eq(&other.value, epsilon, max_ulps)
    }
}

/// Creates an angle in radians.
#[inline]
pub const fn rad<T>(value: T) -> Rad<T> {
    Angle::new(value)
}

/// Creates an angle in degrees.
#[inline]
pub const fn deg<T>(value: T) -> Deg<T> {
    Angle::new(value)
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn inverse_trig_is_radians() {
        let mut angle = Radf::asin(0.0);
        assert_eq!(angle, 0.0);
        assert_eq!(angle.sin(), 0.0);
        assert_eq!(angle.cos(), 1.0);
        assert_eq!(angle.tan(), 0.0);

        angle += deg(180.0).to_radians();
        assert_relative_eq!(angle, Radf::pi());

        assert_relative_eq!(Radf::acos(0.0).value(), FRAC_PI_2);
        assert_relative_eq!(Radf::atan(1.0).value(), PI / 4.0);
        assert_eq!(Radf::atanh(0.0), 0.0);
    }

    #[test]
    fn conversion() {
        assert_eq!(Rad::from(deg(180.0f64)).value(), std::f64::consts::PI);
        assert_relative_eq!(Deg::from(rad(PI)).value(), 180.0);
        assert_eq!(rad(1.5f32).convert::<Radians>().value(), 1.5);
        assert_eq!(deg(33.0f32).convert::<Degrees>().value(), 33.0);
        assert_relative_eq!(deg(57.0f64).to_radians().to_degrees(), deg(57.0));
    }

    #[test]
    fn degrees_trig() {
        assert_relative_eq!(deg(90.0f32).sin(), 1.0);
        assert_relative_eq!(deg(180.0f64).cos(), -1.0);
        assert_relative_eq!(deg(45.0f64).tan(), 1.0, epsilon = 1e-12);
        let (sin, cos) = deg(0.0f32).sin_cos();
        assert_eq!((sin, cos), (0.0, 1.0));
    }

    #[test]
    fn comparison_converts_rhs() {
        assert!(rad(PI) == deg(180.0));
        assert!(deg(180.0f32) != rad(3.0));
        assert!(deg(90.0) < rad(PI));
        assert!(rad(PI) > deg(90.0));
        assert!(deg(10.0f32) >= deg(10.0));

        // Raw scalars are compared without conversion.
        assert_eq!(deg(90.0f32), 90.0);
        assert_ne!(rad(1.0f64), 2.0);
    }

    #[test]
    fn normalize() {
        assert_eq!(deg(370.0).normalize(), deg(10.0));
        assert_eq!(deg(-370.0).normalize(), deg(-10.0));
        assert_relative_eq!(rad(3.0 * PI).normalize(), rad(PI), epsilon = 1e-5);
        assert_eq!(deg(-10.0).normalize_positive(), deg(350.0));
        assert_eq!(deg(360.0).normalize_positive(), deg(0.0));
        assert!(rad(-0.5f64).normalize_positive().value() > 0.0);
    }

    #[test]
    fn arithmetic() {
        assert_eq!(deg(30.0) + deg(60.0), deg(90.0));
        assert_eq!(deg(30.0) - deg(60.0), deg(-30.0));
        assert_eq!(deg(30.0) * deg(2.0), deg(60.0));
        assert_eq!(deg(30.0) / deg(2.0), deg(15.0));
        assert_eq!(deg(370.0) % deg(360.0), deg(10.0));
        assert_eq!(deg(30.0) * 3.0, deg(90.0));
        assert_eq!(deg(30.0) / 3.0, deg(10.0));
        assert_eq!(-deg(30.0), deg(-30.0));

        let mut a = rad(1.0f64);
        a -= rad(0.5);
        a *= rad(4.0);
        a /= rad(2.0);
        a %= rad(3.0);
        assert_eq!(a, 1.0);
    }

    #[test]
    fn division_by_zero_is_not_guarded() {
        assert!((deg(1.0f32) / deg(0.0)).value().is_infinite());
        assert!((deg(0.0f32) / deg(0.0)).value().is_nan());
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", deg(90)), "90°");
        assert_eq!(format!("{}", rad(1.5)), "1.5 rad");
        assert_eq!(format!("{:?}", rad(1.5)), "Radians(1.5)");
        assert_eq!(format!("{:?}", deg(2.0)), "Degrees(2.0)");
    }
}
