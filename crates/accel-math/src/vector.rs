use crate::{
    angle::Rad,
    traits::{Number, Signed, Sqrt},
    Error, MinMax, One, Real, Result, Zero,
};

mod ops;
mod view;

pub use view::*;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 2-dimensional vector with [`i32`] elements.
pub type Vec2i = Vec2<i32>;
/// A 2-dimensional vector with [`u32`] elements.
pub type Vec2u = Vec2<u32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 3-dimensional vector with [`i32`] elements.
pub type Vec3i = Vec3<i32>;
/// A 3-dimensional vector with [`u32`] elements.
pub type Vec3u = Vec3<u32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;
/// A 4-dimensional vector with [`i32`] elements.
pub type Vec4i = Vec4<i32>;
/// A 4-dimensional vector with [`u32`] elements.
pub type Vec4u = Vec4<u32>;

/// An 8-bit RGB color.
#[doc(alias = "color_rgb")]
pub type ColorRgb = Vec3<u8>;
/// An 8-bit RGBA color.
#[doc(alias = "color_rgba")]
pub type ColorRgba = Vec4<u8>;
/// An RGB color with [`f32`] channels.
#[doc(alias = "colorf_rgb")]
pub type ColorRgbf = Vec3f;
/// An RGBA color with [`f32`] channels.
#[doc(alias = "colorf_rgba")]
pub type ColorRgbaf = Vec4f;

/// An `N`-element vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] copies the given value into each element, [`Vector::from_fn`] invokes a
///   closure with the index of each element.
/// - [`Vector::try_from_slice`] accepts up to `N` values and zero-fills the rest.
/// - `extend` appends an element to a vector of one dimension less.
/// - [`Vector::ZERO`] (also the [`Default`] for numbers) is a vector containing all-zeroes, and
///   `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are unit vectors along each axis.
///
/// # Element Access
///
/// - For vectors with 2 to 4 dimensions, elements can be accessed as fields `x`, `y`, `z`, and
///   `w`, or with the aliases `r`, `g`, `b`, and `a`.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays, and panic when the
///   index is out of range. [`Vector::at`] and [`Vector::at_mut`] return an [`Error`] instead.
/// - [`Vector::swizzle`] builds a new vector from an arbitrary selection of components.
///
/// # Operators
///
/// | Expression | Result |
/// |---|---|
/// | `v + w`, `v - w` | element-wise sum / difference |
/// | `v + s`, `v - s`, `v * s`, `v / s` | element-wise with the scalar `s` |
/// | `v * w` | dot product (a scalar) |
/// | `v ^ w` | perp-dot product (2D, a scalar) or cross product (3D, a vector) |
/// | `v * m` | `result[row] = Σ v[col] * m[(row, col)]` for a [`Matrix`][crate::Matrix] `m` |
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

array_wrapper!(Vector);

/// Selects a component (or a constant) when building a vector with [`Vector::swizzle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Swizzle {
    /// The first component.
    X = 0,
    /// The second component.
    Y = 1,
    /// The third component.
    Z = 2,
    /// The fourth component.
    W = 3,
    /// The constant 0.
    Zero,
    /// The constant 1.
    One,
}

impl Swizzle {
    /// Alias of [`Swizzle::X`].
    pub const R: Self = Self::X;
    /// Alias of [`Swizzle::Y`].
    pub const G: Self = Self::Y;
    /// Alias of [`Swizzle::Z`].
    pub const B: Self = Self::Z;
    /// Alias of [`Swizzle::W`].
    pub const A: Self = Self::W;
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Builds a vector by selecting components of `self` (or the constants 0 and 1).
    ///
    /// The result can have fewer or more dimensions than `self`.
    ///
    /// # Panics
    ///
    /// Panics if a selector refers to a component past the end of `self`, eg. [`Swizzle::Z`] on a
    /// 2-dimensional vector. [`Vector::try_swizzle`] returns an error instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// use Swizzle::*;
    ///
    /// let v = vec2(2, 3);
    /// assert_eq!(v.swizzle([Y, X]), vec2(3, 2));
    /// assert_eq!(v.swizzle([Zero, One, X, Y]), vec4(0, 1, 2, 3));
    /// ```
    pub fn swizzle<const M: usize>(&self, selectors: [Swizzle; M]) -> Vector<T, M>
    where
        T: Zero + One,
    {
        match self.try_swizzle(selectors) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }

    /// Builds a vector by selecting components of `self`, returning [`Error::InvalidSwizzle`] if a
    /// selector refers to a component past the end of `self`.
    pub fn try_swizzle<const M: usize>(&self, selectors: [Swizzle; M]) -> Result<Vector<T, M>>
    where
        T: Zero + One,
    {
        let mut out = [T::ZERO; M];
        for (slot, selector) in out.iter_mut().zip(selectors) {
            *slot = match selector {
                Swizzle::Zero => T::ZERO,
                Swizzle::One => T::ONE,
                component => {
                    let index = component as usize;
                    *self
                        .0
                        .get(index)
                        .ok_or(Error::InvalidSwizzle { index, len: N })?
                }
            };
        }
        Ok(Vector(out))
    }
}

impl<T, const N: usize> Vector<T, N> {
    /// Returns the sum of all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// assert_eq!(vec3(1, 2, 3).sum(), 6);
    /// ```
    pub fn sum(self) -> T
    where
        T: Number,
    {
        self.0.into_iter().fold(T::ZERO, |acc, elem| acc + elem)
    }

    /// Returns the arithmetic mean of all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// assert_eq!(vec2(6.0, 7.0).mean(), 6.5);
    /// ```
    pub fn mean(self) -> T
    where
        T: Number,
    {
        let count = (0..N).fold(T::ZERO, |acc, _| acc + T::ONE);
        self.sum() / count
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// This is also available as the `*` operator between two vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// assert_eq!(a * b, 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// assert_eq!(vec2(6, 7).length_squared(), 85);
    /// ```
    pub fn length_squared(self) -> T
    where
        T: Number,
    {
        self.dot(self)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// ```
    pub fn length(self) -> T
    where
        T: Number + Sqrt,
    {
        self.length_squared().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// If the length of `self` is zero (which includes vectors so short that their squared length
    /// underflows), [`Vector::ZERO`] is returned instead of producing NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// assert_eq!(vec3(0.0, 0.0, 4.0).normalize(), vec3(0.0, 0.0, 1.0));
    /// assert_eq!(Vec2f::ZERO.normalize(), Vec2f::ZERO);
    /// ```
    #[doc(alias = "normalized")]
    #[must_use]
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        let length = self.length();
        if length == T::ZERO {
            return Self::ZERO;
        }
        self.map(|elem| elem / length)
    }

    /// Computes the unsigned angle between `self` and `other`.
    ///
    /// Both vectors must have non-zero length for the result to be meaningful.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// use approx::assert_relative_eq;
    ///
    /// let angle = vec2(1.0, 0.0).angle(vec2(0.0, 1.0));
    /// assert_relative_eq!(angle, deg(90.0).to_radians());
    /// ```
    pub fn angle(self, other: Self) -> Rad<T>
    where
        T: Real,
    {
        let dot = self.dot(other);
        Rad::acos(dot / (self.length_squared() * other.length_squared()).sqrt())
    }

    /// Element-wise minimum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.min(b), vec3(-1.0, f32::NEG_INFINITY, 0.0));
    /// ```
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self.0[i].min(other.0[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.max(b), vec3(3.0, 2.0, 0.0));
    /// ```
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self.0[i].max(other.0[i]))
    }

    /// Element-wise clamp of the elements in `self` between `min` and `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// let v = vec3(-1, 5, 10).clamp(Vector::splat(0), Vector::splat(8));
    /// assert_eq!(v, vec3(0, 5, 8));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self.0[i].clamp(min.0[i], max.0[i]))
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.0;
        Vector([x, y, value])
    }

    /// Computes the [perpendicular dot product] of `self` and `other`.
    ///
    /// This is the Z coordinate of the cross product of `self` and `other` extended with Z=0, and
    /// is also available as the `^` operator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// assert_eq!(vec2(4, 5).perp_dot(vec2(3, 2)), -7);
    /// assert_eq!(Vec2f::X ^ Vec2f::Y, 1.0);
    /// ```
    ///
    /// [perpendicular dot product]: https://mathworld.wolfram.com/PerpDotProduct.html
    pub fn perp_dot(self, other: Self) -> T
    where
        T: Signed,
    {
        let [a1, a2] = self.0;
        let [b1, b2] = other.0;
        a1 * b2 - a2 * b1
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// let v = vec3(-1.0, 2.0, 3.5).truncate();
    /// assert_eq!(v, vec2(-1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.0;
        Vector([x, y])
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// ```
    /// # use accel_math::*;
    /// assert_eq!(vec3(1, 2, 3).extend(1), vec4(1, 2, 3, 1));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.0;
        Vector([x, y, z, value])
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Swapping the
    /// arguments inverts its direction. Also available as the `^` operator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y ^ x, -z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Signed,
    {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// let v = vec4(-1.0, 2.0, 3.5, 1.0).truncate();
    /// assert_eq!(v, vec3(-1.0, 2.0, 3.5));
    /// ```
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.0;
        Vector([x, y, z])
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn constants() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec4f::W.w, 1.0);
        assert_eq!(Vec2::<i32>::ZERO, [0, 0]);
        assert_eq!(Vec3::<u8>::default(), [0, 0, 0]);
    }

    #[test]
    fn reductions() {
        let v = vec2(6.0, 7.0);
        assert_eq!(v.sum(), 13.0);
        assert_eq!(v.mean(), 6.5);
        assert_eq!(v.length_squared(), 85.0);
        assert_eq!(vec4(1, 2, 3, 6).mean(), 3);
    }

    #[test]
    fn swizzle() {
        use Swizzle::*;

        let v = vec2(2, 3);
        assert_eq!(v.swizzle([X, X]), vec2(2, 2));
        assert_eq!(v.swizzle([Y, X]), vec2(3, 2));
        assert_eq!(v.swizzle([Zero, One, X, Y]), vec4(0, 1, 2, 3));
        assert_eq!(v.swizzle([Swizzle::G]), [3]);
        assert_eq!(vec4(1, 2, 3, 4).swizzle([W, Z, Y]), vec3(4, 3, 2));
        assert_eq!(
            v.try_swizzle([X, Z]),
            Err(Error::InvalidSwizzle { index: 2, len: 2 })
        );
    }

    #[test]
    #[should_panic = "swizzle selects component 3 of a 3-dimensional vector"]
    fn swizzle_out_of_range() {
        vec3(1, 2, 3).swizzle([Swizzle::W]);
    }

    #[test]
    fn products() {
        assert_eq!(vec2(4, 5) * vec2(3, 2), 22);
        assert_eq!(vec2(4, 5) ^ vec2(3, 2), -7);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);
        assert_eq!(vec3(1, 0, 0) ^ vec3(0, 1, 0), vec3(0, 0, 1));
        assert_eq!(vec3(2, 3, 4) ^ vec3(5, 6, 7), vec3(-3, 6, -3));
    }

    #[test]
    fn normalize() {
        assert_relative_eq!(vec3(1.0f32, 2.0, -3.0).normalize().length(), 1.0, epsilon = 1e-6);
        assert_eq!(Vec3f::ZERO.normalize(), Vec3f::ZERO);
        assert!(!Vec4d::ZERO.normalize().x.is_nan());
    }

    #[test]
    fn normalize_underflowing_length() {
        let tiny = vec2(1e-200f64, 1e-200);
        assert_eq!(tiny.length(), 0.0);
        assert_eq!(tiny.normalize(), Vec2d::ZERO);

        let negative_zero = vec2(-0.0f64, 0.0).normalize();
        assert_eq!(negative_zero, Vec2d::ZERO);
        assert!(negative_zero.x.is_sign_positive());
    }

    #[test]
    fn unsigned_elements() {
        let color: ColorRgb = vec3(10, 20, 30);
        assert_eq!(color.sum(), 60u8);
        assert_eq!(vec3(1u8, 2, 3) * vec3(4, 5, 6), 32);
        assert_eq!(vec3(1u8, 2, 3).dot(vec3(4, 5, 6)), 32);
        assert_eq!(color.r, 10);
        assert_eq!(color.extend(255), ColorRgba::from([10, 20, 30, 255]));
        assert_eq!(Vec2u::X + Vec2u::Y, vec2(1u32, 1));
    }

    #[test]
    fn angle() {
        assert_relative_eq!(vec2(1.0f32, 0.0).angle(vec2(0.0, 1.0)).value(), FRAC_PI_2);
        assert_relative_eq!(Vec3f::Y.angle(-Vec3f::Y).value(), PI);
        assert_abs_diff_eq!(vec2(2.0f32, 2.0).angle(vec2(1.0, 1.0)).value(), 0.0, epsilon = 1e-3);
        assert_relative_eq!(
            vec2(1.0, 1.0).angle(vec2(1.0, -1.0)).to_degrees(),
            crate::deg(90.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn extend_truncate() {
        assert_eq!(vec2(1, 2).extend(3).extend(4), vec4(1, 2, 3, 4));
        assert_eq!(vec4(1, 2, 3, 4).truncate().truncate(), vec2(1, 2));
    }

    #[test]
    fn min_max_clamp() {
        let a = vec2(1, 8);
        let b = vec2(4, 2);
        assert_eq!(a.min(b), vec2(1, 2));
        assert_eq!(a.max(b), vec2(4, 8));
        assert_eq!(vec2(-3, 30).clamp(a, b.max(a)), vec2(1, 8));
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
    }
}
