use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::{Size, Vector};

/// A 2-dimensional point.
pub type Point2<T> = Point<T, 2>;
/// A 2-dimensional point with [`f32`] coordinates.
pub type Point2f = Point2<f32>;
/// A 2-dimensional point with [`f64`] coordinates.
pub type Point2d = Point2<f64>;
/// A 2-dimensional point with [`i32`] coordinates.
pub type Point2i = Point2<i32>;
/// A 2-dimensional point with [`u32`] coordinates.
pub type Point2u = Point2<u32>;
/// A 3-dimensional point.
pub type Point3<T> = Point<T, 3>;
/// A 3-dimensional point with [`f32`] coordinates.
pub type Point3f = Point3<f32>;
/// A 3-dimensional point with [`f64`] coordinates.
pub type Point3d = Point3<f64>;
/// A 3-dimensional point with [`i32`] coordinates.
pub type Point3i = Point3<i32>;
/// A 3-dimensional point with [`u32`] coordinates.
pub type Point3u = Point3<u32>;
/// A 4-dimensional (homogeneous) point.
pub type Point4<T> = Point<T, 4>;
/// A 4-dimensional point with [`f32`] coordinates.
pub type Point4f = Point4<f32>;
/// A 4-dimensional point with [`f64`] coordinates.
pub type Point4d = Point4<f64>;
/// A 4-dimensional point with [`i32`] coordinates.
pub type Point4i = Point4<i32>;
/// A 4-dimensional point with [`u32`] coordinates.
pub type Point4u = Point4<u32>;

/// A location in `N`-dimensional space.
///
/// Points share their storage with [`Vector`]s and can be converted to and from them with
/// [`From`], but only support the operations that make sense for a location:
///
/// - `point - point` yields the [`Vector`] between them (see also [`Point::vector_to`]).
/// - `point + vector` and `point - vector` move the point.
/// - `point + size` and `point - size` move the point by an extent.
/// - `point * scalar` and `point / scalar` scale the coordinates.
///
/// For points with up to 4 dimensions, coordinates can be accessed as fields `x`, `y`, `z` and
/// `w`.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Point<T, const N: usize>(pub(crate) [T; N]);

array_wrapper!(Point);
scalar_ops! {
    Point:
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
}

impl<T, const N: usize> Point<T, N> {
    /// Returns the vector pointing from `self` to `other` (that is, `other - self`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// let a = point2(1, 1);
    /// let b = point2(4, 5);
    /// assert_eq!(a.vector_to(b), vec2(3, 4));
    /// assert_eq!(a + a.vector_to(b), b);
    /// ```
    #[inline]
    pub fn vector_to(self, other: Self) -> Vector<T, N>
    where
        T: Sub<Output = T> + Copy,
    {
        other - self
    }

    /// Reinterprets the coordinates as a [`Vector`] from the origin.
    #[inline]
    pub fn into_vector(self) -> Vector<T, N> {
        Vector(self.0)
    }
}

impl<T> Point<T, 2> {
    /// Appends a coordinate, yielding a 3-dimensional point.
    #[inline]
    pub fn extend(self, z: T) -> Point3<T> {
        let [x, y] = self.0;
        Point([x, y, z])
    }
}

impl<T> Point<T, 3> {
    /// Appends a coordinate, yielding a 4-dimensional point.
    ///
    /// Use `1` as the `w` coordinate to get a homogeneous point that is affected by translation.
    #[inline]
    pub fn extend(self, w: T) -> Point4<T> {
        let [x, y, z] = self.0;
        Point([x, y, z, w])
    }

    /// Drops the last coordinate, yielding a 2-dimensional point.
    #[inline]
    pub fn truncate(self) -> Point2<T> {
        let [x, y, _] = self.0;
        Point([x, y])
    }
}

impl<T> Point<T, 4> {
    /// Drops the last coordinate, yielding a 3-dimensional point.
    #[inline]
    pub fn truncate(self) -> Point3<T> {
        let [x, y, z, _] = self.0;
        Point([x, y, z])
    }
}

impl<T, const N: usize> From<Vector<T, N>> for Point<T, N> {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        Point(v.0)
    }
}

impl<T, const N: usize> From<Point<T, N>> for Vector<T, N> {
    #[inline]
    fn from(p: Point<T, N>) -> Self {
        p.into_vector()
    }
}

/// Point difference.
impl<T, const N: usize> Sub for Point<T, N>
where
    T: Sub<Output = T> + Copy,
{
    type Output = Vector<T, N>;

    fn sub(self, rhs: Self) -> Vector<T, N> {
        Vector::from_fn(|i| self.0[i] - rhs.0[i])
    }
}

macro_rules! offset_ops {
    ($($rhs:ident),+) => {
        $(
            impl<T, const N: usize> Add<$rhs<T, N>> for Point<T, N>
            where
                T: Add<Output = T> + Copy,
            {
                type Output = Self;

                fn add(self, rhs: $rhs<T, N>) -> Self {
                    Point::from_fn(|i| self.0[i] + rhs.0[i])
                }
            }

            impl<T, const N: usize> Sub<$rhs<T, N>> for Point<T, N>
            where
                T: Sub<Output = T> + Copy,
            {
                type Output = Self;

                fn sub(self, rhs: $rhs<T, N>) -> Self {
                    Point::from_fn(|i| self.0[i] - rhs.0[i])
                }
            }

            impl<T, const N: usize> AddAssign<$rhs<T, N>> for Point<T, N>
            where
                T: AddAssign + Copy,
            {
                fn add_assign(&mut self, rhs: $rhs<T, N>) {
                    for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
                        *lhs += rhs;
                    }
                }
            }

            impl<T, const N: usize> SubAssign<$rhs<T, N>> for Point<T, N>
            where
                T: SubAssign + Copy,
            {
                fn sub_assign(&mut self, rhs: $rhs<T, N>) {
                    for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
                        *lhs -= rhs;
                    }
                }
            }
        )+
    };
}

offset_ops!(Size, Vector);

/// Constructs a [`Point2`] from its coordinates.
#[inline]
pub const fn point2<T>(x: T, y: T) -> Point2<T> {
    Point([x, y])
}

/// Constructs a [`Point3`] from its coordinates.
#[inline]
pub const fn point3<T>(x: T, y: T, z: T) -> Point3<T> {
    Point([x, y, z])
}

/// Constructs a [`Point4`] from its coordinates.
#[inline]
pub const fn point4<T>(x: T, y: T, z: T, w: T) -> Point4<T> {
    Point([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use crate::{size2, vec2, vec3, Error};

    use super::*;

    #[test]
    fn vector_to_points_from_self_to_other() {
        let a = point3(1.0, 2.0, 3.0);
        let b = point3(4.0, 4.0, 4.0);
        assert_eq!(a.vector_to(b), vec3(3.0, 2.0, 1.0));
        assert_eq!(b.vector_to(a), vec3(-3.0, -2.0, -1.0));
        assert_eq!(b - a, a.vector_to(b));
    }

    #[test]
    fn offsets() {
        let mut p = point2(10, 20);
        assert_eq!(p + size2(1, 2), point2(11, 22));
        assert_eq!(p - size2(1, 2), point2(9, 18));
        assert_eq!(p + vec2(-10, -20), point2(0, 0));
        assert_eq!(p - vec2(10, 20), point2(0, 0));
        assert_eq!(p * 2, point2(20, 40));
        assert_eq!(p / 10, point2(1, 2));

        p += size2(5, 5);
        p -= vec2(1, 1);
        assert_eq!(p, [14, 24]);
    }

    #[test]
    fn conversion() {
        let p = point2(3, 4);
        let v: Vector<i32, 2> = p.into();
        assert_eq!(v, vec2(3, 4));
        assert_eq!(Point::from(v), p);
        assert_eq!(p.extend(5).extend(1), point4(3, 4, 5, 1));
        assert_eq!(point4(3, 4, 5, 1).truncate().truncate(), p);
    }

    #[test]
    fn construction() {
        assert_eq!(Point4::<f32>::default(), point4(0.0, 0.0, 0.0, 0.0));
        assert_eq!(Point3::try_from_slice(&[7]), Ok(point3(7, 0, 0)));
        assert_eq!(
            Point2::try_from(&[1, 2, 3][..]),
            Err(Error::TooManyValues { max: 2, got: 3 })
        );
        assert_eq!(point2(1, 2).at(5), Err(Error::OutOfRange { index: 5, len: 2 }));
        assert_eq!(point3(1, 2, 3).to_string(), "(1, 2, 3)");
    }
}
