use crate::Zero;

/// A 2-dimensional size.
pub type Size2<T> = Size<T, 2>;
/// A 2-dimensional size with [`f32`] elements.
pub type Size2f = Size2<f32>;
/// A 2-dimensional size with [`f64`] elements.
pub type Size2d = Size2<f64>;
/// A 2-dimensional size with [`i32`] elements.
pub type Size2i = Size2<i32>;
/// A 2-dimensional size with [`u32`] elements.
pub type Size2u = Size2<u32>;
/// A 3-dimensional size.
pub type Size3<T> = Size<T, 3>;
/// A 3-dimensional size with [`f32`] elements.
pub type Size3f = Size3<f32>;
/// A 3-dimensional size with [`f64`] elements.
pub type Size3d = Size3<f64>;
/// A 3-dimensional size with [`i32`] elements.
pub type Size3i = Size3<i32>;
/// A 3-dimensional size with [`u32`] elements.
pub type Size3u = Size3<u32>;

/// An extent in `N` dimensions (width, height and, for 3 dimensions, depth).
///
/// A [`Size`] has the same storage as a [`Vector`][crate::Vector], but a different role: it is
/// added to a [`Point`][crate::Point] to move it, and used to build and adjust a
/// [`Rect`][crate::Rect]. Sizes only support component-wise arithmetic.
///
/// The components of 2- and 3-dimensional sizes can be accessed as `width`, `height` and `depth`.
///
/// # Examples
///
/// ```
/// # use accel_math::*;
/// let mut s = size2(640, 480);
/// assert_eq!(s.width, 640);
/// s += size2(10, 20);
/// assert_eq!(s * 2, size2(1300, 1000));
/// ```
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Size<T, const N: usize>(pub(crate) [T; N]);

array_wrapper!(Size);
elementwise_ops! {
    Size:
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
}
scalar_ops! {
    Size:
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
}
neg_op!(Size);

impl<T: Copy> Size<T, 2> {
    /// Returns `true` if both the width and the height are strictly positive.
    ///
    /// ```
    /// # use accel_math::*;
    /// assert!(size2(1, 1).is_positive());
    /// assert!(!size2(0, 1).is_positive());
    /// ```
    pub fn is_positive(&self) -> bool
    where
        T: Zero + PartialOrd,
    {
        self.0[0] > T::ZERO && self.0[1] > T::ZERO
    }

    /// Appends a depth, yielding a 3-dimensional size.
    #[inline]
    pub fn extend(self, depth: T) -> Size3<T> {
        let [w, h] = self.0;
        Size([w, h, depth])
    }
}

impl<T: Copy> Size<T, 3> {
    /// Drops the depth, yielding a 2-dimensional size.
    #[inline]
    pub fn truncate(self) -> Size2<T> {
        let [w, h, _] = self.0;
        Size([w, h])
    }
}

/// Constructs a [`Size2`] from its width and height.
#[inline]
pub const fn size2<T>(width: T, height: T) -> Size2<T> {
    Size([width, height])
}

/// Constructs a [`Size3`] from its width, height and depth.
#[inline]
pub const fn size3<T>(width: T, height: T, depth: T) -> Size3<T> {
    Size([width, height, depth])
}
