//! Axis-aligned rectangles.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{
    point2, size2,
    traits::{Number, Signed},
    MinMax, Point2, Size2,
};

/// A [`Rect`] with [`f32`] edges.
pub type Rectf = Rect<f32>;
/// A [`Rect`] with [`f64`] edges.
pub type Rectd = Rect<f64>;
/// A [`Rect`] with [`i32`] edges.
pub type Recti = Rect<i32>;
/// A [`Rect`] with [`u32`] edges.
pub type Rectu = Rect<u32>;

/// An axis-aligned rectangle, stored as its top, left, bottom and right edges.
///
/// The Y axis points down: `top <= bottom` for a valid rectangle, just like `left <= right`.
/// Rectangles with a non-positive width or height can be represented (eg. as the result of
/// [`Rect::intersection`]); use [`Rect::is_valid`] to check for them.
///
/// # Examples
///
/// ```
/// # use accel_math::*;
/// let mut r = Rect::from_point_size(point2(100, 100), size2(100, 100));
/// assert_eq!((r.top(), r.left(), r.bottom(), r.right()), (100, 100, 200, 200));
///
/// r.pad(size2(20, 40));
/// assert_eq!(r, Rect::new(60, 80, 240, 220));
/// ```
#[doc(alias = "rectangle")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect<T> {
    top: T,
    left: T,
    bottom: T,
    right: T,
}

impl<T: Copy> Rect<T> {
    /// Creates a rectangle from the coordinates of its edges.
    #[inline]
    pub const fn new(top: T, left: T, bottom: T, right: T) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Creates a rectangle extending downwards and right from `top_left`.
    #[inline]
    pub fn from_point_size(top_left: Point2<T>, size: Size2<T>) -> Self
    where
        T: Number,
    {
        Self::new(
            top_left.y,
            top_left.x,
            top_left.y + size.height,
            top_left.x + size.width,
        )
    }

    /// Returns the Y coordinate of the top edge.
    #[inline]
    pub fn top(&self) -> T {
        self.top
    }

    /// Returns the X coordinate of the left edge.
    #[inline]
    pub fn left(&self) -> T {
        self.left
    }

    /// Returns the Y coordinate of the bottom edge.
    ///
    /// The bottom edge itself is not part of the rectangle.
    #[inline]
    pub fn bottom(&self) -> T {
        self.bottom
    }

    /// Returns the X coordinate of the right edge.
    ///
    /// The right edge itself is not part of the rectangle.
    #[inline]
    pub fn right(&self) -> T {
        self.right
    }

    /// Returns a mutable reference to the top edge.
    #[inline]
    pub fn top_mut(&mut self) -> &mut T {
        &mut self.top
    }

    /// Returns a mutable reference to the left edge.
    #[inline]
    pub fn left_mut(&mut self) -> &mut T {
        &mut self.left
    }

    /// Returns a mutable reference to the bottom edge.
    #[inline]
    pub fn bottom_mut(&mut self) -> &mut T {
        &mut self.bottom
    }

    /// Returns a mutable reference to the right edge.
    #[inline]
    pub fn right_mut(&mut self) -> &mut T {
        &mut self.right
    }

    /// Returns the top-left corner, which is the origin of the rectangle.
    #[inline]
    pub fn top_left(&self) -> Point2<T> {
        point2(self.left, self.top)
    }

    /// Returns the top-right corner.
    #[inline]
    pub fn top_right(&self) -> Point2<T> {
        point2(self.right, self.top)
    }

    /// Returns the bottom-left corner.
    #[inline]
    pub fn bottom_left(&self) -> Point2<T> {
        point2(self.left, self.bottom)
    }

    /// Returns the bottom-right corner.
    #[inline]
    pub fn bottom_right(&self) -> Point2<T> {
        point2(self.right, self.bottom)
    }
}

impl<T: Number> Rect<T> {
    /// Returns the distance between the left and right edges.
    #[inline]
    pub fn width(&self) -> T {
        self.right - self.left
    }

    /// Returns the distance between the top and bottom edges.
    #[inline]
    pub fn height(&self) -> T {
        self.bottom - self.top
    }

    /// Returns the width and height as a [`Size2`].
    #[inline]
    pub fn size(&self) -> Size2<T> {
        size2(self.width(), self.height())
    }

    /// Returns `width * height`.
    #[inline]
    pub fn area(&self) -> T {
        self.width() * self.height()
    }

    /// Returns `true` if both the width and the height of `self` are greater than zero.
    ///
    /// This compares edges instead of computing the size, so it also works for unsigned element
    /// types where the size of an inverted rectangle would underflow.
    #[doc(alias = "valid")]
    pub fn is_valid(&self) -> bool
    where
        T: PartialOrd,
    {
        self.right > self.left && self.bottom > self.top
    }

    /// Computes the overlapping area of `self` and `other`.
    ///
    /// If the rectangles don't overlap, the result is not [valid][Rect::is_valid].
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// let a = Rect::new(0, 0, 10, 10);
    /// assert_eq!(a.intersection(&Rect::new(5, 5, 20, 20)), Rect::new(5, 5, 10, 10));
    /// assert!(!a.intersection(&Rect::new(20, 20, 30, 30)).is_valid());
    /// ```
    pub fn intersection(&self, other: &Self) -> Self
    where
        T: MinMax,
    {
        Self::new(
            self.top.max(other.top),
            self.left.max(other.left),
            self.bottom.min(other.bottom),
            self.right.min(other.right),
        )
    }

    /// Returns `true` if `self` and `other` overlap by a non-zero area.
    pub fn intersects(&self, other: &Self) -> bool
    where
        T: MinMax + PartialOrd,
    {
        self.intersection(other).is_valid()
    }

    /// Returns `true` if `point` lies inside `self`.
    ///
    /// The top and left edges are inside the rectangle, the bottom and right edges are not.
    pub fn contains_point(&self, point: Point2<T>) -> bool
    where
        T: PartialOrd,
    {
        self.left <= point.x && point.x < self.right && self.top <= point.y && point.y < self.bottom
    }

    /// Moves all edges by `size` (the width is added to left and right, the height to top and
    /// bottom).
    pub fn offset(&mut self, size: Size2<T>) {
        self.top = self.top + size.height;
        self.bottom = self.bottom + size.height;
        self.left = self.left + size.width;
        self.right = self.right + size.width;
    }

    /// Shrinks the rectangle by `size` on each side.
    pub fn inset(&mut self, size: Size2<T>) {
        self.inset_edges(size.height, size.width, size.height, size.width);
    }

    /// Moves each edge inwards by the given amount.
    pub fn inset_edges(&mut self, top: T, left: T, bottom: T, right: T) {
        self.top = self.top + top;
        self.left = self.left + left;
        self.bottom = self.bottom - bottom;
        self.right = self.right - right;
    }
}

impl<T: Signed> Rect<T> {
    /// Grows the rectangle by `size` on each side.
    ///
    /// This is the inverse of [`Rect::inset`].
    pub fn pad(&mut self, size: Size2<T>) {
        self.inset(-size);
    }

    /// Moves each edge outwards by the given amount.
    pub fn pad_edges(&mut self, top: T, left: T, bottom: T, right: T) {
        self.inset_edges(-top, -left, -bottom, -right);
    }
}

impl<T> AbsDiffEq for Rect<T>
where
    T: AbsDiffEq,
    T::Epsilon: Clone,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.top.abs_diff_eq(&other.top, epsilon.clone())
            && self.left.abs_diff_eq(&other.left, epsilon.clone())
            && self.bottom.abs_diff_eq(&other.bottom, epsilon.clone())
            && self.right.abs_diff_eq(&other.right, epsilon)
    }
}

impl<T> RelativeEq for Rect<T>
where
    T: RelativeEq,
    T::Epsilon: Clone,
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
        let eq = |a: &T, b: &T| a.relative_eq(b, epsilon.clone(), max_relative.clone());
        eq(&self.top, &other.top)
            && eq(&self.left, &other.left)
            && eq(&self.bottom, &other.bottom)
            && eq(&self.right, &other.right)
    }
}

impl<T> UlpsEq for Rect<T>
where
    T: UlpsEq,
    T::Epsilon: Clone,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        let eq = |a: &T, b: &T| a.ulps_eq(b, epsilon.clone(), max_ulps);
        eq(&self.top, &other.top)
            && eq(&self.left, &other.left)
            && eq(&self.bottom, &other.bottom)
            && eq(&self.right, &other.right)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn from_point_size() {
        let r = Rect::from_point_size(point2(100, 100), size2(100, 100));
        assert_eq!(r, Rect::new(100, 100, 200, 200));
        assert_eq!(r.width(), 100);
        assert_eq!(r.height(), 100);
        assert_eq!(r.size(), size2(100, 100));
        assert_eq!(r.area(), 10_000);

        let r = Rect::from_point_size(point2(1, 2), size2(30, 40));
        assert_eq!((r.top(), r.left(), r.bottom(), r.right()), (2, 1, 42, 31));
        assert_eq!(r.top_left(), point2(1, 2));
        assert_eq!(r.top_right(), point2(31, 2));
        assert_eq!(r.bottom_left(), point2(1, 42));
        assert_eq!(r.bottom_right(), point2(31, 42));
    }

    #[test]
    fn offset_and_intersection() {
        let original = Rect::from_point_size(point2(100, 100), size2(100, 100));
        let mut moved = original;
        moved.offset(size2(50, 50));
        assert_eq!(moved, Rect::new(150, 150, 250, 250));

        assert!(original.intersects(&moved));
        assert_eq!(original.intersection(&moved), Rect::new(150, 150, 200, 200));
        assert_eq!(moved.intersection(&original), Rect::new(150, 150, 200, 200));

        let mut far = original;
        far.offset(size2(500, 0));
        assert!(!original.intersects(&far));
        assert!(!original.intersection(&far).is_valid());

        let mut sideways = Rect::new(0, 0, 10, 10);
        sideways.offset(size2(5, 1));
        assert_eq!(sideways, Rect::new(1, 5, 11, 15));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(0, 10, 10, 20);
        assert!(!a.intersects(&b));
        assert_eq!(a.intersection(&b).width(), 0);
    }

    #[test]
    fn inset_and_pad() {
        let mut r = Rect::from_point_size(point2(100, 100), size2(100, 100));
        r.pad(size2(20, 40));
        assert_eq!(r, Rect::new(60, 80, 240, 220));
        r.inset(size2(20, 40));
        assert_eq!(r, Rect::new(100, 100, 200, 200));

        r.inset_edges(1, 2, 3, 4);
        assert_eq!(r, Rect::new(101, 102, 197, 196));
        r.pad_edges(1, 2, 3, 4);
        assert_eq!(r, Rect::new(100, 100, 200, 200));

        r.inset(size2(60, 60));
        assert!(!r.is_valid());
    }

    #[test]
    fn contains_point() {
        let r = Rect::new(5.0, -5.0, 10.0, 5.0);
        assert!(r.contains_point(point2(-5.0, 5.0)));
        assert!(r.contains_point(point2(4.0, 9.0)));
        assert!(!r.contains_point(point2(5.0, 9.0)));
        assert!(!r.contains_point(point2(4.0, 10.0)));
        assert!(!r.contains_point(point2(0.0, 4.0)));

        let empty = Rect::new(0.0, 0.0, 0.0, 0.0);
        assert!(!empty.contains_point(point2(0.0, 0.0)));
    }

    #[test]
    fn edges_are_mutable() {
        let mut r = Rectf::default();
        *r.bottom_mut() = 2.0;
        *r.right_mut() = 3.0;
        assert_eq!(r.size(), size2(3.0, 2.0));
        *r.top_mut() += 0.1;
        *r.left_mut() += 0.2;
        assert_relative_eq!(r, Rect::new(0.1, 0.2, 2.0, 3.0));
        assert_relative_eq!(r.area(), 1.9 * 2.8, epsilon = 1e-5);
    }

    #[test]
    fn unsigned_edges() {
        let r = Rectu::from_point_size(point2(10, 20), size2(30, 40));
        assert_eq!(r.width(), 30);
        assert_eq!(r.height(), 40);
        assert_eq!(r.area(), 1200);
        assert!(r.is_valid());

        let mut moved = r;
        moved.offset(size2(20, 0));
        assert_eq!(moved, Rect::new(20, 30, 60, 60));
        assert_eq!(r.intersection(&moved), Rect::new(20, 30, 60, 40));
        assert!(r.intersects(&moved));

        // Disjoint rectangles intersect in an inverted rectangle, which must not underflow.
        let far = Rect::new(100u32, 100, 110, 110);
        assert!(!r.intersection(&far).is_valid());
        assert!(!r.intersects(&far));
        assert!(!Rectu::default().is_valid());
    }
}
