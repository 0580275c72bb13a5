use std::fmt;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use itertools::Itertools;

use crate::{
    traits::{Number, Signed},
    Error, One, Result, Vector, Zero,
};

mod ops;
mod transform;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 2x2 matrix with [`f64`] elements.
pub type Mat2d = Mat2<f64>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;

/// A matrix with 2 rows and 3 columns.
pub type Mat2x3<T> = Matrix<T, 2, 3>;
/// A matrix with 2 rows and 4 columns.
pub type Mat2x4<T> = Matrix<T, 2, 4>;
/// A matrix with 3 rows and 2 columns.
pub type Mat3x2<T> = Matrix<T, 3, 2>;
/// A matrix with 3 rows and 4 columns.
pub type Mat3x4<T> = Matrix<T, 3, 4>;
/// A matrix with 4 rows and 2 columns.
pub type Mat4x2<T> = Matrix<T, 4, 2>;
/// A matrix with 4 rows and 3 columns.
pub type Mat4x3<T> = Matrix<T, 4, 3>;

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] fill a matrix from arrays or vectors.
/// - [`Matrix::from_fn`] creates each element by invoking a closure with its row and column.
/// - [`Matrix::try_from_slice`] takes up to `R * C` elements in row-major order and zero-fills the
///   rest.
/// - [`Matrix::ZERO`] (and [`Default`] for numbers) is a matrix with every element set to 0, and
///   [`Matrix::identity`] creates a square matrix with 1 on its diagonal.
/// - `Mat3` and `Mat4` have transform factories for 2D and 3D homogeneous coordinates (translation,
///   scaling, rotation, shearing) as well as camera and projection matrices.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`. The
/// first element of the tuple is the *row*, the second is the *column*, matching common
/// mathematical notation. Indices are 0-based.
///
/// ```
/// # use accel_math::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`]
/// returns an [`Option`] and [`Matrix::at`] returns a [`Result`][crate::Result] instead:
///
/// ```
/// # use accel_math::*;
/// let mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// assert_eq!(mat.get(0, 1), Some(&1));
/// assert_eq!(mat.get(0, 2), None);
/// assert!(mat.at(1, 0).is_err());
/// ```
///
/// # Vector Products
///
/// Both `matrix * vector` and `vector * matrix` compute `result[row] = Σ m[(row, col)] * v[col]`.
/// The transform factories are laid out for this product: translation lives in the last column.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>(pub(crate) [[T; C]; R]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; C]; R]);
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The number of rows.
    pub const ROWS: usize = R;
    /// The number of columns.
    pub const COLUMNS: usize = C;
    /// The total number of elements (`ROWS * COLUMNS`).
    pub const SIZE: usize = R * C;

    /// Creates a [`Matrix`] from an array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Self(rows.map(|row| row.into().into_array()))
    }

    /// Creates a [`Matrix`] from an array of columns.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self
    where
        T: Copy,
    {
        Matrix::<T, C, R>::from_rows(columns).transpose()
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(std::array::from_fn(|row| {
            std::array::from_fn(|col| cb(row, col))
        }))
    }

    /// Creates a [`Matrix`] from up to `R * C` elements in row-major order.
    ///
    /// Missing elements are set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooManyValues`] if `values` has more than `R * C` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// let mat = Mat2::try_from_slice(&[1, 2, 3]).unwrap();
    /// assert_eq!(mat, Matrix::from_rows([[1, 2], [3, 0]]));
    /// assert!(Mat2::try_from_slice(&[1, 2, 3, 4, 5]).is_err());
    /// ```
    pub fn try_from_slice(values: &[T]) -> Result<Self>
    where
        T: Zero + Copy,
    {
        if values.len() > R * C {
            return Err(Error::TooManyValues {
                max: R * C,
                got: values.len(),
            });
        }
        Ok(Self::from_fn(|row, col| {
            values.get(row * C + col).copied().unwrap_or(T::ZERO)
        }))
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.map(|i| i * 2), Matrix::from_rows([
    ///     [0, 2, 4],
    ///     [6, 8, 10],
    /// ]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    #[doc(alias = "transposed")]
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self.0[col][row])
    }

    /// Returns row `index` as a vector.
    ///
    /// # Panics
    ///
    /// Panics if `index >= R`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.row(1), vec3(3, 4, 5));
    /// ```
    pub fn row(&self, index: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        Vector(self.0[index])
    }

    /// Returns column `index` as a vector.
    ///
    /// # Panics
    ///
    /// Panics if `index >= C`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.column(1), vec2(1, 4));
    /// ```
    pub fn column(&self, index: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        assert!(index < C, "column index {index} out of range for {C} columns");
        Vector::from_fn(|row| self.0[row][index])
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|r| r.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Returns a reference to the element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CellOutOfRange`] if `row >= R` or `col >= C`.
    pub fn at(&self, row: usize, col: usize) -> Result<&T> {
        self.get(row, col).ok_or(Error::CellOutOfRange {
            row,
            col,
            rows: R,
            cols: C,
        })
    }

    /// Returns a mutable reference to the element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CellOutOfRange`] if `row >= R` or `col >= C`.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        self.get_mut(row, col).ok_or(Error::CellOutOfRange {
            row,
            col,
            rows: R,
            cols: C,
        })
    }

    /// Returns the elements as an array of rows.
    #[inline]
    pub const fn as_rows(&self) -> &[[T; C]; R] {
        &self.0
    }

    /// Returns all elements as a slice, in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.as_slice(), &[0, 1, 2, 3, 4, 5]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_flattened()
    }

    /// Returns all elements as a mutable slice, in row-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.0.as_flattened_mut()
    }

    /// Converts this matrix into an array of rows.
    #[inline]
    pub fn into_rows(self) -> [[T; C]; R] {
        self.0
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns the identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else. Multiplying any vector or
    /// matrix with it returns that vector or matrix unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// assert_eq!(Mat2::<i32>::identity(), Matrix::from_rows([[1, 0], [0, 1]]));
    /// ```
    pub fn identity() -> Self
    where
        T: Zero + One,
    {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Returns a [`Vector`] holding the diagonal elements of this square matrix.
    pub fn diagonal(&self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self.0[i][i])
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        self.diagonal().sum()
    }
}

// Determinant and inverse limited to 3x3; keep bounds in sync!
impl<T: Signed> Matrix<T, 2, 2> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        let [[a, b], [c, d]] = self.0;
        a * d - b * c
    }

    /// Inverts this 2x2 matrix.
    ///
    /// If `self` is not invertible (its [`determinant()`] is zero), the result contains the
    /// values produced by dividing by zero (infinities and NaNs for floats). Use
    /// [`Matrix::try_inverse`] to detect this case.
    ///
    /// [`determinant()`]: Self::determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// let m = Matrix::from_rows([[4.0, 7.0], [2.0, 6.0]]);
    /// assert_eq!(m.inverse(), Matrix::from_rows([[0.6, -0.7], [-0.2, 0.4]]));
    /// ```
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        if det == T::ZERO {
            log::warn!("inverting a singular 2x2 matrix");
        }

        let [[a, b], [c, d]] = self.0;
        Matrix([[d, -b], [-c, a]]) / det
    }

    /// Inverts this 2x2 matrix, or returns [`Error::Singular`] if its determinant is zero.
    pub fn try_inverse(&self) -> Result<Self> {
        if self.determinant() == T::ZERO {
            return Err(Error::Singular);
        }
        Ok(self.inverse())
    }
}

impl<T: Signed> Matrix<T, 3, 3> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.0;
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Returns the 2x2 matrix left over after deleting row `row` and column `col`.
    ///
    /// The determinant of the result is the *minor* of the element at `(row, col)`. No sign is
    /// applied: multiply the determinant by `(-1)^(row + col)` to get the cofactor.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 3 or larger.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// let m = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    ///     [7, 8, 9],
    /// ]);
    /// assert_eq!(m.cofactor(1, 0), Matrix::from_rows([[2, 3], [8, 9]]));
    /// assert_eq!(m.cofactor(1, 0).determinant(), -6);
    /// ```
    pub fn cofactor(&self, row: usize, col: usize) -> Mat2<T> {
        assert!(
            row < 3 && col < 3,
            "cofactor ({row}, {col}) out of range for a 3x3 matrix"
        );
        let skip = |i: usize, removed: usize| if i < removed { i } else { i + 1 };
        Matrix::from_fn(|r, c| self.0[skip(r, row)][skip(c, col)])
    }

    /// Inverts this 3x3 matrix, using its adjugate.
    ///
    /// If `self` is not invertible (its [`determinant()`] is zero), the result contains the
    /// values produced by dividing by zero (infinities and NaNs for floats). Use
    /// [`Matrix::try_inverse`] to detect this case.
    ///
    /// [`determinant()`]: Self::determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// let m = Matrix::from_rows([
    ///     [1.0, 2.0, 3.0],
    ///     [0.0, 1.0, 4.0],
    ///     [5.0, 6.0, 0.0],
    /// ]);
    /// assert_eq!(m.inverse(), Matrix::from_rows([
    ///     [-24.0, 18.0, 5.0],
    ///     [20.0, -15.0, -4.0],
    ///     [-5.0, 4.0, 1.0],
    /// ]));
    /// ```
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        if det == T::ZERO {
            log::warn!("inverting a singular 3x3 matrix");
        }

        let adjugate = Matrix::from_fn(|row, col| {
            // Transposed: the adjugate's `(row, col)` is the cofactor of `(col, row)`.
            let minor = self.cofactor(col, row).determinant();
            if (row + col) % 2 == 0 {
                minor
            } else {
                -minor
            }
        });
        adjugate / det
    }

    /// Inverts this 3x3 matrix, or returns [`Error::Singular`] if its determinant is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// let singular = Matrix::from_rows([
    ///     [1.0, 2.0, 3.0],
    ///     [4.0, 5.0, 6.0],
    ///     [7.0, 8.0, 9.0],
    /// ]);
    /// assert_eq!(singular.try_inverse(), Err(Error::Singular));
    /// ```
    pub fn try_inverse(&self) -> Result<Self> {
        if self.determinant() == T::ZERO {
            return Err(Error::Singular);
        }
        Ok(self.inverse())
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    #[inline]
    fn from(rows: [[T; C]; R]) -> Self {
        Self(rows)
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rows stay on one line, even with `{:#?}`.
        struct FormatRow<'a, T>(&'a [T]);
        impl<T: fmt::Debug> fmt::Debug for FormatRow<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[{:?}]", self.0.iter().format(", "))
            }
        }

        f.debug_list()
            .entries(self.0.iter().map(|row| FormatRow(row)))
            .finish()
    }
}

/// Formats the matrix as `matN(...)` (square) or `matRxC(...)`, with one parenthesized list of
/// elements per row.
impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if R == C {
            write!(f, "mat{R}")?;
        } else {
            write!(f, "mat{R}x{C}")?;
        }
        let rows = self.0.iter().format_with(", ", |row, g| {
            g(&format_args!("({})", row.iter().format(", ")))
        });
        write!(f, "({rows})")
    }
}

impl<T, const R: usize, const C: usize> AbsDiffEq for Matrix<T, R, C>
where
    T: AbsDiffEq,
    T::Epsilon: Clone,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon.clone()))
    }
}

impl<T, const R: usize, const C: usize> RelativeEq for Matrix<T, R, C>
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
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.relative_eq(b, epsilon.clone(), max_relative.clone()))
    }
}

impl<T, const R: usize, const C: usize> UlpsEq for Matrix<T, R, C>
where
    T: UlpsEq,
    T::Epsilon: Clone,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.ulps_eq(b, epsilon.clone(), max_ulps))
    }
}
