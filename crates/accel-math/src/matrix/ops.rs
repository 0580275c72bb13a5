use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{
    traits::{Number, Signed},
    Matrix, Vector,
};

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

/// Matrix * Column Vector.
impl<T, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        Vector::from_fn(|row| (0..C).fold(T::ZERO, |acc, col| acc + self[(row, col)] * rhs[col]))
    }
}

/// Vector * Matrix.
///
/// The vector's elements are paired with the columns of each matrix row, so this yields the same
/// result as `matrix * vector`.
impl<T, const R: usize, const N: usize> Mul<Matrix<T, R, N>> for Vector<T, N>
where
    T: Number,
{
    type Output = Vector<T, R>;

    fn mul(self, rhs: Matrix<T, R, N>) -> Self::Output {
        Vector::from_fn(|row| (0..N).fold(T::ZERO, |acc, col| acc + self[col] * rhs[(row, col)]))
    }
}

/// Matrix * Matrix.
impl<T, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>> for Matrix<T, M, N>
where
    T: Number,
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Self::Output {
        Matrix::from_fn(|i, j| (0..N).fold(T::ZERO, |acc, k| acc + self[(i, k)] * rhs[(k, j)]))
    }
}

impl<T, const N: usize> MulAssign<Matrix<T, N, N>> for Matrix<T, N, N>
where
    T: Number,
{
    fn mul_assign(&mut self, rhs: Matrix<T, N, N>) {
        *self = *self * rhs;
    }
}

/// Matrix * Scalar.
impl<T, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

impl<T, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C>
where
    T: Number,
{
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

/// Matrix / Scalar.
impl<T, const R: usize, const C: usize> Div<T> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn div(self, rhs: T) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

impl<T, const R: usize, const C: usize> DivAssign<T> for Matrix<T, R, C>
where
    T: Number,
{
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

macro_rules! elementwise {
    ($( $trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident; )+) => {
        $(
            impl<T, const R: usize, const C: usize> $trait for Matrix<T, R, C>
            where
                T: Number,
            {
                type Output = Self;

                fn $method(self, rhs: Self) -> Self {
                    Matrix::from_fn(|row, col| self.0[row][col].$method(rhs.0[row][col]))
                }
            }

            impl<T, const R: usize, const C: usize> $assign_trait for Matrix<T, R, C>
            where
                T: Number,
            {
                fn $assign_method(&mut self, rhs: Self) {
                    *self = (*self).$method(rhs);
                }
            }
        )+
    };
}

elementwise! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
}

impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Signed,
{
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|elem| -elem)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn index() {
        let mut m = Matrix::from_rows([[0, 1, 2], [3, 4, 5]]);
        assert_eq!(m[(0, 2)], 2);
        assert_eq!(m[(1, 0)], 3);
        m[(1, 2)] = 50;
        assert_eq!(m.row(1), vec3(3, 4, 50));
    }

    #[test]
    #[should_panic]
    fn index_out_of_range() {
        let m = Mat2::<i32>::identity();
        assert_eq!(m[(0, 2)], 0);
    }

    #[test]
    fn mat_vec_mul() {
        let m = Mat3::try_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
        let v = vec3(1, 2, 3);
        assert_eq!(v * m, vec3(14, 32, 50));
        assert_eq!(m * v, vec3(14, 32, 50));

        let m = Matrix::from_rows([[1, 0, 0], [0, 1, 0]]);
        assert_eq!(m * vec3(1, 2, 3), vec2(1, 2));
        assert_eq!(vec3(1, 2, 3) * m, vec2(1, 2));
    }

    #[test]
    fn mat_mat_mul() {
        let a = Mat3x2::try_from_slice(&[1, 2, 3, 4, 5, 6]).unwrap();
        let b = Mat2x3::try_from_slice(&[1, 2, 3, 4, 5, 6]).unwrap();
        let c = Mat3::try_from_slice(&[9, 12, 15, 19, 26, 33, 29, 40, 51]).unwrap();
        assert_eq!(a * b, c);

        let a = Mat2x3::try_from_slice(&[0, 4, -2, -4, -3, 0]).unwrap();
        let b = Mat3x2::try_from_slice(&[0, 1, 1, -1, 2, 3]).unwrap();
        assert_eq!(a * b, Matrix::from_rows([[0, -10], [-3, -1]]));

        let mut id = Mat3::<i32>::identity();
        id *= c;
        assert_eq!(id, c);
        assert_eq!(c * Mat3::<i32>::identity(), c);
    }

    #[test]
    fn scalar_and_elementwise() {
        let mut m = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(m * 2, Matrix::from_rows([[2, 4], [6, 8]]));
        assert_eq!(m / 2, Matrix::from_rows([[0, 1], [1, 2]]));
        assert_eq!(m + m, m * 2);
        assert_eq!(m - m, Mat2::<i32>::ZERO);
        assert_eq!(-m, Matrix::from_rows([[-1, -2], [-3, -4]]));

        m *= 3;
        m /= 3;
        m += Mat2::<i32>::identity();
        m -= Matrix::from_rows([[0, 2], [3, 0]]);
        assert_eq!(m, Matrix::from_rows([[2, 0], [0, 5]]));
    }

    #[test]
    fn unsigned_elements() {
        let a: Matrix<u32, 2, 3> = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        let b: Matrix<u32, 3, 2> = a.transpose();
        assert_eq!(a * b, Matrix::from_rows([[14u32, 32], [32, 77]]));
        assert_eq!(a * vec3(1u32, 0, 2), vec2(7u32, 16));
        assert_eq!(Mat2::<u32>::identity() * (a * b), a * b);
        assert_eq!(a + a - a, a);
        assert_eq!(a * 2 / 2, a);
    }
}
