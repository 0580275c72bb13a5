//! Implementations of `std::ops`.

use std::ops::{BitXor, Mul};

use crate::traits::{Number, Signed};

use super::Vector;

elementwise_ops! {
    Vector:
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
}

// NB: `Vector * Vector` is the dot product, so scalar multiplication is the only element-wise
// multiplication available.
scalar_ops! {
    Vector:
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
}

neg_op!(Vector);

/// Dot product.
impl<T: Number, const N: usize> Mul<Vector<T, N>> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn mul(self, rhs: Vector<T, N>) -> T {
        self.dot(rhs)
    }
}

/// Perp-dot product.
impl<T: Signed> BitXor for Vector<T, 2> {
    type Output = T;

    #[inline]
    fn bitxor(self, rhs: Self) -> T {
        self.perp_dot(rhs)
    }
}

/// Cross product.
impl<T: Signed> BitXor for Vector<T, 3> {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        self.cross(rhs)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn elementwise() {
        let mut v = vec3(1, 2, 3);
        assert_eq!(v + vec3(1, 1, 1), vec3(2, 3, 4));
        assert_eq!(v - vec3(1, 1, 1), vec3(0, 1, 2));
        assert_eq!(v + 1, vec3(2, 3, 4));
        assert_eq!(v - 1, vec3(0, 1, 2));
        assert_eq!(v * 2, vec3(2, 4, 6));
        assert_eq!(v / 2, vec3(0, 1, 1));
        assert_eq!(-v, vec3(-1, -2, -3));

        v += vec3(1, 1, 1);
        v -= 1;
        v *= 10;
        v /= 5;
        v -= vec3(2, 4, 6);
        assert_eq!(v, Vec3::<i32>::ZERO);
    }

    #[test]
    fn dot_commutes() {
        let a = vec4(1.5, -2.0, 0.25, 8.0);
        let b = vec4(3.0, 0.5, -4.0, 1.0);
        assert_eq!(a * b, b * a);
    }

    #[test]
    fn cross_anticommutes() {
        let a = vec3(1.5, -2.0, 0.25);
        let b = vec3(3.0, 0.5, -4.0);
        assert_eq!(a ^ b, -(b ^ a));
        assert_eq!(vec2(1, 2) ^ vec2(3, 4), -(vec2(3, 4) ^ vec2(1, 2)));
    }
}
