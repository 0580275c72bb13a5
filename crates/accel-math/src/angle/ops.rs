use std::{cmp::Ordering, ops::*};

use crate::Real;

use super::{Angle, AngleUnit};

impl<T: Real, U: AngleUnit, V: AngleUnit> PartialEq<Angle<T, V>> for Angle<T, U> {
    #[inline]
    fn eq(&self, other: &Angle<T, V>) -> bool {
        self.value == other.convert::<U>().value
    }
}

/// Compares the raw value, without any unit conversion.
impl<T: Real, U: AngleUnit> PartialEq<T> for Angle<T, U> {
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.value == *other
    }
}

impl<T: Real, U: AngleUnit, V: AngleUnit> PartialOrd<Angle<T, V>> for Angle<T, U> {
    #[inline]
    fn partial_cmp(&self, other: &Angle<T, V>) -> Option<Ordering> {
        self.value.partial_cmp(&other.convert::<U>().value)
    }
}

macro_rules! binop {
    ($( $trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident; )+) => {
        $(
            impl<T: $trait<Output = T>, U: AngleUnit> $trait for Angle<T, U> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: Self) -> Self {
                    Angle::new($trait::$method(self.value, rhs.value))
                }
            }

            impl<T: $assign_trait, U: AngleUnit> $assign_trait for Angle<T, U> {
                #[inline]
                fn $assign_method(&mut self, rhs: Self) {
                    $assign_trait::$assign_method(&mut self.value, rhs.value);
                }
            }
        )+
    };
}

binop! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
    Rem::rem, RemAssign::rem_assign;
}

/// Scales the angle by a scalar.
impl<T: Mul<Output = T>, U: AngleUnit> Mul<T> for Angle<T, U> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Angle::new(self.value * rhs)
    }
}

impl<T: Div<Output = T>, U: AngleUnit> Div<T> for Angle<T, U> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Angle::new(self.value / rhs)
    }
}

impl<T: Neg<Output = T>, U: AngleUnit> Neg for Angle<T, U> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Angle::new(-self.value)
    }
}
