//! Named-field views of the fixed-size tuple types.
//!
//! Each view is a `#[repr(C)]` struct with the same layout as the `[T; N]` array it views, so a
//! reference to the array can be reinterpreted as a reference to the view.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::{Point, Size, Vector};

#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (),
}

#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (),
}

#[repr(C)]
pub struct RG<T> {
    pub r: T,
    pub g: T,
    _priv: (),
}

#[repr(C)]
pub struct RGB<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    _priv: (),
}

#[repr(C)]
pub struct RGBA<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    pub a: T,
    _priv: (),
}

#[repr(C)]
pub struct WH<T> {
    pub width: T,
    pub height: T,
    _priv: (),
}

#[repr(C)]
pub struct WHD<T> {
    pub width: T,
    pub height: T,
    pub depth: T,
    _priv: (),
}

macro_rules! view {
    ($( $source:ty => $target:ty; )+) => {
        $(
            impl<T> Deref for $source {
                type Target = $target;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    // SAFETY: both types are `repr(C)`/`repr(transparent)` sequences of the same
                    // number of `T`s (the trailing `()` is zero-sized).
                    unsafe { mem::transmute(self) }
                }
            }

            impl<T> DerefMut for $source {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }
        )+
    };
}

view! {
    Vector<T, 2> => XY<T>;
    Vector<T, 3> => XYZ<T>;
    Vector<T, 4> => XYZW<T>;
    Point<T, 2> => XY<T>;
    Point<T, 3> => XYZ<T>;
    Point<T, 4> => XYZW<T>;
    Size<T, 2> => WH<T>;
    Size<T, 3> => WHD<T>;
    XY<T> => RG<T>;
    XYZ<T> => RGB<T>;
    XYZW<T> => RGBA<T>;
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn access() {
        let mut v = vec2(0, 1);
        assert_eq!(v.x, 0);
        assert_eq!(v.y, 1);
        assert_eq!(v.r, 0);
        assert_eq!(v.g, 1);

        v.r = 777;
        assert_eq!(v.x, 777);
        assert_eq!(v[0], 777);
        v.y = 9;
        assert_eq!(v.g, 9);
        assert_eq!(v[1], 9);

        let v = vec4(1, 2, 3, 4);
        assert_eq!((v.x, v.y, v.z, v.w), (1, 2, 3, 4));
        assert_eq!((v.r, v.g, v.b, v.a), (1, 2, 3, 4));

        let mut p = point3(5.0, 6.0, 7.0);
        p.z += 1.0;
        assert_eq!(p, [5.0, 6.0, 8.0]);
        assert_eq!(p.b, 8.0);

        let mut s = size3(1, 2, 3);
        assert_eq!((s.width, s.height, s.depth), (1, 2, 3));
        s.height = 20;
        assert_eq!(s[1], 20);
        assert_eq!(size2(4, 5).width, 4);
    }
}
