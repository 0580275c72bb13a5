//! Fixed-size geometric types for 2D and 3D graphics code.
//!
//! This crate provides [`Vector`]s, [`Point`]s, [`Size`]s, [`Rect`]angles, [`Matrix`] types and
//! unit-tagged [`Angle`]s, all generic over their element type.
//!
//! # Motivation
//!
//! Graphics and simulation code needs a small set of value types whose meaning is visible in the
//! type system: a location is not an extent, and an angle in degrees is not an angle in radians.
//! Mixing them up should either be impossible or perform the correct conversion implicitly.
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. Dimensions are const generics, so shape
//!   mismatches (multiplying incompatible matrices, taking the cross product of 2D vectors) are
//!   compile errors instead of runtime errors.
//! - Store matrices row-major. Transform factories place translation in the last column and are
//!   applied with `matrix * vector`.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals"). Trigonometry and lengths require a [`Real`] type ([`f32`] or [`f64`]).
//! - Angles carry their unit as a type parameter. Comparing or converting angles of different
//!   units converts the value; arithmetic is only defined between angles of the same unit.
//! - No quaternions, decompositions or SIMD.
//!
//! # Examples
//!
//! ```
//! use accel_math::*;
//!
//! let transform = Mat4::translate(vec3(0.0, 0.0, -5.0)) * Mat4::rotate_y(deg(90.0));
//! let p = transform * vec4(1.0, 0.0, 0.0, 1.0);
//! approx::assert_relative_eq!(p, vec4(0.0, 0.0, -6.0, 1.0), epsilon = 1e-9);
//! ```

#[macro_use]
mod macros;

mod angle;
mod error;
mod matrix;
mod point;
mod rect;
mod size;
mod traits;
mod vector;

pub use angle::*;
pub use error::{Error, Result};
pub use matrix::*;
pub use point::*;
pub use rect::*;
pub use size::*;
pub use traits::*;
pub use vector::*;
