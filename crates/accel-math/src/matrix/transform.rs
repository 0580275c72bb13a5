//! Transform and projection matrices.
//!
//! All factories produce matrices for use with `matrix * vector` (or the equivalent
//! `vector * matrix`), operating on homogeneous coordinates: the translation of a transform is
//! stored in its last column.

use crate::{traits::Number, Angle, Matrix, Point3, Rad, Radians, Real, Rect, Size2, Vec2, Vec3};

impl<T: Number> Matrix<T, 3, 3> {
    /// Creates a 2D translation matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// let m = Mat3::translate(vec2(2.0, -3.0));
    /// assert_eq!(m * vec3(1.0, 1.0, 1.0), vec3(3.0, -2.0, 1.0));
    /// ```
    #[rustfmt::skip]
    pub fn translate(offset: Vec2<T>) -> Self {
        let (o, l) = (T::ZERO, T::ONE);
        Matrix([
            [l, o, offset.x],
            [o, l, offset.y],
            [o, o, l],
        ])
    }

    /// Creates a 2D scaling matrix.
    pub fn scale(factor: Size2<T>) -> Self {
        Self::from_diagonal([factor.width, factor.height, T::ONE])
    }

    /// Creates a 2D shear matrix.
    ///
    /// `factor.x` shears along the X axis (proportional to Y), `factor.y` along the Y axis.
    #[rustfmt::skip]
    pub fn shear(factor: Vec2<T>) -> Self {
        let (o, l) = (T::ZERO, T::ONE);
        Matrix([
            [l,        factor.x, o],
            [factor.y, l,        o],
            [o,        o,        l],
        ])
    }
}

impl<T: Real> Matrix<T, 3, 3> {
    /// Creates a 2D rotation matrix.
    ///
    /// With the Y axis pointing down, positive angles rotate counterclockwise.
    #[rustfmt::skip]
    pub fn rotate(angle: impl Into<Angle<T, Radians>>) -> Self {
        let angle: Rad<T> = angle.into();
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Matrix([
            [ c, s, o],
            [-s, c, o],
            [ o, o, l],
        ])
    }
}

impl<T: Number> Matrix<T, 4, 4> {
    /// Creates a 3D translation matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// let m = Mat4::translate(vec3(-16.0, -16.0, 0.0));
    /// assert_eq!(vec4(0.0, 32.0, 0.0, 1.0) * m, vec4(-16.0, 16.0, 0.0, 1.0));
    /// ```
    #[rustfmt::skip]
    pub fn translate(offset: Vec3<T>) -> Self {
        let (o, l) = (T::ZERO, T::ONE);
        Matrix([
            [l, o, o, offset.x],
            [o, l, o, offset.y],
            [o, o, l, offset.z],
            [o, o, o, l],
        ])
    }

    /// Creates a 3D scaling matrix.
    pub fn scale(factor: Vec3<T>) -> Self {
        Self::from_diagonal(factor.extend(T::ONE))
    }
}

impl<T: Real> Matrix<T, 4, 4> {
    /// Creates a matrix rotating around the X axis.
    #[rustfmt::skip]
    pub fn rotate_x(angle: impl Into<Angle<T, Radians>>) -> Self {
        let angle: Rad<T> = angle.into();
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Matrix([
            [l, o,  o, o],
            [o, c, -s, o],
            [o, s,  c, o],
            [o, o,  o, l],
        ])
    }

    /// Creates a matrix rotating around the Y axis.
    #[rustfmt::skip]
    pub fn rotate_y(angle: impl Into<Angle<T, Radians>>) -> Self {
        let angle: Rad<T> = angle.into();
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Matrix([
            [ c, o, s, o],
            [ o, l, o, o],
            [-s, o, c, o],
            [ o, o, o, l],
        ])
    }

    /// Creates a matrix rotating around the Z axis.
    #[rustfmt::skip]
    pub fn rotate_z(angle: impl Into<Angle<T, Radians>>) -> Self {
        let angle: Rad<T> = angle.into();
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Matrix([
            [c, -s, o, o],
            [s,  c, o, o],
            [o,  o, l, o],
            [o,  o, o, l],
        ])
    }

    /// Creates a perspective projection matrix from a *horizontal* field of view.
    ///
    /// The vertical field of view is derived from `horizontal_fov` and `aspect_ratio` (width
    /// divided by height), then passed to [`Matrix::perspective_v`].
    pub fn perspective(
        horizontal_fov: impl Into<Angle<T, Radians>>,
        aspect_ratio: T,
        near_z: T,
        far_z: T,
    ) -> Self {
        let two = T::two();
        let horizontal_fov: Rad<T> = horizontal_fov.into();
        let vertical_fov = Rad::atan((horizontal_fov / two).tan() / aspect_ratio) * two;
        Self::perspective_v(vertical_fov, aspect_ratio, near_z, far_z)
    }

    /// Creates a perspective projection matrix from a *vertical* field of view.
    ///
    /// This is an OpenGL-style, right-handed projection: points at `-near_z` on the Z axis end up
    /// at depth -1 after the perspective divide, points at `-far_z` at depth 1.
    ///
    /// # Examples
    ///
    /// ```
    /// # use accel_math::*;
    /// # use approx::assert_relative_eq;
    /// let proj = Mat4::perspective_v(deg(90.0), 1.0, 1.0, 10.0);
    /// let clip = proj * vec4(0.0, 0.0, -1.0, 1.0);
    /// assert_relative_eq!(clip.z / clip.w, -1.0, epsilon = 1e-12);
    /// ```
    pub fn perspective_v(
        vertical_fov: impl Into<Angle<T, Radians>>,
        aspect_ratio: T,
        near_z: T,
        far_z: T,
    ) -> Self {
        let two = T::two();
        let vertical_fov: Rad<T> = vertical_fov.into();
        let tan_half = (vertical_fov / two).tan();
        let negative_range = near_z - far_z;
        let (o, l) = (T::ZERO, T::ONE);

        let m = Matrix([
            [l / (aspect_ratio * tan_half), o, o, o],
            [o, l / tan_half, o, o],
            [
                o,
                o,
                (far_z + near_z) / negative_range,
                two * far_z * near_z / negative_range,
            ],
            [o, o, -l, o],
        ]);
        log::trace!("perspective projection: {m}");
        m
    }

    /// Creates a view matrix for a camera at `target`, looking at `at`.
    ///
    /// `up` does not have to be orthogonal to the viewing direction, but must not be parallel to
    /// it.
    ///
    /// The rows of the rotational part are the camera's X, Y and Z axes, with the Z axis pointing
    /// from `target` towards `at`.
    #[doc(alias = "lookat")]
    pub fn look_at(target: Point3<T>, at: Point3<T>, up: Vec3<T>) -> Self {
        let z_axis = target.vector_to(at).normalize();
        let x_axis = up.cross(z_axis).normalize();
        let y_axis = z_axis.cross(x_axis);
        let eye = target.into_vector();

        let m = Matrix::from_rows([
            x_axis.extend(-x_axis.dot(eye)),
            y_axis.extend(-y_axis.dot(eye)),
            z_axis.extend(-z_axis.dot(eye)),
            Vec3::<T>::ZERO.extend(T::ONE),
        ]);
        log::trace!("look_at({target}, {at}, {up}) = {m}");
        m
    }

    /// Creates an orthographic projection matrix.
    ///
    /// `rect`'s left and right edges are mapped to -1 and 1 on the X axis, its top and bottom edges
    /// to 1 and -1 on the Y axis, and `-z_near`/`-z_far` to -1 and 1 on the Z axis.
    pub fn orthographic(rect: Rect<T>, z_near: T, z_far: T) -> Self {
        let two = T::two();
        let (o, l) = (T::ZERO, T::ONE);
        let width = rect.right() - rect.left();
        let height = rect.top() - rect.bottom();
        let depth = z_far - z_near;

        let m = Matrix([
            [two / width, o, o, -((rect.right() + rect.left()) / width)],
            [o, two / height, o, -((rect.top() + rect.bottom()) / height)],
            [o, o, -two / depth, -((z_far + z_near) / depth)],
            [o, o, o, l],
        ]);
        log::trace!("orthographic projection of {rect:?}: {m}");
        m
    }
}
