use accel_math::*;
use approx::{assert_abs_diff_eq, assert_relative_eq};

const ITERATIONS: usize = 500;

fn rng() -> fastrand::Rng {
    fastrand::Rng::with_seed(0x5eed_acce1_0f_f00d)
}

fn real(rng: &mut fastrand::Rng) -> f64 {
    rng.f64() * 20.0 - 10.0
}

fn random_vec3(rng: &mut fastrand::Rng) -> Vec3d {
    Vector::from_fn(|_| real(rng))
}

fn random_matrix<const R: usize, const C: usize>(rng: &mut fastrand::Rng) -> Matrix<i32, R, C> {
    Matrix::from_fn(|_, _| rng.i32(-100..=100))
}

#[test]
fn double_transpose_is_identity() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let m: Mat4<i32> = random_matrix(&mut rng);
        assert_eq!(m.transpose().transpose(), m);

        let m: Mat2x3<i32> = random_matrix(&mut rng);
        assert_eq!(m.transpose().transpose(), m);
    }
}

#[test]
fn identity_is_neutral() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let m: Mat3<i32> = random_matrix(&mut rng);
        assert_eq!(Mat3::<i32>::identity() * m, m);
        assert_eq!(m * Mat3::<i32>::identity(), m);

        let m: Mat3x4<i32> = random_matrix(&mut rng);
        assert_eq!(Mat3::<i32>::identity() * m, m);
        assert_eq!(m * Mat4::<i32>::identity(), m);
    }
}

#[test]
fn inverse_of_random_matrices() {
    let mut rng = rng();
    let mut checked = 0;
    while checked < ITERATIONS {
        let m = Mat3d::from_fn(|_, _| real(&mut rng));
        // Skip nearly singular matrices, their inverse is dominated by rounding errors.
        if m.determinant().abs() < 1.0 {
            continue;
        }

        let inv = m.inverse();
        assert_abs_diff_eq!(m * inv, Mat3d::identity(), epsilon = 1e-8);
        assert_abs_diff_eq!(inv * m, Mat3d::identity(), epsilon = 1e-8);
        assert_eq!(m.try_inverse(), Ok(inv));
        checked += 1;
    }
}

#[test]
fn vector_products() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let (v, w) = (random_vec3(&mut rng), random_vec3(&mut rng));
        assert_eq!(v * w, w * v);
        assert_eq!(v ^ w, -(w ^ v));

        // The cross product is orthogonal to both inputs.
        let cross = v ^ w;
        assert_abs_diff_eq!(cross * v, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(cross * w, 0.0, epsilon = 1e-9);
    }
}

#[test]
fn normalized_length() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let v = random_vec3(&mut rng);
        if v.length() != 0.0 {
            assert_relative_eq!(v.normalize().length(), 1.0, epsilon = 1e-12);
        }
    }
    assert_eq!(Vec3d::ZERO.normalize(), Vec3d::ZERO);
    assert_eq!(Vec2::<f32>::ZERO.normalize(), [0.0, 0.0]);
}

#[test]
fn angle_round_trip() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let angle = rad(real(&mut rng));
        assert_relative_eq!(angle.to_degrees().to_radians(), angle, epsilon = 1e-12);

        let angle = deg(real(&mut rng) * 36.0);
        assert_relative_eq!(angle.to_radians().to_degrees(), angle, epsilon = 1e-9);
        assert!(angle.to_radians() == angle);
    }
}

#[test]
fn rectangle_from_point_and_size() {
    let r = Rect::from_point_size(point2(100, 100), size2(100, 100));
    assert_eq!(r.top(), 100);
    assert_eq!(r.left(), 100);
    assert_eq!(r.bottom(), 200);
    assert_eq!(r.right(), 200);
}

#[test]
fn right_angle_between_axes() {
    let angle = vec2(1.0, 0.0).angle(vec2(0.0, 1.0));
    assert_relative_eq!(angle.to_degrees(), deg(90.0), epsilon = 1e-12);
    assert_relative_eq!(angle, Radd::pi() / 2.0);
}

#[test]
fn transpose_3x3() {
    let m = Mat3::try_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
    let expected = Mat3::try_from_slice(&[1, 4, 7, 2, 5, 8, 3, 6, 9]).unwrap();
    assert_eq!(m.transpose(), expected);
}

#[test]
fn multiply_3x2_by_2x3() {
    let a = Mat3x2::try_from_slice(&[1, 2, 3, 4, 5, 6]).unwrap();
    let b = Mat2x3::try_from_slice(&[1, 2, 3, 4, 5, 6]).unwrap();
    let expected = Mat3::try_from_slice(&[9, 12, 15, 19, 26, 33, 29, 40, 51]).unwrap();
    assert_eq!(a * b, expected);
}

#[test]
fn inverse_3x3() {
    let m = Mat3d::try_from_slice(&[1.0, 2.0, 3.0, 0.0, 1.0, 4.0, 5.0, 6.0, 0.0]).unwrap();
    let expected =
        Mat3d::try_from_slice(&[-24.0, 18.0, 5.0, 20.0, -15.0, -4.0, -5.0, 4.0, 1.0]).unwrap();
    assert_eq!(m.inverse(), expected);
}
