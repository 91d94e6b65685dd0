//! Utility maths functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::{Quaternion, Vector3};
use num_traits::Float;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// The forward axis of the rover body, which a bearing is measured along.
pub const FORWARD_AXIS: [f64; 3] = [1.0, 0.0, 0.0];

// ---------------------------------------------------------------------------
// QUATERNIONS
// ---------------------------------------------------------------------------

/// Hamilton product of two quaternions, `q1 * q2`.
pub fn qmult(q1: &Quaternion<f64>, q2: &Quaternion<f64>) -> Quaternion<f64> {
    Quaternion::new(
        q1.w * q2.w - q1.i * q2.i - q1.j * q2.j - q1.k * q2.k,
        q1.w * q2.i + q1.i * q2.w + q1.j * q2.k - q1.k * q2.j,
        q1.w * q2.j - q1.i * q2.k + q1.j * q2.w + q1.k * q2.i,
        q1.w * q2.k + q1.i * q2.j - q1.j * q2.i + q1.k * q2.w,
    )
}

/// Conjugate of a quaternion, the vector part is negated.
pub fn conjugate(q: &Quaternion<f64>) -> Quaternion<f64> {
    Quaternion::new(q.w, -q.i, -q.j, -q.k)
}

/// Rotate the vector `v` by the quaternion `q`.
///
/// The vector is embedded as a pure quaternion `p` (zero real part) and the
/// result is the vector part of `q * p * conj(q)`. The order matters, `q` must
/// be on the left. `q` is expected to be a unit quaternion but this is not
/// checked, a non-unit quaternion will also scale the vector.
pub fn rotate(q: &Quaternion<f64>, v: &Vector3<f64>) -> Vector3<f64> {
    let p = Quaternion::new(0.0, v.x, v.y, v.z);
    let r = qmult(&qmult(q, &p), &conjugate(q));

    Vector3::new(r.i, r.j, r.k)
}

/// Get the bearing of an attitude quaternion.
///
/// This is the forward axis of the body rotated into the world frame, i.e. the
/// direction the body is facing.
pub fn bearing(q: &Quaternion<f64>) -> Vector3<f64> {
    rotate(q, &Vector3::from(FORWARD_AXIS))
}

// ---------------------------------------------------------------------------
// SCALARS
// ---------------------------------------------------------------------------

/// Wrap an angle into the range (-pi, pi].
///
/// Whole turns are removed one at a time. Angles more than a million turns
/// from zero are first reduced with a remainder. In-range and non-finite
/// inputs are returned unchanged, `-pi` maps to `pi`.
pub fn wrap_pi<T>(angle: T) -> T
where
    T: Float
{
    if !angle.is_finite() {
        return angle;
    }

    let pi_t = T::from(std::f64::consts::PI).unwrap_or_else(T::zero);
    let tau_t = pi_t + pi_t;

    let mut a = angle;

    // Large angles are reduced in one step
    let reduce_above = tau_t * T::from(1.0e6).unwrap_or_else(T::one);
    if a.abs() > reduce_above {
        a = a % tau_t;
    }

    while a > pi_t {
        a = a - tau_t;
    }
    while a <= -pi_t {
        a = a + tau_t;
    }

    a
}

#[cfg(test)]
mod test {
    use super::*;
    use nalgebra::UnitQuaternion;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    const TOL: f64 = 1e-9;

    fn assert_vec_close(a: &Vector3<f64>, b: &Vector3<f64>) {
        assert!((a - b).norm() < TOL, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_qmult() {
        let q1 = Quaternion::new(0.3, -1.2, 0.5, 2.0);
        let q2 = Quaternion::new(-0.7, 0.1, 1.5, -0.4);

        let q = qmult(&q1, &q2);
        let expected = q1 * q2;

        assert!((q.coords - expected.coords).norm() < TOL);

        // i * j = k, j * i = -k
        let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        assert_eq!(qmult(&i, &j), Quaternion::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(qmult(&j, &i), Quaternion::new(0.0, 0.0, 0.0, -1.0));
    }

    #[test]
    fn test_conjugate() {
        let q = Quaternion::new(1.0, 2.0, -3.0, 4.0);
        assert_eq!(conjugate(&q), Quaternion::new(1.0, -2.0, 3.0, -4.0));
    }

    #[test]
    fn test_rotate_identity() {
        let id = Quaternion::identity();
        let v = Vector3::new(1.5, -2.0, 0.25);

        assert_eq!(rotate(&id, &v), v);
        assert_eq!(bearing(&id), Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_rotate_matches_nalgebra() {
        let v = Vector3::new(0.4, -1.1, 2.3);

        for &(r, p, y) in &[
            (0.0, 0.0, FRAC_PI_2),
            (0.3, -0.2, 1.9),
            (-1.0, 0.7, -2.8),
            (PI, 0.0, 0.0),
        ] {
            let uq = UnitQuaternion::from_euler_angles(r, p, y);
            let rotated = rotate(uq.quaternion(), &v);

            assert_vec_close(&rotated, &uq.transform_vector(&v));

            // Unit quaternions preserve the magnitude
            assert!((rotated.norm() - v.norm()).abs() < TOL);
        }
    }

    #[test]
    fn test_bearing_yaw() {
        let uq = UnitQuaternion::from_euler_angles(0.0, 0.0, FRAC_PI_2);
        assert_vec_close(&bearing(uq.quaternion()), &Vector3::new(0.0, 1.0, 0.0));

        let uq = UnitQuaternion::from_euler_angles(0.0, 0.0, PI);
        assert_vec_close(&bearing(uq.quaternion()), &Vector3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_wrap_pi() {
        assert_eq!(wrap_pi(0f64), 0f64);
        assert_eq!(wrap_pi(1f64), 1f64);
        assert_eq!(wrap_pi(PI), PI);
        assert_eq!(wrap_pi(-PI), PI);
        assert!((wrap_pi(TAU + 0.5) - 0.5).abs() < TOL);
        assert!((wrap_pi(-TAU - 0.5) + 0.5).abs() < TOL);

        let mut t = -20.0;
        while t < 20.0 {
            let w = wrap_pi(t);
            assert!(w > -PI && w <= PI, "wrap_pi({}) = {}", t, w);

            // Congruent to the input mod 2pi
            let turns = (t - w) / TAU;
            assert!((turns - turns.round()).abs() < 1e-9);

            t += 0.173;
        }
    }

    #[test]
    fn test_wrap_pi_huge() {
        for &t in &[1.0e17, -1.0e17, 1.0e300, -1.0e300, 7.0e6, f64::MAX] {
            let w = wrap_pi(t);
            assert!(w > -PI && w <= PI, "wrap_pi({}) = {}", t, w);
        }

        // Reduction keeps the angle congruent for moderately large inputs
        let t = 2.0e6 * TAU + 0.25;
        assert!((wrap_pi(t) - 0.25).abs() < 1e-6);

        assert!(wrap_pi(f64::NAN).is_nan());
        assert_eq!(wrap_pi(f64::INFINITY), f64::INFINITY);
    }
}
