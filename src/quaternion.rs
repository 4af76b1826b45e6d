//! Quaternions, and the rotations and mirrorings built from them.
//!
//! A point p is rotated by the unit quaternion q as the vector part of
//! `conj(q) * (0, p) * q`. Note the conjugate comes first: with a right-handed
//! frame a positive angle turns clockwise when looking down the axis toward
//! the origin.

use std::cmp::Ordering;
use std::fmt;

use auto_ops::{impl_op_ex, impl_op_ex_commutative};

use crate::{
    error::{Error, Result},
    float::Float,
    math,
    vecmath::{is_zero3, HasNan, Length, Normalize, Tuple3, Vector3f},
};

// ---------------------------------------------------------------------------
//        Quaternion
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct Quaternion {
    pub real: Float,
    pub i: Float,
    pub j: Float,
    pub k: Float,
}

impl Quaternion {
    /// All zeroes.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// All ones.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// The multiplicative identity, a rotation by zero.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    pub const fn new(real: Float, i: Float, j: Float, k: Float) -> Self {
        Self { real, i, j, k }
    }

    pub fn zero() -> Self {
        Self::ZERO
    }

    pub fn one() -> Self {
        Self::ONE
    }

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Builds `(real, v.x, v.y, v.z)`. With a zero real part this embeds a
    /// point or vector as a pure quaternion.
    pub fn from_parts<T: Tuple3<Float>>(real: Float, v: &T) -> Self {
        Self::new(real, v.x(), v.y(), v.z())
    }

    /// The imaginary part (i, j, k) as a point or vector.
    pub fn imaginary<T: Tuple3<Float>>(&self) -> T {
        T::new(self.i, self.j, self.k)
    }

    /// The Hamilton product `self * q`. Not commutative.
    pub const fn multiply(&self, q: &Quaternion) -> Quaternion {
        Quaternion::new(
            self.real * q.real - self.i * q.i - self.j * q.j - self.k * q.k,
            self.real * q.i + self.i * q.real + self.j * q.k - self.k * q.j,
            self.real * q.j - self.i * q.k + self.j * q.real + self.k * q.i,
            self.real * q.k + self.i * q.j - self.j * q.i + self.k * q.real,
        )
    }

    pub const fn conjugate(&self) -> Quaternion {
        Quaternion::new(self.real, -self.i, -self.j, -self.k)
    }

    pub fn norm(&self) -> Float {
        self.length()
    }

    /// Divide in place. Fails, leaving `self` untouched, if `s` is zero.
    pub fn try_div_assign(&mut self, s: Float) -> Result<()> {
        *self = (*self / s)?;
        Ok(())
    }

    /// Rotates `target` about `axis` by `degrees`.
    pub fn rotate_degrees<T>(target: &T, axis: &Vector3f, degrees: Float) -> Result<T>
    where
        T: Tuple3<Float>,
    {
        Self::rotate_radians(target, axis, math::degrees_to_radians(degrees))
    }

    /// Rotates `target` about `axis` by `radians`.
    ///
    /// Fails with [`Error::Domain`] if either `target` or `axis` is (within
    /// tolerance) zero.
    pub fn rotate_radians<T>(target: &T, axis: &Vector3f, radians: Float) -> Result<T>
    where
        T: Tuple3<Float>,
    {
        if is_zero3(target) {
            return Err(Error::Domain("cannot rotate the zero vector"));
        }
        let half = radians / 2.0;
        let n = axis.normalize()? * math::sin(half);
        let q = Quaternion::from_parts(math::cos(half), &n);
        Ok(Self::conjugate_product(target, &q))
    }

    /// Mirrors `target` through `axis`, using the pure quaternion (0, axis).
    ///
    /// The result coincides with a half-turn about `axis`. Fails with
    /// [`Error::Domain`] if either `target` or `axis` is (within tolerance) zero.
    pub fn mirror<T>(target: &T, axis: &Vector3f) -> Result<T>
    where
        T: Tuple3<Float>,
    {
        if is_zero3(target) {
            return Err(Error::Domain("cannot mirror the zero vector"));
        }
        let q = Quaternion::from_parts(0.0, &axis.normalize()?);
        Ok(Self::conjugate_product(target, &q))
    }

    /// Vector part of `conj(q) * (0, p) * q`.
    fn conjugate_product<T: Tuple3<Float>>(p: &T, q: &Quaternion) -> T {
        let p = Quaternion::from_parts(0.0, p);
        q.conjugate().multiply(&p).multiply(q).imaginary()
    }
}

impl HasNan for Quaternion {
    fn has_nan(&self) -> bool {
        self.real.is_nan() || self.i.is_nan() || self.j.is_nan() || self.k.is_nan()
    }
}

impl Length<Float> for Quaternion {
    fn length_squared(&self) -> Float {
        self.real * self.real + self.i * self.i + self.j * self.j + self.k * self.k
    }

    fn length(&self) -> Float {
        self.length_squared().sqrt()
    }
}

impl Normalize for Quaternion {}

impl Default for Quaternion {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Quaternion {
    fn eq(&self, other: &Self) -> bool {
        math::equals(self.real, other.real)
            && math::equals(self.i, other.i)
            && math::equals(self.j, other.j)
            && math::equals(self.k, other.k)
    }
}

impl PartialOrd for Quaternion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        for (a, b) in [
            (self.real, other.real),
            (self.i, other.i),
            (self.j, other.j),
            (self.k, other.k),
        ] {
            if math::less_than(a, b) {
                return Some(Ordering::Less);
            }
            if math::greater_than(a, b) {
                return Some(Ordering::Greater);
            }
            if !math::equals(a, b) {
                return None;
            }
        }
        Some(Ordering::Equal)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.real, self.i, self.j, self.k)
    }
}

impl_op_ex!(*|q1: &Quaternion, q2: &Quaternion| -> Quaternion { q1.multiply(q2) });

impl_op_ex!(-|q: &Quaternion| -> Quaternion { Quaternion::new(-q.real, -q.i, -q.j, -q.k) });

impl_op_ex!(+|q1: &Quaternion, q2: &Quaternion| -> Quaternion {
    Quaternion::new(q1.real + q2.real, q1.i + q2.i, q1.j + q2.j, q1.k + q2.k)
});
impl_op_ex!(-|q1: &Quaternion, q2: &Quaternion| -> Quaternion {
    Quaternion::new(q1.real - q2.real, q1.i - q2.i, q1.j - q2.j, q1.k - q2.k)
});
impl_op_ex!(+=|q1: &mut Quaternion, q2: &Quaternion| {
    q1.real += q2.real;
    q1.i += q2.i;
    q1.j += q2.j;
    q1.k += q2.k;
});
impl_op_ex!(-=|q1: &mut Quaternion, q2: &Quaternion| {
    q1.real -= q2.real;
    q1.i -= q2.i;
    q1.j -= q2.j;
    q1.k -= q2.k;
});

impl_op_ex_commutative!(*|q: &Quaternion, s: Float| -> Quaternion {
    Quaternion::new(q.real * s, q.i * s, q.j * s, q.k * s)
});
impl_op_ex!(/|q: &Quaternion, s: Float| -> Result<Quaternion> {
    if math::equals(s, 0.0) {
        return Err(Error::Domain("division by zero"));
    }
    Ok(Quaternion::new(q.real / s, q.i / s, q.j / s, q.k / s))
});
impl_op_ex!(*=|q: &mut Quaternion, s: Float| {
    q.real *= s;
    q.i *= s;
    q.j *= s;
    q.k *= s;
});

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use crate::{
        error::Error,
        vecmath::{Length, Normalize, Point3f, Tuple3, Vector3f},
        Float,
    };

    use super::Quaternion;

    #[test]
    fn hamilton_product() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(Quaternion::new(-60.0, 12.0, 30.0, 24.0), a * b);
        // Not commutative.
        assert_ne!(a * b, b * a);

        let a = Quaternion::new(-56.0, 0.0, 2.0, 1.0);
        let b = Quaternion::new(9.0, -3.0, 0.0, 9.0);
        assert_eq!(Quaternion::new(-513.0, 186.0, 15.0, -489.0), a * b);

        assert_eq!(a, a * Quaternion::IDENTITY);
        assert_eq!(a, Quaternion::identity() * a);
    }

    #[test]
    fn conjugate_and_norm() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Quaternion::new(1.0, -2.0, -3.0, -4.0), q.conjugate());
        assert_eq!(30.0, q.length_squared());
        assert_approx_eq!(Float, 30.0_f64.sqrt(), q.norm());
        assert_eq!(Quaternion::new(30.0, 0.0, 0.0, 0.0), q * q.conjugate());
    }

    #[test]
    fn normalize() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0).normalize().unwrap();
        assert_approx_eq!(Float, 1.0, q.norm(), epsilon = 1e-12);
        assert_approx_eq!(Float, 0.182574, q.real, epsilon = 0.000001);
        assert!(matches!(Quaternion::zero().normalize(), Err(Error::Domain(_))));
    }

    #[test]
    fn arithmetic() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::one();
        assert_eq!(Quaternion::new(2.0, 3.0, 4.0, 5.0), a + b);
        assert_eq!(Quaternion::new(0.0, 1.0, 2.0, 3.0), a - b);
        assert_eq!(Quaternion::new(-1.0, -2.0, -3.0, -4.0), -a);
        assert_eq!(Quaternion::new(2.0, 4.0, 6.0, 8.0), a * 2.0);
        assert_eq!(Quaternion::new(2.0, 4.0, 6.0, 8.0), 2.0 * a);
        assert_eq!(Ok(Quaternion::new(0.5, 1.0, 1.5, 2.0)), a / 2.0);
        assert!(matches!(a / 0.0, Err(Error::Domain(_))));

        let mut c = a;
        c += b;
        c *= 2.0;
        c -= a;
        assert_eq!(Quaternion::new(3.0, 4.0, 5.0, 6.0), c);
        c.try_div_assign(2.0).unwrap();
        assert_eq!(Quaternion::new(1.5, 2.0, 2.5, 3.0), c);
        assert!(c.try_div_assign(0.0).is_err());

        assert!(a < Quaternion::new(1.0, 2.0, 3.1, 0.0));
        assert!(a > Quaternion::new(0.0, 9.0, 9.0, 9.0));
        assert_eq!("(1, 2, 3, 4)", a.to_string());
    }

    #[test]
    fn rotate() {
        let p = Point3f::new(4.0, 5.0, 6.0);
        let axis = Vector3f::new(1.0, 2.0, 3.0);

        let r = Quaternion::rotate_degrees(&p, &axis, 90.0).unwrap();
        assert_eq!(Point3f::new(3.087498, 2.967861, 7.658927), r);

        let r = Quaternion::rotate_degrees(&p, &axis, 180.0).unwrap();
        assert_approx_eq!(Float, 0.571, r.x, epsilon = 0.001);
        assert_approx_eq!(Float, 4.143, r.y, epsilon = 0.001);
        assert_approx_eq!(Float, 7.714, r.z, epsilon = 0.001);

        let r270 = Quaternion::rotate_degrees(&p, &axis, 270.0).unwrap();
        let r_neg = Quaternion::rotate_degrees(&p, &axis, -90.0).unwrap();
        assert_eq!(r270, r_neg);
        assert_approx_eq!(Float, 1.483931, r270.x, epsilon = 0.0001);
        assert_approx_eq!(Float, 6.174996, r270.y, epsilon = 0.0001);
        assert_approx_eq!(Float, 6.055359, r270.z, epsilon = 0.0001);

        assert_eq!(p, Quaternion::rotate_degrees(&p, &axis, 360.0).unwrap());
        assert_eq!(p, Quaternion::rotate_degrees(&p, &axis, 0.0).unwrap());

        let v = Quaternion::rotate_radians(&Vector3f::X, &Vector3f::Z, crate::float::PI_2).unwrap();
        assert_eq!(Vector3f::new(0.0, -1.0, 0.0), v);
    }

    #[test]
    fn rotate_preserves_length() {
        let v = Vector3f::new(-2.0, 7.5, 0.25);
        let axis = Vector3f::new(0.3, -1.0, 2.0);
        for degrees in [15.0, 45.0, 123.0, 300.0] {
            let r = Quaternion::rotate_degrees(&v, &axis, degrees).unwrap();
            assert_approx_eq!(Float, v.length(), r.length(), epsilon = 0.000001);
        }
    }

    #[test]
    fn rotate_errors() {
        let axis = Vector3f::new(1.0, 2.0, 3.0);
        assert!(matches!(
            Quaternion::rotate_degrees(&Point3f::zero(), &axis, 90.0),
            Err(Error::Domain(_))
        ));
        assert!(matches!(
            Quaternion::rotate_degrees(&Point3f::one(), &Vector3f::zero(), 90.0),
            Err(Error::Domain(_))
        ));
    }

    #[test]
    fn mirror() {
        let p = Point3f::new(4.0, 5.0, 6.0);
        let axis = Vector3f::new(1.0, 2.0, 3.0);
        let m = Quaternion::mirror(&p, &axis).unwrap();
        assert_eq!(Quaternion::rotate_degrees(&p, &axis, 180.0).unwrap(), m);

        let v = Vector3f::new(-9.0, 8.0, -7.0);
        let m = Quaternion::mirror(&v, &Vector3f::new(0.0, -2.0, -1.0)).unwrap();
        assert_eq!(Vector3f::new(9.0, -0.8, 10.6), m);

        assert!(Quaternion::mirror(&Vector3f::zero(), &axis).is_err());
        assert!(Quaternion::mirror(&v, &Vector3f::zero()).is_err());
    }
}
