//! Reflection and refraction of a direction at a surface.
//!
//! Both functions distinguish three outcomes: `Ok(Some(v))` for a result,
//! `Ok(None)` when the optics don't apply (light arriving from behind the
//! surface, total internal reflection), and `Err` for invalid input.

use log::debug;

use crate::{
    error::{Error, Result},
    float::Float,
    math,
    vecmath::{Normalize, Vector3f},
};

/// Index of refraction of vacuum, and close enough for air.
pub const ETA_VACUUM: Float = 1.0;

/// Mirrors `incoming` about `normal`, which need not be unit length.
///
/// `incoming` points away from the surface, like the normal. If it lies
/// behind the surface (negative dot product with the normal) there is no
/// reflection. The result keeps the length of `incoming`.
///
/// Debug builds panic if either vector has a NaN component.
pub fn reflection(incoming: &Vector3f, normal: &Vector3f) -> Result<Option<Vector3f>> {
    let n = normal.normalize()?;
    let d = n.dot(incoming);
    if d < 0.0 {
        debug!("No reflection: {} lies behind the surface {}", incoming, normal);
        return Ok(None);
    }
    Ok(Some(n * (2.0 * d) - incoming))
}

/// Bends `incoming` as it passes from a medium with refractive index `eta1`
/// into one with index `eta2`, following Snell's law.
///
/// `incoming` is the direction of travel, pointing into the surface. The result
/// is unit length. Returns `Ok(None)` on total internal reflection.
///
/// Fails with [`Error::Domain`] if either index or the normal is zero and with
/// [`Error::Range`] if the indices have opposite signs. Debug builds panic if
/// either vector has a NaN component.
pub fn refraction(
    incoming: &Vector3f,
    normal: &Vector3f,
    eta1: Float,
    eta2: Float,
) -> Result<Option<Vector3f>> {
    if math::equals(eta1, 0.0) || math::equals(eta2, 0.0) {
        return Err(Error::Domain("refractive index of zero"));
    }
    let ratio = eta1 / eta2;
    if ratio <= 0.0 {
        return Err(Error::Range("refractive indices must share a sign"));
    }
    let n = normal.normalize()?;
    let l = incoming.normalize()?;

    let cos_theta1 = -n.dot(&l);
    let sin_theta2 = ratio * math::sqrt((1.0 - cos_theta1 * cos_theta1).max(0.0))?;
    if sin_theta2 > 1.0 {
        debug!(
            "Total internal reflection: sin(theta2) = {} for {} at ratio {}",
            sin_theta2, incoming, ratio
        );
        return Ok(None);
    }
    let cos_theta2 = math::sqrt(1.0 - sin_theta2 * sin_theta2)?;
    Ok(Some(l * ratio + n * (ratio * cos_theta1 - cos_theta2)))
}

impl Vector3f {
    /// See [`reflection`].
    pub fn reflection(&self, normal: &Vector3f) -> Result<Option<Vector3f>> {
        reflection(self, normal)
    }

    /// See [`refraction`].
    pub fn refraction(
        &self,
        normal: &Vector3f,
        eta1: Float,
        eta2: Float,
    ) -> Result<Option<Vector3f>> {
        refraction(self, normal, eta1, eta2)
    }

    /// Refraction out of vacuum into a medium with index `eta`.
    pub fn refraction_into(&self, normal: &Vector3f, eta: Float) -> Result<Option<Vector3f>> {
        refraction(self, normal, ETA_VACUUM, eta)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use crate::{
        error::Error,
        vecmath::{Length, Normalize, Tuple3, Vector3f},
        Float,
    };

    use super::{reflection, refraction, ETA_VACUUM};

    #[test]
    fn reflect() {
        let v = Vector3f::new(1.0, 2.0, 3.0);
        let r = reflection(&v, &Vector3f::new(0.0, 0.0, 1.0)).unwrap().unwrap();
        assert_eq!(Vector3f::new(-1.0, -2.0, 3.0), r);
        assert_approx_eq!(Float, v.length(), r.length());

        // The normal's length doesn't matter.
        let r2 = v.reflection(&Vector3f::new(0.0, 0.0, 42.0)).unwrap().unwrap();
        assert_eq!(r, r2);

        // Head on.
        let r = reflection(&Vector3f::Y, &Vector3f::Y).unwrap().unwrap();
        assert_eq!(Vector3f::Y, r);

        // Grazing: perpendicular to the normal is still in front of it.
        let r = reflection(&Vector3f::X, &Vector3f::Y).unwrap().unwrap();
        assert_eq!(Vector3f::NEG_X, r);
    }

    #[test]
    fn reflect_from_behind() {
        let v = Vector3f::new(-1.0, 2.0, -3.0);
        assert_eq!(Ok(None), reflection(&v, &Vector3f::new(-4.0, -5.0, 6.0)));
    }

    #[test]
    fn reflect_errors() {
        assert!(matches!(
            reflection(&Vector3f::ONE, &Vector3f::ZERO),
            Err(Error::Domain(_))
        ));
    }

    #[test]
    fn refract() {
        let _ = env_logger::builder().is_test(true).try_init();

        let v = Vector3f::new(0.707107, -0.707107, 0.0);
        let r = refraction(&v, &Vector3f::Y, 0.9, 1.0).unwrap().unwrap();
        assert_eq!(Vector3f::new(0.636396, -0.771363, 0.0), r);
        assert_approx_eq!(Float, 1.0, r.length(), epsilon = 1e-12);

        let v = Vector3f::new(1.191752, 1.0, 0.0);
        let r = refraction(&v, &Vector3f::Y, 1.2, 1.0).unwrap().unwrap();
        assert_eq!(Vector3f::new(0.919253, -0.393668, 0.0), r);
        assert_approx_eq!(Float, 1.0, r.length(), epsilon = 1e-12);

        // Straight through, whatever the indices.
        let r = Vector3f::NEG_Y.refraction(&Vector3f::Y, 1.0, 1.5).unwrap().unwrap();
        assert_eq!(Vector3f::NEG_Y, r);

        // Matching indices leave the direction alone.
        let v = Vector3f::new(3.0, -1.0, 2.0);
        let r = refraction(&v, &Vector3f::Y, 1.33, 1.33).unwrap().unwrap();
        assert_eq!(v.normalize().unwrap(), r);
    }

    #[test]
    fn refract_bends_toward_normal_in_denser_medium() {
        let v = Vector3f::new(1.0, -1.0, 0.0);
        let r = v.refraction_into(&Vector3f::Y, 1.5).unwrap().unwrap();
        let incoming = v.normalize().unwrap();
        assert!(r.x < incoming.x);
        assert!(r.y < incoming.y);
        assert_eq!(
            refraction(&v, &Vector3f::Y, ETA_VACUUM, 1.5).unwrap(),
            Some(r)
        );
    }

    #[test]
    fn total_internal_reflection() {
        let _ = env_logger::builder().is_test(true).try_init();

        let v = Vector3f::new(1.191752, 1.0, 0.0);
        assert_eq!(Ok(None), refraction(&v, &Vector3f::Y, 1.333, 1.0));
    }

    #[test]
    fn refract_errors() {
        let v = Vector3f::new(1.0, -1.0, 0.0);
        assert!(matches!(refraction(&v, &Vector3f::Y, 0.0, 1.0), Err(Error::Domain(_))));
        assert!(matches!(refraction(&v, &Vector3f::Y, 1.0, 0.000001), Err(Error::Domain(_))));
        assert!(matches!(refraction(&v, &Vector3f::Y, -1.0, 1.5), Err(Error::Range(_))));
        assert!(matches!(refraction(&v, &Vector3f::ZERO, 1.0, 1.5), Err(Error::Domain(_))));
        assert!(matches!(refraction(&Vector3f::ZERO, &Vector3f::Y, 1.0, 1.5), Err(Error::Domain(_))));
    }
}
