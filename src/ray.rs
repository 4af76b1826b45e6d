use std::fmt;

use crate::{
    error::{Error, Result},
    vecmath::{HasNan, Length, Normalize, Point3f, Vector3f},
    Float,
};

/// A half-line segment: an origin, a unit direction, and how far along that
/// direction the ray is valid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    /// Origin of the ray
    origin: Point3f,
    /// Direction of the ray; always unit length
    direction: Vector3f,
    /// Length of the valid segment; never negative
    distance: Float,
}

impl Ray {
    /// Fails with [`Error::Domain`] if `direction` is zero and with
    /// [`Error::Range`] if `distance` is negative. Debug builds panic if
    /// `direction` has a NaN component.
    pub fn new(origin: Point3f, direction: Vector3f, distance: Float) -> Result<Ray> {
        if distance < 0.0 {
            return Err(Error::Range("ray distance can't be negative"));
        }
        Ok(Ray {
            origin,
            direction: direction.normalize()?,
            distance,
        })
    }

    /// A ray from the origin that reaches exactly the tip of `direction`.
    pub fn from_direction(direction: Vector3f) -> Result<Ray> {
        Ray::new(Point3f::ZERO, direction, direction.length())
    }

    /// A ray from `start` that ends at `end`.
    pub fn between(start: &Point3f, end: &Point3f) -> Result<Ray> {
        Ray::new(*start, start.vector_to(end), start.distance(end))
    }

    pub fn origin(&self) -> Point3f {
        self.origin
    }

    pub fn direction(&self) -> Vector3f {
        self.direction
    }

    pub fn distance(&self) -> Float {
        self.distance
    }

    pub fn with_origin(&self, origin: Point3f) -> Ray {
        Ray { origin, ..*self }
    }

    pub fn with_direction(&self, direction: Vector3f) -> Result<Ray> {
        Ray::new(self.origin, direction, self.distance)
    }

    pub fn with_distance(&self, distance: Float) -> Result<Ray> {
        Ray::new(self.origin, self.direction, distance)
    }

    /// Stretches or shrinks the ray so that its extent matches the distance
    /// from its origin to `point`.
    pub fn with_distance_to(&self, point: &Point3f) -> Ray {
        Ray {
            distance: self.origin.distance(point),
            ..*self
        }
    }

    /// Whether `length` falls inside the ray's extent.
    pub fn within_range(&self, length: Float) -> Result<bool> {
        if length < 0.0 {
            return Err(Error::Range("length can't be negative"));
        }
        Ok(length <= self.distance)
    }

    /// Whether `point` is no farther from the origin than the ray extends.
    /// Only the distance is considered, not whether `point` is on the ray.
    pub fn reaches(&self, point: &Point3f) -> bool {
        self.origin.distance(point) <= self.distance
    }

    /// The point `distance` along the ray, or `None` past its end.
    pub fn point_at(&self, distance: Float) -> Result<Option<Point3f>> {
        Ok(self
            .within_range(distance)?
            .then(|| self.origin + self.direction * distance))
    }
}

impl HasNan for Ray {
    fn has_nan(&self) -> bool {
        self.origin.has_nan() || self.direction.has_nan() || self.distance.is_nan()
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{origin: {}, direction: {}, distance: {}}}",
            self.origin, self.direction, self.distance
        )
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use crate::{
        error::Error,
        vecmath::{HasNan, Length, Point3f, Tuple3, Vector3f},
        Float,
    };

    use super::Ray;

    #[test]
    fn new_normalizes_direction() {
        let ray = Ray::new(Point3f::new(1.0, 2.0, 3.0), Vector3f::new(4.0, 5.0, 6.0), 7.0).unwrap();
        assert_eq!(Point3f::new(1.0, 2.0, 3.0), ray.origin());
        assert_eq!(Vector3f::new(0.455842, 0.569803, 0.683763), ray.direction());
        assert_approx_eq!(Float, 1.0, ray.direction().length(), epsilon = 1e-12);
        assert_eq!(7.0, ray.distance());
        assert!(!ray.has_nan());
    }

    #[test]
    fn new_errors() {
        assert!(matches!(
            Ray::new(Point3f::ZERO, Vector3f::X, -1.0),
            Err(Error::Range(_))
        ));
        assert!(matches!(
            Ray::new(Point3f::ZERO, Vector3f::ZERO, 1.0),
            Err(Error::Domain(_))
        ));
        assert!(Ray::from_direction(Vector3f::ZERO).is_err());
        assert!(Ray::between(&Point3f::ONE, &Point3f::ONE).is_err());
    }

    #[test]
    fn from_direction() {
        let ray = Ray::from_direction(Vector3f::new(0.0, 3.0, 4.0)).unwrap();
        assert_eq!(Point3f::ZERO, ray.origin());
        assert_eq!(Vector3f::new(0.0, 0.6, 0.8), ray.direction());
        assert_eq!(5.0, ray.distance());
    }

    #[test]
    fn between() {
        let start = Point3f::new(1.0, -2.0, 3.0);
        let end = Point3f::new(-4.0, 5.0, -6.0);
        let ray = Ray::between(&start, &end).unwrap();
        assert_eq!(start, ray.origin());
        assert_approx_eq!(Float, 12.449900, ray.distance(), epsilon = 0.000001);
        assert_eq!(Vector3f::new(-0.401609, 0.562253, -0.722897), ray.direction());
        assert_eq!(Ok(Some(end)), ray.point_at(ray.distance()));
    }

    #[test]
    fn withers() {
        let ray = Ray::new(Point3f::ZERO, Vector3f::X, 2.0).unwrap();

        let moved = ray.with_origin(Point3f::ONE);
        assert_eq!(Point3f::ONE, moved.origin());
        assert_eq!(ray.direction(), moved.direction());

        let turned = ray.with_direction(Vector3f::new(0.0, 0.0, -9.0)).unwrap();
        assert_eq!(Vector3f::NEG_Z, turned.direction());
        assert!(ray.with_direction(Vector3f::ZERO).is_err());

        assert_eq!(10.0, ray.with_distance(10.0).unwrap().distance());
        assert!(matches!(ray.with_distance(-0.5), Err(Error::Range(_))));

        let stretched = ray.with_distance_to(&Point3f::new(0.0, 3.0, 4.0));
        assert_eq!(5.0, stretched.distance());
    }

    #[test]
    fn range() {
        let ray = Ray::new(Point3f::new(1.0, 2.0, 3.0), Vector3f::new(4.0, 5.0, 6.0), 7.0).unwrap();
        assert_eq!(Ok(true), ray.within_range(0.0));
        assert_eq!(Ok(true), ray.within_range(7.0));
        assert_eq!(Ok(false), ray.within_range(7.1));
        assert!(matches!(ray.within_range(-1.0), Err(Error::Range(_))));

        assert!(ray.reaches(&Point3f::new(1.0, 2.0, 4.0)));
        assert!(!ray.reaches(&Point3f::new(10.0, 2.0, 3.0)));
    }

    #[test]
    fn point_at() {
        let ray = Ray::new(Point3f::new(1.0, 2.0, 3.0), Vector3f::new(4.0, 5.0, 6.0), 7.0).unwrap();
        assert_eq!(Ok(Some(Point3f::new(1.455842, 2.569803, 3.683763))), ray.point_at(1.0));
        assert_eq!(Ok(Some(ray.origin())), ray.point_at(0.0));
        assert_eq!(Ok(None), ray.point_at(10.0));
        assert!(ray.point_at(-1.0).is_err());
    }

    #[test]
    fn display() {
        let ray = Ray::new(Point3f::ZERO, Vector3f::Y, 2.5).unwrap();
        assert_eq!(
            "{origin: (0, 0, 0), direction: (0, 1, 0), distance: 2.5}",
            ray.to_string()
        );
    }
}
