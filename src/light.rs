use crate::{
    error::{Error, Result},
    float::PI_F,
    vecmath::Point3f,
    Float,
};

/// An isotropic point light source.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointLight {
    pub position: Point3f,
    /// Radiant intensity, the same in every direction
    pub intensity: Float,
}

impl PointLight {
    pub fn new(position: Point3f, intensity: Float) -> PointLight {
        PointLight {
            position,
            intensity,
        }
    }

    /// Total power emitted over the whole sphere of directions.
    pub fn phi(&self) -> Float {
        4.0 * PI_F * self.intensity
    }

    /// Intensity arriving at `point`, falling off with the squared distance.
    /// Fails with [`Error::Domain`] at the light's own position.
    pub fn inverse_square_law(&self, point: &Point3f) -> Result<Float> {
        self.falloff(self.position.distance_squared(point))
    }

    /// Intensity arriving at a point `length` units away.
    pub fn inverse_square_law_length(&self, length: Float) -> Result<Float> {
        self.falloff(length * length)
    }

    fn falloff(&self, distance_squared: Float) -> Result<Float> {
        if distance_squared.is_nan() || distance_squared <= 0.0 {
            return Err(Error::Domain("no light falloff at zero distance"));
        }
        Ok(self.intensity / distance_squared)
    }
}
