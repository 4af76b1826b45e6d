use log::trace;

use crate::{
    error::{Error, Result},
    math::{self, degrees_to_radians},
    ray::Ray,
    vecmath::{Normalize, Point3f, Vector3f},
    Float,
};

/// Field of view, in degrees, used by [`Camera::new`].
pub const DEFAULT_FOV: Float = 90.0;

/// A pinhole camera looking through a rectangular screen of `width` by
/// `height` pixels.
///
/// The screen sits one unit in front of the camera, perpendicular to its
/// direction. Its half extents are `tan(fov / 2)` in both axes, so the pixels
/// are square only when `width == height`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    position: Point3f,
    /// Unit viewing direction
    direction: Vector3f,
    width: u32,
    height: u32,
    /// Field of view in degrees, in (0, 180)
    fov: Float,
    /// Corner of the screen at pixel (0, 0)
    top_left: Point3f,
    /// Screen center to its right edge
    half_horizontal: Vector3f,
    /// Screen center to its top edge
    half_vertical: Vector3f,
}

impl Camera {
    pub fn new(position: Point3f, direction: Vector3f, width: u32, height: u32) -> Result<Camera> {
        Camera::new_with_fov(position, direction, width, height, DEFAULT_FOV)
    }

    /// Fails with [`Error::Domain`] on a zero direction, an empty screen or a
    /// zero field of view, and with [`Error::Range`] if `fov` is negative or
    /// not below 180 degrees. Debug builds panic if `direction` has a NaN
    /// component.
    pub fn new_with_fov(
        position: Point3f,
        direction: Vector3f,
        width: u32,
        height: u32,
        fov: Float,
    ) -> Result<Camera> {
        if width == 0 || height == 0 {
            return Err(Error::Domain("camera screen can't be empty"));
        }
        if math::equals(fov, 0.0) {
            return Err(Error::Domain("field of view can't be zero"));
        }
        if fov < 0.0 || fov >= 180.0 {
            return Err(Error::Range("field of view must lie in (0, 180) degrees"));
        }
        let direction = direction.normalize()?;

        trace!(
            "Computing screen for camera at {} facing {} with fov {}",
            position,
            direction,
            fov
        );
        // Any vector not parallel to the direction will do to span the screen.
        let arbitrary = if math::equals(math::abs(direction.dot(&Vector3f::X)), 1.0) {
            Vector3f::Y
        } else {
            Vector3f::X
        };
        let cross_forward = direction.cross(&arbitrary).normalize()?;
        let scale = math::tan(degrees_to_radians(fov / 2.0));
        let half_horizontal = direction.cross(&cross_forward).normalize()? * scale;
        let half_vertical = half_horizontal.cross(&direction).normalize()? * scale;
        let top_left = position + direction - half_horizontal + half_vertical;

        Ok(Camera {
            position,
            direction,
            width,
            height,
            fov,
            top_left,
            half_horizontal,
            half_vertical,
        })
    }

    pub fn position(&self) -> Point3f {
        self.position
    }

    pub fn direction(&self) -> Vector3f {
        self.direction
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn fov(&self) -> Float {
        self.fov
    }

    pub fn top_left(&self) -> Point3f {
        self.top_left
    }

    pub fn half_horizontal(&self) -> Vector3f {
        self.half_horizontal
    }

    pub fn half_vertical(&self) -> Vector3f {
        self.half_vertical
    }

    pub fn with_position(&self, position: Point3f) -> Result<Camera> {
        Camera::new_with_fov(position, self.direction, self.width, self.height, self.fov)
    }

    pub fn with_direction(&self, direction: Vector3f) -> Result<Camera> {
        Camera::new_with_fov(self.position, direction, self.width, self.height, self.fov)
    }

    pub fn with_screen(&self, width: u32, height: u32) -> Result<Camera> {
        Camera::new_with_fov(self.position, self.direction, width, height, self.fov)
    }

    pub fn with_fov(&self, fov: Float) -> Result<Camera> {
        Camera::new_with_fov(self.position, self.direction, self.width, self.height, fov)
    }

    /// The ray from the camera through the top left corner of pixel (x, y),
    /// extending `distance` units.
    pub fn shoot_ray(&self, x: u32, y: u32, distance: Float) -> Result<Ray> {
        if x >= self.width || y >= self.height {
            return Err(Error::Range("pixel lies outside the camera screen"));
        }
        let u = 2.0 * Float::from(x) / Float::from(self.width);
        let v = 2.0 * Float::from(y) / Float::from(self.height);
        let target = self.top_left + self.half_horizontal * u - self.half_vertical * v;
        Ray::new(self.position, self.position.vector_to(&target), distance)
    }
}
