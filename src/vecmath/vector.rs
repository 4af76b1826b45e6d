use std::cmp::Ordering;
use std::fmt;

use super::has_nan::HasNan;
use super::length::{length3, length_squared3, Length};
use super::normalize::Normalize;
use super::tuple::Tuple3;
use super::tuple_fns::{abs3, cross, dot3, equals3, has_nan3, is_zero3, partial_cmp3};
use super::Point3f;
use crate::error::{Error, Result};
use crate::float::Float;
use crate::math;
use auto_ops::{impl_op_ex, impl_op_ex_commutative};

// ---------------------------------------------------------------------------
//        Vector3f
// ---------------------------------------------------------------------------

/// A displacement or direction in 3D space.
///
/// Equality and ordering are tolerance-based: two vectors are equal when every
/// pair of components is within [`crate::float::EPSILON`].
#[derive(Debug, Clone, Copy)]
pub struct Vector3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Vector3f {
    /// All zeroes.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// All ones.
    pub const ONE: Self = Self {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };

    /// All negative ones.
    pub const NEG_ONE: Self = Self {
        x: -1.0,
        y: -1.0,
        z: -1.0,
    };

    /// A unit-length vector pointing along the positive X axis.
    pub const X: Self = Self {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };

    /// A unit-length vector pointing along the positive Y axis.
    pub const Y: Self = Self {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };

    /// A unit-length vector pointing along the positive Z axis.
    pub const Z: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    /// A unit-length vector pointing along the negative X axis.
    pub const NEG_X: Self = Self {
        x: -1.0,
        y: 0.0,
        z: 0.0,
    };

    /// A unit-length vector pointing along the negative Y axis.
    pub const NEG_Y: Self = Self {
        x: 0.0,
        y: -1.0,
        z: 0.0,
    };

    /// A unit-length vector pointing along the negative Z axis.
    pub const NEG_Z: Self = Self {
        x: 0.0,
        y: 0.0,
        z: -1.0,
    };

    /// Compute the dot product.
    pub fn dot(&self, v: &Vector3f) -> Float {
        dot3(self, v)
    }

    /// Take the cross product of this and a vector v.
    pub fn cross(&self, v: &Vector3f) -> Vector3f {
        cross(self, v)
    }

    /// Elementwise absolute value.
    pub fn abs(&self) -> Vector3f {
        abs3(self)
    }

    /// True if every component is within tolerance of zero.
    pub fn is_zero(&self) -> bool {
        is_zero3(self)
    }

    /// Cosine of the angle between this vector and `v`, in [-1, 1].
    ///
    /// Both vectors are normalized first, so they may have any non-zero length.
    /// Passing the same vector as both operands is rejected with
    /// [`Error::Identity`]; a copy of the vector is fine. Debug builds panic if
    /// either vector has a NaN component.
    pub fn angle_dot(&self, v: &Vector3f) -> Result<Float> {
        if std::ptr::eq(self, v) {
            return Err(Error::Identity("angle between a vector and itself"));
        }
        let a = self.normalize()?;
        let b = v.normalize()?;
        Ok(a.dot(&b).clamp(-1.0, 1.0))
    }

    /// Angle between this vector and `v`, in radians.
    pub fn angle_radians(&self, v: &Vector3f) -> Result<Float> {
        math::arccos(self.angle_dot(v)?)
    }

    /// Angle between this vector and `v`, in degrees.
    pub fn angle_degrees(&self, v: &Vector3f) -> Result<Float> {
        Ok(math::radians_to_degrees(self.angle_radians(v)?))
    }

    /// Divide in place. Fails, leaving `self` untouched, if `s` is zero.
    pub fn try_div_assign(&mut self, s: Float) -> Result<()> {
        *self = (*self / s)?;
        Ok(())
    }

    /// The point this vector reaches from the origin.
    pub fn to_point(&self) -> Point3f {
        Point3f::from(*self)
    }
}

impl Tuple3<Float> for Vector3f {
    fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }

    fn x(&self) -> Float {
        self.x
    }

    fn y(&self) -> Float {
        self.y
    }

    fn z(&self) -> Float {
        self.z
    }
}

impl HasNan for Vector3f {
    fn has_nan(&self) -> bool {
        has_nan3(self)
    }
}

impl Length<Float> for Vector3f {
    fn length_squared(&self) -> Float {
        length_squared3(self)
    }

    fn length(&self) -> Float {
        length3(self)
    }
}

impl Normalize for Vector3f {}

impl Default for Vector3f {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Vector3f {
    fn eq(&self, other: &Self) -> bool {
        equals3(self, other)
    }
}

impl PartialOrd for Vector3f {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        partial_cmp3(self, other)
    }
}

impl fmt::Display for Vector3f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl_op_ex!(-|v: &Vector3f| -> Vector3f { Vector3f::new(-v.x, -v.y, -v.z) });

impl_op_ex!(+|v1: &Vector3f, v2: &Vector3f| -> Vector3f {
    Vector3f::new(v1.x + v2.x, v1.y + v2.y, v1.z + v2.z)
});
impl_op_ex!(-|v1: &Vector3f, v2: &Vector3f| -> Vector3f {
    Vector3f::new(v1.x - v2.x, v1.y - v2.y, v1.z - v2.z)
});
impl_op_ex!(+=|v1: &mut Vector3f, v2: &Vector3f| {
    v1.x += v2.x;
    v1.y += v2.y;
    v1.z += v2.z;
});
impl_op_ex!(-=|v1: &mut Vector3f, v2: &Vector3f| {
    v1.x -= v2.x;
    v1.y -= v2.y;
    v1.z -= v2.z;
});

// Scalars apply to every component
impl_op_ex_commutative!(+|v: &Vector3f, s: Float| -> Vector3f {
    Vector3f::new(v.x + s, v.y + s, v.z + s)
});
impl_op_ex!(-|v: &Vector3f, s: Float| -> Vector3f { Vector3f::new(v.x - s, v.y - s, v.z - s) });
impl_op_ex_commutative!(*|v: &Vector3f, s: Float| -> Vector3f {
    Vector3f::new(v.x * s, v.y * s, v.z * s)
});
impl_op_ex!(/|v: &Vector3f, s: Float| -> Result<Vector3f> {
    if math::equals(s, 0.0) {
        return Err(Error::Domain("division by zero"));
    }
    Ok(Vector3f::new(v.x / s, v.y / s, v.z / s))
});
impl_op_ex!(+=|v: &mut Vector3f, s: Float| {
    v.x += s;
    v.y += s;
    v.z += s;
});
impl_op_ex!(-=|v: &mut Vector3f, s: Float| {
    v.x -= s;
    v.y -= s;
    v.z -= s;
});
impl_op_ex!(*=|v: &mut Vector3f, s: Float| {
    v.x *= s;
    v.y *= s;
    v.z *= s;
});

impl From<Point3f> for Vector3f {
    fn from(value: Point3f) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl From<[Float; 3]> for Vector3f {
    fn from(value: [Float; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<(Float, Float, Float)> for Vector3f {
    fn from(value: (Float, Float, Float)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}
