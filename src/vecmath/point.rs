use std::cmp::Ordering;
use std::fmt;

use super::has_nan::HasNan;
use super::length::Length;
use super::tuple::Tuple3;
use super::tuple_fns::{abs3, equals3, has_nan3, is_zero3, partial_cmp3};
use super::Vector3f;
use crate::error::{Error, Result};
use crate::float::Float;
use crate::math;
use auto_ops::{impl_op_ex, impl_op_ex_commutative};

// ---------------------------------------------------------------------------
//        Point3f
// ---------------------------------------------------------------------------

/// An absolute position in 3D space.
#[derive(Debug, Clone, Copy)]
pub struct Point3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Point3f {
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

    pub fn distance(&self, p: &Point3f) -> Float {
        debug_assert!(!self.has_nan());
        (self - p).length()
    }

    pub fn distance_squared(&self, p: &Point3f) -> Float {
        debug_assert!(!self.has_nan());
        (self - p).length_squared()
    }

    /// The midpoint between this point and `p`.
    pub fn center(&self, p: &Point3f) -> Point3f {
        (self + p) * 0.5
    }

    /// The displacement that carries this point onto `p`.
    pub fn vector_to(&self, p: &Point3f) -> Vector3f {
        p - self
    }

    /// Elementwise absolute value.
    pub fn abs(&self) -> Point3f {
        abs3(self)
    }

    /// True if every component is within tolerance of zero.
    pub fn is_zero(&self) -> bool {
        is_zero3(self)
    }

    /// Divide in place. Fails, leaving `self` untouched, if `s` is zero.
    pub fn try_div_assign(&mut self, s: Float) -> Result<()> {
        *self = (*self / s)?;
        Ok(())
    }

    /// The position vector of this point, measured from the origin.
    pub fn to_vector(&self) -> Vector3f {
        Vector3f::from(*self)
    }
}

impl Tuple3<Float> for Point3f {
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

impl HasNan for Point3f {
    fn has_nan(&self) -> bool {
        has_nan3(self)
    }
}

impl Default for Point3f {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Point3f {
    fn eq(&self, other: &Self) -> bool {
        equals3(self, other)
    }
}

impl PartialOrd for Point3f {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        partial_cmp3(self, other)
    }
}

impl fmt::Display for Point3f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl_op_ex!(-|p: &Point3f| -> Point3f { Point3f::new(-p.x, -p.y, -p.z) });

// Points can be scaled and shifted elementwise
impl_op_ex_commutative!(*|p: &Point3f, s: Float| -> Point3f {
    Point3f::new(p.x * s, p.y * s, p.z * s)
});
impl_op_ex!(/|p: &Point3f, s: Float| -> Result<Point3f> {
    if math::equals(s, 0.0) {
        return Err(Error::Domain("division by zero"));
    }
    Ok(Point3f::new(p.x / s, p.y / s, p.z / s))
});
impl_op_ex_commutative!(+|p: &Point3f, s: Float| -> Point3f {
    Point3f::new(p.x + s, p.y + s, p.z + s)
});
impl_op_ex!(-|p: &Point3f, s: Float| -> Point3f { Point3f::new(p.x - s, p.y - s, p.z - s) });
impl_op_ex!(*=|p: &mut Point3f, s: Float| {
    p.x *= s;
    p.y *= s;
    p.z *= s;
});
impl_op_ex!(+=|p: &mut Point3f, s: Float| {
    p.x += s;
    p.y += s;
    p.z += s;
});
impl_op_ex!(-=|p: &mut Point3f, s: Float| {
    p.x -= s;
    p.y -= s;
    p.z -= s;
});

// Point + Point -> Point. Only meaningful as part of an affine combination,
// e.g. a midpoint.
impl_op_ex!(+|p1: &Point3f, p2: &Point3f| -> Point3f {
    Point3f::new(p1.x + p2.x, p1.y + p2.y, p1.z + p2.z)
});

// Point + Vector -> Point
impl_op_ex_commutative!(+|p: &Point3f, v: &Vector3f| -> Point3f {
    Point3f::new(p.x + v.x, p.y + v.y, p.z + v.z)
});
impl_op_ex!(+=|p: &mut Point3f, v: &Vector3f| {
    p.x += v.x;
    p.y += v.y;
    p.z += v.z;
});

// Point - Vector -> Point
impl_op_ex!(-|p: &Point3f, v: &Vector3f| -> Point3f {
    Point3f::new(p.x - v.x, p.y - v.y, p.z - v.z)
});
impl_op_ex!(-=|p: &mut Point3f, v: &Vector3f| {
    p.x -= v.x;
    p.y -= v.y;
    p.z -= v.z;
});

// Point - Point -> Vector
impl_op_ex!(-|p1: &Point3f, p2: &Point3f| -> Vector3f {
    Vector3f::new(p1.x - p2.x, p1.y - p2.y, p1.z - p2.z)
});

impl From<Vector3f> for Point3f {
    fn from(value: Vector3f) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl From<[Float; 3]> for Point3f {
    fn from(value: [Float; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<(Float, Float, Float)> for Point3f {
    fn from(value: (Float, Float, Float)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}
