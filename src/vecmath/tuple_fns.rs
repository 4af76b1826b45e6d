//! A set of functions which help us implement the tuple traits for various types,
//! but that we don't want exposed external to the vecmath module.

use std::cmp::Ordering;

use crate::{
    math::{self, difference_of_products},
    Float,
};

use super::Tuple3;

pub fn has_nan3<V>(v: &V) -> bool
where
    V: Tuple3<Float>,
{
    v.x().is_nan() || v.y().is_nan() || v.z().is_nan()
}

/// Computes the cross product of two vectors.
/// Uses an EFT method for each component to keep the error down.
///
/// V1: A vector (e.g. Vector3f, or a Point3f viewed as a position vector).
/// V2: A vector.
/// V3: The type of the output cross product.
pub fn cross<V1, V2, V3>(v1: &V1, v2: &V2) -> V3
where
    V1: Tuple3<Float>,
    V2: Tuple3<Float>,
    V3: Tuple3<Float>,
{
    V3::new(
        difference_of_products(v1.y(), v2.z(), v1.z(), v2.y()),
        difference_of_products(v1.z(), v2.x(), v1.x(), v2.z()),
        difference_of_products(v1.x(), v2.y(), v1.y(), v2.x()),
    )
}

/// Take the dot product of two vectors. Neither may contain NaN.
pub fn dot3<V1, V2>(v: &V1, w: &V2) -> Float
where
    V1: Tuple3<Float>,
    V2: Tuple3<Float>,
{
    debug_assert!(!has_nan3(v));
    debug_assert!(!has_nan3(w));
    v.x() * w.x() + v.y() * w.y() + v.z() * w.z()
}

/// Componentwise tolerance equality.
pub fn equals3<V1, V2>(v: &V1, w: &V2) -> bool
where
    V1: Tuple3<Float>,
    V2: Tuple3<Float>,
{
    math::equals(v.x(), w.x()) && math::equals(v.y(), w.y()) && math::equals(v.z(), w.z())
}

/// True when every component is within tolerance of zero.
pub fn is_zero3<V>(v: &V) -> bool
where
    V: Tuple3<Float>,
{
    math::equals(v.x(), 0.0) && math::equals(v.y(), 0.0) && math::equals(v.z(), 0.0)
}

/// Lexicographic ordering (x, then y, then z) where components within
/// tolerance of each other compare equal. Any NaN makes the tuples unordered.
pub fn partial_cmp3<V>(v: &V, w: &V) -> Option<Ordering>
where
    V: Tuple3<Float>,
{
    for (a, b) in [(v.x(), w.x()), (v.y(), w.y()), (v.z(), w.z())] {
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

/// Elementwise tolerance-aware absolute value.
pub fn abs3<V>(v: &V) -> V
where
    V: Tuple3<Float>,
{
    V::new(math::abs(v.x()), math::abs(v.y()), math::abs(v.z()))
}
