use std::ops::{Add, Mul};

use crate::{float::Float, math::Sqrt};

use super::{has_nan::HasNan, tuple::Tuple3};

pub trait Length<T>: HasNan
where
    T: Mul<Output = T> + Add<Output = T> + Sqrt,
{
    fn length_squared(&self) -> T;
    fn length(&self) -> T;
}

pub fn length_squared3<V>(v: &V) -> Float
where
    V: Tuple3<Float> + HasNan,
{
    debug_assert!(!v.has_nan());
    v.x() * v.x() + v.y() * v.y() + v.z() * v.z()
}

pub fn length3<V>(v: &V) -> Float
where
    V: Tuple3<Float> + HasNan,
{
    // A sum of squares is never negative, so the infallible sqrt is fine here.
    Sqrt::sqrt(length_squared3(v))
}
