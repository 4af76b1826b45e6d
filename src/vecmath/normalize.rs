use std::ops::Div;

use crate::{
    error::{Error, Result},
    float::Float,
    math,
};

use super::{has_nan::HasNan, length::Length};

pub trait Normalize: HasNan + Length<Float>
where
    Self: Sized + Div<Float, Output = Result<Self>>,
{
    /// Scale to unit length.
    ///
    /// Fails with [`Error::Domain`] if the length is within tolerance of zero.
    /// Something that is already unit length (within tolerance) comes back untouched.
    ///
    /// NaN components are a caller bug: debug builds panic on them.
    fn normalize(self) -> Result<Self> {
        debug_assert!(!self.has_nan());
        let len = self.length();
        if math::equals(len, 0.0) {
            return Err(Error::Domain("cannot normalize a zero-length value"));
        }
        if math::equals(len, 1.0) {
            return Ok(self);
        }
        self / len
    }
}
