//! Run-time numeric kernel.
//!
//! Same surface as [`const_eval`], same guards, but the computation itself is
//! handed to the platform's libm through the `f64` methods. Prefer these
//! outside of constant expressions; they are faster and round better.

pub mod const_eval;

use crate::{
    error::{Error, Result},
    float::{Float, EPSILON, PI_2, PI_F},
};

pub use const_eval::{degrees_to_radians, radians_to_degrees};

pub trait Sqrt {
    fn sqrt(self) -> Self;
}

impl Sqrt for Float {
    fn sqrt(self) -> Self {
        Float::sqrt(self)
    }
}

/// Computes a * b - c * d using an error-free transformation (EFT) method.
/// See PBRT B.2.9.
pub fn difference_of_products(a: Float, b: Float, c: Float, d: Float) -> Float {
    let cd = c * d;
    let difference = Float::mul_add(a, b, -cd);
    let error = Float::mul_add(-c, d, cd);
    difference + error
}

pub fn equals(a: Float, b: Float) -> bool {
    (a - b).abs() <= EPSILON
}

pub fn greater_than(a: Float, b: Float) -> bool {
    a - b > EPSILON
}

pub fn less_than(a: Float, b: Float) -> bool {
    b - a > EPSILON
}

/// -1, 0 or 1. NaN maps to 1, which keeps the sign total for callers that
/// multiply by it.
pub fn sign(x: Float) -> Float {
    if x.is_nan() {
        1.0
    } else if equals(x, 0.0) {
        0.0
    } else if less_than(x, 0.0) {
        -1.0
    } else {
        1.0
    }
}

pub fn abs(x: Float) -> Float {
    if less_than(x, 0.0) {
        -x
    } else {
        x
    }
}

pub fn sqrt(x: Float) -> Result<Float> {
    if x < 0.0 {
        return Err(Error::Domain("square root of a negative number"));
    }
    Ok(x.sqrt())
}

/// Remainder with the sign of `value`. A remainder that lands on the
/// divisor's magnitude is folded to zero.
pub fn modulo(value: Float, divisor: Float) -> Result<Float> {
    if equals(divisor, 0.0) {
        return Err(Error::Domain("modulo by zero"));
    }
    let r = value % divisor;
    if equals(r.abs(), divisor.abs()) {
        Ok(0.0)
    } else {
        Ok(r)
    }
}

pub fn pow(base: Float, exponent: i32) -> Float {
    if !base.is_finite() {
        return Float::NAN;
    }
    if exponent == 0 || equals(base, 1.0) {
        return 1.0;
    }
    base.powi(exponent)
}

/// n!, as a float so that anything up to 170! is representable.
pub fn factorial(n: u32) -> Float {
    // No stable gamma in std; the product is exact up to 22! anyway.
    (2..=n).map(Float::from).product()
}

/// Sine. NaN for non-finite input and from [`crate::float::MAX_TRIG_ARGUMENT`] on.
pub fn sin(x: Float) -> Float {
    if !const_eval::in_trig_domain(x) {
        return Float::NAN;
    }
    x.sin()
}

/// Cosine. NaN for non-finite input and from [`crate::float::MAX_TRIG_ARGUMENT`] on.
pub fn cos(x: Float) -> Float {
    if !const_eval::in_trig_domain(x) {
        return Float::NAN;
    }
    x.cos()
}

/// Tangent. Multiples of π give exactly 0 and odd multiples of π/2 give NaN.
pub fn tan(x: Float) -> Float {
    match const_eval::tan_special_case(x) {
        Some(t) => t,
        None => x.tan(),
    }
}

pub fn arcsin(x: Float) -> Result<Float> {
    let x = const_eval::inverse_trig_domain(x)?;
    if equals(x.abs(), 1.0) {
        return Ok(PI_2.copysign(x));
    }
    Ok(x.asin())
}

pub fn arccos(x: Float) -> Result<Float> {
    let x = const_eval::inverse_trig_domain(x)?;
    if equals(x.abs(), 1.0) {
        return Ok(if x < 0.0 { PI_F } else { 0.0 });
    }
    Ok(x.acos())
}

pub fn arctan(x: Float) -> Float {
    x.atan()
}

/// Greatest common divisor. Requires `a >= b` and both non-zero.
pub fn euclidean_gcd(a: u64, b: u64) -> Result<u64> {
    if a == 0 || b == 0 {
        return Err(Error::Domain("gcd of zero"));
    }
    if a < b {
        return Err(Error::Range("gcd requires a >= b"));
    }
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    Ok(a)
}
