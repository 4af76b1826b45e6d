//! Self-contained implementations of the numeric kernel that can run inside a
//! constant expression: no calls into `std`'s float intrinsics, only loops
//! and arithmetic.
//!
//! Every function here has a twin with the same signature in [`crate::math`]
//! that delegates the heavy lifting to the platform's libm. The two share all
//! guard conditions and agree within [`EPSILON`] on finite in-domain input.
//! For sin, cos and tan the domain ends at [`MAX_TRIG_ARGUMENT`].
//!
//! `?` is not usable in `const fn`, hence the explicit matches.

use crate::{
    error::{Error, Result},
    float::{
        fabs, is_finite, is_infinite, is_nan, round, trunc, Float, EPSILON, MAX_NEWTON_ITERATIONS,
        MAX_SERIES_TERMS, MAX_TRIG_ARGUMENT, PI_2, PI_4, PI_F, TAU,
    },
};

/// tan(π/8). Above this, arctan is shifted by π/4 before summing the series.
const TAN_PI_8: Float = 0.41421356237309503;

pub const fn equals(a: Float, b: Float) -> bool {
    fabs(a - b) <= EPSILON
}

pub const fn greater_than(a: Float, b: Float) -> bool {
    a - b > EPSILON
}

pub const fn less_than(a: Float, b: Float) -> bool {
    b - a > EPSILON
}

/// -1, 0 or 1. NaN maps to 1.
pub const fn sign(x: Float) -> Float {
    if is_nan(x) {
        1.0
    } else if equals(x, 0.0) {
        0.0
    } else if less_than(x, 0.0) {
        -1.0
    } else {
        1.0
    }
}

/// Tolerance-aware absolute value: values within epsilon of zero are left alone.
pub const fn abs(x: Float) -> Float {
    if less_than(x, 0.0) {
        -x
    } else {
        x
    }
}

pub const fn degrees_to_radians(degrees: Float) -> Float {
    degrees * PI_F / 180.0
}

pub const fn radians_to_degrees(radians: Float) -> Float {
    radians * 180.0 / PI_F
}

/// Newton-Raphson square root, iterated until it reaches a fixed point.
pub const fn sqrt(x: Float) -> Result<Float> {
    if is_nan(x) {
        return Ok(x);
    }
    if x < 0.0 {
        return Err(Error::Domain("square root of a negative number"));
    }
    Ok(sqrt_unchecked(x))
}

/// `sqrt` for an argument already known to be non-negative or NaN.
pub(crate) const fn sqrt_unchecked(x: Float) -> Float {
    if is_nan(x) || x == 0.0 || is_infinite(x) {
        return x;
    }
    let mut curr = if x >= 1.0 { x } else { 1.0 };
    let mut prev = 0.0;
    let mut i = 0;
    while i < MAX_NEWTON_ITERATIONS {
        let next = 0.5 * (curr + x / curr);
        // Rounding can leave the iteration bouncing between two adjacent floats.
        if next == curr || next == prev {
            break;
        }
        prev = curr;
        curr = next;
        i += 1;
    }
    curr
}

/// Remainder of `value / divisor`, carrying the sign of `value`.
///
/// The quotient is truncated toward zero; a remainder that ends up within
/// epsilon of the divisor's magnitude is folded to zero, so `modulo(1.2, 0.1)`
/// is 0 rather than ~0.1.
pub const fn modulo(value: Float, divisor: Float) -> Result<Float> {
    if equals(divisor, 0.0) {
        return Err(Error::Domain("modulo by zero"));
    }
    if !is_finite(value) || is_nan(divisor) {
        return Ok(Float::NAN);
    }
    if is_infinite(divisor) {
        return Ok(value);
    }
    let r = value - divisor * trunc(value / divisor);
    if equals(fabs(r), fabs(divisor)) {
        Ok(0.0)
    } else {
        Ok(r)
    }
}

/// Integer power by square-and-multiply.
pub const fn pow(base: Float, exponent: i32) -> Float {
    if !is_finite(base) {
        return Float::NAN;
    }
    if exponent == 0 || equals(base, 1.0) {
        return 1.0;
    }
    let mut n = exponent.unsigned_abs();
    let mut b = base;
    let mut acc = 1.0;
    while n > 0 {
        if n & 1 == 1 {
            acc *= b;
        }
        b *= b;
        n >>= 1;
    }
    if exponent < 0 {
        1.0 / acc
    } else {
        acc
    }
}

pub const fn factorial(n: u32) -> Float {
    let mut acc = 1.0;
    let mut i = 2;
    while i <= n {
        acc *= i as Float;
        i += 1;
    }
    acc
}

/// 2π split into pieces of at most 26 significant bits, so that any of them
/// times a 26-bit integer is exact. Together they carry about 130 bits of 2π.
const TAU_1: Float = 6.283185362815857;
const TAU_2: Float = -5.563627070159782e-8;
const TAU_3: Float = 2.4492935728214377e-16;
const TAU_4: Float = 2.54732686540438e-24;

/// 2^26
const HALF_MANTISSA: Float = 67108864.0;

/// Relative distance from a multiple of π/2 under which `tan` treats its
/// argument as lying exactly on it. A few ulps, to absorb the rounding of
/// something like `3.0 * PI_F`.
const TAN_EXACT_ULPS: Float = 4.0 * Float::EPSILON;

/// Whether sin, cos and tan accept `x`: finite and below [`MAX_TRIG_ARGUMENT`]
/// in magnitude.
pub(crate) const fn in_trig_domain(x: Float) -> bool {
    is_finite(x) && fabs(x) < MAX_TRIG_ARGUMENT
}

/// `x - k * period` for the integer k nearest to `x / period`, where `period`
/// is 2π times `scale`, a power of two.
///
/// Cody-Waite reduction: k is split into two halves of at most 26 bits and
/// multiplied by each piece of 2π separately, so every product is exact and
/// the cancellation against `x` loses nothing. Needs |k| < 2^52, which
/// [`in_trig_domain`] guarantees.
pub(crate) const fn reduce_angle(x: Float, scale: Float) -> Float {
    let k = round(x / (TAU * scale));
    let k_hi = trunc(k / HALF_MANTISSA) * HALF_MANTISSA;
    let k_lo = k - k_hi;
    let p1 = TAU_1 * scale;
    let p2 = TAU_2 * scale;
    let p3 = TAU_3 * scale;
    let mut r = x - k_hi * p1;
    r -= k_lo * p1;
    r -= k_hi * p2;
    r -= k_lo * p2;
    r -= k_hi * p3;
    r -= k_lo * p3;
    r - k * (TAU_4 * scale)
}

/// Maclaurin series of sine, for |r| <= π.
const fn sin_series(r: Float) -> Float {
    let r2 = r * r;
    let mut term = r;
    let mut sum = r;
    let mut k: u32 = 1;
    while k < MAX_SERIES_TERMS {
        term *= -r2 / ((2 * k) as Float * (2 * k + 1) as Float);
        let next = sum + term;
        if next == sum || !is_finite(next) {
            break;
        }
        sum = next;
        k += 1;
    }
    sum
}

/// Maclaurin series of cosine, for |r| <= π.
const fn cos_series(r: Float) -> Float {
    let r2 = r * r;
    let mut term = 1.0;
    let mut sum = 1.0;
    let mut k: u32 = 1;
    while k < MAX_SERIES_TERMS {
        term *= -r2 / ((2 * k - 1) as Float * (2 * k) as Float);
        let next = sum + term;
        if next == sum || !is_finite(next) {
            break;
        }
        sum = next;
        k += 1;
    }
    sum
}

/// Sine, after reducing `x` into [-π, π]. NaN outside [`in_trig_domain`].
pub const fn sin(x: Float) -> Float {
    if !in_trig_domain(x) {
        return Float::NAN;
    }
    sin_series(reduce_angle(x, 1.0))
}

/// Cosine, after reducing `x` into [-π, π]. NaN outside [`in_trig_domain`].
pub const fn cos(x: Float) -> Float {
    if !in_trig_domain(x) {
        return Float::NAN;
    }
    cos_series(reduce_angle(x, 1.0))
}

/// The value of `tan(x)` when it needs no computing: NaN outside
/// [`in_trig_domain`] or on an odd multiple of π/2, 0 on a multiple of π.
/// "On" means within a few ulps of `x`.
pub(crate) const fn tan_special_case(x: Float) -> Option<Float> {
    if !in_trig_domain(x) {
        return Some(Float::NAN);
    }
    let r = fabs(reduce_angle(x, 0.5));
    let tolerance = fabs(x) * TAN_EXACT_ULPS;
    if r <= tolerance {
        Some(0.0)
    } else if fabs(r - PI_2) <= tolerance {
        Some(Float::NAN)
    } else {
        None
    }
}

/// Tangent. Multiples of π give exactly 0 and odd multiples of π/2 give NaN.
pub const fn tan(x: Float) -> Float {
    if let Some(t) = tan_special_case(x) {
        return t;
    }
    let r = reduce_angle(x, 0.5);
    sin_series(r) / cos_series(r)
}

/// Validates an arcsin/arccos argument and clamps it into [-1, 1].
pub(crate) const fn inverse_trig_domain(x: Float) -> Result<Float> {
    if !is_finite(x) || greater_than(fabs(x), 1.0) {
        return Err(Error::Range("inverse sine/cosine argument outside [-1, 1]"));
    }
    Ok(if x > 1.0 {
        1.0
    } else if x < -1.0 {
        -1.0
    } else {
        x
    })
}

pub const fn arcsin(x: Float) -> Result<Float> {
    let x = match inverse_trig_domain(x) {
        Ok(x) => x,
        Err(e) => return Err(e),
    };
    if equals(fabs(x), 1.0) {
        return Ok(if x < 0.0 { -PI_2 } else { PI_2 });
    }
    if fabs(x) <= 0.5 {
        return Ok(arcsin_series(x));
    }
    // Near ±1 the series crawls; fold the argument back below 1/2.
    let folded = sqrt_unchecked((1.0 - fabs(x)) / 2.0);
    let magnitude = PI_2 - 2.0 * arcsin_series(folded);
    Ok(if x < 0.0 { -magnitude } else { magnitude })
}

/// Σ (2n)! / (4ⁿ (n!)² (2n+1)) x²ⁿ⁺¹, for |x| <= 1/2.
const fn arcsin_series(x: Float) -> Float {
    let x2 = x * x;
    let mut coefficient = x;
    let mut sum = x;
    let mut n: u32 = 0;
    while n < MAX_SERIES_TERMS {
        coefficient *= x2 * (2 * n + 1) as Float / (2 * n + 2) as Float;
        let term = coefficient / (2 * n + 3) as Float;
        let next = sum + term;
        if next == sum || !is_finite(next) {
            break;
        }
        sum = next;
        n += 1;
    }
    sum
}

pub const fn arccos(x: Float) -> Result<Float> {
    match arcsin(x) {
        Ok(s) => Ok(PI_2 - s),
        Err(e) => Err(e),
    }
}

pub const fn arctan(x: Float) -> Float {
    if is_nan(x) {
        return x;
    }
    if is_infinite(x) {
        return if x > 0.0 { PI_2 } else { -PI_2 };
    }
    if x < 0.0 {
        return -arctan(-x);
    }
    if x > 1.0 {
        return sign(x) * PI_2 - arctan(1.0 / x);
    }
    if x > TAN_PI_8 {
        return PI_4 + arctan_series((x - 1.0) / (x + 1.0));
    }
    arctan_series(x)
}

/// Σ (-1)ⁿ x²ⁿ⁺¹ / (2n+1), for |x| <= tan(π/8).
const fn arctan_series(x: Float) -> Float {
    let x2 = x * x;
    let mut power = x;
    let mut sum = x;
    let mut n: u32 = 1;
    while n < MAX_SERIES_TERMS {
        power *= -x2;
        let next = sum + power / (2 * n + 1) as Float;
        if next == sum || !is_finite(next) {
            break;
        }
        sum = next;
        n += 1;
    }
    sum
}

/// Greatest common divisor. Requires `a >= b` and both non-zero.
pub const fn euclidean_gcd(a: u64, b: u64) -> Result<u64> {
    if a == 0 || b == 0 {
        return Err(Error::Domain("gcd of zero"));
    }
    if a < b {
        return Err(Error::Range("gcd requires a >= b"));
    }
    let mut a = a;
    let mut b = b;
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    Ok(a)
}
