pub type Float = f64;

pub const PI_F: Float = std::f64::consts::PI;
pub const PI_2: Float = std::f64::consts::FRAC_PI_2;
pub const PI_4: Float = std::f64::consts::FRAC_PI_4;
pub const TAU: Float = std::f64::consts::TAU;

/// Absolute tolerance used by every comparison in the crate.
///
/// This is an absolute, not a relative, tolerance: two values that are each
/// around 1e12 and differ only in their last few bits are *not* equal under it,
/// while 1e-6 and 2e-6 are. Callers working at very large or very small
/// magnitudes should scale their data first.
pub const EPSILON: Float = 0.00001;

/// Hard cap on the number of terms any power series in `math::const_eval` sums.
pub const MAX_SERIES_TERMS: u32 = 1000;

/// Hard cap on Newton-Raphson steps for the const square root.
/// The iteration halves the exponent each step until it is in range, so this
/// is comfortably above what the largest finite f64 needs.
pub const MAX_NEWTON_ITERATIONS: u32 = 1100;

/// Largest magnitude, exclusive, that sin, cos and tan accept; beyond it they
/// return NaN.
///
/// Up to here the angle is reduced modulo 2π with an error of a few ulps of
/// the result. Past it consecutive floats are several units apart, so the
/// reduced angle, and with it the sign of the sine, is noise.
pub const MAX_TRIG_ARGUMENT: Float = 4503599627370496.0; // 2^52

/// Magnitude above which every f64 is already an integer.
const INTEGRAL_THRESHOLD: Float = 4503599627370496.0; // 2^52

/// `Float::is_nan`, usable in const contexts.
#[allow(clippy::eq_op)]
pub const fn is_nan(x: Float) -> bool {
    x != x
}

pub const fn is_infinite(x: Float) -> bool {
    x == Float::INFINITY || x == Float::NEG_INFINITY
}

pub const fn is_finite(x: Float) -> bool {
    !is_nan(x) && !is_infinite(x)
}

/// Plain IEEE absolute value, without any tolerance.
pub const fn fabs(x: Float) -> Float {
    if x < 0.0 {
        -x
    } else {
        x
    }
}

/// Round toward zero. Values too large to carry a fractional part,
/// as well as NaN and the infinities, are returned as-is.
pub const fn trunc(x: Float) -> Float {
    if !is_finite(x) || fabs(x) >= INTEGRAL_THRESHOLD {
        x
    } else {
        (x as i64) as Float
    }
}

/// Round half away from zero, like `f64::round`.
pub const fn round(x: Float) -> Float {
    if !is_finite(x) || fabs(x) >= INTEGRAL_THRESHOLD {
        return x;
    }
    let t = trunc(x);
    let frac = x - t;
    if frac >= 0.5 {
        t + 1.0
    } else if frac <= -0.5 {
        t - 1.0
    } else {
        t
    }
}
