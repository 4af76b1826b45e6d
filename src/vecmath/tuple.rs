use std::ops::Neg;

use crate::float::Float;

/// Scalar types a tuple can be built from.
pub trait TupleElement: Copy + Neg<Output = Self> {
    const ZERO: Self;
    const ONE: Self;
}

impl TupleElement for Float {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
}

/// A tuple with 3 elements.
/// Used for sharing logic across Vector3f and Point3f.
///
/// The named constructors follow a right-handed, Y-up frame in which the
/// camera looks down +Z.
pub trait Tuple3<T: TupleElement>: Sized {
    fn new(x: T, y: T, z: T) -> Self;

    fn x(&self) -> T;
    fn y(&self) -> T;
    fn z(&self) -> T;

    /// All zeroes.
    fn zero() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ZERO)
    }

    /// All ones.
    fn one() -> Self {
        Self::new(T::ONE, T::ONE, T::ONE)
    }

    /// (0, 1, 0)
    fn up() -> Self {
        Self::new(T::ZERO, T::ONE, T::ZERO)
    }

    /// (0, -1, 0)
    fn down() -> Self {
        Self::new(T::ZERO, -T::ONE, T::ZERO)
    }

    /// (-1, 0, 0)
    fn left() -> Self {
        Self::new(-T::ONE, T::ZERO, T::ZERO)
    }

    /// (1, 0, 0)
    fn right() -> Self {
        Self::new(T::ONE, T::ZERO, T::ZERO)
    }

    /// (0, 0, 1)
    fn forward() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ONE)
    }

    /// (0, 0, -1)
    fn backward() -> Self {
        Self::new(T::ZERO, T::ZERO, -T::ONE)
    }
}
