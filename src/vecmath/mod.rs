//! Points and vectors.
//!
//! Both are three floats, but they are different things. A vector is a
//! displacement, a combination s_1 * v_1 + ... + s_n * v_n of basis vectors.
//! A point is a location, reached from the origin p_0 by such a displacement:
//! p = p_0 + s_1 * v_1 + ... + s_n * v_n.
//!
//! The operators follow from that. The difference of two points is a vector,
//! a point moved by a vector is a point, and only vectors have a length or a
//! direction. Crossing over is always explicit, through `to_vector()` /
//! `to_point()` or `From`.
//!
//! Both types compare with a tolerance (see [`crate::float::EPSILON`]) rather
//! than bit-for-bit, and order lexicographically on (x, y, z).

pub mod has_nan;
pub mod length;
pub mod normalize;
pub mod point;
pub mod tuple;
mod tuple_fns;
pub mod vector;

pub use has_nan::HasNan;
pub use length::Length;
pub use normalize::Normalize;
pub use point::Point3f;
pub use tuple::{Tuple3, TupleElement};
pub use vector::Vector3f;

pub(crate) use tuple_fns::is_zero3;
