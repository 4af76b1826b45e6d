use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every fallible operation in the crate reports one of these three categories.
///
/// The payload is a static description of what was rejected, so that errors can
/// be built (and propagated with `?`) inside `const fn`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A zero (within tolerance) divisor, normal, axis or length, or a negative
    /// square root argument.
    #[error("domain error: {0}")]
    Domain(&'static str),

    /// An argument outside the accepted interval: arcsin/arccos inputs beyond
    /// [-1, 1], a gcd called with a < b, negative distances and ratios, pixel
    /// coordinates past the screen.
    #[error("range error: {0}")]
    Range(&'static str),

    /// Both operands are the same object where distinct ones are required.
    #[error("identity error: {0}")]
    Identity(&'static str),
}
