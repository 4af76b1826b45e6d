//! Tolerance-aware 3D math whose numeric kernel runs in `const` contexts as
//! well as at run time.
//!
//! Every kernel function in [`math`] has a `const fn` twin in
//! [`math::const_eval`] with the same signature and edge cases, so values like
//! `const S: Float = const_eval::sin(1.0);` are computed by the compiler.

pub mod camera;
pub mod error;
pub mod float;
pub mod light;
pub mod math;
pub mod optics;
pub mod quaternion;
pub mod ray;
pub mod vecmath;

// For convenience, re-export.
pub use camera::Camera;
pub use error::{Error, Result};
pub use float::Float;
pub use light::PointLight;
pub use quaternion::Quaternion;
pub use ray::Ray;
pub use vecmath::{Point3f, Vector3f};
