//! Closed-form nearest-point solvers, one per shape.
//!
//! Every solver returns the query point itself when it is already inside the shape, and applying a
//! solver to its own result returns the same point (idempotent up to rounding).
mod nearest2;
mod nearest3;

pub use nearest2::*;
pub use nearest3::*;
