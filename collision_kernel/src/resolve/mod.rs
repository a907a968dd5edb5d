//! Collision resolution: positional correction ("push") and velocity reflection ("bounce").
//!
//! Every function mutates only the caller's positions/velocities passed by `&mut` and returns
//! whether the shapes were overlapping. Applied corrections are reported as `tracing` events at
//! `TRACE` level.
mod bounce;
mod push;

pub use bounce::*;
pub use push::*;
