//! Core module has the shared numeric traits and the vector/scalar algebra everything else is
//! built on.
pub mod math;
pub mod traits;
