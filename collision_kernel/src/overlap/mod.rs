//! Boolean containment and overlap predicates.
//!
//! Point containment is strict interior everywhere. Pair tests are strict too (touching shapes do
//! not overlap) with one exception, [do_z_cylinders_overlap3], which is inclusive along Z.
mod point_inside;
mod shape_overlap;

pub use point_inside::*;
pub use shape_overlap::*;
