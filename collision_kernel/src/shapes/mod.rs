//! Shape primitives. Every shape is a plain value, no shape owns or references another.
//!
//! Discs, spheres, points, and sectors have no struct of their own, queries take them as loose
//! `center`/`radius`/`tip`/`forward` parameters.
mod aabb2;
mod aabb3;
mod convex;
mod cylinder;
mod float_range;
mod obb2;
mod obb3;
mod plane;
mod segment;

pub use aabb2::Aabb2;
pub use aabb3::Aabb3;
pub use convex::{ConvexHull2, ConvexPolygon2};
pub use cylinder::{Cylinder3, ZCylinder3};
pub use float_range::FloatRange;
pub use obb2::Obb2;
pub use obb3::Obb3;
pub use plane::{Plane2, Plane3};
pub use segment::{Capsule2, LineSegment2, LineSegment3};
