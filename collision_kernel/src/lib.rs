//! Geometric overlap, nearest point, raycast, and collision resolution kernel.
//!
//! Everything is a free function over plain shape values, generic over [core::traits::Real]
//! (`f32` and `f64` are provided). Queries are pure. Resolution functions mutate only the positions
//! and velocities passed to them by `&mut`.
//!
//! # Examples
//!
//! ```
//! use collision_kernel::core::math::Vector2;
//! use collision_kernel::overlap::is_point_inside_aabb2;
//! use collision_kernel::raycast::raycast_vs_disc2;
//! use collision_kernel::shapes::Aabb2;
//!
//! let room = Aabb2::from_coords(0.0, 0.0, 10.0, 10.0);
//! assert!(is_point_inside_aabb2(Vector2::new(5.0, 5.0), &room));
//! assert!(!is_point_inside_aabb2(Vector2::new(10.0, 5.0), &room));
//!
//! let hit = raycast_vs_disc2(
//!     Vector2::new(-10.0, 0.0),
//!     Vector2::new(1.0, 0.0),
//!     20.0,
//!     Vector2::new(0.0, 0.0),
//!     5.0,
//! );
//! assert_eq!(hit.impact_distance, 5.0);
//! ```
extern crate static_aabb2d_index;

#[macro_use]
mod macros;

pub mod core;
pub mod index;
pub mod nearest;
pub mod overlap;
pub mod raycast;
pub mod resolve;
pub mod shapes;
pub mod validate;

pub use static_aabb2d_index::{StaticAABB2DIndex, AABB};
