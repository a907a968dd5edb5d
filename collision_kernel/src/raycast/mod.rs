//! Ray casts against every shape family.
//!
//! All casts take the ray as `(start, forward_normal, max_length)` where `forward_normal` must be
//! unit length. A hit reports `impact_distance` in `[0, max_length)` and a unit `impact_normal`. A
//! ray starting strictly inside a solid shape hits immediately at distance 0 with the normal
//! opposing the ray.
mod raycast2;
mod raycast3;
mod result;

pub use raycast2::*;
pub use raycast3::*;
pub use result::{RaycastResult2, RaycastResult3};
