//! Vector and scalar algebra: 2D/3D/4D vectors, angle utilities, and scalar helpers.
mod base_math;
mod vector2;
mod vector3;
mod vector4;

pub use base_math::*;
pub use vector2::{vec2, Vector2};
pub use vector3::{vec3, Vector3};
pub use vector4::Vector4;
