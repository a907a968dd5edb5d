use super::Aabb2;
use crate::core::{math::Vector2, traits::Real};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 2D oriented bounding box.
///
/// The local j axis is always `i_basis_normal` rotated +90 degrees. `i_basis_normal` must be unit
/// length; queries assume it and never re-normalize.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Obb2<T = f64> {
    pub center: Vector2<T>,
    pub i_basis_normal: Vector2<T>,
    pub half_dimensions: Vector2<T>,
}

impl<T> Obb2<T>
where
    T: Real,
{
    #[inline]
    pub fn new(center: Vector2<T>, i_basis_normal: Vector2<T>, half_dimensions: Vector2<T>) -> Self {
        Obb2 {
            center,
            i_basis_normal,
            half_dimensions,
        }
    }

    /// Unrotated box covering the same area as `aabb`.
    #[inline]
    pub fn from_aabb2(aabb: &Aabb2<T>) -> Self {
        Obb2::new(
            aabb.center(),
            Vector2::new(T::one(), T::zero()),
            aabb.half_dimensions(),
        )
    }

    #[inline]
    pub fn j_basis_normal(&self) -> Vector2<T> {
        self.i_basis_normal.rotated_90()
    }

    /// Coordinates of `world_pos` along the box's local i and j axes, relative to its center.
    ///
    /// # Examples
    ///
    /// ```
    /// # use collision_kernel::core::math::*;
    /// # use collision_kernel::shapes::Obb2;
    /// let obb = Obb2::new(Vector2::new(1.0, 1.0), Vector2::new(0.0, 1.0), Vector2::new(2.0, 1.0));
    /// let local = obb.local_pos_for_world_pos(Vector2::new(1.0, 3.0));
    /// assert!(local.fuzzy_eq(Vector2::new(2.0, 0.0)));
    /// assert!(obb.world_pos_for_local_pos(local).fuzzy_eq(Vector2::new(1.0, 3.0)));
    /// ```
    #[inline]
    pub fn local_pos_for_world_pos(&self, world_pos: Vector2<T>) -> Vector2<T> {
        self.local_dir_for_world_dir(world_pos - self.center)
    }

    #[inline]
    pub fn world_pos_for_local_pos(&self, local_pos: Vector2<T>) -> Vector2<T> {
        self.center + self.world_dir_for_local_dir(local_pos)
    }

    /// Same as [Obb2::local_pos_for_world_pos] without the translation.
    #[inline]
    pub fn local_dir_for_world_dir(&self, world_dir: Vector2<T>) -> Vector2<T> {
        Vector2::new(
            world_dir.dot(self.i_basis_normal),
            world_dir.dot(self.j_basis_normal()),
        )
    }

    #[inline]
    pub fn world_dir_for_local_dir(&self, local_dir: Vector2<T>) -> Vector2<T> {
        self.i_basis_normal.scale(local_dir.x) + self.j_basis_normal().scale(local_dir.y)
    }

    /// The box in its own local frame (centered on the origin, axis aligned).
    #[inline]
    pub fn local_bounds(&self) -> Aabb2<T> {
        Aabb2::new(-self.half_dimensions, self.half_dimensions)
    }

    /// The 4 corners in local `(-,-)`, `(+,-)`, `(+,+)`, `(-,+)` order.
    pub fn corner_points(&self) -> [Vector2<T>; 4] {
        let i = self.i_basis_normal.scale(self.half_dimensions.x);
        let j = self.j_basis_normal().scale(self.half_dimensions.y);
        [
            self.center - i - j,
            self.center + i - j,
            self.center + i + j,
            self.center - i + j,
        ]
    }

    /// Rotate the box counter clockwise about its center.
    #[inline]
    pub fn rotate_about_center(&mut self, rotation_degrees: T) {
        self.i_basis_normal = self.i_basis_normal.rotated_degrees(rotation_degrees);
    }
}
