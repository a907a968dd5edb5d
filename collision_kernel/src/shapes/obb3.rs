use super::Aabb3;
use crate::core::{math::Vector3, traits::Real};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 3D oriented bounding box with an orthonormal basis, assumed and never re-orthonormalized.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Obb3<T = f64> {
    pub center: Vector3<T>,
    pub i_basis: Vector3<T>,
    pub j_basis: Vector3<T>,
    pub k_basis: Vector3<T>,
    pub half_dimensions: Vector3<T>,
}

impl<T> Obb3<T>
where
    T: Real,
{
    #[inline]
    pub fn new(
        center: Vector3<T>,
        i_basis: Vector3<T>,
        j_basis: Vector3<T>,
        k_basis: Vector3<T>,
        half_dimensions: Vector3<T>,
    ) -> Self {
        Obb3 {
            center,
            i_basis,
            j_basis,
            k_basis,
            half_dimensions,
        }
    }

    #[inline]
    pub fn from_aabb3(aabb: &Aabb3<T>) -> Self {
        let (zero, one) = (T::zero(), T::one());
        Obb3::new(
            aabb.center(),
            Vector3::new(one, zero, zero),
            Vector3::new(zero, one, zero),
            Vector3::new(zero, zero, one),
            aabb.half_dimensions(),
        )
    }

    #[inline]
    pub fn local_pos_for_world_pos(&self, world_pos: Vector3<T>) -> Vector3<T> {
        self.local_dir_for_world_dir(world_pos - self.center)
    }

    #[inline]
    pub fn world_pos_for_local_pos(&self, local_pos: Vector3<T>) -> Vector3<T> {
        self.center + self.world_dir_for_local_dir(local_pos)
    }

    #[inline]
    pub fn local_dir_for_world_dir(&self, world_dir: Vector3<T>) -> Vector3<T> {
        Vector3::new(
            world_dir.dot(self.i_basis),
            world_dir.dot(self.j_basis),
            world_dir.dot(self.k_basis),
        )
    }

    #[inline]
    pub fn world_dir_for_local_dir(&self, local_dir: Vector3<T>) -> Vector3<T> {
        self.i_basis.scale(local_dir.x)
            + self.j_basis.scale(local_dir.y)
            + self.k_basis.scale(local_dir.z)
    }

    #[inline]
    pub fn local_bounds(&self) -> Aabb3<T> {
        Aabb3::new(-self.half_dimensions, self.half_dimensions)
    }

    /// The 8 corners, same order as [Aabb3::corner_points] applied in the local frame.
    pub fn corner_points(&self) -> [Vector3<T>; 8] {
        let local = self.local_bounds().corner_points();
        let mut world = [Vector3::zero(); 8];
        for (w, l) in world.iter_mut().zip(local.iter()) {
            *w = self.world_pos_for_local_pos(*l);
        }

        world
    }
}
