use crate::core::{
    math::{Vector2, Vector3},
    traits::Real,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of casting a 2D ray against a shape.
///
/// The ray itself is echoed back so callers can keep just the result. When `did_impact` is false
/// the impact fields hold zeroes and must not be read.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RaycastResult2<T = f64> {
    pub did_impact: bool,
    pub impact_distance: T,
    pub impact_position: Vector2<T>,
    /// Unit surface normal at the impact point.
    pub impact_normal: Vector2<T>,
    pub ray_start_position: Vector2<T>,
    pub ray_forward_normal: Vector2<T>,
    pub ray_max_length: T,
}

impl<T> RaycastResult2<T>
where
    T: Real,
{
    #[inline]
    pub fn miss(ray_start_position: Vector2<T>, ray_forward_normal: Vector2<T>, ray_max_length: T) -> Self {
        RaycastResult2 {
            did_impact: false,
            impact_distance: T::zero(),
            impact_position: Vector2::zero(),
            impact_normal: Vector2::zero(),
            ray_start_position,
            ray_forward_normal,
            ray_max_length,
        }
    }

    /// Hit at `impact_distance` along the ray, the impact position is derived from the ray.
    #[inline]
    pub fn hit(
        ray_start_position: Vector2<T>,
        ray_forward_normal: Vector2<T>,
        ray_max_length: T,
        impact_distance: T,
        impact_normal: Vector2<T>,
    ) -> Self {
        RaycastResult2 {
            did_impact: true,
            impact_distance,
            impact_position: ray_start_position + ray_forward_normal.scale(impact_distance),
            impact_normal,
            ray_start_position,
            ray_forward_normal,
            ray_max_length,
        }
    }

    /// End point of the ray, the impact position on a hit and the full length end point on a miss.
    #[inline]
    pub fn end_position(&self) -> Vector2<T> {
        if self.did_impact {
            self.impact_position
        } else {
            self.ray_start_position + self.ray_forward_normal.scale(self.ray_max_length)
        }
    }
}

/// Result of casting a 3D ray against a shape, see [RaycastResult2].
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RaycastResult3<T = f64> {
    pub did_impact: bool,
    pub impact_distance: T,
    pub impact_position: Vector3<T>,
    pub impact_normal: Vector3<T>,
    pub ray_start_position: Vector3<T>,
    pub ray_forward_normal: Vector3<T>,
    pub ray_max_length: T,
}

impl<T> RaycastResult3<T>
where
    T: Real,
{
    #[inline]
    pub fn miss(ray_start_position: Vector3<T>, ray_forward_normal: Vector3<T>, ray_max_length: T) -> Self {
        RaycastResult3 {
            did_impact: false,
            impact_distance: T::zero(),
            impact_position: Vector3::zero(),
            impact_normal: Vector3::zero(),
            ray_start_position,
            ray_forward_normal,
            ray_max_length,
        }
    }

    #[inline]
    pub fn hit(
        ray_start_position: Vector3<T>,
        ray_forward_normal: Vector3<T>,
        ray_max_length: T,
        impact_distance: T,
        impact_normal: Vector3<T>,
    ) -> Self {
        RaycastResult3 {
            did_impact: true,
            impact_distance,
            impact_position: ray_start_position + ray_forward_normal.scale(impact_distance),
            impact_normal,
            ray_start_position,
            ray_forward_normal,
            ray_max_length,
        }
    }

    #[inline]
    pub fn end_position(&self) -> Vector3<T> {
        if self.did_impact {
            self.impact_position
        } else {
            self.ray_start_position + self.ray_forward_normal.scale(self.ray_max_length)
        }
    }
}
