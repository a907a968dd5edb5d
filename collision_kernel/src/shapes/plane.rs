use crate::core::{
    math::{Vector2, Vector3},
    traits::Real,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 2D line as a half-plane boundary: `{p : dot(p, normal) == distance_from_origin_along_normal}`.
///
/// `normal` is unit length and points to the front side.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plane2<T = f64> {
    pub normal: Vector2<T>,
    pub distance_from_origin_along_normal: T,
}

impl<T> Plane2<T>
where
    T: Real,
{
    #[inline]
    pub fn new(normal: Vector2<T>, distance_from_origin_along_normal: T) -> Self {
        Plane2 {
            normal,
            distance_from_origin_along_normal,
        }
    }

    /// Plane through the edge `a -> b` with its normal on the right hand side of the edge, so the
    /// edges of a counter clockwise polygon face outward.
    ///
    /// # Examples
    ///
    /// ```
    /// # use collision_kernel::core::math::*;
    /// # use collision_kernel::shapes::Plane2;
    /// // bottom edge of a counter clockwise square faces down
    /// let plane = Plane2::from_points(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0));
    /// assert!(plane.normal.fuzzy_eq(Vector2::new(0.0, -1.0)));
    /// assert_eq!(plane.altitude_of_point(Vector2::new(0.5, 0.5)), -0.5);
    /// ```
    #[inline]
    pub fn from_points(a: Vector2<T>, b: Vector2<T>) -> Self {
        let normal = (b - a).rotated_minus_90().normalize();
        Plane2::new(normal, a.dot(normal))
    }

    /// Signed distance from the plane, positive in front.
    #[inline]
    pub fn altitude_of_point(&self, point: Vector2<T>) -> T {
        point.dot(self.normal) - self.distance_from_origin_along_normal
    }

    #[inline]
    pub fn is_point_in_front(&self, point: Vector2<T>) -> bool {
        self.altitude_of_point(point) > T::zero()
    }

    /// Point on the plane closest to the origin.
    #[inline]
    pub fn center(&self) -> Vector2<T> {
        self.normal.scale(self.distance_from_origin_along_normal)
    }
}

/// 3D plane: `{p : dot(p, normal) == distance_from_origin_along_normal}` with a unit `normal`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plane3<T = f64> {
    pub normal: Vector3<T>,
    pub distance_from_origin_along_normal: T,
}

impl<T> Plane3<T>
where
    T: Real,
{
    #[inline]
    pub fn new(normal: Vector3<T>, distance_from_origin_along_normal: T) -> Self {
        Plane3 {
            normal,
            distance_from_origin_along_normal,
        }
    }

    /// Plane through `a`, `b`, `c`, front side is where the triangle appears counter clockwise.
    #[inline]
    pub fn from_triangle(a: Vector3<T>, b: Vector3<T>, c: Vector3<T>) -> Self {
        let normal = (b - a).cross(c - a).normalize();
        Plane3::new(normal, a.dot(normal))
    }

    #[inline]
    pub fn altitude_of_point(&self, point: Vector3<T>) -> T {
        point.dot(self.normal) - self.distance_from_origin_along_normal
    }

    #[inline]
    pub fn is_point_in_front(&self, point: Vector3<T>) -> bool {
        self.altitude_of_point(point) > T::zero()
    }

    #[inline]
    pub fn center(&self) -> Vector3<T> {
        self.normal.scale(self.distance_from_origin_along_normal)
    }
}
