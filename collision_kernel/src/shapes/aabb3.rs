use crate::core::{math::Vector3, traits::Real};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 3D axis-aligned bounding box, `mins <= maxs` componentwise is the caller's responsibility.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Aabb3<T = f64> {
    pub mins: Vector3<T>,
    pub maxs: Vector3<T>,
}

impl<T> Aabb3<T>
where
    T: Real,
{
    #[inline]
    pub fn new(mins: Vector3<T>, maxs: Vector3<T>) -> Self {
        Aabb3 { mins, maxs }
    }

    #[inline]
    pub fn from_center_and_dimensions(center: Vector3<T>, dimensions: Vector3<T>) -> Self {
        let half = dimensions.scale(T::half());
        Aabb3::new(center - half, center + half)
    }

    #[inline]
    pub fn center(&self) -> Vector3<T> {
        (self.mins + self.maxs).scale(T::half())
    }

    #[inline]
    pub fn dimensions(&self) -> Vector3<T> {
        self.maxs - self.mins
    }

    #[inline]
    pub fn half_dimensions(&self) -> Vector3<T> {
        self.dimensions().scale(T::half())
    }

    #[inline]
    pub fn set_center(&mut self, new_center: Vector3<T>) {
        let delta = new_center - self.center();
        self.translate(delta);
    }

    #[inline]
    pub fn set_dimensions(&mut self, new_dimensions: Vector3<T>) {
        *self = Aabb3::from_center_and_dimensions(self.center(), new_dimensions);
    }

    #[inline]
    pub fn translate(&mut self, delta: Vector3<T>) {
        self.mins += delta;
        self.maxs += delta;
    }

    pub fn stretch_to_include_point(&mut self, point: Vector3<T>) {
        self.mins.x = if point.x < self.mins.x { point.x } else { self.mins.x };
        self.mins.y = if point.y < self.mins.y { point.y } else { self.mins.y };
        self.mins.z = if point.z < self.mins.z { point.z } else { self.mins.z };
        self.maxs.x = if point.x > self.maxs.x { point.x } else { self.maxs.x };
        self.maxs.y = if point.y > self.maxs.y { point.y } else { self.maxs.y };
        self.maxs.z = if point.z > self.maxs.z { point.z } else { self.maxs.z };
    }

    /// The 8 corners: the bottom (`z = mins.z`) face counter clockwise from `mins`, then the top
    /// face in the same order.
    pub fn corner_points(&self) -> [Vector3<T>; 8] {
        let (lo, hi) = (self.mins, self.maxs);
        [
            Vector3::new(lo.x, lo.y, lo.z),
            Vector3::new(hi.x, lo.y, lo.z),
            Vector3::new(hi.x, hi.y, lo.z),
            Vector3::new(lo.x, hi.y, lo.z),
            Vector3::new(lo.x, lo.y, hi.z),
            Vector3::new(hi.x, lo.y, hi.z),
            Vector3::new(hi.x, hi.y, hi.z),
            Vector3::new(lo.x, hi.y, hi.z),
        ]
    }
}
