use crate::core::{
    math::{lerp, Vector2},
    traits::Real,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 2D axis-aligned bounding box.
///
/// `mins <= maxs` componentwise is the caller's responsibility. The mutators keep it when used
/// correctly but never check it, see [crate::validate::Validate] for an explicit check.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Aabb2<T = f64> {
    pub mins: Vector2<T>,
    pub maxs: Vector2<T>,
}

impl<T> Aabb2<T>
where
    T: Real,
{
    #[inline]
    pub fn new(mins: Vector2<T>, maxs: Vector2<T>) -> Self {
        Aabb2 { mins, maxs }
    }

    #[inline]
    pub fn from_coords(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Aabb2::new(Vector2::new(min_x, min_y), Vector2::new(max_x, max_y))
    }

    /// Box centered on `center` with the full `dimensions` given.
    #[inline]
    pub fn from_center_and_dimensions(center: Vector2<T>, dimensions: Vector2<T>) -> Self {
        let half = dimensions.scale(T::half());
        Aabb2::new(center - half, center + half)
    }

    #[inline]
    pub fn center(&self) -> Vector2<T> {
        (self.mins + self.maxs).scale(T::half())
    }

    #[inline]
    pub fn dimensions(&self) -> Vector2<T> {
        self.maxs - self.mins
    }

    #[inline]
    pub fn half_dimensions(&self) -> Vector2<T> {
        self.dimensions().scale(T::half())
    }

    /// Move the box so it is centered on `new_center`, keeping its dimensions.
    #[inline]
    pub fn set_center(&mut self, new_center: Vector2<T>) {
        let delta = new_center - self.center();
        self.translate(delta);
    }

    /// Resize the box around its current center.
    #[inline]
    pub fn set_dimensions(&mut self, new_dimensions: Vector2<T>) {
        *self = Aabb2::from_center_and_dimensions(self.center(), new_dimensions);
    }

    #[inline]
    pub fn translate(&mut self, delta: Vector2<T>) {
        self.mins += delta;
        self.maxs += delta;
    }

    /// Grow the box (if needed) so `point` is on or inside its boundary.
    pub fn stretch_to_include_point(&mut self, point: Vector2<T>) {
        if point.x < self.mins.x {
            self.mins.x = point.x;
        } else if point.x > self.maxs.x {
            self.maxs.x = point.x;
        }

        if point.y < self.mins.y {
            self.mins.y = point.y;
        } else if point.y > self.maxs.y {
            self.maxs.y = point.y;
        }
    }

    /// Point at normalized coordinates `uv`, `(0, 0)` is `mins` and `(1, 1)` is `maxs`.
    #[inline]
    pub fn point_at_uv(&self, uv: Vector2<T>) -> Vector2<T> {
        Vector2::new(
            lerp(self.mins.x, self.maxs.x, uv.x),
            lerp(self.mins.y, self.maxs.y, uv.y),
        )
    }

    /// Inverse of [Aabb2::point_at_uv].
    #[inline]
    pub fn uv_for_point(&self, point: Vector2<T>) -> Vector2<T> {
        let dims = self.dimensions();
        Vector2::new(
            (point.x - self.mins.x) / dims.x,
            (point.y - self.mins.y) / dims.y,
        )
    }

    /// The 4 corners, counter clockwise starting at `mins`.
    #[inline]
    pub fn corner_points(&self) -> [Vector2<T>; 4] {
        [
            self.mins,
            Vector2::new(self.maxs.x, self.mins.y),
            self.maxs,
            Vector2::new(self.mins.x, self.maxs.y),
        ]
    }
}
