use super::FloatRange;
use crate::core::{
    math::{Vector2, Vector3},
    traits::Real,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Capped cylinder with an arbitrary axis running from the `start` cap center to the `end` cap
/// center.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Cylinder3<T = f64> {
    pub start: Vector3<T>,
    pub end: Vector3<T>,
    pub radius: T,
}

impl<T> Cylinder3<T>
where
    T: Real,
{
    #[inline]
    pub fn new(start: Vector3<T>, end: Vector3<T>, radius: T) -> Self {
        Cylinder3 { start, end, radius }
    }

    #[inline]
    pub fn height(&self) -> T {
        (self.end - self.start).length()
    }

    /// Unit axis from `start` to `end` (zero if the caps coincide).
    #[inline]
    pub fn axis_normal(&self) -> Vector3<T> {
        (self.end - self.start).normalize()
    }
}

/// Cylinder whose axis is parallel to +Z.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ZCylinder3<T = f64> {
    pub center_xy: Vector2<T>,
    pub min_max_z: FloatRange<T>,
    pub radius: T,
}

impl<T> ZCylinder3<T>
where
    T: Real,
{
    #[inline]
    pub fn new(center_xy: Vector2<T>, min_z: T, max_z: T, radius: T) -> Self {
        ZCylinder3 {
            center_xy,
            min_max_z: FloatRange::new(min_z, max_z),
            radius,
        }
    }

    /// Same cylinder expressed with an explicit axis.
    #[inline]
    pub fn to_cylinder3(&self) -> Cylinder3<T> {
        Cylinder3::new(
            Vector3::from_xy(self.center_xy, self.min_max_z.min),
            Vector3::from_xy(self.center_xy, self.min_max_z.max),
            self.radius,
        )
    }
}
