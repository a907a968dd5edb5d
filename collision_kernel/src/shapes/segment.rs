use crate::core::{
    math::{Vector2, Vector3},
    traits::Real,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 2D line segment from `start` to `end`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct LineSegment2<T = f64> {
    pub start: Vector2<T>,
    pub end: Vector2<T>,
}

impl<T> LineSegment2<T>
where
    T: Real,
{
    #[inline]
    pub fn new(start: Vector2<T>, end: Vector2<T>) -> Self {
        LineSegment2 { start, end }
    }

    /// `end - start` (not normalized).
    #[inline]
    pub fn displacement(&self) -> Vector2<T> {
        self.end - self.start
    }

    #[inline]
    pub fn length(&self) -> T {
        self.displacement().length()
    }

    #[inline]
    pub fn center(&self) -> Vector2<T> {
        (self.start + self.end).scale(T::half())
    }

    #[inline]
    pub fn translate(&mut self, delta: Vector2<T>) {
        self.start += delta;
        self.end += delta;
    }
}

/// 3D line segment from `start` to `end`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct LineSegment3<T = f64> {
    pub start: Vector3<T>,
    pub end: Vector3<T>,
}

impl<T> LineSegment3<T>
where
    T: Real,
{
    #[inline]
    pub fn new(start: Vector3<T>, end: Vector3<T>) -> Self {
        LineSegment3 { start, end }
    }

    #[inline]
    pub fn displacement(&self) -> Vector3<T> {
        self.end - self.start
    }

    #[inline]
    pub fn length(&self) -> T {
        self.displacement().length()
    }
}

/// 2D capsule: every point within `radius` of the `bone` segment.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Capsule2<T = f64> {
    pub bone: LineSegment2<T>,
    pub radius: T,
}

impl<T> Capsule2<T>
where
    T: Real,
{
    #[inline]
    pub fn new(bone_start: Vector2<T>, bone_end: Vector2<T>, radius: T) -> Self {
        Capsule2 {
            bone: LineSegment2::new(bone_start, bone_end),
            radius,
        }
    }

    #[inline]
    pub fn translate(&mut self, delta: Vector2<T>) {
        self.bone.translate(delta);
    }
}
