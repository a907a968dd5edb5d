use super::Vector3;
use crate::core::traits::Real;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops;

/// 4D vector, mostly used for homogeneous coordinates.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vector4<T = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T> Vector4<T>
where
    T: Real,
{
    #[inline]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Vector4 { x, y, z, w }
    }

    #[inline]
    pub fn zero() -> Self {
        Vector4::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    /// Homogeneous point (`w = 1`).
    #[inline]
    pub fn from_point(p: Vector3<T>) -> Self {
        Vector4::new(p.x, p.y, p.z, T::one())
    }

    /// Homogeneous direction (`w = 0`).
    #[inline]
    pub fn from_direction(d: Vector3<T>) -> Self {
        Vector4::new(d.x, d.y, d.z, T::zero())
    }

    #[inline]
    pub fn xyz(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn scale(&self, scale_factor: T) -> Self {
        Vector4::new(
            scale_factor * self.x,
            scale_factor * self.y,
            scale_factor * self.z,
            scale_factor * self.w,
        )
    }

    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    #[inline]
    pub fn length(&self) -> T {
        self.dot(*self).sqrt()
    }

    /// Normalize the vector (length = 1). A zero length vector normalizes to the zero vector.
    #[inline]
    pub fn normalize(&self) -> Self {
        let length = self.length();
        if length == T::zero() {
            return Vector4::zero();
        }

        self.scale(T::one() / length)
    }

    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon)
            && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
            && self.z.fuzzy_eq_eps(other.z, fuzzy_epsilon)
            && self.w.fuzzy_eq_eps(other.w, fuzzy_epsilon)
    }

    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

impl<T: Real> ops::Add for Vector4<T> {
    type Output = Vector4<T>;
    #[inline]
    fn add(self, rhs: Vector4<T>) -> Self::Output {
        Vector4::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl<T: Real> ops::Sub for Vector4<T> {
    type Output = Vector4<T>;
    #[inline]
    fn sub(self, rhs: Vector4<T>) -> Self::Output {
        Vector4::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl<T: Real> ops::Neg for Vector4<T> {
    type Output = Vector4<T>;
    #[inline]
    fn neg(self) -> Self::Output {
        Vector4::new(-self.x, -self.y, -self.z, -self.w)
    }
}
