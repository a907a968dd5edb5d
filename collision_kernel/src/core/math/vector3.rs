use super::Vector2;
use crate::core::traits::Real;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops;

/// 3D vector (or point) with value semantics.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vector3<T = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vector3<T>
where
    T: Real,
{
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Vector3 { x, y, z }
    }

    #[inline]
    pub fn zero() -> Self {
        Vector3::new(T::zero(), T::zero(), T::zero())
    }

    /// Extend a 2D vector with a `z` component.
    #[inline]
    pub fn from_xy(xy: Vector2<T>, z: T) -> Self {
        Vector3::new(xy.x, xy.y, z)
    }

    /// Drop the `z` component.
    #[inline]
    pub fn xy(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn scale(&self, scale_factor: T) -> Self {
        vec3(
            scale_factor * self.x,
            scale_factor * self.y,
            scale_factor * self.z,
        )
    }

    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right handed cross product.
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        vec3(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
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
            return Vector3::zero();
        }

        self.scale(T::one() / length)
    }

    /// Signed length of this vector along the direction of `onto`.
    #[inline]
    pub fn projected_length(&self, onto: Self) -> T {
        self.dot(onto.normalize())
    }

    /// Component of this vector parallel to `onto`.
    #[inline]
    pub fn project_onto(&self, onto: Self) -> Self {
        let onto_normal = onto.normalize();
        onto_normal.scale(self.dot(onto_normal))
    }

    /// Mirror this vector about a surface with the unit `normal` given.
    #[inline]
    pub fn reflected(&self, normal: Self) -> Self {
        let along_normal = normal.scale(self.dot(normal));
        self - along_normal.scale(T::two())
    }

    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon)
            && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
            && self.z.fuzzy_eq_eps(other.z, fuzzy_epsilon)
    }

    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

#[inline(always)]
pub fn vec3<T>(x: T, y: T, z: T) -> Vector3<T>
where
    T: Real,
{
    Vector3::new(x, y, z)
}

macro_rules! ImplBinaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Vector3<T>> for Vector3<T> {
            type Output = Vector3<T>;
            #[inline]
            fn $op_func(self, rhs: Vector3<T>) -> Self::Output {
                Vector3::new(self.x $op rhs.x, self.y $op rhs.y, self.z $op rhs.z)
            }
        }

        impl<T: Real> ops::$op_trait<&Vector3<T>> for Vector3<T> {
            type Output = Vector3<T>;
            #[inline]
            fn $op_func(self, rhs: &Vector3<T>) -> Self::Output {
                Vector3::new(self.x $op rhs.x, self.y $op rhs.y, self.z $op rhs.z)
            }
        }

        impl<'a, 'b, T: Real> ops::$op_trait<&'b Vector3<T>> for &'a Vector3<T> {
            type Output = Vector3<T>;
            #[inline]
            fn $op_func(self, rhs: &'b Vector3<T>) -> Self::Output {
                Vector3::new(self.x $op rhs.x, self.y $op rhs.y, self.z $op rhs.z)
            }
        }

        impl<T: Real> ops::$op_trait<Vector3<T>> for &Vector3<T> {
            type Output = Vector3<T>;
            #[inline]
            fn $op_func(self, rhs: Vector3<T>) -> Self::Output {
                Vector3::new(self.x $op rhs.x, self.y $op rhs.y, self.z $op rhs.z)
            }
        }
    };
}

ImplBinaryOp!(Add, add, +);
ImplBinaryOp!(Sub, sub, -);

impl<T: Real> ops::AddAssign<Vector3<T>> for Vector3<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Vector3<T>) {
        *self = *self + rhs;
    }
}

impl<T: Real> ops::SubAssign<Vector3<T>> for Vector3<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector3<T>) {
        *self = *self - rhs;
    }
}

impl<T: Real> ops::Neg for Vector3<T> {
    type Output = Vector3<T>;
    #[inline]
    fn neg(self) -> Self::Output {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_is_right_handed() {
        let i = vec3(1.0, 0.0, 0.0);
        let j = vec3(0.0, 1.0, 0.0);
        assert!(i.cross(j).fuzzy_eq(vec3(0.0, 0.0, 1.0)));
        assert!(j.cross(i).fuzzy_eq(vec3(0.0, 0.0, -1.0)));
    }

    #[test]
    fn normalize_zero_is_zero() {
        assert_eq!(Vector3::<f64>::zero().normalize(), Vector3::zero());
        assert!(vec3(0.0, 3.0, 4.0).normalize().fuzzy_eq(vec3(0.0, 0.6, 0.8)));
    }

    #[test]
    fn projection_splits_components() {
        let v = vec3(1.0, 2.0, 3.0);
        let along = v.project_onto(vec3(0.0, 0.0, 5.0));
        assert!(along.fuzzy_eq(vec3(0.0, 0.0, 3.0)));
        assert!((v - along).fuzzy_eq(vec3(1.0, 2.0, 0.0)));
    }
}
