use crate::core::traits::Real;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops;

/// 2D vector (or point) with value semantics.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vector2<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T>
where
    T: Real,
{
    /// Create a new vector with x and y components.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }

    /// Create a zero vector (x = 0, y = 0).
    #[inline]
    pub fn zero() -> Self {
        Vector2::new(T::zero(), T::zero())
    }

    /// Create a vector from polar coordinates, `orientation_degrees` measured counter clockwise
    /// from +X.
    #[inline]
    pub fn from_polar_degrees(orientation_degrees: T, length: T) -> Self {
        Vector2::from_polar_radians(orientation_degrees.to_radians(), length)
    }

    /// Create a vector from polar coordinates with the angle in radians.
    #[inline]
    pub fn from_polar_radians(orientation_radians: T, length: T) -> Self {
        let (s, c) = orientation_radians.sin_cos();
        vec2(c * length, s * length)
    }

    /// Uniformly scale the vector by `scale_factor`.
    #[inline]
    pub fn scale(&self, scale_factor: T) -> Self {
        vec2(scale_factor * self.x, scale_factor * self.y)
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Compute the perpendicular dot product (`self.x * other.y - self.y * other.x`), i.e. the z
    /// component of the 3D cross product.
    #[inline]
    pub fn perp_dot(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Squared length of the vector.
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    /// Length of the vector.
    #[inline]
    pub fn length(&self) -> T {
        self.dot(*self).sqrt()
    }

    /// Normalize the vector (length = 1). A zero length vector normalizes to the zero vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use collision_kernel::core::math::*;
    /// assert!(Vector2::new(3.0, 4.0).normalize().fuzzy_eq(Vector2::new(0.6, 0.8)));
    /// assert_eq!(Vector2::<f64>::zero().normalize(), Vector2::zero());
    /// ```
    #[inline]
    pub fn normalize(&self) -> Self {
        let length = self.length();
        if length == T::zero() {
            return Vector2::zero();
        }

        self.scale(T::one() / length)
    }

    /// Orientation of the vector in degrees, counter clockwise from +X in `(-180, 180]`.
    #[inline]
    pub fn orientation_degrees(&self) -> T {
        self.orientation_radians().to_degrees()
    }

    /// Orientation of the vector in radians, counter clockwise from +X in `(-PI, PI]`.
    #[inline]
    pub fn orientation_radians(&self) -> T {
        T::atan2(self.y, self.x)
    }

    /// Fuzzy equal comparison with another vector using `fuzzy_epsilon` given.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another vector using T::fuzzy_epsilon().
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }

    /// Create perpendicular vector (rotated +90 degrees).
    #[inline]
    pub fn perp(&self) -> Self {
        vec2(-self.y, self.x)
    }

    /// Same as [Vector2::perp].
    #[inline]
    pub fn rotated_90(&self) -> Self {
        self.perp()
    }

    /// Vector rotated -90 degrees.
    #[inline]
    pub fn rotated_minus_90(&self) -> Self {
        vec2(self.y, -self.x)
    }

    /// Create perpendicular unit vector (length = 1).
    #[inline]
    pub fn unit_perp(&self) -> Self {
        self.perp().normalize()
    }

    /// Vector rotated counter clockwise by `degrees`.
    #[inline]
    pub fn rotated_degrees(&self, degrees: T) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        vec2(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    /// Rotate this point around an `origin` point by some `angle` in radians.
    pub fn rotate_about(&self, origin: Self, angle: T) -> Self {
        let translated = self - origin;

        let (s, c) = angle.sin_cos();
        let rotated = vec2(
            translated.x * c - translated.y * s,
            translated.x * s + translated.y * c,
        );

        rotated + origin
    }

    /// Signed length of this vector along the direction of `onto`.
    #[inline]
    pub fn projected_length(&self, onto: Self) -> T {
        self.dot(onto.normalize())
    }

    /// Component of this vector parallel to `onto`.
    ///
    /// The tangential component is `v - v.project_onto(onto)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use collision_kernel::core::math::*;
    /// let v = Vector2::new(3.0, 4.0);
    /// let along = v.project_onto(Vector2::new(10.0, 0.0));
    /// assert_eq!(along, Vector2::new(3.0, 0.0));
    /// assert_eq!(v - along, Vector2::new(0.0, 4.0));
    /// ```
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

    /// Same direction with length clamped to at most `max_length`.
    #[inline]
    pub fn clamped_length(&self, max_length: T) -> Self {
        let length_squared = self.length_squared();
        if length_squared <= max_length * max_length {
            return *self;
        }

        self.scale(max_length / length_squared.sqrt())
    }
}

#[inline(always)]
pub fn vec2<T>(x: T, y: T) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(x, y)
}

macro_rules! ImplBinaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            #[inline]
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<&Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            #[inline]
            fn $op_func(self, rhs: &Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<'a, 'b, T: Real> ops::$op_trait<&'b Vector2<T>> for &'a Vector2<T> {
            type Output = Vector2<T>;
            #[inline]
            fn $op_func(self, rhs: &'b Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<Vector2<T>> for &Vector2<T> {
            type Output = Vector2<T>;
            #[inline]
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

ImplBinaryOp!(Add, add, +);
ImplBinaryOp!(Sub, sub, -);

macro_rules! ImplAssignOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Vector2<T>> for Vector2<T> {
            #[inline]
            fn $op_func(&mut self, rhs: Vector2<T>) {
                self.x = self.x $op rhs.x;
                self.y = self.y $op rhs.y;
            }
        }
    };
}

ImplAssignOp!(AddAssign, add_assign, +);
ImplAssignOp!(SubAssign, sub_assign, -);

macro_rules! ImplUnaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait for Vector2<T> {
            type Output = Vector2<T>;
            #[inline]
            fn $op_func(self) -> Self::Output {
                Vector2::new($op self.x, $op self.y)
            }
        }

        impl<T: Real> ops::$op_trait for &Vector2<T> {
            type Output = Vector2<T>;
            #[inline]
            fn $op_func(self) -> Self::Output {
                Vector2::new($op self.x, $op self.y)
            }
        }

    };
}

ImplUnaryOp!(Neg, neg, -);
