use crate::core::traits::Real;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closed scalar interval `[min, max]`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FloatRange<T = f64> {
    pub min: T,
    pub max: T,
}

impl<T> FloatRange<T>
where
    T: Real,
{
    #[inline]
    pub fn new(min: T, max: T) -> Self {
        FloatRange { min, max }
    }

    #[inline]
    pub fn length(&self) -> T {
        self.max - self.min
    }

    /// Returns true if `value` lies in `[min, max]` (inclusive).
    #[inline]
    pub fn is_on_range(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    /// Returns true if the two closed ranges share at least one value, so ranges touching at an
    /// end point do overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// # use collision_kernel::shapes::FloatRange;
    /// let a = FloatRange::new(0.0, 1.0);
    /// assert!(a.is_overlapping_with(&FloatRange::new(0.5, 2.0)));
    /// assert!(a.is_overlapping_with(&FloatRange::new(1.0, 2.0)));
    /// assert!(!a.is_overlapping_with(&FloatRange::new(1.5, 2.0)));
    /// ```
    #[inline]
    pub fn is_overlapping_with(&self, other: &Self) -> bool {
        self.min <= other.max && self.max >= other.min
    }

    /// Grow the range (if needed) so it contains `value`.
    #[inline]
    pub fn stretch_to_include_value(&mut self, value: T) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }
}
