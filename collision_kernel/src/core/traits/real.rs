use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) that can be fuzzy compared and ordered.
///
/// Every vector, shape, and query in this crate is generic over `Real`. The `IndexableNum` bound
/// lets the same numeric type flow into the broad-phase spatial index (see [crate::index]).
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyOrd
    + std::default::Default
    + std::fmt::Debug
    + IndexableNum
    + Send
    + Sync
    + 'static
{
    fn pi() -> Self;

    fn two() -> Self;

    fn half() -> Self;

    /// Degrees in a half turn, used for angle wrapping in the degrees API.
    fn one_eighty() -> Self;

    /// Degrees in a full turn.
    fn three_sixty() -> Self;

    #[inline]
    fn min_value() -> Self {
        num_traits::real::Real::min_value()
    }

    #[inline]
    fn max_value() -> Self {
        num_traits::real::Real::max_value()
    }
}

macro_rules! impl_real {
    ($ty:ident) => {
        impl Real for $ty {
            #[inline]
            fn pi() -> Self {
                std::$ty::consts::PI
            }

            #[inline]
            fn two() -> Self {
                2.0
            }

            #[inline]
            fn half() -> Self {
                0.5
            }

            #[inline]
            fn one_eighty() -> Self {
                180.0
            }

            #[inline]
            fn three_sixty() -> Self {
                360.0
            }
        }
    };
}

impl_real!(f32);
impl_real!(f64);
