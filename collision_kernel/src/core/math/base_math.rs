use super::{Vector2, Vector3};
use crate::core::traits::Real;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use collision_kernel::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Clamp `value` into `[min, max]`.
#[inline]
pub fn clamp<T>(value: T, min: T, max: T) -> T
where
    T: Real,
{
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[inline]
pub fn clamp_zero_to_one<T>(value: T) -> T
where
    T: Real,
{
    clamp(value, T::zero(), T::one())
}

/// Linear interpolation, `fraction = 0` gives `start` and `fraction = 1` gives `end`.
#[inline]
pub fn lerp<T>(start: T, end: T, fraction: T) -> T
where
    T: Real,
{
    start + fraction * (end - start)
}

/// Inverse of [lerp]: where `value` sits between `range_start` and `range_end` (not clamped).
#[inline]
pub fn fraction_within_range<T>(value: T, range_start: T, range_end: T) -> T
where
    T: Real,
{
    (value - range_start) / (range_end - range_start)
}

/// Map `value` from the input range onto the output range (not clamped).
///
/// # Examples
///
/// ```
/// # use collision_kernel::core::math::*;
/// assert_eq!(range_map(5.0, 0.0, 10.0, 100.0, 200.0), 150.0);
/// assert_eq!(range_map(20.0, 0.0, 10.0, 100.0, 200.0), 300.0);
/// ```
#[inline]
pub fn range_map<T>(value: T, in_start: T, in_end: T, out_start: T, out_end: T) -> T
where
    T: Real,
{
    lerp(
        out_start,
        out_end,
        fraction_within_range(value, in_start, in_end),
    )
}

/// Same as [range_map] with the input fraction clamped to `[0, 1]`.
#[inline]
pub fn range_map_clamped<T>(value: T, in_start: T, in_end: T, out_start: T, out_end: T) -> T
where
    T: Real,
{
    let fraction = clamp_zero_to_one(fraction_within_range(value, in_start, in_end));
    lerp(out_start, out_end, fraction)
}

/// Normalize radians to be between `0` and `2PI`, e.g. `-PI/4` becomes `7PI/4` and `5PI` becomes
/// `PI`.
///
/// # Examples
///
/// ```
/// # use collision_kernel::core::math::*;
/// # use collision_kernel::core::traits::*;
/// use std::f64::consts::PI;
/// assert!(normalize_radians(5.0 * PI).fuzzy_eq(PI));
/// assert!(normalize_radians(-PI / 4.0).fuzzy_eq(7.0 * PI / 4.0));
/// assert!(normalize_radians(PI).fuzzy_eq(PI));
/// ```
#[inline]
pub fn normalize_radians<T>(angle: T) -> T
where
    T: Real,
{
    let tau = T::two() * T::pi();
    if angle >= T::zero() && angle <= tau {
        return angle;
    }

    angle - (angle / tau).floor() * tau
}

/// Signed shortest rotation in degrees from `start_degrees` to `end_degrees`, in `[-180, 180]`.
///
/// # Examples
///
/// ```
/// # use collision_kernel::core::math::*;
/// # use collision_kernel::core::traits::*;
/// assert!(shortest_angular_disp_degrees(350.0, 10.0).fuzzy_eq(20.0));
/// assert!(shortest_angular_disp_degrees(10.0, 350.0).fuzzy_eq(-20.0));
/// assert!(shortest_angular_disp_degrees(-720.0, 90.0).fuzzy_eq(90.0));
/// ```
#[inline]
pub fn shortest_angular_disp_degrees<T>(start_degrees: T, end_degrees: T) -> T
where
    T: Real,
{
    let mut disp = (end_degrees - start_degrees) % T::three_sixty();
    if disp > T::one_eighty() {
        disp = disp - T::three_sixty();
    } else if disp < -T::one_eighty() {
        disp = disp + T::three_sixty();
    }

    disp
}

/// Turn from `current_degrees` toward `goal_degrees` along the shortest direction by at most
/// `max_delta_degrees`.
#[inline]
pub fn turned_toward_degrees<T>(current_degrees: T, goal_degrees: T, max_delta_degrees: T) -> T
where
    T: Real,
{
    let disp = shortest_angular_disp_degrees(current_degrees, goal_degrees);
    if disp.abs() <= max_delta_degrees {
        return goal_degrees;
    }

    if disp > T::zero() {
        current_degrees + max_delta_degrees
    } else {
        current_degrees - max_delta_degrees
    }
}

/// Arc cosine of a cosine value that may have drifted slightly outside `[-1, 1]`.
#[inline]
fn acos_clamped<T>(cos_theta: T) -> T
where
    T: Real,
{
    clamp(cos_theta, -T::one(), T::one()).acos()
}

/// Unsigned angle in radians between `a` and `b`, `0` if either has zero length.
#[inline]
pub fn angle_radians_between_vectors2<T>(a: Vector2<T>, b: Vector2<T>) -> T
where
    T: Real,
{
    let length_product_squared = a.length_squared() * b.length_squared();
    if length_product_squared == T::zero() {
        return T::zero();
    }

    acos_clamped(a.dot(b) / length_product_squared.sqrt())
}

/// Unsigned angle in degrees between `a` and `b`, `0` if either has zero length.
///
/// # Examples
///
/// ```
/// # use collision_kernel::core::math::*;
/// # use collision_kernel::core::traits::*;
/// let a = Vector2::new(1.0, 0.0);
/// assert!(angle_degrees_between_vectors2(a, Vector2::new(0.0, 3.0)).fuzzy_eq(90.0));
/// assert!(angle_degrees_between_vectors2(a, Vector2::new(-2.0, 0.0)).fuzzy_eq(180.0));
/// assert_eq!(angle_degrees_between_vectors2(a, Vector2::zero()), 0.0);
/// ```
#[inline]
pub fn angle_degrees_between_vectors2<T>(a: Vector2<T>, b: Vector2<T>) -> T
where
    T: Real,
{
    angle_radians_between_vectors2(a, b).to_degrees()
}

/// 3D version of [angle_radians_between_vectors2].
#[inline]
pub fn angle_radians_between_vectors3<T>(a: Vector3<T>, b: Vector3<T>) -> T
where
    T: Real,
{
    let length_product_squared = a.length_squared() * b.length_squared();
    if length_product_squared == T::zero() {
        return T::zero();
    }

    acos_clamped(a.dot(b) / length_product_squared.sqrt())
}

/// 3D version of [angle_degrees_between_vectors2].
#[inline]
pub fn angle_degrees_between_vectors3<T>(a: Vector3<T>, b: Vector3<T>) -> T
where
    T: Real,
{
    angle_radians_between_vectors3(a, b).to_degrees()
}

/// Distance squared between the points `p0` and `p1`.
#[inline]
pub fn dist_squared2<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d)
}

/// Distance squared between the points `p0` and `p1`.
#[inline]
pub fn dist_squared3<T>(p0: Vector3<T>, p1: Vector3<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d)
}

/// Returns true if `point` is strictly left of the direction vector `p1 - p0`.
///
/// # Examples
///
/// ```
/// # use collision_kernel::core::math::*;
/// let p0 = Vector2::new(1.0, 1.0);
/// let p1 = Vector2::new(2.0, 2.0);
/// assert!(is_left(p0, p1, Vector2::new(0.0, 1.0)));
/// assert!(!is_left(p0, p1, Vector2::new(1.0, 0.0)));
/// // coincident is not left
/// assert!(!is_left(p0, p1, Vector2::new(3.0, 3.0)));
/// ```
#[inline]
pub fn is_left<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> bool
where
    T: Real,
{
    (p1 - p0).perp_dot(point - p0) > T::zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn turning_is_capped() {
        assert!(turned_toward_degrees(0.0, 90.0, 30.0).fuzzy_eq(30.0));
        assert!(turned_toward_degrees(0.0, 270.0, 30.0).fuzzy_eq(-30.0));
        assert!(turned_toward_degrees(0.0, 20.0, 30.0).fuzzy_eq(20.0));
    }

    #[test]
    fn range_map_clamps() {
        assert!(range_map_clamped(20.0, 0.0, 10.0, 100.0, 200.0).fuzzy_eq(200.0));
        assert!(range_map_clamped(-5.0, 0.0, 10.0, 100.0, 200.0).fuzzy_eq(100.0));
        assert!(range_map(2.5, 0.0, 10.0, 0.0, 1.0).fuzzy_eq(0.25));
    }

    #[test]
    fn angle_between_3d() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let b = Vector3::new(1.0, 1.0, 0.0);
        assert!(angle_degrees_between_vectors3(a, b).fuzzy_eq_eps(45.0, 1e-6));
        assert_eq!(angle_degrees_between_vectors3(a, Vector3::zero()), 0.0);
    }
}
