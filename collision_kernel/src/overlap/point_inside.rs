use crate::{
    core::{
        math::{angle_degrees_between_vectors2, dist_squared2, dist_squared3, is_left, Vector2, Vector3},
        traits::Real,
    },
    nearest::nearest_point_on_line_segment2,
    shapes::{Aabb2, Aabb3, Capsule2, ConvexHull2, ConvexPolygon2, Obb2, Obb3, ZCylinder3},
};

// Every predicate in this file is strict: points exactly on the boundary are outside.

/// Returns true if `point` is strictly inside the disc.
///
/// # Examples
///
/// ```
/// # use collision_kernel::core::math::*;
/// # use collision_kernel::overlap::*;
/// let center = Vector2::new(0.0, 0.0);
/// assert!(is_point_inside_disc2(Vector2::new(0.5, 0.5), center, 1.0));
/// assert!(!is_point_inside_disc2(Vector2::new(1.0, 0.0), center, 1.0));
/// ```
#[inline]
pub fn is_point_inside_disc2<T>(point: Vector2<T>, disc_center: Vector2<T>, disc_radius: T) -> bool
where
    T: Real,
{
    dist_squared2(point, disc_center) < disc_radius * disc_radius
}

#[inline]
pub fn is_point_inside_aabb2<T>(point: Vector2<T>, aabb: &Aabb2<T>) -> bool
where
    T: Real,
{
    point.x > aabb.mins.x && point.x < aabb.maxs.x && point.y > aabb.mins.y && point.y < aabb.maxs.y
}

/// Projects the center-to-point vector onto each local axis and compares against the half
/// dimensions.
#[inline]
pub fn is_point_inside_obb2<T>(point: Vector2<T>, obb: &Obb2<T>) -> bool
where
    T: Real,
{
    let local = obb.local_pos_for_world_pos(point);
    local.x.abs() < obb.half_dimensions.x && local.y.abs() < obb.half_dimensions.y
}

#[inline]
pub fn is_point_inside_capsule2<T>(point: Vector2<T>, capsule: &Capsule2<T>) -> bool
where
    T: Real,
{
    let on_bone = nearest_point_on_line_segment2(point, &capsule.bone);
    is_point_inside_disc2(point, on_bone, capsule.radius)
}

/// Returns true if `point` is strictly inside the counter clockwise triangle.
#[inline]
pub fn is_point_inside_triangle2<T>(point: Vector2<T>, triangle: &[Vector2<T>; 3]) -> bool
where
    T: Real,
{
    let [a, b, c] = *triangle;
    is_left(a, b, point) && is_left(b, c, point) && is_left(c, a, point)
}

/// Returns true if `point` is strictly left of every edge of the counter clockwise polygon.
#[inline]
pub fn is_point_inside_convex_polygon2<T>(point: Vector2<T>, polygon: &ConvexPolygon2<T>) -> bool
where
    T: Real,
{
    polygon.edges().all(|(a, b)| is_left(a, b, point))
}

/// Returns true if `point` is strictly behind every plane of the hull.
#[inline]
pub fn is_point_inside_convex_hull2<T>(point: Vector2<T>, hull: &ConvexHull2<T>) -> bool
where
    T: Real,
{
    hull.planes
        .iter()
        .all(|plane| plane.altitude_of_point(point) < T::zero())
}

#[inline]
pub fn is_point_inside_oriented_sector2<T>(
    point: Vector2<T>,
    sector_tip: Vector2<T>,
    sector_forward_degrees: T,
    sector_aperture_degrees: T,
    sector_radius: T,
) -> bool
where
    T: Real,
{
    is_point_inside_directed_sector2(
        point,
        sector_tip,
        Vector2::from_polar_degrees(sector_forward_degrees, T::one()),
        sector_aperture_degrees,
        sector_radius,
    )
}

/// Returns true if `point` is strictly within `sector_radius` of the tip and strictly within half
/// the aperture of `sector_forward_normal`. The tip itself lies on both bounding edges and is
/// outside.
#[inline]
pub fn is_point_inside_directed_sector2<T>(
    point: Vector2<T>,
    sector_tip: Vector2<T>,
    sector_forward_normal: Vector2<T>,
    sector_aperture_degrees: T,
    sector_radius: T,
) -> bool
where
    T: Real,
{
    if point == sector_tip || !is_point_inside_disc2(point, sector_tip, sector_radius) {
        return false;
    }

    let offset_degrees = angle_degrees_between_vectors2(sector_forward_normal, point - sector_tip);
    offset_degrees < sector_aperture_degrees * T::half()
}

#[inline]
pub fn is_point_inside_sphere3<T>(point: Vector3<T>, sphere_center: Vector3<T>, sphere_radius: T) -> bool
where
    T: Real,
{
    dist_squared3(point, sphere_center) < sphere_radius * sphere_radius
}

#[inline]
pub fn is_point_inside_aabb3<T>(point: Vector3<T>, aabb: &Aabb3<T>) -> bool
where
    T: Real,
{
    point.x > aabb.mins.x
        && point.x < aabb.maxs.x
        && point.y > aabb.mins.y
        && point.y < aabb.maxs.y
        && point.z > aabb.mins.z
        && point.z < aabb.maxs.z
}

#[inline]
pub fn is_point_inside_obb3<T>(point: Vector3<T>, obb: &Obb3<T>) -> bool
where
    T: Real,
{
    let local = obb.local_pos_for_world_pos(point);
    local.x.abs() < obb.half_dimensions.x
        && local.y.abs() < obb.half_dimensions.y
        && local.z.abs() < obb.half_dimensions.z
}

#[inline]
pub fn is_point_inside_z_cylinder3<T>(point: Vector3<T>, cylinder: &ZCylinder3<T>) -> bool
where
    T: Real,
{
    point.z > cylinder.min_max_z.min
        && point.z < cylinder.min_max_z.max
        && is_point_inside_disc2(point.xy(), cylinder.center_xy, cylinder.radius)
}
