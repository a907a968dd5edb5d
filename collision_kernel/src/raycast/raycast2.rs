use super::RaycastResult2;
use crate::{
    core::{math::Vector2, traits::Real},
    overlap::{is_point_inside_aabb2, is_point_inside_convex_hull2, is_point_inside_disc2},
    shapes::{Aabb2, ConvexHull2, LineSegment2, Obb2},
};

/// Distance along the ray to where its line enters the circle, `None` if the line misses or only
/// grazes the circle.
///
/// The distance is negative when the entry point is behind `start`, callers decide what range they
/// accept. No shortcut is taken for a `start` inside the circle.
#[inline]
pub(crate) fn disc_entry_distance2<T>(
    start: Vector2<T>,
    forward_normal: Vector2<T>,
    disc_center: Vector2<T>,
    disc_radius: T,
) -> Option<T>
where
    T: Real,
{
    let to_center = disc_center - start;
    let along = to_center.dot(forward_normal);
    let altitude = forward_normal.perp_dot(to_center);
    let radius_squared = disc_radius * disc_radius;
    let altitude_squared = altitude * altitude;
    if altitude_squared >= radius_squared {
        return None;
    }

    Some(along - (radius_squared - altitude_squared).sqrt())
}

/// Distance to the one axis aligned face a ray moving with `forward` can enter through, together
/// with the sign of that face's outward normal. `None` if the ray does not move on this axis or the
/// face is behind the start.
#[inline]
pub(crate) fn slab_entry_distance<T>(start: T, forward: T, min: T, max: T) -> Option<(T, T)>
where
    T: Real,
{
    let (face, normal_sign) = if forward > T::zero() {
        (min, -T::one())
    } else if forward < T::zero() {
        (max, T::one())
    } else {
        return None;
    };

    let distance = (face - start) / forward;
    if distance < T::zero() {
        return None;
    }

    Some((distance, normal_sign))
}

/// Cast a ray against a disc.
///
/// # Examples
///
/// ```
/// # use collision_kernel::core::math::*;
/// # use collision_kernel::raycast::*;
/// let result = raycast_vs_disc2(
///     Vector2::new(-10.0, 0.0),
///     Vector2::new(1.0, 0.0),
///     20.0,
///     Vector2::new(0.0, 0.0),
///     5.0,
/// );
/// assert!(result.did_impact);
/// assert_eq!(result.impact_distance, 5.0);
/// assert!(result.impact_position.fuzzy_eq(Vector2::new(-5.0, 0.0)));
/// assert!(result.impact_normal.fuzzy_eq(Vector2::new(-1.0, 0.0)));
/// ```
pub fn raycast_vs_disc2<T>(
    start: Vector2<T>,
    forward_normal: Vector2<T>,
    max_length: T,
    disc_center: Vector2<T>,
    disc_radius: T,
) -> RaycastResult2<T>
where
    T: Real,
{
    if is_point_inside_disc2(start, disc_center, disc_radius) {
        return RaycastResult2::hit(start, forward_normal, max_length, T::zero(), -forward_normal);
    }

    match disc_entry_distance2(start, forward_normal, disc_center, disc_radius) {
        Some(distance) if distance > T::zero() && distance < max_length => {
            let impact_position = start + forward_normal.scale(distance);
            let impact_normal = (impact_position - disc_center).normalize();
            RaycastResult2::hit(start, forward_normal, max_length, distance, impact_normal)
        }
        _ => RaycastResult2::miss(start, forward_normal, max_length),
    }
}

/// Cast a ray against a line segment. The impact normal faces the side the ray came from.
///
/// A segment whose end points are both on one side of the ray's line (or touching it) is a miss,
/// so rays running along the segment never hit it.
pub fn raycast_vs_line_segment2<T>(
    start: Vector2<T>,
    forward_normal: Vector2<T>,
    max_length: T,
    segment: &LineSegment2<T>,
) -> RaycastResult2<T>
where
    T: Real,
{
    let start_altitude = forward_normal.perp_dot(segment.start - start);
    let end_altitude = forward_normal.perp_dot(segment.end - start);
    if start_altitude * end_altitude >= T::zero() {
        return RaycastResult2::miss(start, forward_normal, max_length);
    }

    let fraction = start_altitude / (start_altitude - end_altitude);
    let impact_position = segment.start + segment.displacement().scale(fraction);
    let distance = (impact_position - start).dot(forward_normal);
    if distance < T::zero() || distance >= max_length {
        return RaycastResult2::miss(start, forward_normal, max_length);
    }

    let mut impact_normal = segment.displacement().unit_perp();
    if impact_normal.dot(forward_normal) > T::zero() {
        impact_normal = -impact_normal;
    }

    RaycastResult2::hit(start, forward_normal, max_length, distance, impact_normal)
}

/// Cast a ray against an axis aligned box.
///
/// Only the face on each axis that the ray direction allows can be entered, so at most two faces
/// are tested. Face extents are inclusive, a ray through a corner hits, unlike
/// [raycast_vs_line_segment2] which misses when it only touches an end point.
pub fn raycast_vs_aabb2<T>(
    start: Vector2<T>,
    forward_normal: Vector2<T>,
    max_length: T,
    aabb: &Aabb2<T>,
) -> RaycastResult2<T>
where
    T: Real,
{
    if is_point_inside_aabb2(start, aabb) {
        return RaycastResult2::hit(start, forward_normal, max_length, T::zero(), -forward_normal);
    }

    let mut nearest: Option<(T, Vector2<T>)> = None;
    let mut consider = |distance: T, normal: Vector2<T>| {
        if distance < max_length && nearest.map_or(true, |(d, _)| distance < d) {
            nearest = Some((distance, normal));
        }
    };

    if let Some((distance, sign)) =
        slab_entry_distance(start.x, forward_normal.x, aabb.mins.x, aabb.maxs.x)
    {
        let y = start.y + forward_normal.y * distance;
        if y >= aabb.mins.y && y <= aabb.maxs.y {
            consider(distance, Vector2::new(sign, T::zero()));
        }
    }

    if let Some((distance, sign)) =
        slab_entry_distance(start.y, forward_normal.y, aabb.mins.y, aabb.maxs.y)
    {
        let x = start.x + forward_normal.x * distance;
        if x >= aabb.mins.x && x <= aabb.maxs.x {
            consider(distance, Vector2::new(T::zero(), sign));
        }
    }

    match nearest {
        Some((distance, normal)) => {
            RaycastResult2::hit(start, forward_normal, max_length, distance, normal)
        }
        None => RaycastResult2::miss(start, forward_normal, max_length),
    }
}

/// Cast a ray against an oriented box by casting in the box's local frame.
pub fn raycast_vs_obb2<T>(
    start: Vector2<T>,
    forward_normal: Vector2<T>,
    max_length: T,
    obb: &Obb2<T>,
) -> RaycastResult2<T>
where
    T: Real,
{
    let local = raycast_vs_aabb2(
        obb.local_pos_for_world_pos(start),
        obb.local_dir_for_world_dir(forward_normal),
        max_length,
        &obb.local_bounds(),
    );

    if !local.did_impact {
        return RaycastResult2::miss(start, forward_normal, max_length);
    }

    RaycastResult2::hit(
        start,
        forward_normal,
        max_length,
        local.impact_distance,
        obb.world_dir_for_local_dir(local.impact_normal),
    )
}

/// Cast a ray against a convex hull by clipping it against every half-plane.
///
/// The ray is clipped to `[enter, exit]`, planes facing the ray move `enter` forward and planes
/// facing away move `exit` back. The last entering plane supplies the impact normal. A ray parallel
/// to a plane it is not strictly behind misses.
pub fn raycast_vs_convex_hull2<T>(
    start: Vector2<T>,
    forward_normal: Vector2<T>,
    max_length: T,
    hull: &ConvexHull2<T>,
) -> RaycastResult2<T>
where
    T: Real,
{
    if is_point_inside_convex_hull2(start, hull) {
        return RaycastResult2::hit(start, forward_normal, max_length, T::zero(), -forward_normal);
    }

    let miss = RaycastResult2::miss(start, forward_normal, max_length);
    let mut enter: Option<(T, Vector2<T>)> = None;
    let mut exit = max_length;
    for plane in hull.planes.iter() {
        let altitude = plane.altitude_of_point(start);
        let approach = plane.normal.dot(forward_normal);
        if approach.fuzzy_eq_zero() {
            if altitude >= T::zero() {
                return miss;
            }
            continue;
        }

        let distance = -altitude / approach;
        if approach < T::zero() {
            if enter.map_or(true, |(d, _)| distance > d) {
                enter = Some((distance, plane.normal));
            }
        } else if distance < exit {
            exit = distance;
        }
    }

    match enter {
        Some((distance, normal))
            if distance >= T::zero() && distance < max_length && distance <= exit =>
        {
            RaycastResult2::hit(start, forward_normal, max_length, distance, normal)
        }
        _ => miss,
    }
}
