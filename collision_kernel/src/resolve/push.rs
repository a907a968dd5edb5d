use crate::{
    core::{
        math::{Vector2, Vector3},
        traits::Real,
    },
    nearest::{
        nearest_point_on_aabb2, nearest_point_on_aabb3, nearest_point_on_line_segment2,
    },
    overlap::do_aabbs_overlap2,
    shapes::{Aabb2, Aabb3, Capsule2, LineSegment2, Obb2},
};
use tracing::trace;

/// Push a disc so it no longer contains `point`.
///
/// Returns false (and leaves the disc alone) if the point is not strictly inside. Otherwise the
/// disc moves directly away from the point until the point is on its circle and true is returned.
/// A disc centered exactly on the point has no push direction, it reports the overlap but does not
/// move.
///
/// # Examples
///
/// ```
/// # use collision_kernel::core::math::*;
/// # use collision_kernel::resolve::*;
/// let mut center = Vector2::new(1.0, 0.0);
/// assert!(push_disc_out_of_point2(&mut center, 2.0, Vector2::new(0.0, 0.0)));
/// assert!(center.fuzzy_eq(Vector2::new(2.0, 0.0)));
/// ```
pub fn push_disc_out_of_point2<T>(disc_center: &mut Vector2<T>, disc_radius: T, point: Vector2<T>) -> bool
where
    T: Real,
{
    let offset = *disc_center - point;
    let dist_squared = offset.length_squared();
    if dist_squared >= disc_radius * disc_radius {
        return false;
    }

    let dist = dist_squared.sqrt();
    let penetration = disc_radius - dist;
    *disc_center += offset.normalize().scale(penetration);
    trace!(penetration = ?penetration, "pushed disc out of point");
    true
}

/// Push a mobile disc out of a fixed disc so the two are tangent.
///
/// # Examples
///
/// ```
/// # use collision_kernel::core::math::*;
/// # use collision_kernel::resolve::*;
/// let mut mobile = Vector2::new(1.0, 0.0);
/// assert!(push_disc_out_of_fixed_disc2(&mut mobile, 1.0, Vector2::new(0.0, 0.0), 1.0));
/// assert!(mobile.fuzzy_eq(Vector2::new(2.0, 0.0)));
/// ```
#[inline]
pub fn push_disc_out_of_fixed_disc2<T>(
    mobile_center: &mut Vector2<T>,
    mobile_radius: T,
    fixed_center: Vector2<T>,
    fixed_radius: T,
) -> bool
where
    T: Real,
{
    push_disc_out_of_point2(mobile_center, mobile_radius + fixed_radius, fixed_center)
}

/// Push two overlapping discs apart, each moves half the penetration depth.
pub fn push_discs_out_of_each_other2<T>(
    a_center: &mut Vector2<T>,
    a_radius: T,
    b_center: &mut Vector2<T>,
    b_radius: T,
) -> bool
where
    T: Real,
{
    let radius_sum = a_radius + b_radius;
    let offset = *b_center - *a_center;
    let dist_squared = offset.length_squared();
    if dist_squared >= radius_sum * radius_sum {
        return false;
    }

    let penetration = radius_sum - dist_squared.sqrt();
    let half_push = offset.normalize().scale(penetration * T::half());
    *a_center -= half_push;
    *b_center += half_push;
    trace!(penetration = ?penetration, "pushed discs out of each other");
    true
}

/// Push a disc out of a fixed axis aligned box.
///
/// A disc whose center is outside the box is pushed away from the nearest point on the box. A disc
/// whose center is inside (or on) the box leaves through the nearest face.
pub fn push_disc_out_of_fixed_aabb2<T>(disc_center: &mut Vector2<T>, disc_radius: T, aabb: &Aabb2<T>) -> bool
where
    T: Real,
{
    let nearest = nearest_point_on_aabb2(*disc_center, aabb);
    if nearest != *disc_center {
        return push_disc_out_of_point2(disc_center, disc_radius, nearest);
    }

    let c = *disc_center;
    let exits = [
        (c.x - aabb.mins.x, Vector2::new(aabb.mins.x - disc_radius, c.y)),
        (aabb.maxs.x - c.x, Vector2::new(aabb.maxs.x + disc_radius, c.y)),
        (c.y - aabb.mins.y, Vector2::new(c.x, aabb.mins.y - disc_radius)),
        (aabb.maxs.y - c.y, Vector2::new(c.x, aabb.maxs.y + disc_radius)),
    ];

    let mut best = exits[0];
    for exit in exits.iter().skip(1) {
        if exit.0 < best.0 {
            best = *exit;
        }
    }

    let penetration = best.0 + disc_radius;
    *disc_center = best.1;
    trace!(penetration = ?penetration, "pushed disc center out of box interior");
    true
}

/// Push a disc out of a fixed oriented box, same rules as [push_disc_out_of_fixed_aabb2] applied in
/// the box's local frame.
pub fn push_disc_out_of_fixed_obb2<T>(disc_center: &mut Vector2<T>, disc_radius: T, obb: &Obb2<T>) -> bool
where
    T: Real,
{
    let mut local_center = obb.local_pos_for_world_pos(*disc_center);
    if !push_disc_out_of_fixed_aabb2(&mut local_center, disc_radius, &obb.local_bounds()) {
        return false;
    }

    *disc_center = obb.world_pos_for_local_pos(local_center);
    true
}

#[inline]
pub fn push_disc_out_of_fixed_capsule2<T>(
    disc_center: &mut Vector2<T>,
    disc_radius: T,
    capsule: &Capsule2<T>,
) -> bool
where
    T: Real,
{
    let on_bone = nearest_point_on_line_segment2(*disc_center, &capsule.bone);
    push_disc_out_of_point2(disc_center, disc_radius + capsule.radius, on_bone)
}

#[inline]
pub fn push_disc_out_of_fixed_line_segment2<T>(
    disc_center: &mut Vector2<T>,
    disc_radius: T,
    segment: &LineSegment2<T>,
) -> bool
where
    T: Real,
{
    let nearest = nearest_point_on_line_segment2(*disc_center, segment);
    push_disc_out_of_point2(disc_center, disc_radius, nearest)
}

/// Keep a mobile disc entirely inside a fixed zone disc.
///
/// Returns false if the mobile disc is already fully inside. Otherwise its center is pulled toward
/// the zone center until the mobile disc touches the zone's circle from the inside. A mobile disc
/// larger than the zone ends up centered on it.
pub fn push_disc_into_fixed_disc2<T>(
    mobile_center: &mut Vector2<T>,
    mobile_radius: T,
    zone_center: Vector2<T>,
    zone_radius: T,
) -> bool
where
    T: Real,
{
    let allowed = zone_radius - mobile_radius;
    let allowed = if allowed < T::zero() { T::zero() } else { allowed };
    let offset = *mobile_center - zone_center;
    let dist_squared = offset.length_squared();
    if dist_squared <= allowed * allowed {
        return false;
    }

    let overshoot = dist_squared.sqrt() - allowed;
    *mobile_center = zone_center + offset.clamped_length(allowed);
    trace!(overshoot = ?overshoot, "pulled disc back into zone");
    true
}

fn push_sphere_out_of_point3<T>(sphere_center: &mut Vector3<T>, sphere_radius: T, point: Vector3<T>) -> bool
where
    T: Real,
{
    let offset = *sphere_center - point;
    let dist_squared = offset.length_squared();
    if dist_squared >= sphere_radius * sphere_radius {
        return false;
    }

    let penetration = sphere_radius - dist_squared.sqrt();
    *sphere_center += offset.normalize().scale(penetration);
    trace!(penetration = ?penetration, "pushed sphere out of point");
    true
}

#[inline]
pub fn push_sphere_out_of_fixed_sphere3<T>(
    mobile_center: &mut Vector3<T>,
    mobile_radius: T,
    fixed_center: Vector3<T>,
    fixed_radius: T,
) -> bool
where
    T: Real,
{
    push_sphere_out_of_point3(mobile_center, mobile_radius + fixed_radius, fixed_center)
}

pub fn push_spheres_out_of_each_other3<T>(
    a_center: &mut Vector3<T>,
    a_radius: T,
    b_center: &mut Vector3<T>,
    b_radius: T,
) -> bool
where
    T: Real,
{
    let radius_sum = a_radius + b_radius;
    let offset = *b_center - *a_center;
    let dist_squared = offset.length_squared();
    if dist_squared >= radius_sum * radius_sum {
        return false;
    }

    let penetration = radius_sum - dist_squared.sqrt();
    let half_push = offset.normalize().scale(penetration * T::half());
    *a_center -= half_push;
    *b_center += half_push;
    trace!(penetration = ?penetration, "pushed spheres out of each other");
    true
}

/// 3D counterpart of [push_disc_out_of_fixed_aabb2].
pub fn push_sphere_out_of_fixed_aabb3<T>(
    sphere_center: &mut Vector3<T>,
    sphere_radius: T,
    aabb: &Aabb3<T>,
) -> bool
where
    T: Real,
{
    let nearest = nearest_point_on_aabb3(*sphere_center, aabb);
    if nearest != *sphere_center {
        return push_sphere_out_of_point3(sphere_center, sphere_radius, nearest);
    }

    let c = *sphere_center;
    let r = sphere_radius;
    let exits = [
        (c.x - aabb.mins.x, Vector3::new(aabb.mins.x - r, c.y, c.z)),
        (aabb.maxs.x - c.x, Vector3::new(aabb.maxs.x + r, c.y, c.z)),
        (c.y - aabb.mins.y, Vector3::new(c.x, aabb.mins.y - r, c.z)),
        (aabb.maxs.y - c.y, Vector3::new(c.x, aabb.maxs.y + r, c.z)),
        (c.z - aabb.mins.z, Vector3::new(c.x, c.y, aabb.mins.z - r)),
        (aabb.maxs.z - c.z, Vector3::new(c.x, c.y, aabb.maxs.z + r)),
    ];

    let mut best = exits[0];
    for exit in exits.iter().skip(1) {
        if exit.0 < best.0 {
            best = *exit;
        }
    }

    let penetration = best.0 + r;
    *sphere_center = best.1;
    trace!(penetration = ?penetration, "pushed sphere center out of box interior");
    true
}

/// Translate `mobile` along the single world axis that separates it from `fixed` with the
/// smallest move. Boxes that only share an edge are not moved.
pub fn push_aabb2_out_of_fixed_aabb2<T>(mobile: &mut Aabb2<T>, fixed: &Aabb2<T>) -> bool
where
    T: Real,
{
    if !do_aabbs_overlap2(mobile, fixed) {
        return false;
    }

    let zero = T::zero();
    let moves = [
        Vector2::new(fixed.maxs.x - mobile.mins.x, zero),
        Vector2::new(fixed.mins.x - mobile.maxs.x, zero),
        Vector2::new(zero, fixed.maxs.y - mobile.mins.y),
        Vector2::new(zero, fixed.mins.y - mobile.maxs.y),
    ];

    let mut best = moves[0];
    for m in moves.iter().skip(1) {
        if m.length_squared() < best.length_squared() {
            best = *m;
        }
    }

    mobile.translate(best);
    trace!(penetration = ?best.length(), "pushed box out of box");
    true
}
