use super::{
    raycast2::{disc_entry_distance2, slab_entry_distance},
    RaycastResult3,
};
use crate::{
    core::{
        math::{Vector2, Vector3},
        traits::Real,
    },
    overlap::{is_point_inside_aabb3, is_point_inside_sphere3},
    shapes::{Aabb3, Cylinder3, Obb3, Plane3, ZCylinder3},
};

/// Cast a ray against an axis aligned box using the slab method.
///
/// One face per axis is tested (chosen by the sign of the direction on that axis) and its hit point
/// is checked against the other two axes' extents, inclusively. The nearest face hit wins.
pub fn raycast_vs_aabb3<T>(
    start: Vector3<T>,
    forward_normal: Vector3<T>,
    max_length: T,
    aabb: &Aabb3<T>,
) -> RaycastResult3<T>
where
    T: Real,
{
    if is_point_inside_aabb3(start, aabb) {
        return RaycastResult3::hit(start, forward_normal, max_length, T::zero(), -forward_normal);
    }

    let zero = T::zero();
    let in_x = |p: Vector3<T>| p.x >= aabb.mins.x && p.x <= aabb.maxs.x;
    let in_y = |p: Vector3<T>| p.y >= aabb.mins.y && p.y <= aabb.maxs.y;
    let in_z = |p: Vector3<T>| p.z >= aabb.mins.z && p.z <= aabb.maxs.z;

    let mut nearest: Option<(T, Vector3<T>)> = None;
    let mut consider = |distance: T, normal: Vector3<T>| {
        if distance < max_length && nearest.map_or(true, |(d, _)| distance < d) {
            nearest = Some((distance, normal));
        }
    };

    if let Some((distance, sign)) =
        slab_entry_distance(start.x, forward_normal.x, aabb.mins.x, aabb.maxs.x)
    {
        let p = start + forward_normal.scale(distance);
        if in_y(p) && in_z(p) {
            consider(distance, Vector3::new(sign, zero, zero));
        }
    }

    if let Some((distance, sign)) =
        slab_entry_distance(start.y, forward_normal.y, aabb.mins.y, aabb.maxs.y)
    {
        let p = start + forward_normal.scale(distance);
        if in_x(p) && in_z(p) {
            consider(distance, Vector3::new(zero, sign, zero));
        }
    }

    if let Some((distance, sign)) =
        slab_entry_distance(start.z, forward_normal.z, aabb.mins.z, aabb.maxs.z)
    {
        let p = start + forward_normal.scale(distance);
        if in_x(p) && in_y(p) {
            consider(distance, Vector3::new(zero, zero, sign));
        }
    }

    match nearest {
        Some((distance, normal)) => {
            RaycastResult3::hit(start, forward_normal, max_length, distance, normal)
        }
        None => RaycastResult3::miss(start, forward_normal, max_length),
    }
}

/// Cast a ray against an oriented box by casting in the box's local frame.
pub fn raycast_vs_obb3<T>(
    start: Vector3<T>,
    forward_normal: Vector3<T>,
    max_length: T,
    obb: &Obb3<T>,
) -> RaycastResult3<T>
where
    T: Real,
{
    let local = raycast_vs_aabb3(
        obb.local_pos_for_world_pos(start),
        obb.local_dir_for_world_dir(forward_normal),
        max_length,
        &obb.local_bounds(),
    );

    if !local.did_impact {
        return RaycastResult3::miss(start, forward_normal, max_length);
    }

    RaycastResult3::hit(
        start,
        forward_normal,
        max_length,
        local.impact_distance,
        obb.world_dir_for_local_dir(local.impact_normal),
    )
}

/// Orthonormal frame with its origin at the cylinder's start cap and +Z along the axis.
fn cylinder_frame<T>(cylinder: &Cylinder3<T>) -> Obb3<T>
where
    T: Real,
{
    let (zero, one) = (T::zero(), T::one());
    let k_basis = cylinder.axis_normal();
    // any reference not close to parallel with the axis works
    let reference = if k_basis.z * k_basis.z > T::half() {
        Vector3::new(one, zero, zero)
    } else {
        Vector3::new(zero, zero, one)
    };

    let i_basis = reference.cross(k_basis).normalize();
    let j_basis = k_basis.cross(i_basis);
    let half_dimensions = Vector3::new(cylinder.radius, cylinder.radius, cylinder.height() * T::half());
    Obb3::new(cylinder.start, i_basis, j_basis, k_basis, half_dimensions)
}

/// Cast a ray against a capped cylinder with an arbitrary axis.
///
/// Works in a frame where the axis runs from local `z = 0` to `z = height`. The side wall is the 2D
/// disc cast on the XY projection of the ray, kept only where the hit lies within the height. Each
/// cap is a plane hit kept only inside the cap disc. The nearest candidate is transformed back.
pub fn raycast_vs_cylinder3<T>(
    start: Vector3<T>,
    forward_normal: Vector3<T>,
    max_length: T,
    cylinder: &Cylinder3<T>,
) -> RaycastResult3<T>
where
    T: Real,
{
    let zero = T::zero();
    let frame = cylinder_frame(cylinder);
    let height = cylinder.height();
    let radius = cylinder.radius;
    let local_start = frame.local_pos_for_world_pos(start);
    let local_forward = frame.local_dir_for_world_dir(forward_normal);

    if local_start.z > zero
        && local_start.z < height
        && local_start.xy().length_squared() < radius * radius
    {
        return RaycastResult3::hit(start, forward_normal, max_length, zero, -forward_normal);
    }

    let mut nearest: Option<(T, Vector3<T>)> = None;
    let mut consider = |distance: T, local_normal: Vector3<T>| {
        if distance < max_length && nearest.map_or(true, |(d, _)| distance < d) {
            nearest = Some((distance, local_normal));
        }
    };

    // side wall, the XY projection of a unit ray moves `planar_speed` per unit of distance
    let planar_forward = local_forward.xy();
    let planar_speed = planar_forward.length();
    if !planar_speed.fuzzy_eq_zero() {
        let planar_forward = planar_forward.scale(T::one() / planar_speed);
        if let Some(planar_distance) =
            disc_entry_distance2(local_start.xy(), planar_forward, Vector2::zero(), radius)
        {
            let distance = planar_distance / planar_speed;
            let z = local_start.z + local_forward.z * distance;
            if distance >= zero && z >= zero && z <= height {
                let hit_xy = local_start.xy() + planar_forward.scale(planar_distance);
                consider(distance, Vector3::from_xy(hit_xy.normalize(), zero));
            }
        }
    }

    // caps
    if let Some((distance, sign)) = slab_entry_distance(local_start.z, local_forward.z, zero, height)
    {
        let hit_xy = local_start.xy() + local_forward.xy().scale(distance);
        if hit_xy.length_squared() <= radius * radius {
            consider(distance, Vector3::new(zero, zero, sign));
        }
    }

    match nearest {
        Some((distance, local_normal)) => RaycastResult3::hit(
            start,
            forward_normal,
            max_length,
            distance,
            frame.world_dir_for_local_dir(local_normal),
        ),
        None => RaycastResult3::miss(start, forward_normal, max_length),
    }
}

/// Cast a ray against a Z aligned cylinder, see [raycast_vs_cylinder3].
#[inline]
pub fn raycast_vs_z_cylinder3<T>(
    start: Vector3<T>,
    forward_normal: Vector3<T>,
    max_length: T,
    cylinder: &ZCylinder3<T>,
) -> RaycastResult3<T>
where
    T: Real,
{
    raycast_vs_cylinder3(start, forward_normal, max_length, &cylinder.to_cylinder3())
}

/// Cast a ray against a sphere, the 3D counterpart of
/// [raycast_vs_disc2](crate::raycast::raycast_vs_disc2).
pub fn raycast_vs_sphere3<T>(
    start: Vector3<T>,
    forward_normal: Vector3<T>,
    max_length: T,
    sphere_center: Vector3<T>,
    sphere_radius: T,
) -> RaycastResult3<T>
where
    T: Real,
{
    if is_point_inside_sphere3(start, sphere_center, sphere_radius) {
        return RaycastResult3::hit(start, forward_normal, max_length, T::zero(), -forward_normal);
    }

    let miss = RaycastResult3::miss(start, forward_normal, max_length);
    let along = (sphere_center - start).dot(forward_normal);
    let closest_on_line = start + forward_normal.scale(along);
    let altitude_squared = (sphere_center - closest_on_line).length_squared();
    let radius_squared = sphere_radius * sphere_radius;
    if altitude_squared >= radius_squared {
        return miss;
    }

    let distance = along - (radius_squared - altitude_squared).sqrt();
    if distance <= T::zero() || distance >= max_length {
        return miss;
    }

    let impact_position = start + forward_normal.scale(distance);
    let impact_normal = (impact_position - sphere_center).normalize();
    RaycastResult3::hit(start, forward_normal, max_length, distance, impact_normal)
}

/// Cast a ray against an infinite plane from either side.
///
/// The impact normal faces the side the ray starts on. A ray starting on the plane hits at distance
/// 0 with the normal opposing the ray, a ray parallel to the plane misses.
pub fn raycast_vs_plane3<T>(
    start: Vector3<T>,
    forward_normal: Vector3<T>,
    max_length: T,
    plane: &Plane3<T>,
) -> RaycastResult3<T>
where
    T: Real,
{
    let miss = RaycastResult3::miss(start, forward_normal, max_length);
    let altitude = plane.altitude_of_point(start);
    let approach = plane.normal.dot(forward_normal);
    if approach.fuzzy_eq_zero() {
        return miss;
    }

    let distance = -altitude / approach;
    if distance < T::zero() || distance >= max_length {
        return miss;
    }

    let facing_front = if altitude == T::zero() {
        approach < T::zero()
    } else {
        altitude > T::zero()
    };

    let impact_normal = if facing_front {
        plane.normal
    } else {
        -plane.normal
    };

    RaycastResult3::hit(start, forward_normal, max_length, distance, impact_normal)
}
