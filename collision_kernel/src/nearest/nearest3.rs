use crate::{
    core::{
        math::{clamp, Vector3},
        traits::Real,
    },
    nearest::nearest_point_on_disc2,
    shapes::{Aabb3, LineSegment3, Obb3, Plane3, ZCylinder3},
};

#[inline]
pub fn nearest_point_on_sphere3<T>(point: Vector3<T>, center: Vector3<T>, radius: T) -> Vector3<T>
where
    T: Real,
{
    let center_to_point = point - center;
    if center_to_point.length_squared() <= radius * radius {
        return point;
    }

    center + center_to_point.normalize().scale(radius)
}

#[inline]
pub fn nearest_point_on_aabb3<T>(point: Vector3<T>, aabb: &Aabb3<T>) -> Vector3<T>
where
    T: Real,
{
    Vector3::new(
        clamp(point.x, aabb.mins.x, aabb.maxs.x),
        clamp(point.y, aabb.mins.y, aabb.maxs.y),
        clamp(point.z, aabb.mins.z, aabb.maxs.z),
    )
}

#[inline]
pub fn nearest_point_on_obb3<T>(point: Vector3<T>, obb: &Obb3<T>) -> Vector3<T>
where
    T: Real,
{
    let local = obb.local_pos_for_world_pos(point);
    let local_nearest = nearest_point_on_aabb3(local, &obb.local_bounds());
    obb.world_pos_for_local_pos(local_nearest)
}

#[inline]
pub fn nearest_point_on_line_segment3<T>(point: Vector3<T>, segment: &LineSegment3<T>) -> Vector3<T>
where
    T: Real,
{
    let v = segment.displacement();
    let start_to_point = point - segment.start;
    if start_to_point.dot(v) <= T::zero() {
        return segment.start;
    }

    if (point - segment.end).dot(v) >= T::zero() {
        return segment.end;
    }

    segment.start + start_to_point.project_onto(v)
}

/// Clamp z into the cylinder's range and xy onto its disc.
#[inline]
pub fn nearest_point_on_z_cylinder3<T>(point: Vector3<T>, cylinder: &ZCylinder3<T>) -> Vector3<T>
where
    T: Real,
{
    let xy = nearest_point_on_disc2(point.xy(), cylinder.center_xy, cylinder.radius);
    let z = clamp(point.z, cylinder.min_max_z.min, cylinder.min_max_z.max);
    Vector3::from_xy(xy, z)
}

/// Orthogonal projection onto the plane.
#[inline]
pub fn nearest_point_on_plane3<T>(point: Vector3<T>, plane: &Plane3<T>) -> Vector3<T>
where
    T: Real,
{
    point - plane.normal.scale(plane.altitude_of_point(point))
}
