use crate::{
    core::{
        math::{dist_squared2, dist_squared3, Vector2, Vector3},
        traits::Real,
    },
    nearest::{
        nearest_point_on_aabb2, nearest_point_on_aabb3, nearest_point_on_line_segment2,
        nearest_point_on_obb2, nearest_point_on_obb3, nearest_point_on_z_cylinder3,
    },
    overlap::{is_point_inside_disc2, is_point_inside_sphere3},
    shapes::{Aabb2, Aabb3, Capsule2, Obb2, Obb3, Plane3, ZCylinder3},
};

/// Returns true if the two discs overlap, discs that only touch do not overlap.
///
/// Compares squared distance against the squared radius sum (no square root).
#[inline]
pub fn do_discs_overlap2<T>(center_a: Vector2<T>, radius_a: T, center_b: Vector2<T>, radius_b: T) -> bool
where
    T: Real,
{
    let radius_sum = radius_a + radius_b;
    dist_squared2(center_a, center_b) < radius_sum * radius_sum
}

#[inline]
pub fn do_spheres_overlap3<T>(center_a: Vector3<T>, radius_a: T, center_b: Vector3<T>, radius_b: T) -> bool
where
    T: Real,
{
    let radius_sum = radius_a + radius_b;
    dist_squared3(center_a, center_b) < radius_sum * radius_sum
}

/// Separating axis test on the 2 world axes, boxes that share an edge do not overlap.
///
/// # Examples
///
/// ```
/// # use collision_kernel::overlap::*;
/// # use collision_kernel::shapes::Aabb2;
/// let a = Aabb2::from_coords(0.0, 0.0, 1.0, 1.0);
/// assert!(do_aabbs_overlap2(&a, &Aabb2::from_coords(0.5, 0.5, 2.0, 2.0)));
/// assert!(!do_aabbs_overlap2(&a, &Aabb2::from_coords(1.0, 0.0, 2.0, 1.0)));
/// ```
#[inline]
pub fn do_aabbs_overlap2<T>(a: &Aabb2<T>, b: &Aabb2<T>) -> bool
where
    T: Real,
{
    if a.maxs.x <= b.mins.x {
        return false;
    }
    if a.mins.x >= b.maxs.x {
        return false;
    }
    if a.maxs.y <= b.mins.y {
        return false;
    }
    if a.mins.y >= b.maxs.y {
        return false;
    }

    true
}

#[inline]
pub fn do_aabbs_overlap3<T>(a: &Aabb3<T>, b: &Aabb3<T>) -> bool
where
    T: Real,
{
    if a.maxs.x <= b.mins.x {
        return false;
    }
    if a.mins.x >= b.maxs.x {
        return false;
    }
    if a.maxs.y <= b.mins.y {
        return false;
    }
    if a.mins.y >= b.maxs.y {
        return false;
    }
    if a.maxs.z <= b.mins.z {
        return false;
    }
    if a.mins.z >= b.maxs.z {
        return false;
    }

    true
}

#[inline]
pub fn do_disc_and_aabb_overlap2<T>(disc_center: Vector2<T>, disc_radius: T, aabb: &Aabb2<T>) -> bool
where
    T: Real,
{
    let nearest = nearest_point_on_aabb2(disc_center, aabb);
    is_point_inside_disc2(nearest, disc_center, disc_radius)
}

#[inline]
pub fn do_disc_and_obb_overlap2<T>(disc_center: Vector2<T>, disc_radius: T, obb: &Obb2<T>) -> bool
where
    T: Real,
{
    let nearest = nearest_point_on_obb2(disc_center, obb);
    is_point_inside_disc2(nearest, disc_center, disc_radius)
}

#[inline]
pub fn do_disc_and_capsule_overlap2<T>(
    disc_center: Vector2<T>,
    disc_radius: T,
    capsule: &Capsule2<T>,
) -> bool
where
    T: Real,
{
    let on_bone = nearest_point_on_line_segment2(disc_center, &capsule.bone);
    do_discs_overlap2(disc_center, disc_radius, on_bone, capsule.radius)
}

#[inline]
pub fn do_sphere_and_aabb_overlap3<T>(sphere_center: Vector3<T>, sphere_radius: T, aabb: &Aabb3<T>) -> bool
where
    T: Real,
{
    let nearest = nearest_point_on_aabb3(sphere_center, aabb);
    is_point_inside_sphere3(nearest, sphere_center, sphere_radius)
}

#[inline]
pub fn do_sphere_and_obb_overlap3<T>(sphere_center: Vector3<T>, sphere_radius: T, obb: &Obb3<T>) -> bool
where
    T: Real,
{
    let nearest = nearest_point_on_obb3(sphere_center, obb);
    is_point_inside_sphere3(nearest, sphere_center, sphere_radius)
}

/// Returns true if the sphere straddles the plane (strictly less than one radius away).
#[inline]
pub fn do_sphere_and_plane_overlap3<T>(sphere_center: Vector3<T>, sphere_radius: T, plane: &Plane3<T>) -> bool
where
    T: Real,
{
    plane.altitude_of_point(sphere_center).abs() < sphere_radius
}

/// Returns true if the plane passes strictly through the box's interior.
///
/// The box's half extents are projected onto the plane normal to get its "radius" along that
/// normal.
#[inline]
pub fn do_aabb_and_plane_overlap3<T>(aabb: &Aabb3<T>, plane: &Plane3<T>) -> bool
where
    T: Real,
{
    let half = aabb.half_dimensions();
    let n = plane.normal;
    let projected_radius = half.x * n.x.abs() + half.y * n.y.abs() + half.z * n.z.abs();
    plane.altitude_of_point(aabb.center()).abs() < projected_radius
}

/// Z-cylinder vs AABB3, exclusive on every axis (caps touching a box face do not overlap).
#[inline]
pub fn do_z_cylinder_and_aabb_overlap3<T>(cylinder: &ZCylinder3<T>, aabb: &Aabb3<T>) -> bool
where
    T: Real,
{
    if cylinder.min_max_z.max <= aabb.mins.z || cylinder.min_max_z.min >= aabb.maxs.z {
        return false;
    }

    let footprint = Aabb2::new(aabb.mins.xy(), aabb.maxs.xy());
    do_disc_and_aabb_overlap2(cylinder.center_xy, cylinder.radius, &footprint)
}

#[inline]
pub fn do_z_cylinder_and_sphere_overlap3<T>(
    cylinder: &ZCylinder3<T>,
    sphere_center: Vector3<T>,
    sphere_radius: T,
) -> bool
where
    T: Real,
{
    let nearest = nearest_point_on_z_cylinder3(sphere_center, cylinder);
    is_point_inside_sphere3(nearest, sphere_center, sphere_radius)
}

/// Z-cylinder vs Z-cylinder. The Z test is the inclusive [FloatRange](crate::shapes::FloatRange)
/// overlap, so stacked cylinders whose caps touch count as overlapping when their discs overlap.
#[inline]
pub fn do_z_cylinders_overlap3<T>(a: &ZCylinder3<T>, b: &ZCylinder3<T>) -> bool
where
    T: Real,
{
    a.min_max_z.is_overlapping_with(&b.min_max_z)
        && do_discs_overlap2(a.center_xy, a.radius, b.center_xy, b.radius)
}
