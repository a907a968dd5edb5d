use super::{
    push_disc_out_of_fixed_aabb2, push_disc_out_of_fixed_capsule2, push_disc_out_of_fixed_disc2,
    push_disc_out_of_fixed_obb2, push_disc_out_of_point2, push_discs_out_of_each_other2,
    push_sphere_out_of_fixed_sphere3, push_spheres_out_of_each_other3,
};
use crate::{
    core::{
        math::{Vector2, Vector3},
        traits::Real,
    },
    nearest::{nearest_point_on_aabb2, nearest_point_on_line_segment2, nearest_point_on_obb2},
    overlap::{
        do_disc_and_aabb_overlap2, do_disc_and_capsule_overlap2, do_disc_and_obb_overlap2,
        do_discs_overlap2, do_spheres_overlap3, is_point_inside_disc2,
    },
    shapes::{Aabb2, Capsule2, Obb2},
};
use tracing::trace;

/// Reflect the part of `velocity` moving into the surface with unit `normal`, scaled by
/// `elasticity`. Velocity already leaving the surface is left alone.
fn reflect_off_fixed_normal2<T>(velocity: &mut Vector2<T>, normal: Vector2<T>, elasticity: T)
where
    T: Real,
{
    let normal_speed = velocity.dot(normal);
    if normal_speed >= T::zero() {
        return;
    }

    let approach_speed = -normal_speed;
    let normal_velocity = normal.scale(normal_speed);
    let tangent_velocity = *velocity - normal_velocity;
    *velocity = tangent_velocity - normal_velocity.scale(elasticity);
    trace!(elasticity = ?elasticity, approach_speed = ?approach_speed, "applied bounce impulse");
}

fn reflect_off_fixed_normal3<T>(velocity: &mut Vector3<T>, normal: Vector3<T>, elasticity: T)
where
    T: Real,
{
    let normal_speed = velocity.dot(normal);
    if normal_speed >= T::zero() {
        return;
    }

    let approach_speed = -normal_speed;
    let normal_velocity = normal.scale(normal_speed);
    let tangent_velocity = *velocity - normal_velocity;
    *velocity = tangent_velocity - normal_velocity.scale(elasticity);
    trace!(elasticity = ?elasticity, approach_speed = ?approach_speed, "applied bounce impulse");
}

/// Bounce a moving disc off a fixed disc.
///
/// Returns false and changes nothing if the discs do not overlap. Otherwise the mobile disc is
/// pushed out and, if it is moving toward the fixed disc, the normal part of its velocity is
/// reflected and scaled by `mobile_elasticity * fixed_elasticity`. The tangential part is kept.
///
/// # Examples
///
/// ```
/// # use collision_kernel::core::math::*;
/// # use collision_kernel::resolve::*;
/// let mut center = Vector2::new(1.0, 0.0);
/// let mut velocity = Vector2::new(-5.0, 0.0);
/// assert!(bounce_disc_off_fixed_disc2(
///     &mut center,
///     1.0,
///     &mut velocity,
///     1.0,
///     Vector2::new(0.0, 0.0),
///     1.0,
///     1.0
/// ));
/// assert!(velocity.fuzzy_eq(Vector2::new(5.0, 0.0)));
/// ```
pub fn bounce_disc_off_fixed_disc2<T>(
    mobile_center: &mut Vector2<T>,
    mobile_radius: T,
    mobile_velocity: &mut Vector2<T>,
    mobile_elasticity: T,
    fixed_center: Vector2<T>,
    fixed_radius: T,
    fixed_elasticity: T,
) -> bool
where
    T: Real,
{
    if !do_discs_overlap2(*mobile_center, mobile_radius, fixed_center, fixed_radius) {
        return false;
    }

    push_disc_out_of_fixed_disc2(mobile_center, mobile_radius, fixed_center, fixed_radius);
    let normal = (*mobile_center - fixed_center).normalize();
    reflect_off_fixed_normal2(mobile_velocity, normal, mobile_elasticity * fixed_elasticity);
    true
}

/// Bounce two moving discs off each other.
///
/// Both discs are pushed apart evenly. If they are approaching along the contact normal, their
/// normal velocity components are exchanged (equal masses) and scaled by
/// `a_elasticity * b_elasticity`, tangential components are kept.
#[allow(clippy::too_many_arguments)]
pub fn bounce_discs_off_each_other2<T>(
    a_center: &mut Vector2<T>,
    a_radius: T,
    a_velocity: &mut Vector2<T>,
    a_elasticity: T,
    b_center: &mut Vector2<T>,
    b_radius: T,
    b_velocity: &mut Vector2<T>,
    b_elasticity: T,
) -> bool
where
    T: Real,
{
    if !do_discs_overlap2(*a_center, a_radius, *b_center, b_radius) {
        return false;
    }

    push_discs_out_of_each_other2(a_center, a_radius, b_center, b_radius);
    let normal = (*b_center - *a_center).normalize();
    let a_normal_speed = a_velocity.dot(normal);
    let b_normal_speed = b_velocity.dot(normal);
    let approach_speed = a_normal_speed - b_normal_speed;
    if approach_speed <= T::zero() {
        return true;
    }

    let elasticity = a_elasticity * b_elasticity;
    let a_tangent = *a_velocity - normal.scale(a_normal_speed);
    let b_tangent = *b_velocity - normal.scale(b_normal_speed);
    *a_velocity = a_tangent + normal.scale(b_normal_speed * elasticity);
    *b_velocity = b_tangent + normal.scale(a_normal_speed * elasticity);
    trace!(elasticity = ?elasticity, approach_speed = ?approach_speed, "applied pair bounce impulse");
    true
}

/// Bounce a moving disc off a fixed point.
pub fn bounce_disc_off_fixed_point2<T>(
    mobile_center: &mut Vector2<T>,
    mobile_radius: T,
    mobile_velocity: &mut Vector2<T>,
    mobile_elasticity: T,
    point: Vector2<T>,
    point_elasticity: T,
) -> bool
where
    T: Real,
{
    if !is_point_inside_disc2(point, *mobile_center, mobile_radius) {
        return false;
    }

    push_disc_out_of_point2(mobile_center, mobile_radius, point);
    let normal = (*mobile_center - point).normalize();
    reflect_off_fixed_normal2(mobile_velocity, normal, mobile_elasticity * point_elasticity);
    true
}

/// Bounce a moving disc off a fixed axis aligned box. The contact normal is taken from the nearest
/// point on the box after the push.
pub fn bounce_disc_off_fixed_aabb2<T>(
    mobile_center: &mut Vector2<T>,
    mobile_radius: T,
    mobile_velocity: &mut Vector2<T>,
    mobile_elasticity: T,
    aabb: &Aabb2<T>,
    fixed_elasticity: T,
) -> bool
where
    T: Real,
{
    if !do_disc_and_aabb_overlap2(*mobile_center, mobile_radius, aabb) {
        return false;
    }

    push_disc_out_of_fixed_aabb2(mobile_center, mobile_radius, aabb);
    let normal = (*mobile_center - nearest_point_on_aabb2(*mobile_center, aabb)).normalize();
    reflect_off_fixed_normal2(mobile_velocity, normal, mobile_elasticity * fixed_elasticity);
    true
}

pub fn bounce_disc_off_fixed_obb2<T>(
    mobile_center: &mut Vector2<T>,
    mobile_radius: T,
    mobile_velocity: &mut Vector2<T>,
    mobile_elasticity: T,
    obb: &Obb2<T>,
    fixed_elasticity: T,
) -> bool
where
    T: Real,
{
    if !do_disc_and_obb_overlap2(*mobile_center, mobile_radius, obb) {
        return false;
    }

    push_disc_out_of_fixed_obb2(mobile_center, mobile_radius, obb);
    let normal = (*mobile_center - nearest_point_on_obb2(*mobile_center, obb)).normalize();
    reflect_off_fixed_normal2(mobile_velocity, normal, mobile_elasticity * fixed_elasticity);
    true
}

pub fn bounce_disc_off_fixed_capsule2<T>(
    mobile_center: &mut Vector2<T>,
    mobile_radius: T,
    mobile_velocity: &mut Vector2<T>,
    mobile_elasticity: T,
    capsule: &Capsule2<T>,
    fixed_elasticity: T,
) -> bool
where
    T: Real,
{
    if !do_disc_and_capsule_overlap2(*mobile_center, mobile_radius, capsule) {
        return false;
    }

    push_disc_out_of_fixed_capsule2(mobile_center, mobile_radius, capsule);
    let on_bone = nearest_point_on_line_segment2(*mobile_center, &capsule.bone);
    let normal = (*mobile_center - on_bone).normalize();
    reflect_off_fixed_normal2(mobile_velocity, normal, mobile_elasticity * fixed_elasticity);
    true
}

pub fn bounce_sphere_off_fixed_sphere3<T>(
    mobile_center: &mut Vector3<T>,
    mobile_radius: T,
    mobile_velocity: &mut Vector3<T>,
    mobile_elasticity: T,
    fixed_center: Vector3<T>,
    fixed_radius: T,
    fixed_elasticity: T,
) -> bool
where
    T: Real,
{
    if !do_spheres_overlap3(*mobile_center, mobile_radius, fixed_center, fixed_radius) {
        return false;
    }

    push_sphere_out_of_fixed_sphere3(mobile_center, mobile_radius, fixed_center, fixed_radius);
    let normal = (*mobile_center - fixed_center).normalize();
    reflect_off_fixed_normal3(mobile_velocity, normal, mobile_elasticity * fixed_elasticity);
    true
}

/// 3D counterpart of [bounce_discs_off_each_other2].
#[allow(clippy::too_many_arguments)]
pub fn bounce_spheres_off_each_other3<T>(
    a_center: &mut Vector3<T>,
    a_radius: T,
    a_velocity: &mut Vector3<T>,
    a_elasticity: T,
    b_center: &mut Vector3<T>,
    b_radius: T,
    b_velocity: &mut Vector3<T>,
    b_elasticity: T,
) -> bool
where
    T: Real,
{
    if !do_spheres_overlap3(*a_center, a_radius, *b_center, b_radius) {
        return false;
    }

    push_spheres_out_of_each_other3(a_center, a_radius, b_center, b_radius);
    let normal = (*b_center - *a_center).normalize();
    let a_normal_speed = a_velocity.dot(normal);
    let b_normal_speed = b_velocity.dot(normal);
    let approach_speed = a_normal_speed - b_normal_speed;
    if approach_speed <= T::zero() {
        return true;
    }

    let elasticity = a_elasticity * b_elasticity;
    let a_tangent = *a_velocity - normal.scale(a_normal_speed);
    let b_tangent = *b_velocity - normal.scale(b_normal_speed);
    *a_velocity = a_tangent + normal.scale(b_normal_speed * elasticity);
    *b_velocity = b_tangent + normal.scale(a_normal_speed * elasticity);
    trace!(elasticity = ?elasticity, approach_speed = ?approach_speed, "applied pair bounce impulse");
    true
}
