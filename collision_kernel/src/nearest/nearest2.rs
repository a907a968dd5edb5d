use crate::{
    core::{
        math::{angle_degrees_between_vectors2, clamp, dist_squared2, Vector2},
        traits::Real,
    },
    overlap::{is_point_inside_convex_polygon2, is_point_inside_triangle2},
    shapes::{Aabb2, Capsule2, ConvexPolygon2, LineSegment2, Obb2},
};

/// Nearest point on (or in) the disc at `center` with `radius`.
///
/// Points inside the disc are returned unchanged, outside points are pulled in along the
/// center-to-point direction until they sit on the circle.
///
/// # Examples
///
/// ```
/// # use collision_kernel::core::math::*;
/// # use collision_kernel::nearest::*;
/// let center = Vector2::new(0.0, 0.0);
/// assert!(nearest_point_on_disc2(Vector2::new(10.0, 0.0), center, 2.0).fuzzy_eq(Vector2::new(2.0, 0.0)));
/// assert!(nearest_point_on_disc2(Vector2::new(1.0, 1.0), center, 2.0).fuzzy_eq(Vector2::new(1.0, 1.0)));
/// ```
#[inline]
pub fn nearest_point_on_disc2<T>(point: Vector2<T>, center: Vector2<T>, radius: T) -> Vector2<T>
where
    T: Real,
{
    center + (point - center).clamped_length(radius)
}

/// Clamp each coordinate of `point` into the box.
#[inline]
pub fn nearest_point_on_aabb2<T>(point: Vector2<T>, aabb: &Aabb2<T>) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(
        clamp(point.x, aabb.mins.x, aabb.maxs.x),
        clamp(point.y, aabb.mins.y, aabb.maxs.y),
    )
}

/// Nearest point on the oriented box: clamp in the box's local frame, then go back to world.
#[inline]
pub fn nearest_point_on_obb2<T>(point: Vector2<T>, obb: &Obb2<T>) -> Vector2<T>
where
    T: Real,
{
    let local = obb.local_pos_for_world_pos(point);
    let local_nearest = nearest_point_on_aabb2(local, &obb.local_bounds());
    obb.world_pos_for_local_pos(local_nearest)
}

/// Orthogonal projection of `point` onto the infinite line through the segment's end points.
#[inline]
pub fn nearest_point_on_infinite_line2<T>(point: Vector2<T>, line: &LineSegment2<T>) -> Vector2<T>
where
    T: Real,
{
    line.start + (point - line.start).project_onto(line.displacement())
}

/// Nearest point on the line segment.
///
/// Points behind the start (negative dot product with the segment direction) snap to the start,
/// points past the end snap to the end, everything else projects onto the segment.
#[inline]
pub fn nearest_point_on_line_segment2<T>(point: Vector2<T>, segment: &LineSegment2<T>) -> Vector2<T>
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

#[inline]
pub fn nearest_point_on_capsule2<T>(point: Vector2<T>, capsule: &Capsule2<T>) -> Vector2<T>
where
    T: Real,
{
    let on_bone = nearest_point_on_line_segment2(point, &capsule.bone);
    let bone_to_point = point - on_bone;
    if bone_to_point.length_squared() < capsule.radius * capsule.radius {
        return point;
    }

    on_bone + bone_to_point.normalize().scale(capsule.radius)
}

/// Nearest point on a counter clockwise triangle.
pub fn nearest_point_on_triangle2<T>(point: Vector2<T>, triangle: &[Vector2<T>; 3]) -> Vector2<T>
where
    T: Real,
{
    if is_point_inside_triangle2(point, triangle) {
        return point;
    }

    let [a, b, c] = *triangle;
    nearest_of_edges(point, [(a, b), (b, c), (c, a)].into_iter())
}

/// Nearest point on a convex polygon, linear in the vertex count.
pub fn nearest_point_on_convex_polygon2<T>(
    point: Vector2<T>,
    polygon: &ConvexPolygon2<T>,
) -> Vector2<T>
where
    T: Real,
{
    if is_point_inside_convex_polygon2(point, polygon) {
        return point;
    }

    nearest_of_edges(point, polygon.edges())
}

fn nearest_of_edges<T, I>(point: Vector2<T>, edges: I) -> Vector2<T>
where
    T: Real,
    I: Iterator<Item = (Vector2<T>, Vector2<T>)>,
{
    let mut best = point;
    let mut best_dist_squared = Real::max_value();
    for (a, b) in edges {
        let candidate = nearest_point_on_line_segment2(point, &LineSegment2::new(a, b));
        let candidate_dist_squared = dist_squared2(point, candidate);
        if candidate_dist_squared < best_dist_squared {
            best = candidate;
            best_dist_squared = candidate_dist_squared;
        }
    }

    best
}

/// Nearest point on a sector whose forward direction is given as an orientation in degrees.
///
/// See [nearest_point_on_directed_sector2].
#[inline]
pub fn nearest_point_on_oriented_sector2<T>(
    point: Vector2<T>,
    sector_tip: Vector2<T>,
    sector_forward_degrees: T,
    sector_aperture_degrees: T,
    sector_radius: T,
) -> Vector2<T>
where
    T: Real,
{
    nearest_point_on_directed_sector2(
        point,
        sector_tip,
        Vector2::from_polar_degrees(sector_forward_degrees, T::one()),
        sector_aperture_degrees,
        sector_radius,
    )
}

/// Nearest point on a sector (pie slice) with its tip at `sector_tip`, opening symmetrically
/// around the unit `sector_forward_normal` by `sector_aperture_degrees` in total.
///
/// If the point's angular offset from forward is within half the aperture the point is clamped to
/// the disc, otherwise it is clamped to the bounding edge on its side of the forward direction.
///
/// # Examples
///
/// ```
/// # use collision_kernel::core::math::*;
/// # use collision_kernel::nearest::*;
/// let tip = Vector2::new(0.0, 0.0);
/// let forward = Vector2::new(1.0, 0.0);
/// // straight ahead and too far: clamped to the arc
/// let p = nearest_point_on_directed_sector2(Vector2::new(5.0, 0.0), tip, forward, 90.0, 2.0);
/// assert!(p.fuzzy_eq(Vector2::new(2.0, 0.0)));
/// // straight up: outside the 45 degree half aperture, clamped to the +45 degree edge
/// let p = nearest_point_on_directed_sector2(Vector2::new(0.0, 1.0), tip, forward, 90.0, 2.0);
/// assert!(p.fuzzy_eq(Vector2::new(0.5, 0.5)));
/// ```
pub fn nearest_point_on_directed_sector2<T>(
    point: Vector2<T>,
    sector_tip: Vector2<T>,
    sector_forward_normal: Vector2<T>,
    sector_aperture_degrees: T,
    sector_radius: T,
) -> Vector2<T>
where
    T: Real,
{
    let tip_to_point = point - sector_tip;
    let half_aperture = sector_aperture_degrees * T::half();
    let offset_degrees = angle_degrees_between_vectors2(sector_forward_normal, tip_to_point);
    if offset_degrees <= half_aperture {
        return nearest_point_on_disc2(point, sector_tip, sector_radius);
    }

    let edge_degrees = if sector_forward_normal.perp_dot(tip_to_point) >= T::zero() {
        half_aperture
    } else {
        -half_aperture
    };
    let edge_normal = sector_forward_normal.rotated_degrees(edge_degrees);
    let edge = LineSegment2::new(sector_tip, sector_tip + edge_normal.scale(sector_radius));
    nearest_point_on_line_segment2(point, &edge)
}
