#![allow(dead_code)]

pub use collision_kernel::core::traits::FuzzyEq;

use collision_kernel::{
    core::math::{Vector2, Vector3},
    raycast::{RaycastResult2, RaycastResult3},
    shapes::{Aabb2, ConvexPolygon2, Obb2},
};

/// Epsilon for comparing positions computed through a sqrt or a trig function.
pub const POS_EQ_EPS: f64 = 1e-6;

/// Counter clockwise square from `min` to `min + size` on both axes.
pub fn square_polygon(min: f64, size: f64) -> ConvexPolygon2<f64> {
    ConvexPolygon2::new(vec![
        Vector2::new(min, min),
        Vector2::new(min + size, min),
        Vector2::new(min + size, min + size),
        Vector2::new(min, min + size),
    ])
}

/// `[(0, 0), (4, 0), (0, 4)]`, counter clockwise.
pub fn right_triangle() -> [Vector2<f64>; 3] {
    [
        Vector2::new(0.0, 0.0),
        Vector2::new(4.0, 0.0),
        Vector2::new(0.0, 4.0),
    ]
}

/// The `(0, 0) - (10, 10)` room used across the 2D tests.
pub fn room() -> Aabb2<f64> {
    Aabb2::from_coords(0.0, 0.0, 10.0, 10.0)
}

/// Box centered at `center` rotated counter clockwise by `degrees`.
pub fn rotated_box(center: Vector2<f64>, half_dimensions: Vector2<f64>, degrees: f64) -> Obb2<f64> {
    Obb2::new(
        center,
        Vector2::from_polar_degrees(degrees, 1.0),
        half_dimensions,
    )
}

/// Checks the contract every 2D raycast hit must hold.
pub fn assert_hit_contract2(result: &RaycastResult2<f64>) {
    assert!(result.did_impact, "expected a hit: {:?}", result);
    assert!(
        result.impact_distance >= 0.0 && result.impact_distance < result.ray_max_length,
        "impact distance out of range: {:?}",
        result
    );
    assert!(
        result.impact_normal.length().fuzzy_eq_eps(1.0, POS_EQ_EPS),
        "impact normal is not unit length: {:?}",
        result
    );
    let expected_position =
        result.ray_start_position + result.ray_forward_normal.scale(result.impact_distance);
    assert!(result.impact_position.fuzzy_eq_eps(expected_position, POS_EQ_EPS));
}

/// Checks the contract every 3D raycast hit must hold.
pub fn assert_hit_contract3(result: &RaycastResult3<f64>) {
    assert!(result.did_impact, "expected a hit: {:?}", result);
    assert!(
        result.impact_distance >= 0.0 && result.impact_distance < result.ray_max_length,
        "impact distance out of range: {:?}",
        result
    );
    assert!(
        result.impact_normal.length().fuzzy_eq_eps(1.0, POS_EQ_EPS),
        "impact normal is not unit length: {:?}",
        result
    );
}

pub fn v3(x: f64, y: f64, z: f64) -> Vector3<f64> {
    Vector3::new(x, y, z)
}

pub fn v2(x: f64, y: f64) -> Vector2<f64> {
    Vector2::new(x, y)
}
