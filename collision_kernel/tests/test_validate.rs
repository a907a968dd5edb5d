mod test_utils;

use collision_kernel::{
    core::math::Vector2,
    shapes::{
        Aabb2, Aabb3, Capsule2, ConvexPolygon2, Cylinder3, FloatRange, Obb2, Obb3, Plane2, Plane3,
        ZCylinder3,
    },
    validate::{ShapeError, Validate},
};
use test_utils::*;

#[test]
fn boxes_and_ranges() {
    assert_eq!(room().validate(), Ok(()));
    assert_eq!(
        Aabb2::from_coords(0.0, 5.0, 10.0, 1.0).validate(),
        Err(ShapeError::InvertedBounds { min: 5.0, max: 1.0 })
    );
    assert!(!Aabb2::from_coords(f64::NAN, 0.0, 1.0, 1.0).is_valid());

    assert!(Aabb3::new(v3(0.0, 0.0, 0.0), v3(1.0, 1.0, 1.0)).is_valid());
    assert!(!Aabb3::new(v3(0.0, 0.0, 2.0), v3(1.0, 1.0, 1.0)).is_valid());

    assert!(FloatRange::new(-1.0, 1.0).is_valid());
    assert!(FloatRange::new(3.0, 3.0).is_valid());
    assert!(!FloatRange::new(3.0, 2.0).is_valid());
}

#[test]
fn oriented_boxes() {
    assert!(rotated_box(v2(0.0, 0.0), v2(1.0, 2.0), 33.0).is_valid());
    assert!(matches!(
        Obb2::new(v2(0.0, 0.0), v2(2.0, 0.0), v2(1.0, 1.0)).validate(),
        Err(ShapeError::NonUnitVector { .. })
    ));
    assert_eq!(
        Obb2::new(v2(0.0, 0.0), v2(1.0, 0.0), v2(-1.0, 1.0)).validate(),
        Err(ShapeError::NegativeHalfDimension(-1.0))
    );

    let cube = Aabb3::new(v3(0.0, 0.0, 0.0), v3(1.0, 1.0, 1.0));
    assert!(Obb3::from_aabb3(&cube).is_valid());
    let skewed = Obb3::new(
        v3(0.0, 0.0, 0.0),
        v3(1.0, 0.0, 0.0),
        v3(1.0, 0.0, 0.0),
        v3(0.0, 0.0, 1.0),
        v3(1.0, 1.0, 1.0),
    );
    assert_eq!(
        skewed.validate(),
        Err(ShapeError::NonOrthogonalBasis { dot: 1.0 })
    );
}

#[test]
fn planes() {
    assert!(Plane2::from_points(v2(0.0, 0.0), v2(3.0, 4.0)).is_valid());
    assert!(!Plane2::new(v2(0.0, 0.5), 1.0).is_valid());
    assert!(Plane3::from_triangle(v3(0.0, 0.0, 0.0), v3(1.0, 0.0, 0.0), v3(0.0, 1.0, 0.0)).is_valid());
    assert!(!Plane3::new(v3(0.0, 0.0, 0.0), 0.0).is_valid());
}

#[test]
fn polygons() {
    assert!(square_polygon(0.0, 1.0).is_valid());

    let two_points = ConvexPolygon2::new(vec![Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0)]);
    assert_eq!(
        two_points.validate(),
        Err(ShapeError::TooFewVertexes { count: 2 })
    );
}

#[test]
fn polygon_winding_and_convexity() {
    let clockwise = ConvexPolygon2::new(vec![
        v2(0.0, 0.0),
        v2(0.0, 1.0),
        v2(1.0, 1.0),
        v2(1.0, 0.0),
    ]);
    assert!(matches!(
        clockwise.validate(),
        Err(ShapeError::NotCounterClockwise { .. })
    ));

    // arrow head, counter clockwise but with a reflex vertex at index 3
    let arrow = ConvexPolygon2::new(vec![
        v2(0.0, 0.0),
        v2(4.0, 2.0),
        v2(0.0, 4.0),
        v2(1.0, 2.0),
    ]);
    assert_eq!(arrow.validate(), Err(ShapeError::NotConvex { vertex_index: 3 }));

    // a collinear vertex is accepted
    let with_midpoint = ConvexPolygon2::new(vec![
        v2(0.0, 0.0),
        v2(1.0, 0.0),
        v2(2.0, 0.0),
        v2(2.0, 2.0),
        v2(0.0, 2.0),
    ]);
    assert!(with_midpoint.is_valid());
}

#[test]
fn round_shapes() {
    assert!(Capsule2::new(v2(0.0, 0.0), v2(1.0, 0.0), 0.5).is_valid());
    assert_eq!(
        Capsule2::new(v2(0.0, 0.0), v2(1.0, 0.0), -0.5).validate(),
        Err(ShapeError::NegativeRadius(-0.5))
    );

    assert!(Cylinder3::new(v3(0.0, 0.0, 0.0), v3(0.0, 0.0, 1.0), 1.0).is_valid());
    assert_eq!(
        Cylinder3::new(v3(1.0, 1.0, 1.0), v3(1.0, 1.0, 1.0), 1.0).validate(),
        Err(ShapeError::DegenerateAxis)
    );

    assert!(ZCylinder3::new(v2(0.0, 0.0), 0.0, 2.0, 1.0).is_valid());
    assert!(!ZCylinder3::new(v2(0.0, 0.0), 2.0, 0.0, 1.0).is_valid());
}

#[test]
fn errors_render_their_values() {
    let message = ShapeError::InvertedBounds { min: 5.0, max: 1.0 }.to_string();
    assert_eq!(message, "inverted bounds: min 5.0 is not <= max 1.0");
    let message = ShapeError::<f64>::TooFewVertexes { count: 2 }.to_string();
    assert_eq!(message, "polygon needs at least 3 vertexes, got 2");
}
