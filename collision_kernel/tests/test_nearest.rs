mod test_utils;

use collision_kernel::{
    assert_fuzzy_eq,
    nearest::*,
    shapes::{Aabb3, Capsule2, LineSegment2, LineSegment3, Obb3, Plane3, ZCylinder3},
};
use test_utils::*;

#[test]
fn disc_and_sphere() {
    let center = v2(1.0, 1.0);
    assert_fuzzy_eq!(nearest_point_on_disc2(v2(1.0, 6.0), center, 2.0), v2(1.0, 3.0));
    assert_fuzzy_eq!(nearest_point_on_disc2(v2(1.5, 1.5), center, 2.0), v2(1.5, 1.5));

    let origin = v3(0.0, 0.0, 0.0);
    assert_fuzzy_eq!(nearest_point_on_sphere3(v3(10.0, 0.0, 0.0), origin, 2.0), v3(2.0, 0.0, 0.0));
    assert_fuzzy_eq!(nearest_point_on_sphere3(v3(0.0, 1.0, 0.0), origin, 2.0), v3(0.0, 1.0, 0.0));
}

#[test]
fn boxes() {
    let room = room();
    assert_fuzzy_eq!(nearest_point_on_aabb2(v2(15.0, -3.0), &room), v2(10.0, 0.0));
    assert_fuzzy_eq!(nearest_point_on_aabb2(v2(4.0, 5.0), &room), v2(4.0, 5.0));

    // i basis points up, so the box is 4 tall and 2 wide
    let obb = rotated_box(v2(0.0, 0.0), v2(2.0, 1.0), 90.0);
    assert_fuzzy_eq!(nearest_point_on_obb2(v2(5.0, 0.0), &obb), v2(1.0, 0.0));
    assert_fuzzy_eq!(nearest_point_on_obb2(v2(0.0, 5.0), &obb), v2(0.0, 2.0));

    let aabb = Aabb3::new(v3(0.0, 0.0, 0.0), v3(1.0, 1.0, 1.0));
    assert_fuzzy_eq!(nearest_point_on_aabb3(v3(2.0, 0.5, -1.0), &aabb), v3(1.0, 0.5, 0.0));
    let obb3 = Obb3::from_aabb3(&aabb);
    assert_fuzzy_eq!(nearest_point_on_obb3(v3(2.0, 0.5, -1.0), &obb3), v3(1.0, 0.5, 0.0));
}

#[test]
fn segments_and_lines() {
    let segment = LineSegment2::new(v2(0.0, 0.0), v2(10.0, 0.0));
    assert_fuzzy_eq!(nearest_point_on_line_segment2(v2(-5.0, 3.0), &segment), v2(0.0, 0.0));
    assert_fuzzy_eq!(nearest_point_on_line_segment2(v2(15.0, 3.0), &segment), v2(10.0, 0.0));
    assert_fuzzy_eq!(nearest_point_on_line_segment2(v2(4.0, 7.0), &segment), v2(4.0, 0.0));
    assert_fuzzy_eq!(nearest_point_on_infinite_line2(v2(-5.0, 3.0), &segment), v2(-5.0, 0.0));

    let segment3 = LineSegment3::new(v3(0.0, 0.0, 0.0), v3(0.0, 0.0, 10.0));
    assert_fuzzy_eq!(nearest_point_on_line_segment3(v3(1.0, 1.0, 4.0), &segment3), v3(0.0, 0.0, 4.0));
    assert_fuzzy_eq!(nearest_point_on_line_segment3(v3(1.0, 1.0, 12.0), &segment3), v3(0.0, 0.0, 10.0));
}

#[test]
fn capsule() {
    let capsule = Capsule2::new(v2(0.0, 0.0), v2(10.0, 0.0), 1.0);
    assert_fuzzy_eq!(nearest_point_on_capsule2(v2(5.0, 5.0), &capsule), v2(5.0, 1.0));
    assert_fuzzy_eq!(nearest_point_on_capsule2(v2(5.0, 0.5), &capsule), v2(5.0, 0.5));
    assert_fuzzy_eq!(nearest_point_on_capsule2(v2(-3.0, 0.0), &capsule), v2(-1.0, 0.0));
}

#[test]
fn triangle_and_polygon() {
    let triangle = right_triangle();
    assert_fuzzy_eq!(nearest_point_on_triangle2(v2(4.0, 4.0), &triangle), v2(2.0, 2.0));
    assert_fuzzy_eq!(nearest_point_on_triangle2(v2(-1.0, -1.0), &triangle), v2(0.0, 0.0));
    assert_fuzzy_eq!(nearest_point_on_triangle2(v2(1.0, 1.0), &triangle), v2(1.0, 1.0));

    let square = square_polygon(0.0, 1.0);
    assert_fuzzy_eq!(nearest_point_on_convex_polygon2(v2(2.0, 0.5), &square), v2(1.0, 0.5));
    assert_fuzzy_eq!(nearest_point_on_convex_polygon2(v2(0.25, 0.75), &square), v2(0.25, 0.75));
}

#[test]
fn sectors() {
    let tip = v2(0.0, 0.0);
    assert_fuzzy_eq!(
        nearest_point_on_oriented_sector2(v2(20.0, 0.0), tip, 0.0, 90.0, 10.0),
        v2(10.0, 0.0),
        POS_EQ_EPS
    );
    assert_fuzzy_eq!(
        nearest_point_on_oriented_sector2(v2(0.0, 5.0), tip, 0.0, 90.0, 10.0),
        v2(2.5, 2.5),
        POS_EQ_EPS
    );
    assert_fuzzy_eq!(
        nearest_point_on_oriented_sector2(v2(0.0, -5.0), tip, 0.0, 90.0, 10.0),
        v2(2.5, -2.5),
        POS_EQ_EPS
    );
    // directly behind the tip both edges agree on the tip itself
    assert_fuzzy_eq!(
        nearest_point_on_oriented_sector2(v2(-5.0, 0.0), tip, 0.0, 90.0, 10.0),
        tip,
        POS_EQ_EPS
    );
    assert_fuzzy_eq!(
        nearest_point_on_directed_sector2(v2(1.0, 3.0), tip, v2(0.0, 1.0), 90.0, 10.0),
        v2(1.0, 3.0),
        POS_EQ_EPS
    );
}

#[test]
fn z_cylinder_and_plane() {
    let cylinder = ZCylinder3::new(v2(0.0, 0.0), 0.0, 10.0, 2.0);
    assert_fuzzy_eq!(nearest_point_on_z_cylinder3(v3(5.0, 0.0, 15.0), &cylinder), v3(2.0, 0.0, 10.0));
    assert_fuzzy_eq!(nearest_point_on_z_cylinder3(v3(0.0, 1.0, -3.0), &cylinder), v3(0.0, 1.0, 0.0));

    let ground = Plane3::new(v3(0.0, 0.0, 1.0), 0.0);
    assert_fuzzy_eq!(nearest_point_on_plane3(v3(1.0, 2.0, 3.0), &ground), v3(1.0, 2.0, 0.0));
    let raised = Plane3::new(v3(0.0, 0.0, 1.0), 5.0);
    assert_fuzzy_eq!(nearest_point_on_plane3(v3(1.0, 2.0, 3.0), &raised), v3(1.0, 2.0, 5.0));
}

#[test]
fn solvers_are_idempotent() {
    let capsule = Capsule2::new(v2(-2.0, 1.0), v2(3.0, 4.0), 0.75);
    let obb = rotated_box(v2(1.0, -1.0), v2(2.0, 0.5), 30.0);
    let triangle = right_triangle();
    let samples = [v2(7.0, -3.0), v2(-4.0, 9.0), v2(0.3, 0.2), v2(12.0, 12.0)];
    for p in samples {
        let once = nearest_point_on_capsule2(p, &capsule);
        assert!(nearest_point_on_capsule2(once, &capsule).fuzzy_eq_eps(once, POS_EQ_EPS));

        let once = nearest_point_on_obb2(p, &obb);
        assert!(nearest_point_on_obb2(once, &obb).fuzzy_eq_eps(once, POS_EQ_EPS));

        let once = nearest_point_on_triangle2(p, &triangle);
        assert!(nearest_point_on_triangle2(once, &triangle).fuzzy_eq_eps(once, POS_EQ_EPS));

        let once = nearest_point_on_oriented_sector2(p, v2(0.0, 0.0), 30.0, 120.0, 5.0);
        let twice = nearest_point_on_oriented_sector2(once, v2(0.0, 0.0), 30.0, 120.0, 5.0);
        assert!(twice.fuzzy_eq_eps(once, POS_EQ_EPS));
    }
}
