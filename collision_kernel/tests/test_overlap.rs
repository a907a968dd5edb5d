mod test_utils;

mod test_point_inside {
    use super::test_utils::*;
    use collision_kernel::{
        overlap::*,
        shapes::{Aabb3, Capsule2, ConvexHull2, Obb3, ZCylinder3},
    };

    #[test]
    fn aabb2_interior_and_boundary() {
        let room = room();
        assert!(is_point_inside_aabb2(v2(5.0, 5.0), &room));
        assert!(!is_point_inside_aabb2(v2(10.0, 5.0), &room));
        assert!(!is_point_inside_aabb2(v2(0.0, 0.0), &room));
        assert!(!is_point_inside_aabb2(v2(11.0, 5.0), &room));
    }

    #[test]
    fn disc_boundary_is_outside() {
        let center = v2(2.0, 3.0);
        assert!(is_point_inside_disc2(v2(2.5, 3.0), center, 1.0));
        assert!(!is_point_inside_disc2(v2(3.0, 3.0), center, 1.0));
        assert!(!is_point_inside_disc2(v2(2.0, 4.5), center, 1.0));
    }

    #[test]
    fn rotated_obb2() {
        let obb = rotated_box(v2(0.0, 0.0), v2(1.0, 1.0), 45.0);
        // on the world x axis the box reaches out to sqrt(2)
        assert!(is_point_inside_obb2(v2(1.2, 0.0), &obb));
        assert!(!is_point_inside_obb2(v2(1.0, 1.0), &obb));
        assert!(!is_point_inside_obb2(v2(1.5, 0.0), &obb));
    }

    #[test]
    fn capsule() {
        let capsule = Capsule2::new(v2(0.0, 0.0), v2(10.0, 0.0), 1.0);
        assert!(is_point_inside_capsule2(v2(5.0, 0.5), &capsule));
        assert!(is_point_inside_capsule2(v2(-0.5, 0.0), &capsule));
        assert!(!is_point_inside_capsule2(v2(5.0, 1.0), &capsule));
        assert!(!is_point_inside_capsule2(v2(11.0, 0.0), &capsule));
    }

    #[test]
    fn triangle() {
        let triangle = right_triangle();
        assert!(is_point_inside_triangle2(v2(1.0, 1.0), &triangle));
        assert!(!is_point_inside_triangle2(v2(2.0, 0.0), &triangle));
        assert!(!is_point_inside_triangle2(v2(3.0, 3.0), &triangle));
    }

    #[test]
    fn convex_polygon_and_hull_agree() {
        let polygon = square_polygon(0.0, 2.0);
        let hull = ConvexHull2::from_convex_polygon(&polygon);
        for (point, inside) in [
            (v2(1.0, 1.0), true),
            (v2(0.1, 1.9), true),
            (v2(2.0, 1.0), false),
            (v2(1.0, 0.0), false),
            (v2(-1.0, 1.0), false),
        ] {
            assert_eq!(is_point_inside_convex_polygon2(point, &polygon), inside);
            assert_eq!(is_point_inside_convex_hull2(point, &hull), inside);
        }
    }

    #[test]
    fn sectors() {
        let tip = v2(0.0, 0.0);
        assert!(is_point_inside_oriented_sector2(v2(5.0, 1.0), tip, 0.0, 90.0, 10.0));
        assert!(!is_point_inside_oriented_sector2(v2(5.0, 6.0), tip, 0.0, 90.0, 10.0));
        assert!(!is_point_inside_oriented_sector2(v2(11.0, 0.0), tip, 0.0, 90.0, 10.0));
        assert!(!is_point_inside_oriented_sector2(v2(-5.0, 0.0), tip, 0.0, 90.0, 10.0));

        let up = v2(0.0, 1.0);
        assert!(is_point_inside_directed_sector2(v2(1.0, 5.0), tip, up, 90.0, 10.0));
        assert!(!is_point_inside_directed_sector2(v2(5.0, 1.0), tip, up, 90.0, 10.0));
        // oriented at 90 degrees is the same sector
        assert!(is_point_inside_oriented_sector2(v2(1.0, 5.0), tip, 90.0, 90.0, 10.0));
    }

    #[test]
    fn sector_tip_is_on_the_boundary() {
        let tip = v2(2.0, -3.0);
        assert!(!is_point_inside_directed_sector2(tip, tip, v2(1.0, 0.0), 90.0, 10.0));
        assert!(!is_point_inside_oriented_sector2(tip, tip, 45.0, 350.0, 10.0));
        assert!(is_point_inside_directed_sector2(v2(2.5, -3.0), tip, v2(1.0, 0.0), 90.0, 10.0));
    }

    #[test]
    fn points_in_3d() {
        let center = v3(0.0, 0.0, 0.0);
        assert!(is_point_inside_sphere3(v3(0.5, 0.5, 0.5), center, 1.0));
        assert!(!is_point_inside_sphere3(v3(0.0, 0.0, 1.0), center, 1.0));

        let aabb = Aabb3::new(v3(0.0, 0.0, 0.0), v3(1.0, 2.0, 3.0));
        assert!(is_point_inside_aabb3(v3(0.5, 1.0, 2.9), &aabb));
        assert!(!is_point_inside_aabb3(v3(0.5, 1.0, 3.0), &aabb));

        let obb = Obb3::from_aabb3(&aabb);
        assert!(is_point_inside_obb3(v3(0.5, 1.0, 2.9), &obb));
        assert!(!is_point_inside_obb3(v3(0.5, 2.0, 1.0), &obb));

        let cylinder = ZCylinder3::new(v2(0.0, 0.0), 0.0, 10.0, 2.0);
        assert!(is_point_inside_z_cylinder3(v3(1.0, 1.0, 5.0), &cylinder));
        assert!(!is_point_inside_z_cylinder3(v3(1.0, 1.0, 10.0), &cylinder));
        assert!(!is_point_inside_z_cylinder3(v3(2.0, 0.0, 5.0), &cylinder));
    }
}

mod test_shape_overlap {
    use super::test_utils::*;
    use collision_kernel::{
        overlap::*,
        shapes::{Aabb2, Aabb3, Capsule2, Obb3, Plane3, ZCylinder3},
    };

    #[test]
    fn touching_discs_do_not_overlap() {
        assert!(!do_discs_overlap2(v2(0.0, 0.0), 1.0, v2(2.0, 0.0), 1.0));
        assert!(do_discs_overlap2(v2(0.0, 0.0), 1.0, v2(1.9, 0.0), 1.0));
        assert!(!do_spheres_overlap3(v3(0.0, 0.0, 0.0), 1.0, v3(0.0, 0.0, 2.0), 1.0));
        assert!(do_spheres_overlap3(v3(0.0, 0.0, 0.0), 1.0, v3(0.0, 1.0, 1.0), 1.0));
    }

    #[test]
    fn aabbs() {
        let a = Aabb2::from_coords(0.0, 0.0, 1.0, 1.0);
        assert!(do_aabbs_overlap2(&a, &Aabb2::from_coords(0.5, 0.5, 2.0, 2.0)));
        assert!(do_aabbs_overlap2(&a, &Aabb2::from_coords(-1.0, -1.0, 2.0, 2.0)));
        assert!(!do_aabbs_overlap2(&a, &Aabb2::from_coords(1.0, 0.0, 2.0, 1.0)));
        assert!(!do_aabbs_overlap2(&a, &Aabb2::from_coords(0.0, -1.0, 1.0, 0.0)));

        let b = Aabb3::new(v3(0.0, 0.0, 0.0), v3(1.0, 1.0, 1.0));
        assert!(do_aabbs_overlap3(&b, &Aabb3::new(v3(0.5, 0.5, 0.5), v3(2.0, 2.0, 2.0))));
        assert!(!do_aabbs_overlap3(&b, &Aabb3::new(v3(0.5, 0.5, 1.0), v3(2.0, 2.0, 2.0))));
    }

    #[test]
    fn disc_against_boxes_and_capsule() {
        let room = room();
        assert!(!do_disc_and_aabb_overlap2(v2(12.0, 5.0), 2.0, &room));
        assert!(do_disc_and_aabb_overlap2(v2(12.0, 5.0), 2.5, &room));
        assert!(do_disc_and_aabb_overlap2(v2(5.0, 5.0), 0.1, &room));

        let obb = rotated_box(v2(0.0, 0.0), v2(1.0, 1.0), 45.0);
        let corner_x = 2.0f64.sqrt();
        assert!(do_disc_and_obb_overlap2(v2(corner_x + 0.5, 0.0), 0.6, &obb));
        assert!(!do_disc_and_obb_overlap2(v2(corner_x + 0.5, 0.0), 0.4, &obb));

        let capsule = Capsule2::new(v2(0.0, 0.0), v2(10.0, 0.0), 1.0);
        assert!(do_disc_and_capsule_overlap2(v2(5.0, 2.5), 1.6, &capsule));
        assert!(!do_disc_and_capsule_overlap2(v2(5.0, 2.5), 1.4, &capsule));
    }

    #[test]
    fn sphere_against_boxes() {
        let aabb = Aabb3::new(v3(0.0, 0.0, 0.0), v3(2.0, 2.0, 2.0));
        assert!(do_sphere_and_aabb_overlap3(v3(3.0, 1.0, 1.0), 1.5, &aabb));
        assert!(!do_sphere_and_aabb_overlap3(v3(3.0, 1.0, 1.0), 1.0, &aabb));

        let obb = Obb3::from_aabb3(&aabb);
        assert!(do_sphere_and_obb_overlap3(v3(3.0, 1.0, 1.0), 1.5, &obb));
        assert!(!do_sphere_and_obb_overlap3(v3(3.0, 1.0, 1.0), 1.0, &obb));
    }

    #[test]
    fn planes() {
        let ground = Plane3::new(v3(0.0, 0.0, 1.0), 0.0);
        assert!(!do_sphere_and_plane_overlap3(v3(0.0, 0.0, 1.0), 1.0, &ground));
        assert!(do_sphere_and_plane_overlap3(v3(0.0, 0.0, 1.0), 1.5, &ground));
        assert!(do_sphere_and_plane_overlap3(v3(0.0, 0.0, -1.0), 1.5, &ground));

        let cube = Aabb3::new(v3(-1.0, -1.0, -1.0), v3(1.0, 1.0, 1.0));
        assert!(!do_aabb_and_plane_overlap3(&cube, &Plane3::new(v3(0.0, 0.0, 1.0), 1.0)));
        assert!(do_aabb_and_plane_overlap3(&cube, &Plane3::new(v3(0.0, 0.0, 1.0), 0.5)));

        let diagonal = Plane3::new(v3(1.0, 1.0, 0.0).normalize(), 0.0);
        let far_cube = Aabb3::new(v3(2.0, -1.0, -1.0), v3(4.0, 1.0, 1.0));
        let near_cube = Aabb3::new(v3(0.0, -1.0, -1.0), v3(2.0, 1.0, 1.0));
        assert!(!do_aabb_and_plane_overlap3(&far_cube, &diagonal));
        assert!(do_aabb_and_plane_overlap3(&near_cube, &diagonal));
    }

    #[test]
    fn z_cylinder_against_box_is_exclusive() {
        let cylinder = ZCylinder3::new(v2(0.0, 0.0), 0.0, 10.0, 1.0);
        let resting_on_top = Aabb3::new(v3(0.5, -1.0, 10.0), v3(2.0, 1.0, 12.0));
        let sunk_in = Aabb3::new(v3(0.5, -1.0, 9.0), v3(2.0, 1.0, 12.0));
        let beside = Aabb3::new(v3(1.0, -1.0, 0.0), v3(3.0, 1.0, 10.0));
        assert!(!do_z_cylinder_and_aabb_overlap3(&cylinder, &resting_on_top));
        assert!(do_z_cylinder_and_aabb_overlap3(&cylinder, &sunk_in));
        assert!(!do_z_cylinder_and_aabb_overlap3(&cylinder, &beside));
    }

    #[test]
    fn z_cylinder_against_sphere() {
        let cylinder = ZCylinder3::new(v2(0.0, 0.0), 0.0, 10.0, 1.0);
        assert!(!do_z_cylinder_and_sphere_overlap3(&cylinder, v3(0.0, 0.0, 11.0), 1.0));
        assert!(do_z_cylinder_and_sphere_overlap3(&cylinder, v3(0.0, 0.0, 11.0), 1.5));
        assert!(do_z_cylinder_and_sphere_overlap3(&cylinder, v3(0.0, 0.0, 5.0), 0.1));
    }

    #[test]
    fn stacked_z_cylinders_touching_caps_overlap() {
        let lower = ZCylinder3::new(v2(0.0, 0.0), 0.0, 10.0, 1.0);
        let upper = ZCylinder3::new(v2(0.5, 0.0), 10.0, 20.0, 1.0);
        let above = ZCylinder3::new(v2(0.0, 0.0), 10.5, 20.0, 1.0);
        let side_by_side = ZCylinder3::new(v2(2.0, 0.0), 0.0, 10.0, 1.0);
        assert!(do_z_cylinders_overlap3(&lower, &upper));
        assert!(!do_z_cylinders_overlap3(&lower, &above));
        assert!(!do_z_cylinders_overlap3(&lower, &side_by_side));
    }
}
