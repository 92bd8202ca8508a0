use approx::assert_relative_eq;
use lattice3d::na::{Point3, UnitQuaternion, Vector3};
use lattice3d::query::{raycast, PointQuery, Ray, RayCast};
use lattice3d::shape::{Ball, Capsule, Cuboid, Obb, Shape};

#[test]
fn ray_hits_cuboid_face() {
    let cuboid = Cuboid::new(Point3::origin(), Vector3::new(1.0, 1.0, 1.0));
    let ray = Ray::new(Point3::new(-5.0, 0.0, 0.0), Vector3::x());

    let hit = raycast(&ray, &cuboid.into()).unwrap().unwrap();
    assert_relative_eq!(hit.toi, 4.0);
    assert_relative_eq!(hit.point, Point3::new(-1.0, 0.0, 0.0));
    assert_relative_eq!(hit.normal, Vector3::new(-1.0, 0.0, 0.0));
}

#[test]
fn ray_hits_capsule_side() {
    let capsule = Capsule::new(Point3::new(0.0, -1.0, 0.0), Point3::new(0.0, 1.0, 0.0), 0.5);
    let ray = Ray::new(Point3::new(-5.0, 0.0, 0.0), Vector3::x());

    let hit = raycast(&ray, &capsule.into()).unwrap().unwrap();
    assert_relative_eq!(hit.toi, 4.5, epsilon = 1.0e-5);
    assert_relative_eq!(hit.point, Point3::new(-0.5, 0.0, 0.0), epsilon = 1.0e-5);
    assert_relative_eq!(hit.normal, Vector3::new(-1.0, 0.0, 0.0), epsilon = 1.0e-5);
}

#[test]
fn ray_hits_capsule_cap() {
    let capsule = Capsule::new(Point3::new(0.0, -1.0, 0.0), Point3::new(0.0, 1.0, 0.0), 0.5);
    let ray = Ray::new(Point3::new(0.0, 5.0, 0.0), -Vector3::y());

    let hit = raycast(&ray, &capsule.into()).unwrap().unwrap();
    assert_relative_eq!(hit.toi, 3.5, epsilon = 1.0e-5);
    assert_relative_eq!(hit.point, Point3::new(0.0, 1.5, 0.0), epsilon = 1.0e-5);
    assert_relative_eq!(hit.normal, Vector3::new(0.0, 1.0, 0.0), epsilon = 1.0e-5);
}

#[test]
fn ray_hits_ball() {
    let ball = Ball::new(Point3::new(5.0, 0.0, 0.0), 1.0);
    let ray = Ray::new(Point3::origin(), Vector3::x());

    let hit = raycast(&ray, &ball.into()).unwrap().unwrap();
    assert_relative_eq!(hit.toi, 4.0);
    assert_relative_eq!(hit.point, Point3::new(4.0, 0.0, 0.0));
    assert_relative_eq!(hit.normal, Vector3::new(-1.0, 0.0, 0.0));
}

#[test]
fn unnormalized_directions_report_world_distances() {
    let ball = Ball::new(Point3::new(5.0, 0.0, 0.0), 1.0);
    let ray = Ray::new(Point3::origin(), Vector3::new(17.0, 0.0, 0.0));

    let hit = raycast(&ray, &ball.into()).unwrap().unwrap();
    assert_relative_eq!(hit.toi, 4.0);
}

#[test]
fn rotating_an_obb_rotates_its_surface() {
    // A thin slab rotated 90° around Y exposes its broad face to a +X ray.
    let rot = UnitQuaternion::from_euler_angles(0.0, core::f32::consts::FRAC_PI_2, 0.0);
    let obb = Obb::from_rotation(Point3::origin(), Vector3::new(1.0, 1.0, 0.25), &rot);
    let ray = Ray::new(Point3::new(-5.0, 0.0, 0.0), Vector3::x());

    let hit = raycast(&ray, &obb.into()).unwrap().unwrap();
    assert_relative_eq!(hit.toi, 4.75, epsilon = 1.0e-4);
    assert_relative_eq!(hit.normal, Vector3::new(-1.0, 0.0, 0.0), epsilon = 1.0e-4);
}

#[test]
fn parallel_ray_outside_slab_misses() {
    let cuboid = Cuboid::new(Point3::origin(), Vector3::new(1.0, 1.0, 1.0));
    let ray = Ray::new(Point3::new(-5.0, 2.0, 0.0), Vector3::x());

    assert!(raycast(&ray, &cuboid.into()).unwrap().is_none());
}

#[test]
fn ray_pointing_away_misses() {
    let ball = Ball::new(Point3::new(5.0, 0.0, 0.0), 1.0);
    let ray = Ray::new(Point3::origin(), -Vector3::x());

    assert!(raycast(&ray, &ball.into()).unwrap().is_none());
}

#[test]
fn zero_direction_is_rejected() {
    let ball = Ball::new(Point3::origin(), 1.0);
    let ray = Ray::new(Point3::new(5.0, 0.0, 0.0), Vector3::zeros());

    assert!(raycast(&ray, &ball.into()).is_err());
}

#[test]
fn origin_inside_reports_zero_distance() {
    let rot = UnitQuaternion::from_euler_angles(0.4, -0.2, 1.3);
    let shapes: [Shape; 4] = [
        Ball::new(Point3::origin(), 1.0).into(),
        Cuboid::new(Point3::origin(), Vector3::new(1.0, 1.0, 1.0)).into(),
        Obb::from_rotation(Point3::origin(), Vector3::new(1.0, 1.0, 1.0), &rot).into(),
        Capsule::new(Point3::new(0.0, -1.0, 0.0), Point3::new(0.0, 1.0, 0.0), 1.0).into(),
    ];

    for shape in &shapes {
        let ray = Ray::new(Point3::new(0.1, 0.0, 0.1), Vector3::x());
        let hit = raycast(&ray, shape).unwrap().unwrap();

        assert_eq!(hit.toi, 0.0, "shape = {shape:?}");
        assert_eq!(hit.point, ray.origin);
        assert_eq!(hit.normal, Vector3::zeros());
    }
}

#[test]
fn hit_points_lie_on_the_surface() {
    let mut rng = oorandom::Rand32::new(8888);

    let rot = UnitQuaternion::from_euler_angles(0.7, 0.3, -0.6);
    let shapes: [Shape; 4] = [
        Ball::new(Point3::origin(), 1.0).into(),
        Cuboid::new(Point3::origin(), Vector3::new(1.0, 0.75, 0.5)).into(),
        Obb::from_rotation(Point3::origin(), Vector3::new(1.0, 0.75, 0.5), &rot).into(),
        Capsule::new(Point3::new(0.0, -0.5, 0.0), Point3::new(0.0, 0.5, 0.0), 0.75).into(),
    ];

    for shape in &shapes {
        for _ in 0..250 {
            let origin = loop {
                let v = Vector3::new(
                    rng.rand_float() * 2.0 - 1.0,
                    rng.rand_float() * 2.0 - 1.0,
                    rng.rand_float() * 2.0 - 1.0,
                );
                if let Some(unit) = v.try_normalize(1.0e-3) {
                    break Point3::from(unit * 5.0);
                }
            };

            let ray = Ray::new(origin, Point3::origin() - origin);
            let hit = shape
                .cast_ray(&ray)
                .unwrap()
                .unwrap_or_else(|| panic!("ray {ray:?} missed {shape:?}"));

            let nudged_in = hit.point - hit.normal * 1.0e-3;
            let nudged_out = hit.point + hit.normal * 1.0e-3;
            assert!(shape.contains_point(&nudged_in), "shape = {shape:?}");
            assert!(!shape.contains_point(&nudged_out), "shape = {shape:?}");
        }
    }
}
