use lattice3d::na::{Point3, Vector3};
use lattice3d::query::{overlap, PointQuery};
use lattice3d::shape::{Ball, Capsule, Cuboid, Obb, Shape};

fn rand_point(rng: &mut oorandom::Rand32) -> Point3<f32> {
    Point3::new(
        rng.rand_float() * 8.0 - 4.0,
        rng.rand_float() * 8.0 - 4.0,
        rng.rand_float() * 8.0 - 4.0,
    )
}

fn rand_shape(rng: &mut oorandom::Rand32) -> Shape {
    let center = rand_point(rng);
    let radius = rng.rand_float() * 1.5 + 0.1;
    let half_extents = Vector3::new(
        rng.rand_float() * 1.5 + 0.1,
        rng.rand_float() * 1.5 + 0.1,
        rng.rand_float() * 1.5 + 0.1,
    );

    match rng.rand_range(0..4) {
        0 => Ball::new(center, radius).into(),
        1 => Cuboid::new(center, half_extents).into(),
        2 => {
            let rot = lattice3d::na::UnitQuaternion::from_euler_angles(
                rng.rand_float() * 6.0,
                rng.rand_float() * 6.0,
                rng.rand_float() * 6.0,
            );
            Obb::from_rotation(center, half_extents, &rot).into()
        }
        _ => Capsule::new(center, rand_point(rng), radius).into(),
    }
}

#[test]
fn touching_spheres_overlap() {
    let a = Ball::new(Point3::origin(), 1.0);
    let b = Ball::new(Point3::new(2.0, 0.0, 0.0), 1.0);
    let c = Ball::new(Point3::new(2.01, 0.0, 0.0), 1.0);

    assert!(overlap(&a.into(), &b.into()));
    assert!(!overlap(&a.into(), &c.into()));
}

#[test]
fn touching_cuboids_overlap() {
    let a = Cuboid::new(Point3::origin(), Vector3::new(1.0, 1.0, 1.0));
    let b = Cuboid::new(Point3::new(2.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0));
    let c = Cuboid::new(Point3::new(0.0, 2.5, 0.0), Vector3::new(1.0, 1.0, 1.0));

    assert!(overlap(&a.into(), &b.into()));
    assert!(!overlap(&a.into(), &c.into()));
}

#[test]
fn rotated_obbs_use_every_separating_axis() {
    // Two unit cubes, one rotated 45° around Z, centers 2.8 apart on X.
    // Axis-aligned boxes that far apart would be disjoint on the X slab
    // alone, but the rotated corner reaches sqrt(2) toward the other box.
    let rot = lattice3d::na::UnitQuaternion::from_euler_angles(0.0, 0.0, core::f32::consts::FRAC_PI_4);
    let a = Obb::axis_aligned(Point3::origin(), Vector3::new(1.0, 1.0, 1.0));
    let close = Obb::from_rotation(Point3::new(2.3, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0), &rot);
    let far = Obb::from_rotation(Point3::new(2.5, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0), &rot);

    assert!(overlap(&a.into(), &close.into()));
    assert!(!overlap(&a.into(), &far.into()));
}

#[test]
fn cuboid_obb_promotes_to_sat() {
    let rot = lattice3d::na::UnitQuaternion::from_euler_angles(0.0, 0.0, core::f32::consts::FRAC_PI_4);
    let cuboid = Cuboid::new(Point3::origin(), Vector3::new(1.0, 1.0, 1.0));
    let close = Obb::from_rotation(Point3::new(2.3, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0), &rot);
    let far = Obb::from_rotation(Point3::new(2.5, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0), &rot);

    assert!(overlap(&cuboid.into(), &close.into()));
    assert!(!overlap(&cuboid.into(), &far.into()));
}

#[test]
fn capsule_reaches_around_its_segment() {
    let capsule = Capsule::new(Point3::new(0.0, -1.0, 0.0), Point3::new(0.0, 1.0, 0.0), 0.5);

    let touching = Ball::new(Point3::new(1.5, 0.0, 0.0), 1.0);
    let missing = Ball::new(Point3::new(1.6, 0.0, 0.0), 1.0);
    assert!(overlap(&capsule.into(), &touching.into()));
    assert!(!overlap(&capsule.into(), &missing.into()));

    // Near the cap, the reach is measured from the endpoint.
    let above = Ball::new(Point3::new(0.0, 2.4, 0.0), 1.0);
    let beyond = Ball::new(Point3::new(0.0, 2.6, 0.0), 1.0);
    assert!(overlap(&capsule.into(), &above.into()));
    assert!(!overlap(&capsule.into(), &beyond.into()));
}

#[test]
fn capsule_cuboid_side_contact() {
    let cuboid = Cuboid::new(Point3::origin(), Vector3::new(1.0, 1.0, 1.0));

    let near = Capsule::new(Point3::new(1.4, -2.0, 0.0), Point3::new(1.4, 2.0, 0.0), 0.5);
    let far = Capsule::new(Point3::new(1.6, -2.0, 0.0), Point3::new(1.6, 2.0, 0.0), 0.5);
    assert!(overlap(&near.into(), &cuboid.into()));
    assert!(!overlap(&far.into(), &cuboid.into()));
}

#[test]
fn degenerate_capsule_behaves_like_a_ball() {
    let point_capsule = Capsule::new(Point3::origin(), Point3::origin(), 1.0);
    let ball = Ball::new(Point3::new(1.9, 0.0, 0.0), 1.0);

    assert!(overlap(&point_capsule.into(), &ball.into()));
    assert!(point_capsule.contains_point(&Point3::new(0.9, 0.0, 0.0)));
}

#[test]
fn shape_centers_are_contained() {
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..200 {
        let shape = rand_shape(&mut rng);
        let center = match &shape {
            Shape::Ball(b) => b.center,
            Shape::Cuboid(c) => c.center,
            Shape::Obb(o) => o.center,
            Shape::Capsule(c) => c.segment.a,
        };

        assert!(shape.contains_point(&center));
    }
}

#[test]
fn overlap_is_symmetric() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..500 {
        let a = rand_shape(&mut rng);
        let b = rand_shape(&mut rng);
        assert_eq!(overlap(&a, &b), overlap(&b, &a), "a = {a:?}, b = {b:?}");
    }
}

#[test]
fn obb_containment_uses_the_local_frame() {
    let rot = lattice3d::na::UnitQuaternion::from_euler_angles(0.0, 0.0, core::f32::consts::FRAC_PI_4);
    let obb = Obb::from_rotation(Point3::origin(), Vector3::new(2.0, 0.5, 0.5), &rot);

    // Along the rotated long axis.
    let along = rot * Vector3::new(1.8, 0.0, 0.0);
    assert!(obb.contains_point(&Point3::from(along)));

    // The same offset without rotation leaves the box.
    assert!(!obb.contains_point(&Point3::new(1.8, 0.0, 0.0)));
}
