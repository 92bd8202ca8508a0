use crate::query::overlap::*;
use crate::shape::Shape;

/// Tests whether two shapes overlap, dispatching on their variants.
///
/// Symmetric in its arguments; touching shapes overlap.
pub fn overlap(a: &Shape, b: &Shape) -> bool {
    use Shape::*;

    match (a, b) {
        (Ball(a), Ball(b)) => overlap_ball_ball(a, b),
        (Ball(a), Cuboid(b)) => overlap_ball_cuboid(a, b),
        (Ball(a), Obb(b)) => overlap_ball_obb(a, b),
        (Ball(a), Capsule(b)) => overlap_ball_capsule(a, b),

        (Cuboid(a), Ball(b)) => overlap_ball_cuboid(b, a),
        (Cuboid(a), Cuboid(b)) => overlap_cuboid_cuboid(a, b),
        (Cuboid(a), Obb(b)) => overlap_cuboid_obb(a, b),
        (Cuboid(a), Capsule(b)) => overlap_capsule_cuboid(b, a),

        (Obb(a), Ball(b)) => overlap_ball_obb(b, a),
        (Obb(a), Cuboid(b)) => overlap_cuboid_obb(b, a),
        (Obb(a), Obb(b)) => overlap_obb_obb(a, b),
        (Obb(a), Capsule(b)) => overlap_capsule_obb(b, a),

        (Capsule(a), Ball(b)) => overlap_ball_capsule(b, a),
        (Capsule(a), Cuboid(b)) => overlap_capsule_cuboid(a, b),
        (Capsule(a), Obb(b)) => overlap_capsule_obb(a, b),
        (Capsule(a), Capsule(b)) => overlap_capsule_capsule(a, b),
    }
}
