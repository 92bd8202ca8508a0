use crate::shape::{Ball, Capsule};

/// Tests whether a ball and a capsule overlap.
#[inline]
pub fn overlap_ball_capsule(ball: &Ball, capsule: &Capsule) -> bool {
    let radii = ball.radius + capsule.radius;
    capsule.segment.distance_squared_to_point(&ball.center) <= radii * radii
}
