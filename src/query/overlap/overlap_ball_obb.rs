use crate::shape::{Ball, Obb};

/// Tests whether a ball and an oriented box overlap: the ball's center is
/// taken to the box's local frame, where the test reduces to ball vs AABB.
#[inline]
pub fn overlap_ball_obb(ball: &Ball, obb: &Obb) -> bool {
    let local = obb.to_local_point(&ball.center);
    let closest = obb.clamp_local(&local);
    (local - closest).norm_squared() <= ball.radius * ball.radius
}
