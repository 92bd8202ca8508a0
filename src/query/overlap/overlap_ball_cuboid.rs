use crate::shape::{Ball, Cuboid};

/// Tests whether a ball and an axis-aligned box overlap, by clamping the
/// ball's center to the box.
#[inline]
pub fn overlap_ball_cuboid(ball: &Ball, cuboid: &Cuboid) -> bool {
    let closest = cuboid.aabb().clamp_point(&ball.center);
    (closest - ball.center).norm_squared() <= ball.radius * ball.radius
}
