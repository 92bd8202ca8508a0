use crate::shape::Ball;

/// Tests whether two balls overlap.
#[inline]
pub fn overlap_ball_ball(a: &Ball, b: &Ball) -> bool {
    let radii = a.radius + b.radius;
    (a.center - b.center).norm_squared() <= radii * radii
}
