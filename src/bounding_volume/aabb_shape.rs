use crate::bounding_volume::Aabb;
use crate::math::Real;
use crate::shape::Shape;

impl Shape {
    /// Computes the world-space AABB of this shape, with its half-extents
    /// multiplied by `scale_factor`.
    ///
    /// A factor of `1.0` yields the tight bound. The broadphase indexes
    /// shapes under a factor `≥ 1` so a shape moving within the inflation
    /// margin does not need to be re-indexed; for any `s ≥ 1` the result
    /// contains the tight bound.
    pub fn compute_aabb(&self, scale_factor: Real) -> Aabb {
        let aabb = match self {
            Shape::Ball(ball) => ball.aabb(),
            Shape::Cuboid(cuboid) => cuboid.aabb(),
            Shape::Obb(obb) => obb.aabb(),
            Shape::Capsule(capsule) => capsule.aabb(),
        };

        if scale_factor != 1.0 {
            aabb.scaled_wrt_center(scale_factor)
        } else {
            aabb
        }
    }
}
