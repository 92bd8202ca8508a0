use crate::bounding_volume::Aabb;
use crate::math::Vector;
use crate::shape::Ball;

impl Ball {
    /// Computes the world-space AABB of this ball.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_half_extents(self.center, Vector::repeat(self.radius))
    }
}
