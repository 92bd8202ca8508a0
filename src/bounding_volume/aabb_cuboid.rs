use crate::bounding_volume::Aabb;
use crate::shape::Cuboid;

impl Cuboid {
    /// Computes the world-space AABB of this cuboid, which is the cuboid
    /// itself.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_half_extents(self.center, self.half_extents)
    }
}
