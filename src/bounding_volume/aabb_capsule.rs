use crate::bounding_volume::Aabb;
use crate::math::{Point, Vector};
use crate::shape::Capsule;

impl Capsule {
    /// Computes the world-space AABB of this capsule: the componentwise
    /// bound of its endpoints, inflated by its radius.
    pub fn aabb(&self) -> Aabb {
        let a = &self.segment.a.coords;
        let b = &self.segment.b.coords;
        let radius = Vector::repeat(self.radius);

        Aabb::new(
            Point::from(a.inf(b) - radius),
            Point::from(a.sup(b) + radius),
        )
    }
}
