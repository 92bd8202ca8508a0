use crate::bounding_volume::Aabb;
use crate::math::{Vector, DIM};
use crate::shape::Obb;

impl Obb {
    /// Computes the world-space AABB of this oriented box by projecting its
    /// half-extents onto each world axis.
    pub fn aabb(&self) -> Aabb {
        let half_extents = Vector::from_fn(|k, _| {
            let mut extent = 0.0;
            for i in 0..DIM {
                extent += self.axes[i][k].abs() * self.half_extents[i];
            }
            extent
        });

        Aabb::from_half_extents(self.center, half_extents)
    }
}
