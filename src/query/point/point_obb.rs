use crate::math::{Point, DIM};
use crate::query::PointQuery;
use crate::shape::Obb;

impl PointQuery for Obb {
    #[inline]
    fn contains_point(&self, pt: &Point) -> bool {
        let local = self.to_local_point(pt);

        for i in 0..DIM {
            if local[i].abs() > self.half_extents[i] {
                return false;
            }
        }

        true
    }
}
