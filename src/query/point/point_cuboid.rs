use crate::math::Point;
use crate::query::PointQuery;
use crate::shape::Cuboid;

impl PointQuery for Cuboid {
    #[inline]
    fn contains_point(&self, pt: &Point) -> bool {
        self.aabb().contains_point(pt)
    }
}
