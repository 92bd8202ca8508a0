use crate::math::Point;
use crate::query::PointQuery;
use crate::shape::Capsule;

impl PointQuery for Capsule {
    #[inline]
    fn contains_point(&self, pt: &Point) -> bool {
        self.segment.distance_squared_to_point(pt) <= self.radius * self.radius
    }
}
