use crate::math::Point;
use crate::query::PointQuery;
use crate::shape::Ball;

impl PointQuery for Ball {
    #[inline]
    fn contains_point(&self, pt: &Point) -> bool {
        (pt - self.center).norm_squared() <= self.radius * self.radius
    }
}
