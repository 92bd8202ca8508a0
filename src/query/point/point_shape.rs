use crate::math::Point;
use crate::query::PointQuery;
use crate::shape::Shape;

impl PointQuery for Shape {
    #[inline]
    fn contains_point(&self, pt: &Point) -> bool {
        match self {
            Shape::Ball(ball) => ball.contains_point(pt),
            Shape::Cuboid(cuboid) => cuboid.contains_point(pt),
            Shape::Obb(obb) => obb.contains_point(pt),
            Shape::Capsule(capsule) => capsule.contains_point(pt),
        }
    }
}
