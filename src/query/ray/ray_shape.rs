use crate::query::{Ray, RayCast, RayHit};
use crate::shape::Shape;

impl RayCast for Shape {
    #[inline]
    fn cast_unit_ray(&self, ray: &Ray) -> Option<RayHit> {
        match self {
            Shape::Ball(ball) => ball.cast_unit_ray(ray),
            Shape::Cuboid(cuboid) => cuboid.cast_unit_ray(ray),
            Shape::Obb(obb) => obb.cast_unit_ray(ray),
            Shape::Capsule(capsule) => capsule.cast_unit_ray(ray),
        }
    }
}
