use crate::query::{Ray, RayCast, RayHit};
use crate::shape::Cuboid;

impl RayCast for Cuboid {
    #[inline]
    fn cast_unit_ray(&self, ray: &Ray) -> Option<RayHit> {
        self.aabb().cast_unit_ray(ray)
    }
}
