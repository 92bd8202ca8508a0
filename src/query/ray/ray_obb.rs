use crate::bounding_volume::Aabb;
use crate::math::Point;
use crate::query::{PointQuery, Ray, RayCast, RayHit};
use crate::shape::Obb;

impl RayCast for Obb {
    /// Casts the ray in the box's local frame, then maps the hit back to
    /// world space.
    fn cast_unit_ray(&self, ray: &Ray) -> Option<RayHit> {
        if self.contains_point(&ray.origin) {
            return Some(RayHit::origin_inside(ray.origin));
        }

        let local_ray = Ray::new(
            Point::from(self.to_local_point(&ray.origin)),
            self.to_local_vector(&ray.dir),
        );
        let local_box = Aabb::from_half_extents(Point::origin(), self.half_extents);

        let local_hit = local_box.cast_unit_ray(&local_ray)?;
        let normal = self.to_world_vector(&local_hit.normal).normalize();

        Some(RayHit::new(
            local_hit.toi,
            ray.point_at(local_hit.toi),
            normal,
        ))
    }
}
