use crate::query::{PointQuery, Ray, RayCast, RayHit};
use crate::shape::Ball;

impl RayCast for Ball {
    fn cast_unit_ray(&self, ray: &Ray) -> Option<RayHit> {
        if self.contains_point(&ray.origin) {
            return Some(RayHit::origin_inside(ray.origin));
        }

        // Quadratic in t with a unit direction, using the half-b form.
        let dcenter = ray.origin - self.center;
        let b = dcenter.dot(&ray.dir);
        let c = dcenter.norm_squared() - self.radius * self.radius;

        let delta = b * b - c;
        if delta < 0.0 {
            return None;
        }

        let sqrt_delta = delta.sqrt();
        let t0 = -b - sqrt_delta;
        let t1 = -b + sqrt_delta;

        let toi = if t0 >= 0.0 { t0 } else { t1 };
        if toi < 0.0 {
            return None;
        }

        let point = ray.point_at(toi);
        let normal = (point - self.center) / self.radius;
        Some(RayHit::new(toi, point, normal))
    }
}
