use core::mem;

use num::Bounded;

use crate::bounding_volume::Aabb;
use crate::math::{Real, Vector, DEFAULT_EPSILON, DIM};
use crate::query::{Ray, RayCast, RayHit};

impl RayCast for Aabb {
    /// Slab-method ray cast, tracking the normal of the slab the ray enters
    /// last.
    fn cast_unit_ray(&self, ray: &Ray) -> Option<RayHit> {
        if self.contains_point(&ray.origin) {
            return Some(RayHit::origin_inside(ray.origin));
        }

        let mut tmin: Real = 0.0;
        let mut tmax: Real = Bounded::max_value();
        let mut normal = Vector::zeros();

        for i in 0..DIM {
            if ray.dir[i].abs() < DEFAULT_EPSILON {
                // Parallel to the slab: a miss unless the origin lies inside it.
                if ray.origin[i] < self.mins[i] || ray.origin[i] > self.maxs[i] {
                    return None;
                }
            } else {
                let inv_dir = 1.0 / ray.dir[i];
                let mut t1 = (self.mins[i] - ray.origin[i]) * inv_dir;
                let mut t2 = (self.maxs[i] - ray.origin[i]) * inv_dir;

                let mut sign = -1.0;
                if t1 > t2 {
                    mem::swap(&mut t1, &mut t2);
                    sign = 1.0;
                }

                if t1 > tmin {
                    tmin = t1;
                    normal = Vector::zeros();
                    normal[i] = sign;
                }

                tmax = tmax.min(t2);
                if tmin > tmax {
                    // Also covers rays pointing away, since tmin starts at zero.
                    return None;
                }
            }
        }

        Some(RayHit::new(tmin, ray.point_at(tmin), normal))
    }
}
