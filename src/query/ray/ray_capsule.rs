use crate::query::{PointQuery, Ray, RayCast, RayHit};
use crate::shape::Capsule;

#[cfg(feature = "dim3")]
use crate::math::{Real, Vector, DEFAULT_EPSILON};

#[cfg(feature = "dim3")]
impl RayCast for Capsule {
    /// The first hit among the capsule's finite cylindrical body and its two
    /// endpoint balls.
    fn cast_unit_ray(&self, ray: &Ray) -> Option<RayHit> {
        if self.contains_point(&ray.origin) {
            return Some(RayHit::origin_inside(ray.origin));
        }

        let mut best: Option<RayHit> = None;

        if let Some((toi, normal)) = cast_unit_ray_cylinder(ray, self) {
            best = Some(RayHit::new(toi, ray.point_at(toi), normal));
        }

        for cap in [self.ball_a(), self.ball_b()] {
            if let Some(hit) = cap.cast_unit_ray(ray) {
                if best.map_or(true, |b| hit.toi < b.toi) {
                    best = Some(hit);
                }
            }
        }

        best
    }
}

/// Intersects a unit-direction ray with the finite open cylinder spanned by
/// the capsule's segment.
///
/// Returns the distance and the outward normal, or `None` when the ray
/// misses the cylinder or hits it outside the segment's span (the endpoint
/// balls cover those regions).
#[cfg(feature = "dim3")]
fn cast_unit_ray_cylinder(ray: &Ray, capsule: &Capsule) -> Option<(Real, Vector)> {
    let d = capsule.segment.scaled_direction();
    let m = ray.origin - capsule.segment.a;
    let n = ray.dir;

    let dd = d.norm_squared();
    let md = m.dot(&d);
    let nd = n.dot(&d);
    let mn = m.dot(&n);

    let a = dd - nd * nd;
    let b = dd * mn - md * nd;
    let c = dd * (m.norm_squared() - capsule.radius * capsule.radius) - md * md;

    // Degenerate when the ray runs parallel to the axis, or the capsule
    // degenerates to a ball.
    if a.abs() < DEFAULT_EPSILON {
        return None;
    }

    let delta = b * b - a * c;
    if delta < 0.0 {
        return None;
    }

    let toi = (-b - delta.sqrt()) / a;
    if toi < 0.0 {
        return None;
    }

    let k = (md + toi * nd) / dd;
    if k < 0.0 || k > 1.0 {
        return None;
    }

    let hit = ray.point_at(toi);
    let axis_point = capsule.segment.a + d * k;
    Some((toi, (hit - axis_point).normalize()))
}

#[cfg(feature = "dim2")]
impl RayCast for Capsule {
    /// Closest-approach construction: project the segment point nearest to
    /// the ray origin onto the ray, then step back along the ray by the
    /// chord the radius subtends.
    fn cast_unit_ray(&self, ray: &Ray) -> Option<RayHit> {
        use crate::math::DEFAULT_EPSILON;

        if self.contains_point(&ray.origin) {
            return Some(RayHit::origin_inside(ray.origin));
        }

        let closest = self.segment.closest_point(&ray.origin);

        let proj = (closest - ray.origin).dot(&ray.dir);
        if proj < 0.0 {
            return None;
        }

        let approach = ray.point_at(proj);
        let dist_sq = (closest - approach).norm_squared();
        if dist_sq > self.radius * self.radius {
            return None;
        }

        let offset = (self.radius * self.radius - dist_sq).sqrt();
        let mut toi = proj - offset;
        if toi < DEFAULT_EPSILON {
            toi = 0.0;
        }

        let point = ray.point_at(toi);
        let normal = (point - closest).normalize();
        Some(RayHit::new(toi, point, normal))
    }
}
