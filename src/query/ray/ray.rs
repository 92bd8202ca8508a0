//! Traits and structures needed to cast rays.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::DegenerateRay;
use crate::shape::Shape;

/// A ray for ray-casting queries: a half-line starting at `origin` and
/// extending along `dir`.
///
/// The direction does not need to be unit-length: every query normalises it
/// once on entry, so reported distances are always measured in world units.
/// A zero-length direction is rejected with [`DegenerateRay`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone)]
#[repr(C)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point,
    /// Direction of the ray.
    pub dir: Vector,
}

impl Ray {
    /// Creates a new ray from an origin point and a direction vector.
    #[inline]
    pub fn new(origin: Point, dir: Vector) -> Ray {
        Ray { origin, dir }
    }

    /// Computes the point at parameter `t` along the ray: `origin + dir * t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point {
        self.origin + self.dir * t
    }

    /// Returns this ray with its direction normalised, or
    /// `Err(DegenerateRay)` if the direction is (nearly) zero.
    #[inline]
    pub fn normalized(&self) -> Result<Ray, DegenerateRay> {
        self.dir
            .try_normalize(DEFAULT_EPSILON)
            .map(|dir| Ray::new(self.origin, dir))
            .ok_or(DegenerateRay)
    }
}

/// The description of a successful ray cast.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone)]
pub struct RayHit {
    /// The distance from the ray origin to the hit point, measured along the
    /// normalised ray direction.
    pub toi: Real,
    /// The hit point on the surface of the shape.
    pub point: Point,
    /// The outward surface normal at the hit point.
    ///
    /// Zero when the ray origin lies inside the shape (in which case `toi`
    /// is zero and `point` is the origin itself).
    pub normal: Vector,
}

impl RayHit {
    /// Creates a new ray hit description.
    #[inline]
    pub fn new(toi: Real, point: Point, normal: Vector) -> RayHit {
        RayHit { toi, point, normal }
    }

    /// The hit reported when the ray origin already lies inside the shape:
    /// zero distance, the origin itself, and no meaningful normal.
    #[inline]
    pub fn origin_inside(origin: Point) -> RayHit {
        RayHit {
            toi: 0.0,
            point: origin,
            normal: Vector::zeros(),
        }
    }
}

/// Trait implemented by shapes that rays can be cast on.
pub trait RayCast {
    /// Casts a ray whose direction is already unit-length on this shape.
    ///
    /// This is the per-shape worker behind [`RayCast::cast_ray`]; call it
    /// directly only with a normalised direction, otherwise the reported
    /// distances are scaled by the direction's length.
    fn cast_unit_ray(&self, ray: &Ray) -> Option<RayHit>;

    /// Casts a ray on this shape, reporting the first hit.
    ///
    /// The ray direction is normalised internally; passing a zero-length
    /// direction fails with [`DegenerateRay`]. If the ray origin lies inside
    /// the shape, the hit has `toi == 0` and a zero normal.
    #[inline]
    fn cast_ray(&self, ray: &Ray) -> Result<Option<RayHit>, DegenerateRay> {
        Ok(self.cast_unit_ray(&ray.normalized()?))
    }

    /// Tests whether a ray intersects this shape.
    #[inline]
    fn intersects_ray(&self, ray: &Ray) -> Result<bool, DegenerateRay> {
        Ok(self.cast_ray(ray)?.is_some())
    }
}

/// Casts a ray on a shape, reporting the first hit.
///
/// Free-function form of [`RayCast::cast_ray`], dispatching on the shape's
/// variant.
#[inline]
pub fn raycast(ray: &Ray, shape: &Shape) -> Result<Option<RayHit>, DegenerateRay> {
    shape.cast_ray(ray)
}
