//! Non-persistent geometric queries.
//!
//! Two families of queries are exposed here:
//!
//! * boolean queries: [`overlap`] between any two [`Shape`](crate::shape::Shape)s,
//!   and point containment through [`PointQuery`];
//! * ray queries: [`raycast`] and the [`RayCast`] trait, reporting the
//!   first hit along a ray.

pub use self::error::DegenerateRay;
#[cfg(feature = "dim2")]
pub use self::clip::local_segment_aabb_distance_squared;
pub use self::overlap::overlap;
pub use self::point::PointQuery;
pub use self::ray::{raycast, Ray, RayCast, RayHit};

#[cfg(feature = "dim2")]
pub mod clip;
mod error;
pub mod overlap;
pub mod point;
pub mod ray;
