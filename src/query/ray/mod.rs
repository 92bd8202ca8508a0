//! Ray-casting related definitions and implementations.

#[doc(inline)]
pub use self::ray::{raycast, Ray, RayCast, RayHit};

#[doc(hidden)]
pub mod ray;
mod ray_aabb;
mod ray_ball;
mod ray_capsule;
mod ray_cuboid;
mod ray_obb;
mod ray_shape;
