//! Bounding volumes.

#[doc(inline)]
pub use self::aabb::Aabb;

#[doc(hidden)]
pub mod aabb;
mod aabb_ball;
mod aabb_capsule;
mod aabb_cuboid;
mod aabb_obb;
mod aabb_shape;
