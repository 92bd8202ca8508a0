//! Point containment queries.

pub use self::point_query::PointQuery;

mod point_ball;
mod point_capsule;
mod point_cuboid;
mod point_obb;
#[doc(hidden)]
pub mod point_query;
mod point_shape;
