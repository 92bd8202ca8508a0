//! Boolean overlap tests between every pair of shapes.
//!
//! All tests treat exactly-touching shapes as overlapping (`≤`
//! comparisons), and all are symmetric: `overlap(a, b) == overlap(b, a)`.

pub use self::overlap::overlap;
pub use self::overlap_ball_ball::overlap_ball_ball;
pub use self::overlap_ball_capsule::overlap_ball_capsule;
pub use self::overlap_ball_cuboid::overlap_ball_cuboid;
pub use self::overlap_ball_obb::overlap_ball_obb;
pub use self::overlap_capsule_capsule::overlap_capsule_capsule;
pub use self::overlap_capsule_cuboid::overlap_capsule_cuboid;
pub use self::overlap_capsule_obb::overlap_capsule_obb;
pub use self::overlap_cuboid_cuboid::overlap_cuboid_cuboid;
pub use self::overlap_cuboid_obb::overlap_cuboid_obb;
pub use self::overlap_obb_obb::{overlap_obb_obb, overlap_on_axis};

mod overlap;
mod overlap_ball_ball;
mod overlap_ball_capsule;
mod overlap_ball_cuboid;
mod overlap_ball_obb;
mod overlap_capsule_capsule;
mod overlap_capsule_cuboid;
mod overlap_capsule_obb;
mod overlap_cuboid_cuboid;
mod overlap_cuboid_obb;
mod overlap_obb_obb;
