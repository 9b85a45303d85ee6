mod shape;
mod support;

pub use shape::Shape;
pub use support::{box_axes, closest_point_on_obb, support_box};
