use crate::math::{Quat, Vec3};

/// Returns the vertex of an oriented box farthest along `dir`.
///
/// The sign of a zero dot product is treated as positive, so a direction
/// perpendicular to an axis still selects a deterministic vertex.
pub fn support_box(center: Vec3, orientation: Quat, half_extents: Vec3, dir: Vec3) -> Vec3 {
    let axes = box_axes(orientation);
    let mut support = center;
    for (axis, extent) in axes.iter().zip([half_extents.x, half_extents.y, half_extents.z]) {
        let sign = if axis.dot(dir) >= 0.0 { 1.0 } else { -1.0 };
        support += *axis * (extent * sign);
    }
    support
}

/// Returns the point on an oriented box closest to `point`.
pub fn closest_point_on_obb(point: Vec3, center: Vec3, orientation: Quat, half_extents: Vec3) -> Vec3 {
    let local = orientation.inverse_rotate_vec(point - center);
    let clamped = local.clamp(-half_extents, half_extents);
    center + orientation.rotate_vec(clamped)
}

/// World-space axes of a box with the given orientation
#[inline]
pub fn box_axes(orientation: Quat) -> [Vec3; 3] {
    [
        orientation.rotate_vec(Vec3::X),
        orientation.rotate_vec(Vec3::Y),
        orientation.rotate_vec(Vec3::Z),
    ]
}
