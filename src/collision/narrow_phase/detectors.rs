use crate::collision::narrow_phase::{gjk, sat};
use crate::geometry::{closest_point_on_obb, support_box};
use crate::math::consts::LENGTH_EPSILON;
use crate::math::{Quat, Vec3};

/// Geometry of a single detected contact, before body ids and material
/// coefficients are attached by the generator.
#[derive(Debug, Clone, Copy)]
pub struct ContactPoint {
    /// Unit normal pointing from the first shape toward the second
    pub normal: Vec3,
    /// Approximate world-space contact point
    pub point: Vec3,
    /// Positive overlap depth
    pub penetration: f32,
}

/// Sphere vs sphere.
pub fn collide_sphere_sphere(
    pos_a: Vec3,
    radius_a: f32,
    pos_b: Vec3,
    radius_b: f32,
) -> Option<ContactPoint> {
    let delta = pos_b - pos_a;
    let radius_sum = radius_a + radius_b;
    if delta.length_squared() > radius_sum * radius_sum {
        return None;
    }

    let distance = delta.length();
    let normal = if distance > LENGTH_EPSILON {
        delta * (1.0 / distance)
    } else {
        // Exactly coincident centers: push apart along +Y
        Vec3::Y
    };
    let penetration = radius_sum - distance;

    Some(ContactPoint {
        normal,
        point: pos_a + normal * (radius_a - penetration * 0.5),
        penetration,
    })
}

/// Sphere vs oriented box. The normal points from the sphere toward the box.
pub fn collide_sphere_box(
    sphere_pos: Vec3,
    radius: f32,
    box_pos: Vec3,
    box_orientation: Quat,
    half_extents: Vec3,
) -> Option<ContactPoint> {
    let closest = closest_point_on_obb(sphere_pos, box_pos, box_orientation, half_extents);
    let delta = closest - sphere_pos;
    if delta.length_squared() > radius * radius {
        return None;
    }

    let distance = delta.length();
    let normal = if distance > LENGTH_EPSILON {
        delta * (1.0 / distance)
    } else {
        // Sphere center inside the box
        Vec3::Y
    };

    Some(ContactPoint {
        normal,
        point: closest,
        penetration: radius - distance,
    })
}

/// Oriented box vs oriented box: GJK answers whether the boxes overlap, SAT
/// supplies the minimum translation axis and depth.
pub fn collide_box_box(
    pos_a: Vec3,
    orientation_a: Quat,
    half_a: Vec3,
    pos_b: Vec3,
    orientation_b: Quat,
    half_b: Vec3,
) -> Option<ContactPoint> {
    let overlapping = gjk::intersects(
        |dir| support_box(pos_a, orientation_a, half_a, dir),
        |dir| support_box(pos_b, orientation_b, half_b, dir),
        pos_b - pos_a,
    );
    if !overlapping {
        return None;
    }

    // SAT can still find a separating axis inside its epsilon tolerance;
    // treat the pair as disjoint for this substep
    let result = sat::box_box(pos_a, orientation_a, half_a, pos_b, orientation_b, half_b)?;

    Some(ContactPoint {
        normal: result.normal,
        // Midpoint approximation; the deepest SAT feature is not computed
        point: (pos_a + pos_b) * 0.5,
        penetration: result.penetration,
    })
}
