use crate::math::Vec3;

use super::body::Body;

/// Applies gravity to a body's velocity. Statics are skipped.
pub fn integrate_velocity(body: &mut Body, gravity: Vec3, dt: f32) {
    if body.is_static() {
        return;
    }
    body.velocity += gravity * dt;
}

/// Advances a body's position by its velocity. Statics are skipped.
///
/// Orientation is not integrated: it stays whatever the body was created
/// with.
pub fn integrate_position(body: &mut Body, dt: f32) {
    if body.is_static() {
        return;
    }
    body.position += body.velocity * dt;
}
