use super::vec3::Vec3;

/// A quaternion representing a rotation in 3D space.
///
/// Stored as (x, y, z, w) where w is the scalar part. Kept normalized for
/// rotation operations.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a new quaternion from components
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a quaternion from a rotation axis and angle (in radians)
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let half_angle = angle * 0.5;
        let s = half_angle.sin();
        let c = half_angle.cos();
        let axis = axis.normalize_or(Vec3::X);
        Self::new(axis.x * s, axis.y * s, axis.z * s, c)
    }

    /// Returns the squared length of the quaternion
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Returns a normalized quaternion, or identity for a degenerate input
    #[inline]
    pub fn normalize(self) -> Self {
        let len_sq = self.length_squared();
        if len_sq > 1e-10 {
            let inv_len = 1.0 / len_sq.sqrt();
            Self::new(
                self.x * inv_len,
                self.y * inv_len,
                self.z * inv_len,
                self.w * inv_len,
            )
        } else {
            Self::IDENTITY
        }
    }

    /// Returns the conjugate (inverse rotation for unit quaternions)
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Returns the inverse of the quaternion
    #[inline]
    pub fn inverse(self) -> Self {
        let len_sq = self.length_squared();
        if len_sq > 1e-10 {
            let inv_len_sq = 1.0 / len_sq;
            Self::new(
                -self.x * inv_len_sq,
                -self.y * inv_len_sq,
                -self.z * inv_len_sq,
                self.w * inv_len_sq,
            )
        } else {
            Self::IDENTITY
        }
    }

    /// Rotates a vector by this quaternion
    #[inline]
    pub fn rotate_vec(self, v: Vec3) -> Vec3 {
        let qv = Vec3::new(self.x, self.y, self.z);
        let uv = qv.cross(v);
        let uuv = qv.cross(uv);
        v + (uv * self.w + uuv) * 2.0
    }

    /// Inverse rotates a vector (rotates by the conjugate)
    #[inline]
    pub fn inverse_rotate_vec(self, v: Vec3) -> Vec3 {
        self.conjugate().rotate_vec(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-5;

    fn vec3_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_identity_rotation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec3_approx_eq(Quat::IDENTITY.rotate_vec(v), v));
    }

    #[test]
    fn test_axis_angle_rotation() {
        // 90 degrees around Z maps X onto Y
        let q = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2);
        assert!(vec3_approx_eq(q.rotate_vec(Vec3::X), Vec3::Y));
    }

    #[test]
    fn test_inverse_rotation_round_trip() {
        let q = Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0), 0.7);
        let v = Vec3::new(3.0, -2.0, 0.5);
        let back = q.inverse_rotate_vec(q.rotate_vec(v));
        assert!(vec3_approx_eq(back, v));
    }

    #[test]
    fn test_conjugate_matches_inverse_for_unit() {
        let q = Quat::from_axis_angle(Vec3::Y, 1.3);
        let v = Vec3::new(0.2, 5.0, -1.0);
        assert!(vec3_approx_eq(
            q.conjugate().rotate_vec(v),
            q.inverse().rotate_vec(v)
        ));
    }

    #[test]
    fn test_normalize() {
        let q = Quat::new(0.0, 0.0, 2.0, 0.0).normalize();
        assert!((q.length_squared() - 1.0).abs() < EPSILON);
    }
}
