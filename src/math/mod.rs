mod mat3;
mod quat;
mod vec3;

pub use mat3::Mat3;
pub use quat::Quat;
pub use vec3::Vec3;

/// Common math constants
pub mod consts {
    /// A small epsilon value below which a vector length is treated as zero
    pub const LENGTH_EPSILON: f32 = 1e-6;
}
