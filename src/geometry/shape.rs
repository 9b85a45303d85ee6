use crate::math::Vec3;

/// A collision shape that can be attached to bodies.
///
/// Boxes are oriented by the owning body's quaternion. Lines are visual
/// markers only and never produce contacts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// A sphere defined by its radius
    Sphere { radius: f32 },
    /// A box (OBB) defined by half-extents
    Box { half_extents: Vec3 },
    /// A line segment between two local-space points, rendered but never collided
    Line { p1: Vec3, p2: Vec3 },
}

impl Shape {
    /// Creates a sphere shape
    #[inline]
    pub const fn sphere(radius: f32) -> Self {
        Self::Sphere { radius }
    }

    /// Creates a box shape from half-extents
    #[inline]
    pub const fn cuboid(half_extents: Vec3) -> Self {
        Self::Box { half_extents }
    }

    /// Creates a line shape between two points
    #[inline]
    pub const fn line(p1: Vec3, p2: Vec3) -> Self {
        Self::Line { p1, p2 }
    }

    /// Returns true for shapes the contact generator skips
    #[inline]
    pub fn is_visual_only(&self) -> bool {
        matches!(self, Self::Line { .. })
    }
}

impl Default for Shape {
    /// A unit sphere, matching [`BodyDef`](crate::dynamics::BodyDef) defaults
    fn default() -> Self {
        Self::sphere(1.0)
    }
}
