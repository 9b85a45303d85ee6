use crate::geometry::Shape;
use crate::math::{Mat3, Quat, Vec3};

/// Description for creating a body.
///
/// A zero mass (the default) makes the body static: it participates in
/// collisions but never moves.
#[derive(Debug, Clone)]
pub struct BodyDef {
    pub angular_velocity: Vec3,
    pub orientation: Quat,
    pub velocity: Vec3,
    pub position: Vec3,
    pub inertia: Mat3,
    pub mass: f32,
    pub center_of_mass: Vec3,
    pub friction: f32,
    pub restitution: f32,
    pub shape: Shape,
}

impl Default for BodyDef {
    fn default() -> Self {
        Self {
            angular_velocity: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
            position: Vec3::ZERO,
            inertia: Mat3::IDENTITY,
            mass: 0.0,
            center_of_mass: Vec3::ZERO,
            friction: 0.5,
            restitution: 0.5,
            shape: Shape::sphere(1.0),
        }
    }
}

impl BodyDef {
    /// Sets the position
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Sets the orientation
    pub fn with_orientation(mut self, orientation: Quat) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the linear velocity
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Sets the angular velocity
    pub fn with_angular_velocity(mut self, angular_velocity: Vec3) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    /// Sets the mass; zero keeps the body static
    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    /// Sets the friction coefficient
    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    /// Sets the restitution coefficient
    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution;
        self
    }

    /// Sets the collision shape
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }
}

/// A simulated body.
///
/// The shape is immutable after creation; the kinematic fields are written by
/// [`World::step`](crate::World::step). Angular velocity is stored but never
/// integrated: this engine resolves contacts with linear impulses only.
#[derive(Debug, Clone)]
pub struct Body {
    /// Position in world space
    pub position: Vec3,
    /// Orientation as a unit quaternion
    pub orientation: Quat,
    /// Linear velocity
    pub velocity: Vec3,
    /// Angular velocity (radians per second)
    pub angular_velocity: Vec3,
    /// Mass; zero for static bodies
    pub mass: f32,
    /// Inverse mass; zero for static bodies
    pub inverse_mass: f32,
    /// Local inertia tensor
    pub inertia: Mat3,
    /// Center of mass in local coordinates
    pub center_of_mass: Vec3,
    /// Friction coefficient
    pub friction: f32,
    /// Restitution (bounciness)
    pub restitution: f32,
    /// Collision shape
    pub shape: Shape,
}

impl Body {
    /// Builds a body from its definition, deriving the inverse mass.
    pub fn from_def(def: BodyDef) -> Self {
        let inverse_mass = if def.mass > 0.0 { 1.0 / def.mass } else { 0.0 };
        Self {
            position: def.position,
            orientation: def.orientation,
            velocity: def.velocity,
            angular_velocity: def.angular_velocity,
            mass: def.mass.max(0.0),
            inverse_mass,
            inertia: def.inertia,
            center_of_mass: def.center_of_mass,
            friction: def.friction,
            restitution: def.restitution,
            shape: def.shape,
        }
    }

    /// Returns true if this body never moves
    #[inline]
    pub fn is_static(&self) -> bool {
        self.inverse_mass == 0.0
    }

    /// Applies an instantaneous impulse at the center of mass.
    ///
    /// Statics are unaffected.
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        self.velocity += impulse * self.inverse_mass;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_def_is_static_unit_sphere() {
        let def = BodyDef::default();
        assert_eq!(def.mass, 0.0);
        assert_eq!(def.shape, Shape::sphere(1.0));
        assert_eq!(def.friction, 0.5);
        assert_eq!(def.restitution, 0.5);

        let body = Body::from_def(def);
        assert!(body.is_static());
        assert_eq!(body.inverse_mass, 0.0);
    }

    #[test]
    fn test_inverse_mass_derivation() {
        let body = Body::from_def(BodyDef::default().with_mass(2.0));
        assert!(!body.is_static());
        assert!((body.inverse_mass - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_apply_impulse() {
        let mut body = Body::from_def(BodyDef::default().with_mass(2.0));
        body.apply_impulse(Vec3::new(4.0, 0.0, 0.0));
        assert!((body.velocity - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_impulse_on_static_is_noop() {
        let mut body = Body::from_def(BodyDef::default());
        body.apply_impulse(Vec3::new(4.0, 0.0, 0.0));
        assert_eq!(body.velocity, Vec3::ZERO);
    }
}
