//! # rigidsim
//!
//! A compact 3D rigid-body physics engine.
//!
//! ## Features
//!
//! - **Shapes**: spheres, oriented boxes and visual-only line segments
//! - **Narrow phase**: sphere/sphere and sphere/box closest-point tests,
//!   GJK + separating-axis theorem for box/box
//! - **Constraint solver**: sequential impulses with Baumgarte
//!   stabilization, Coulomb friction and restitution, plus an iterative
//!   positional projection pass
//! - **Deterministic substep loop**: fixed contact ordering, no allocation
//!   inside the loop
//!
//! The solver is linear-only: bodies carry orientations and angular
//! velocities, but contacts never produce torque and orientations are not
//! integrated.
//!
//! ## Quick Start
//!
//! ```rust
//! use rigidsim::prelude::*;
//!
//! # fn main() -> Result<(), rigidsim::WorldError> {
//! let mut world = World::new();
//!
//! // A static floor with its top face at y = 0
//! world.create_body(
//!     BodyDef::default()
//!         .with_shape(Shape::cuboid(Vec3::new(10.0, 0.5, 10.0)))
//!         .with_position(Vec3::new(0.0, -0.5, 0.0)),
//! )?;
//!
//! // A ball dropped from y = 3
//! let ball = world.create_body(
//!     BodyDef::default()
//!         .with_shape(Shape::sphere(0.5))
//!         .with_position(Vec3::new(0.0, 3.0, 0.0))
//!         .with_mass(1.0),
//! )?;
//!
//! for _ in 0..120 {
//!     world.step(1.0 / 60.0, 4)?;
//! }
//!
//! let resting = world.body(ball).unwrap().position;
//! assert!(resting.y < 3.0);
//! # Ok(())
//! # }
//! ```

pub mod collision;
pub mod dynamics;
mod error;
pub mod geometry;
pub mod math;
pub mod solver;
mod world;

pub use error::WorldError;
pub use world::World;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::collision::{BodyId, Contact};
    pub use crate::dynamics::{Body, BodyDef};
    pub use crate::geometry::Shape;
    pub use crate::math::{Mat3, Quat, Vec3};
    pub use crate::solver::SolverConfig;
    pub use crate::world::World;
    pub use crate::WorldError;
}
