use log::{debug, trace};

use crate::collision::{generate_contacts, BodyId, Contact};
use crate::dynamics::{integrate_position, integrate_velocity, Body, BodyDef};
use crate::error::WorldError;
use crate::math::Vec3;
use crate::solver::{solve_positions, solve_velocities, SolverConfig};

/// The physics world: owns the bodies, the gravity vector and a reusable
/// contact buffer, and advances the simulation in fixed substeps.
///
/// Bodies are append-only; ids handed out by [`create_body`](Self::create_body)
/// stay valid for the lifetime of the world. The body slice is readable
/// between steps for rendering.
pub struct World {
    gravity: Vec3,
    config: SolverConfig,
    bodies: Vec<Body>,
    /// Scratch contact buffer, regenerated every substep and every position
    /// iteration; capacity is ensured before the substep loop so the loop
    /// itself never allocates
    contacts: Vec<Contact>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Creates a world with default gravity (0, -9.81, 0).
    pub fn new() -> Self {
        Self::with_gravity(Vec3::new(0.0, -9.81, 0.0))
    }

    /// Creates a world with the given gravity.
    pub fn with_gravity(gravity: Vec3) -> Self {
        Self {
            gravity,
            config: SolverConfig::default(),
            bodies: Vec::new(),
            contacts: Vec::new(),
        }
    }

    /// Appends a body and returns its id.
    pub fn create_body(&mut self, def: BodyDef) -> Result<BodyId, WorldError> {
        self.bodies.try_reserve(1)?;
        let id = BodyId::new(self.bodies.len() as u32);
        self.bodies.push(Body::from_def(def));
        debug!("created body {:?} at {:?}", id, self.bodies[id.index()].position);
        Ok(id)
    }

    /// Advances the simulation by `timestep`, split into `substeps` equal
    /// substeps.
    ///
    /// Panics if `substeps` is zero.
    pub fn step(&mut self, timestep: f32, substeps: u16) -> Result<(), WorldError> {
        assert!(substeps > 0, "step requires at least one substep");

        // Worst case every pair touches; reserving up front keeps the
        // substep loop allocation-free
        let n = self.bodies.len();
        let max_pairs = n * n.saturating_sub(1) / 2;
        self.contacts.clear();
        self.contacts.try_reserve(max_pairs)?;

        let dt = timestep / f32::from(substeps);
        for _ in 0..substeps {
            self.substep(dt);
        }
        Ok(())
    }

    /// A single fixed substep: gravity, contacts, impulses, integration,
    /// then iterative positional projection.
    fn substep(&mut self, dt: f32) {
        for body in &mut self.bodies {
            integrate_velocity(body, self.gravity, dt);
        }

        self.contacts.clear();
        generate_contacts(&self.bodies, &mut self.contacts);
        trace!("substep: {} contacts", self.contacts.len());

        solve_velocities(&self.contacts, &mut self.bodies, dt, &self.config);

        for body in &mut self.bodies {
            integrate_position(body, dt);
        }

        // Regenerating between projections refreshes the moved geometry; the
        // gentle correction fraction damps jitter
        for _ in 0..self.config.position_iterations {
            self.contacts.clear();
            generate_contacts(&self.bodies, &mut self.contacts);
            solve_positions(&self.contacts, &mut self.bodies, &self.config);
        }
    }

    /// Returns all bodies, in creation order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Gets a reference to a body.
    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.index())
    }

    /// Gets a mutable reference to a body.
    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id.index())
    }

    /// Returns the number of bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Returns true if the world has no bodies.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Gets the gravity vector.
    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    /// Sets the gravity vector.
    pub fn set_gravity(&mut self, gravity: Vec3) {
        self.gravity = gravity;
    }
}
