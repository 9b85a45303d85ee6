pub mod detectors;
pub mod gjk;
pub mod sat;

pub use detectors::{collide_box_box, collide_sphere_box, collide_sphere_sphere, ContactPoint};
pub use sat::SatResult;
