mod contact;
mod generator;
pub mod narrow_phase;

pub use contact::{combined_friction, combined_restitution, BodyId, Contact};
pub use generator::generate_contacts;
