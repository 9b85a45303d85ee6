mod body;
mod integrator;

pub use body::{Body, BodyDef};
pub use integrator::{integrate_position, integrate_velocity};
