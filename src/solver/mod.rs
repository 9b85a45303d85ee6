mod pgs;

pub use pgs::{solve_positions, solve_velocities, SolverConfig};
