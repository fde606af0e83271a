mod problem;
mod simplex;
mod solution;
mod tableau;
mod tolerance;

pub use problem::{Problem, ProblemError};
pub use simplex::{Solver, SolverError};
pub use solution::Solution;
pub use tolerance::Tolerance;
