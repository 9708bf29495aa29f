pub mod generator;
pub mod grid;
pub mod solver;

pub use generator::{Generator, Puzzle, DEFAULT_ERASE_COUNT};
pub use grid::{Digit, Grid};
pub use solver::{solve, SolveError};
