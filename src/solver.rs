use crate::grid::Grid;
use log::debug;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The input already violates a row, column, or box constraint.
    #[error("puzzle already contains a duplicate in a row, column, or box")]
    InvalidInput,
    /// Exhaustive search found no assignment completing the grid.
    #[error("no solution exists from this starting configuration")]
    NoSolution,
}

/// Solve in place. On success every cell is 1..=9 and the original non-zero
/// cells are untouched; on error the grid is exactly the input grid.
pub fn solve(grid: &mut Grid) -> Result<(), SolveError> {
    if !grid.is_consistent() { return Err(SolveError::InvalidInput); }
    let mut placements = 0u64;
    if fill(grid, &mut placements) {
        debug!("solved after {placements} placements");
        Ok(())
    } else {
        debug!("search exhausted after {placements} placements");
        Err(SolveError::NoSolution)
    }
}

/// Exhaustive backtracking: first empty cell in row-major order, candidates
/// tried in ascending order. A failed branch resets its cell, so a false
/// return leaves the grid as it was on entry.
pub(crate) fn fill(grid: &mut Grid, placements: &mut u64) -> bool {
    let Some((r, c)) = grid.first_empty() else { return true };
    for d in 1..=9 {
        if grid.is_valid(r, c, d) {
            grid.set(r, c, d);
            *placements += 1;
            if fill(grid, placements) { return true; }
            grid.clear(r, c);
        }
    }
    false
}
