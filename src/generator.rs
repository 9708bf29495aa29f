use crate::grid::Grid;
use crate::solver;
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Erase draws per generated puzzle, matching the classic 40-blank layout.
pub const DEFAULT_ERASE_COUNT: usize = 40;

/// A generated puzzle: the grid plus a parallel mask marking which cells are
/// givens (pre-filled, not meant to be user-editable).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Puzzle {
    pub grid: Grid,
    pub givens: [[bool; 9]; 9],
}

impl Puzzle {
    pub fn is_given(&self, r: usize, c: usize) -> bool { self.givens[r][c] }
}

pub struct Generator {
    rng: StdRng,
}

impl Generator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Fill an empty grid, then erase `erase_count` uniformly drawn cells.
    /// Draws are independent and may repeat, so the number of distinct
    /// blanks can come out below `erase_count`.
    pub fn generate(&mut self, erase_count: usize) -> Puzzle {
        let mut grid = Grid::empty();
        let mut placements = 0u64;
        let filled = solver::fill(&mut grid, &mut placements);
        debug_assert!(filled, "an empty grid always has a solution");

        for _ in 0..erase_count {
            let r = self.rng.gen_range(0..9);
            let c = self.rng.gen_range(0..9);
            grid.clear(r, c);
        }

        let mut givens = [[false; 9]; 9];
        for (r, c) in Grid::positions() { givens[r][c] = grid.get(r, c) != 0; }
        let blanks = Grid::positions().filter(|&(r, c)| !givens[r][c]).count();
        debug!("generated puzzle with {blanks} blanks from {erase_count} draws");
        Puzzle { grid, givens }
    }
}
