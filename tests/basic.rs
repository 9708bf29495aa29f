use doku::{Grid, SolveError};
use pretty_assertions::assert_eq;

fn easy_puzzle() -> &'static str {
    // Known easy puzzle; dots for blanks
    "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
}

#[test]
fn parse_and_format() {
    let g = Grid::parse(easy_puzzle()).expect("parse");
    assert_eq!(g.to_compact(), easy_puzzle());
    assert!(g.is_consistent());
    assert!(!g.is_complete());
}

#[test]
fn parse_ignores_separators() {
    let spaced = "53. .7.... 6..195...\n.98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
    let g = Grid::parse(spaced).unwrap();
    assert_eq!(g.to_compact(), easy_puzzle());
}

#[test]
fn parse_rejects_wrong_length() {
    assert!(Grid::parse("123").is_err());
}

#[test]
fn from_rows_normalizes_out_of_range() {
    let mut rows = [[0u8; 9]; 9];
    rows[0][0] = 5;
    rows[0][1] = 12; // not a digit, treated as empty
    let g = Grid::from_rows(rows);
    assert_eq!(g.get(0, 0), 5);
    assert_eq!(g.get(0, 1), 0);
}

#[test]
fn validity_checks_row_col_box() {
    let mut g = Grid::empty();
    g.set(0, 0, 5);
    assert!(!g.is_valid(0, 8, 5), "same row");
    assert!(!g.is_valid(8, 0, 5), "same column");
    assert!(!g.is_valid(2, 2, 5), "same box");
    assert!(g.is_valid(4, 4, 5), "unrelated cell");
    assert!(g.is_valid(0, 8, 6), "different digit");
}

#[test]
fn solve_easy_puzzle() {
    let original = Grid::parse(easy_puzzle()).unwrap();
    let mut g = original.clone();
    doku::solve(&mut g).expect("solvable");
    assert!(g.is_complete());
    assert!(g.is_consistent());
    // givens survive untouched
    for (r, c) in Grid::positions() {
        if original.get(r, c) != 0 {
            assert_eq!(g.get(r, c), original.get(r, c));
        }
    }
}

#[test]
fn empty_grid_solves_deterministically() {
    let mut g = Grid::empty();
    doku::solve(&mut g).expect("empty grid always solvable");
    // smallest valid digit first, so row 0 comes out 1..=9
    let first_row: Vec<u8> = (0..9).map(|c| g.get(0, c)).collect();
    assert_eq!(first_row, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);

    let mut again = Grid::empty();
    doku::solve(&mut again).unwrap();
    assert_eq!(g, again);
}

#[test]
fn resolving_a_solution_is_identity() {
    let mut g = Grid::empty();
    doku::solve(&mut g).unwrap();
    let solution = g.clone();
    doku::solve(&mut g).unwrap();
    assert_eq!(g, solution);
}

#[test]
fn duplicate_givens_rejected() {
    // two 5s in row 0
    let mut rows = [[0u8; 9]; 9];
    rows[0][0] = 5;
    rows[0][4] = 5;
    let mut g = Grid::from_rows(rows);
    let before = g.clone();
    assert_eq!(doku::solve(&mut g), Err(SolveError::InvalidInput));
    assert_eq!(g, before, "grid untouched on error");
}

#[test]
fn consistent_but_unsolvable_reports_no_solution() {
    // row 0 holds 1..=8 with its last cell open, but the 9 it needs is
    // already taken by its column
    let mut rows = [[0u8; 9]; 9];
    for c in 0..8 { rows[0][c] = (c + 1) as u8; }
    rows[1][8] = 9;
    let mut g = Grid::from_rows(rows);
    assert!(g.is_consistent());
    let before = g.clone();
    assert_eq!(doku::solve(&mut g), Err(SolveError::NoSolution));
    assert_eq!(g, before, "grid untouched on error");
}
