use anyhow::{bail, Result};
use itertools::Itertools;

pub type Digit = u8; // 0 = empty; 1..=9 placed

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: [[Digit; 9]; 9],
}

impl Grid {
    pub fn empty() -> Self { Self { cells: [[0; 9]; 9] } }

    /// Build from a 9x9 digit array; anything outside 1..=9 becomes empty.
    pub fn from_rows(rows: [[Digit; 9]; 9]) -> Self {
        let mut g = Self::empty();
        for (r, c) in Self::positions() {
            let v = rows[r][c];
            g.cells[r][c] = if (1..=9).contains(&v) { v } else { 0 };
        }
        g
    }

    /// Parse 81 cells of digits with 0/./_ for blanks; other characters
    /// (whitespace, separators) are ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let mut digits = Vec::with_capacity(81);
        for ch in text.chars() {
            match ch {
                '1'..='9' => digits.push(ch as u8 - b'0'),
                '0' | '.' | '_' => digits.push(0),
                _ => {}
            }
        }
        if digits.len() != 81 { bail!("expected 81 cells, got {}", digits.len()) }
        let mut g = Self::empty();
        for (i, &v) in digits.iter().enumerate() { g.cells[i / 9][i % 9] = v; }
        Ok(g)
    }

    pub fn to_compact(&self) -> String {
        Self::positions().map(|(r, c)| {
            let d = self.cells[r][c];
            if d == 0 { '.' } else { (b'0' + d) as char }
        }).collect()
    }

    pub fn to_pretty_string(&self) -> String {
        let mut s = String::new();
        for r in 0..9 {
            if r % 3 == 0 { s.push_str("+-------+-------+-------+\n"); }
            for c in 0..9 {
                if c % 3 == 0 { s.push('|'); s.push(' '); }
                let d = self.cells[r][c];
                s.push(if d == 0 { '·' } else { (b'0' + d) as char });
                s.push(' ');
            }
            s.push('|'); s.push('\n');
        }
        s.push_str("+-------+-------+-------+\n");
        s
    }

    pub fn get(&self, r: usize, c: usize) -> Digit { self.cells[r][c] }
    pub fn set(&mut self, r: usize, c: usize, d: Digit) { debug_assert!((1..=9).contains(&d)); self.cells[r][c] = d; }
    pub fn clear(&mut self, r: usize, c: usize) { self.cells[r][c] = 0; }

    /// True iff placing `d` at (r, c) would not duplicate `d` in the row,
    /// the column, or the containing 3x3 box.
    pub fn is_valid(&self, r: usize, c: usize, d: Digit) -> bool {
        for i in 0..9 {
            if self.cells[r][i] == d || self.cells[i][c] == d { return false; }
        }
        let br = (r / 3) * 3;
        let bc = (c / 3) * 3;
        for rr in br..br + 3 {
            for cc in bc..bc + 3 {
                if self.cells[rr][cc] == d { return false; }
            }
        }
        true
    }

    /// No duplicate non-zero digit in any row, column, or box.
    pub fn is_consistent(&self) -> bool {
        for r in 0..9 { if !no_dupes(self.row_values(r)) { return false; } }
        for c in 0..9 { if !no_dupes(self.col_values(c)) { return false; } }
        for br in 0..3 { for bc in 0..3 { if !no_dupes(self.box_values(br, bc)) { return false; } } }
        true
    }

    pub fn is_complete(&self) -> bool { Self::positions().all(|(r, c)| self.cells[r][c] != 0) }

    pub fn first_empty(&self) -> Option<(usize, usize)> {
        Self::positions().find(|&(r, c)| self.cells[r][c] == 0)
    }

    /// All cell coordinates in row-major order.
    pub fn positions() -> impl Iterator<Item = (usize, usize)> {
        (0..9).cartesian_product(0..9)
    }

    fn row_values(&self, r: usize) -> [Digit; 9] { self.cells[r] }
    fn col_values(&self, c: usize) -> [Digit; 9] { let mut a = [0; 9]; for r in 0..9 { a[r] = self.cells[r][c]; } a }
    fn box_values(&self, br: usize, bc: usize) -> [Digit; 9] {
        let mut a = [0; 9];
        let mut i = 0;
        for r in br * 3..br * 3 + 3 { for c in bc * 3..bc * 3 + 3 { a[i] = self.cells[r][c]; i += 1; } }
        a
    }
}

fn no_dupes(vals: [Digit; 9]) -> bool {
    let mut seen = [false; 10];
    for v in vals {
        if v != 0 {
            if seen[v as usize] { return false; }
            seen[v as usize] = true;
        }
    }
    true
}
