// grid.rs - Toroidal cell store for Conway's Game of Life

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::error::{ConfigError, LifeError};

/// Fixed-size, row-major board of binary cells (`index = y * width + x`).
///
/// Wraparound is the caller's job: `get`/`set` reject coordinates outside
/// `0..width` x `0..height` instead of clamping them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// All-dead grid. Both dimensions must be positive.
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        if width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        let len = width
            .checked_mul(height)
            .ok_or(ConfigError::TooManyCells { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![false; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Result<usize, LifeError> {
        if x >= self.width || y >= self.height {
            return Err(LifeError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Result<bool, LifeError> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, x: usize, y: usize, value: bool) -> Result<(), LifeError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Swaps in a whole generation. On `SizeMismatch` the grid is left untouched.
    pub fn replace_all(&mut self, next: Vec<bool>) -> Result<(), LifeError> {
        if next.len() != self.cells.len() {
            return Err(LifeError::SizeMismatch {
                expected: self.cells.len(),
                actual: next.len(),
            });
        }
        self.cells = next;
        Ok(())
    }

    /// Writes at `(x, y)` taken modulo the board size, so any offset lands on a cell.
    pub fn set_wrapped(&mut self, x: isize, y: isize, value: bool) {
        let wx = x.rem_euclid(self.width as isize) as usize;
        let wy = y.rem_euclid(self.height as isize) as usize;
        self.cells[wy * self.width + wx] = value;
    }

    /// Owned copy of the cells, detached from the live grid.
    pub fn snapshot(&self) -> Vec<bool> {
        self.cells.clone()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Fills roughly a third of the board from a simple LCG keyed on `seed`.
    pub fn randomize(&mut self, seed: u64) {
        let mut hasher = DefaultHasher::new();
        seed.hash(&mut hasher);
        let mut state = hasher.finish();

        for cell in &mut self.cells {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            *cell = (state >> 33) % 3 == 0;
        }
    }

    pub fn hash_cells(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.cells.hash(&mut hasher);
        hasher.finish()
    }
}

/// Read-only copy of the board handed to the rendering side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    width: usize,
    height: usize,
    generation: u64,
    cells: Vec<bool>,
}

impl Snapshot {
    pub fn of(grid: &Grid, generation: u64) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            generation,
            cells: grid.snapshot(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// `false` for coordinates outside the board.
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[y * self.width + x]
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_dead() {
        let grid = Grid::new(48, 35).unwrap();
        assert_eq!(grid.len(), 48 * 35);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn new_rejects_empty_or_overflowing_boards() {
        assert_eq!(Grid::new(0, 3), Err(ConfigError::ZeroWidth));
        assert_eq!(Grid::new(3, 0), Err(ConfigError::ZeroHeight));
        assert_eq!(
            Grid::new(usize::MAX, 2),
            Err(ConfigError::TooManyCells { width: usize::MAX, height: 2 })
        );
    }

    #[test]
    fn set_wrapped_folds_offsets_onto_the_board() {
        let mut grid = Grid::new(5, 4).unwrap();
        grid.set_wrapped(-1, -1, true);
        grid.set_wrapped(5, 9, true);
        assert!(grid.get(4, 3).unwrap());
        assert!(grid.get(0, 1).unwrap());
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn set_get_is_row_major() {
        let mut grid = Grid::new(4, 3).unwrap();
        grid.set(3, 1, true).unwrap();
        assert!(grid.get(3, 1).unwrap());
        assert!(grid.cells()[7]);
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn every_coordinate_owns_a_distinct_cell() {
        let mut grid = Grid::new(5, 4).unwrap();
        for y in 0..4 {
            for x in 0..5 {
                grid.set(x, y, true).unwrap();
                assert_eq!(grid.population(), y * 5 + x + 1);
            }
        }
    }

    #[test]
    fn out_of_range_is_reported_not_clamped() {
        let mut grid = Grid::new(4, 3).unwrap();
        assert_eq!(
            grid.get(4, 0),
            Err(LifeError::OutOfRange { x: 4, y: 0, width: 4, height: 3 })
        );
        assert!(grid.set(0, 3, true).is_err());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn replace_all_rejects_wrong_length_and_keeps_cells() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(1, 1, true).unwrap();
        let before = grid.snapshot();

        assert_eq!(
            grid.replace_all(vec![true; 8]),
            Err(LifeError::SizeMismatch { expected: 9, actual: 8 })
        );
        assert_eq!(grid.snapshot(), before);

        grid.replace_all(vec![true; 9]).unwrap();
        assert_eq!(grid.population(), 9);
    }

    #[test]
    fn snapshot_does_not_alias_live_grid() {
        let mut grid = Grid::new(2, 2).unwrap();
        let snap = grid.snapshot();
        grid.set(0, 0, true).unwrap();
        assert!(!snap[0]);
    }

    #[test]
    fn randomize_is_deterministic_per_seed() {
        let mut a = Grid::new(48, 35).unwrap();
        let mut b = Grid::new(48, 35).unwrap();
        a.randomize(7);
        b.randomize(7);
        assert_eq!(a, b);

        let pop = a.population();
        assert!(pop > 300 && pop < 900, "population {pop} far from a third");

        a.clear();
        assert_eq!(a.population(), 0);
    }

    #[test]
    fn snapshot_get_outside_board_is_dead() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(2, 1, true).unwrap();
        let snap = Snapshot::of(&grid, 5);
        assert!(snap.get(2, 1));
        assert!(!snap.get(3, 1));
        assert_eq!(snap.generation(), 5);
        assert_eq!((snap.width(), snap.height()), (3, 2));
        assert_eq!(snap.cells().len(), 6);
        assert_eq!(snap.population(), 1);
    }
}
