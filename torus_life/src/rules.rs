// rules.rs - Neighbor counting and Conway's B3/S23 rule on a torus

use crate::error::LifeError;
use crate::grid::Grid;

/// Moore offsets in reading order: top row, middle row (no centre), bottom row.
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// The eight neighbors of `(x, y)`, each wrapped onto the torus.
pub fn neighbor_coordinates(x: usize, y: usize, width: usize, height: usize) -> [(usize, usize); 8] {
    let wrap = |v: usize, d: isize, size: usize| -> usize {
        // (v + d + size) mod size without leaving usize
        match d {
            -1 => (v + size - 1) % size,
            1 => (v + 1) % size,
            _ => v % size,
        }
    };
    OFFSETS.map(|(dx, dy)| (wrap(x, dx, width), wrap(y, dy, height)))
}

pub fn count_alive(grid: &Grid, neighbors: &[(usize, usize)]) -> Result<u8, LifeError> {
    let mut count = 0;
    for &(nx, ny) in neighbors {
        if grid.get(nx, ny)? {
            count += 1;
        }
    }
    Ok(count)
}

pub fn next_state(is_alive: bool, alive_count: u8) -> bool {
    match (is_alive, alive_count) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// Computes the next generation from one frozen read of `grid`.
///
/// Results go into a fresh buffer, so no cell sees a neighbor's updated value
/// within the same step.
pub fn step(grid: &Grid) -> Result<Vec<bool>, LifeError> {
    let (width, height) = (grid.width(), grid.height());
    let mut next = Vec::with_capacity(grid.len());
    for y in 0..height {
        for x in 0..width {
            let neighbors = neighbor_coordinates(x, y, width, height);
            let alive_count = count_alive(grid, &neighbors)?;
            next.push(next_state(grid.get(x, y)?, alive_count));
        }
    }
    Ok(next)
}
