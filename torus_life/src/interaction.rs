// interaction.rs - Direct user edits to the board

use crate::error::LifeError;
use crate::grid::Grid;

/// Flips the cell at an already-resolved grid coordinate and returns its new state.
///
/// Independent of the simulation cadence; applies whether or not the clock runs.
pub fn toggle(grid: &mut Grid, x: usize, y: usize) -> Result<bool, LifeError> {
    let next = !grid.get(x, y)?;
    grid.set(x, y, next)?;
    Ok(next)
}
