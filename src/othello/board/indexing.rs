use super::BoardCell;
use crate::othello::prelude::*;

impl Board {
    /// Gets the board cell at a given coordinate.
    pub(super) fn get(&self, coord: &Coord) -> Result<BoardCell> {
        if self.shape.has_cell_at(coord.x as isize, coord.y as isize) {
            Ok(self.cells[self.shape.index_of(coord)])
        } else {
            Err(anyhow!("invalid coordinate {}", coord.notate()))
        }
    }

    /// Mutable reference to the board cell at a given coordinate.
    pub(super) fn get_mut(&mut self, coord: &Coord) -> Result<&mut BoardCell> {
        if self.shape.has_cell_at(coord.x as isize, coord.y as isize) {
            let index = self.shape.index_of(coord);
            Ok(&mut self.cells[index])
        } else {
            Err(anyhow!("invalid coordinate {}", coord.notate()))
        }
    }
}
