use crate::othello::prelude::*;

/// The rectangular extent of a board. Whether a cell exists at a coordinate is
/// a pure function of this shape, fixed for the lifetime of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardShape {
    width: usize,
    height: usize,
}

impl BoardShape {
    /// Constructs a new shape.
    pub fn new(width: usize, height: usize) -> Result<BoardShape> {
        if width == 0 || height == 0 {
            return Err(anyhow!("a board needs at least one cell; received {width}x{height}"));
        }
        Ok(BoardShape { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Determines whether a cell exists at the given (possibly out-of-range)
    /// coordinates.
    pub fn has_cell_at(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// The number of cells on a board of this shape.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// The row-major linear offset of a coordinate in a grid of this shape.
    pub(crate) fn index_of(&self, coord: &Coord) -> usize {
        coord.y * self.width + coord.x
    }

    /// The coordinate sitting at a row-major linear offset.
    pub(crate) fn coord_of(&self, index: usize) -> Coord {
        Coord::new(index % self.width, index / self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::BoardShape;

    #[test]
    fn extent_predicate() {
        let shape = BoardShape::new(8, 6).unwrap();
        assert_eq!(shape.width(), 8);
        assert_eq!(shape.height(), 6);
        assert_eq!(shape.cell_count(), 48);
        assert!(shape.has_cell_at(0, 0));
        assert!(shape.has_cell_at(7, 5));
        assert!(!shape.has_cell_at(-1, 0));
        assert!(!shape.has_cell_at(0, -1));
        assert!(!shape.has_cell_at(8, 0));
        assert!(!shape.has_cell_at(0, 6));
    }

    #[test]
    fn rejects_degenerate_shapes() {
        assert!(BoardShape::new(0, 8).is_err());
        assert!(BoardShape::new(8, 0).is_err());
    }
}
