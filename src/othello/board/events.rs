use crate::othello::prelude::*;

/// A strongly-typed notification that a single cell's occupant was set or
/// changed.
///
/// `cell` carries the coordinate and the occupant after the change; the
/// previous occupant is present only when the cell changed hands rather than
/// being newly claimed.
#[derive(Clone, Debug)]
pub struct CellChange {
    pub cell: Cell,
    pub previous_occupant: Option<PlayerId>,
}

/// The subscription contract a board dispatches cell changes through.
pub trait CellChangeListener {
    /// Invoked inline, on the mutating call, after a cell's occupant changed.
    fn cell_changed(&mut self, change: &CellChange);
}
