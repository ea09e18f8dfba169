pub(crate) mod board_cell;
pub(crate) mod events;
pub(crate) mod indexing;
pub(crate) mod shape;

use super::prelude::*;

use board_cell::BoardCell;
pub use events::{CellChange, CellChangeListener};
pub use shape::BoardShape;

/// A snapshot of a single cell: its coordinate and its occupant, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub coord: Coord,
    pub occupant: Option<PlayerId>,
}

/// Read-only access to a board, sufficient for scoring: the extent predicate
/// and a snapshot of every cell.
pub trait BoardView {
    /// The shape of the board.
    fn shape(&self) -> BoardShape;

    /// Determines whether a cell exists at the given coordinates.
    fn has_cell_at(&self, x: isize, y: isize) -> bool {
        self.shape().has_cell_at(x, y)
    }

    /// Produces a snapshot of every cell on the board, row-major.
    fn cells(&self) -> Vec<Cell>;
}

/// A grid of cells seated by a fixed player roster.
///
/// The board owns no game rules: callers decide who claims which cell, and the
/// board's job is to store occupants and dispatch one typed [`CellChange`] per
/// effective mutation to every subscribed listener, inline on the mutating
/// call.
pub struct Board {
    shape: BoardShape,
    cells: Vec<BoardCell>,
    roster: Vec<Player>,
    listeners: Vec<Rc<RefCell<dyn CellChangeListener>>>,
}

impl Board {
    /// Produces an empty board with the given shape and roster.
    pub fn new(shape: BoardShape, players: &[Player]) -> Result<Board> {
        if players.len() > MAX_SEATS {
            return Err(anyhow!("a board seats at most {MAX_SEATS} players; received {}", players.len()));
        }
        for (i, player) in players.iter().enumerate() {
            // duplicate ids or symbols would make seat resolution ambiguous
            if players[..i].iter().any(|p| p.id() == player.id() || p.symbol() == player.symbol()) {
                return Err(anyhow!("player {} collides with an earlier seat", player.id()));
            }
        }

        Ok(Board {
            shape,
            cells: vec![BoardCell::default(); shape.cell_count()],
            roster: players.to_vec(),
            listeners: vec![],
        })
    }

    /// Produces a board pre-populated from a setup string. Every symbol in the
    /// setup must belong to a seated player.
    pub fn from_setup(setup: &SetupString, players: &[Player]) -> Result<Board> {
        let shape = BoardShape::new(setup.side, setup.side)?;
        let mut board = Board::new(shape, players)?;
        for (index, symbol) in setup.symbols.iter().enumerate() {
            let Some(symbol) = symbol else { continue };
            let seat = board.seat_by_symbol(*symbol)
                .ok_or_else(|| anyhow!("no player is seated under symbol {symbol}"))?;
            board.cells[index] = board.cells[index].with_seat(Some(seat));
        }
        Ok(board)
    }

    /// The shape of this board.
    pub fn shape(&self) -> BoardShape {
        self.shape
    }

    /// Finds the seated player printing under the given symbol.
    pub fn player_by_symbol(&self, symbol: char) -> Option<&Player> {
        self.roster.iter().find(|p| p.symbol() == symbol)
    }

    /// Determines the occupant of the cell at a given coordinate.
    pub fn occupant(&self, coord: &Coord) -> Result<Option<PlayerId>> {
        Ok(self.get(coord)?.seat().map(|s| self.roster[s].id().clone()))
    }

    /// Registers a listener for cell-ownership changes. The subscription lasts
    /// for the lifetime of the board.
    pub fn subscribe(&mut self, listener: Rc<RefCell<dyn CellChangeListener>>) {
        self.listeners.push(listener);
    }

    /// Sets or clears the occupant of a cell, then notifies every subscribed
    /// listener. A mutation that leaves the occupant unchanged dispatches
    /// nothing.
    pub fn set_occupant(&mut self, coord: &Coord, occupant: Option<&PlayerId>) -> Result<()> {
        let seat = match occupant {
            Some(id) => {
                let seat = self.seat_of(id)
                    .ok_or_else(|| anyhow!("player {id} is not seated at this board"))?;
                Some(seat)
            },
            None => None,
        };

        let previous = self.get(coord)?.seat();
        if previous == seat {
            log::trace!("cell {} already belongs to the requested occupant", coord.notate());
            return Ok(());
        }

        let cell = self.get_mut(coord)?;
        *cell = cell.with_seat(seat);

        let change = CellChange {
            cell: Cell { coord: *coord, occupant: occupant.cloned() },
            previous_occupant: previous.map(|s| self.roster[s].id().clone()),
        };
        for listener in &self.listeners {
            listener.borrow_mut().cell_changed(&change);
        }
        Ok(())
    }

    /// Renders the board as a setup string, row-major from the top-left.
    pub fn notate(&self) -> String {
        self.cells.iter().map(|cell| {
            cell.seat().map_or('.', |s| self.roster[s].symbol())
        }).collect()
    }

    fn seat_of(&self, id: &PlayerId) -> Option<usize> {
        self.roster.iter().position(|p| p.id() == id)
    }

    fn seat_by_symbol(&self, symbol: char) -> Option<usize> {
        self.roster.iter().position(|p| p.symbol() == symbol)
    }
}

impl BoardView for Board {
    fn shape(&self) -> BoardShape {
        self.shape
    }

    fn cells(&self) -> Vec<Cell> {
        self.cells.iter().enumerate().map(|(index, cell)| Cell {
            coord: self.shape.coord_of(index),
            occupant: cell.seat().map(|s| self.roster[s].id().clone()),
        }).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::othello::prelude::*;

    fn roster() -> Vec<Player> {
        vec![Player::new("black", 'B'), Player::new("white", 'W')]
    }

    #[derive(Default)]
    struct Recorder {
        changes: Vec<CellChange>,
    }

    impl CellChangeListener for Recorder {
        fn cell_changed(&mut self, change: &CellChange) {
            self.changes.push(change.clone());
        }
    }

    #[test]
    fn seats_resolve_from_setup() {
        let setup = "B..W".parse::<SetupString>().unwrap();
        let board = Board::from_setup(&setup, &roster()).unwrap();
        let a1 = "a1".parse::<Coord>().unwrap();
        let b2 = "b2".parse::<Coord>().unwrap();
        assert_eq!(board.occupant(&a1).unwrap(), Some(PlayerId::from("black")));
        assert_eq!(board.occupant(&b2).unwrap(), Some(PlayerId::from("white")));
        assert!(Board::from_setup(&"B..Z".parse().unwrap(), &roster()).is_err());
    }

    #[test]
    fn claims_dispatch_typed_changes() {
        let mut board = Board::new(BoardShape::new(2, 2).unwrap(), &roster()).unwrap();
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        board.subscribe(Rc::clone(&recorder) as Rc<RefCell<dyn CellChangeListener>>);

        let a1 = "a1".parse::<Coord>().unwrap();
        board.set_occupant(&a1, Some(&PlayerId::from("black"))).unwrap();
        board.set_occupant(&a1, Some(&PlayerId::from("white"))).unwrap();

        let recorder = recorder.borrow();
        assert_eq!(recorder.changes.len(), 2);
        assert_eq!(recorder.changes[0].cell.occupant, Some(PlayerId::from("black")));
        assert_eq!(recorder.changes[0].previous_occupant, None);
        assert_eq!(recorder.changes[1].cell.occupant, Some(PlayerId::from("white")));
        assert_eq!(recorder.changes[1].previous_occupant, Some(PlayerId::from("black")));
    }

    #[test]
    fn unchanged_occupant_dispatches_nothing() {
        let mut board = Board::new(BoardShape::new(2, 2).unwrap(), &roster()).unwrap();
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        board.subscribe(Rc::clone(&recorder) as Rc<RefCell<dyn CellChangeListener>>);

        let a1 = "a1".parse::<Coord>().unwrap();
        board.set_occupant(&a1, Some(&PlayerId::from("black"))).unwrap();
        board.set_occupant(&a1, Some(&PlayerId::from("black"))).unwrap();
        board.set_occupant(&a1, None).unwrap();

        let recorder = recorder.borrow();
        assert_eq!(recorder.changes.len(), 2);
        assert_eq!(recorder.changes[1].cell.occupant, None);
        assert_eq!(recorder.changes[1].previous_occupant, Some(PlayerId::from("black")));
    }

    #[test]
    fn rejects_unknown_players_and_foreign_coordinates() {
        let mut board = Board::new(BoardShape::new(2, 2).unwrap(), &roster()).unwrap();
        let a1 = "a1".parse::<Coord>().unwrap();
        let f6 = "f6".parse::<Coord>().unwrap();
        assert!(board.set_occupant(&a1, Some(&PlayerId::from("nobody"))).is_err());
        assert!(board.set_occupant(&f6, Some(&PlayerId::from("black"))).is_err());
        assert_eq!(board.occupant(&a1).unwrap(), None);
    }

    #[test]
    fn notation_round_trips() {
        let setup = "B.W..BW.B".parse::<SetupString>().unwrap();
        let board = Board::from_setup(&setup, &roster()).unwrap();
        assert_eq!(board.notate(), setup.repr);
    }

    #[test]
    fn rejects_colliding_rosters() {
        let shape = BoardShape::new(2, 2).unwrap();
        let twins = vec![Player::new("black", 'B'), Player::new("blue", 'B')];
        assert!(Board::new(shape, &twins).is_err());
    }
}
