use crate::othello::prelude::*;

/// The (player, score) pair maintained per registered player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreItem {
    pub player_id: PlayerId,
    pub score: u32,
}

/// Keeps per-player point totals for a board.
///
/// Each occupied cell is worth 2 points when it sits on the board's outer
/// boundary and 1 otherwise. The tracker seeds itself once with a full scan of
/// the board and afterwards maintains the totals purely from ownership-change
/// notifications, so the running totals always equal what a rescan would
/// produce.
///
/// The roster is fixed at construction: no score item is ever added or
/// removed, and queries for unregistered ids answer 0 without mutating
/// anything.
pub struct ScoreTracker {
    items: Vec<ScoreItem>,
    shape: BoardShape,
    seeded: bool,
    observers: Vec<Box<dyn FnMut(&[PlayerId])>>,
}

impl ScoreTracker {
    /// Produces a tracker with one zeroed score per roster player. The board
    /// contributes only its shape here; its cells are first read by
    /// [`Self::initialize`].
    pub fn new(players: &[Player], board: &impl BoardView) -> ScoreTracker {
        ScoreTracker {
            items: players.iter()
                .map(|p| ScoreItem { player_id: p.id().clone(), score: 0 })
                .collect(),
            shape: board.shape(),
            seeded: false,
            observers: vec![],
        }
    }

    /// Produces a tracker for the given roster and subscribes it to the
    /// board's cell changes, returning the shared handle.
    pub fn attach(players: &[Player], board: &mut Board) -> Rc<RefCell<ScoreTracker>> {
        let tracker = Rc::new(RefCell::new(ScoreTracker::new(players, board)));
        board.subscribe(Rc::clone(&tracker) as Rc<RefCell<dyn CellChangeListener>>);
        tracker
    }

    /// Seeds the totals with a single scan of the board: every occupied cell
    /// adds its weight to its occupant's score.
    ///
    /// Must run exactly once, before any incremental update. A second call is
    /// rejected rather than double-counting.
    pub fn initialize(&mut self, board: &impl BoardView) -> Result<()> {
        if self.seeded {
            return Err(anyhow!("score tracker is already seeded"));
        }

        for cell in board.cells() {
            if let Some(occupant) = &cell.occupant {
                let amount = self.weight(&cell.coord) as i32;
                self.bump(occupant, amount);
            }
        }
        self.seeded = true;
        Ok(())
    }

    /// The current snapshot of every registered player's score, in roster
    /// order.
    pub fn players_score(&self) -> &[ScoreItem] {
        &self.items
    }

    /// The score registered under a player id; 0 for ids the tracker does not
    /// know.
    pub fn points(&self, player_id: &PlayerId) -> u32 {
        self.items.iter()
            .find(|item| item.player_id == *player_id)
            .map_or(0, |item| item.score)
    }

    /// Registers an observer for score changes. After every applied update the
    /// observer receives the affected player ids, new occupant first.
    pub fn observe(&mut self, observer: impl FnMut(&[PlayerId]) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Point value of the cell at a coordinate: 2 on the boundary, 1 inside.
    /// A function of coordinates and board shape only, never of occupancy.
    pub fn weight(&self, coord: &Coord) -> u32 {
        match self.on_boundary(coord) {
            true  => 2,
            false => 1,
        }
    }

    /// Determines whether a coordinate has at least one compass neighbour
    /// lying outside the board.
    fn on_boundary(&self, coord: &Coord) -> bool {
        COMPASS_OFFSETS.iter().any(|offset| {
            let neighbour = coord + offset;
            !self.shape.has_cell_at(neighbour.x, neighbour.y)
        })
    }

    fn bump(&mut self, player_id: &PlayerId, amount: i32) {
        if let Some(item) = self.items.iter_mut().find(|item| item.player_id == *player_id) {
            item.score = item.score.saturating_add_signed(amount);
        }
    }

    fn emit(&mut self, affected: &[PlayerId]) {
        for observer in self.observers.iter_mut() {
            observer(affected);
        }
    }
}

impl CellChangeListener for ScoreTracker {
    fn cell_changed(&mut self, change: &CellChange) {
        let coord = &change.cell.coord;
        if !self.shape.has_cell_at(coord.x as isize, coord.y as isize) {
            return; // not a cell of the board this tracker scores
        }
        let Some(occupant) = &change.cell.occupant else {
            return; // nothing claimed, nothing to score
        };
        if !self.seeded {
            log::warn!("ownership change at {} arrived before the initial seed; ignoring", coord.notate());
            return;
        }

        let amount = self.weight(coord) as i32;
        let mut affected = vec![occupant.clone()];
        self.bump(occupant, amount);
        if let Some(previous) = &change.previous_occupant {
            self.bump(previous, -amount);
            affected.push(previous.clone());
        }
        self.emit(&affected);
    }
}
