/*
 *  A score-keeping engine for Othello-style territory games in Rust.
 */

pub(crate) mod board;
pub mod consts;
pub mod coords;
pub mod notation;
pub mod players;
pub(crate) mod score;

pub mod prelude {
    pub(crate) use crate::utils::prelude::*;

    pub use super::{
        board::{Board, BoardShape, BoardView, Cell, CellChange, CellChangeListener},
        consts::*,
        coords::{self, *},
        notation::*,
        players::*,
        score::{ScoreItem, ScoreTracker},
    };
}
