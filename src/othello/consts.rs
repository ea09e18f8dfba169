pub const DEFAULT_BOARD_SIDE: usize = 8;

/// Seat indices must fit the seven payload bits of a packed board cell.
pub const MAX_SEATS: usize = 128;

/// Characters a setup string accepts for an empty cell.
pub const EMPTY_SYMBOLS: [char; 3] = ['.', '-', '_'];
