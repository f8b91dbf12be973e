pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of aligned marks needed to win.
pub const WIN_LENGTH: usize = 4;

/// Total number of cells, and therefore the most turns a game can last.
pub const CELLS: usize = ROWS * COLS;

pub const NUM_PLAYERS: usize = 2;

/// Display marks, indexed by player.
pub const MARKS: [char; NUM_PLAYERS] = ['X', 'O'];
