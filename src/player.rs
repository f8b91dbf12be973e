use crate::{
    board::Board,
    common::MoveError,
    config::{MARKS, NUM_PLAYERS},
};

/// Index of one of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlayerId {
    First,
    Second,
}

impl PlayerId {
    /// Zero-based index into [`PLAYERS`].
    pub fn index(self) -> usize {
        match self {
            PlayerId::First => 0,
            PlayerId::Second => 1,
        }
    }

    /// The opponent.
    pub fn other(self) -> Self {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }

    /// Full player record.
    pub fn player(self) -> Player {
        PLAYERS[self.index()]
    }

    pub fn mark(self) -> char {
        self.player().mark
    }

    /// One-based number used in prompts and messages.
    pub fn number(self) -> usize {
        self.index() + 1
    }
}

/// A player and the mark it drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub mark: char,
}

/// Both players, in turn order.
pub const PLAYERS: [Player; NUM_PLAYERS] = [
    Player {
        id: PlayerId::First,
        mark: MARKS[0],
    },
    Player {
        id: PlayerId::Second,
        mark: MARKS[1],
    },
];

/// Source of column choices for the turn loop.
pub trait InputProvider {
    /// Ask `player` for a zero-based column in `[0, COLS)`.
    ///
    /// Implementations keep asking until they get one. `Ok(None)` means the
    /// player wants to stop.
    fn next_column(&mut self, board: &Board, player: Player) -> anyhow::Result<Option<usize>>;

    /// Told when the engine refused the last column.
    fn reject(&mut self, _err: MoveError) -> anyhow::Result<()> {
        Ok(())
    }
}
