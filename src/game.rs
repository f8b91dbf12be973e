use crate::{
    board::Board,
    common::{BoardError, MoveError, Outcome},
    config::{CELLS, COLS},
    player::{Player, PlayerId},
};

/// Core game logic: the board, whose turn it is, and how the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current: PlayerId,
    last_mover: Option<PlayerId>,
    turn: usize,
    status: Outcome,
}

impl GameEngine {
    /// Create a new engine with an empty board; the first player moves first.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: PlayerId::First,
            last_mover: None,
            turn: 0,
            status: Outcome::InProgress,
        }
    }

    /// Wrap a prepared board. The first player is taken to have moved on
    /// every even turn, so the turn counter and the player to move follow
    /// from the number of pieces.
    ///
    /// Boards that alternating play cannot produce are refused: the first
    /// player must have as many pieces as the second or one more, and only
    /// the player who moved last may own a four-in-a-row.
    pub fn from_board(board: Board) -> Result<Self, BoardError> {
        let first = board.count(PlayerId::First);
        let second = board.count(PlayerId::Second);
        if first != second && first != second + 1 {
            return Err(BoardError::TurnOrder { first, second });
        }
        let turn = first + second;
        let current = if turn % 2 == 0 {
            PlayerId::First
        } else {
            PlayerId::Second
        };
        let last_mover = (turn > 0).then(|| current.other());
        if let Some(mover) = last_mover {
            if board.run_for(mover.other()).is_some() {
                return Err(BoardError::UnreachableWin {
                    player: mover.other(),
                });
            }
        }
        let mut engine = Self {
            board,
            current,
            last_mover,
            turn,
            status: Outcome::InProgress,
        };
        engine.status = engine.check_outcome();
        Ok(engine)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose move is next.
    pub fn current_player(&self) -> Player {
        self.current.player()
    }

    /// Player who made the most recent move.
    pub fn last_mover(&self) -> Option<PlayerId> {
        self.last_mover
    }

    /// Number of moves applied so far.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Outcome recorded after the last move.
    pub fn status(&self) -> Outcome {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Columns that can still take a piece.
    pub fn legal_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(move |&c| !self.board.is_column_full(c))
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Returns the `(row, col)` the piece landed on. A rejected move leaves
    /// the engine untouched.
    pub fn apply_move(&mut self, column: usize) -> Result<(usize, usize), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let mover = self.current;
        let row = self.board.drop_piece(column, mover)?;
        self.turn += 1;
        self.last_mover = Some(mover);
        self.current = mover.other();
        self.status = self.check_outcome();
        log::trace!(
            "turn {}: player {} dropped into column {} (row {})",
            self.turn,
            mover.number(),
            column + 1,
            row
        );
        Ok((row, column))
    }

    /// Evaluate the board from scratch.
    ///
    /// A four-in-a-row wins for the owner of its mark, which in play is always
    /// the player who just moved. Without one, the game is a draw only once
    /// every cell has been filled.
    pub fn check_outcome(&self) -> Outcome {
        if let Some(winner) = self.board.winner() {
            Outcome::Win(winner)
        } else if self.turn >= CELLS {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
