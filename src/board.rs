//! Connect Four grid: gravity drops and four-in-a-row detection.
//!
//! Row 0 is the top of the grid and row `ROWS - 1` the bottom, so a dropped
//! piece settles on the highest-numbered empty row of its column.

use crate::common::{BoardError, MoveError};
use crate::config::{COLS, ROWS, WIN_LENGTH};
use crate::player::PlayerId;
use core::fmt;

/// Contents of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Mark(PlayerId),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Owner of the piece, if any.
    pub fn owner(&self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Mark(p) => Some(*p),
        }
    }

    /// Character drawn for this cell.
    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Mark(p) => p.mark(),
        }
    }
}

/// Four contiguous `(row, col)` positions.
pub type Run = [(usize, usize); WIN_LENGTH];

/// Step directions scanned for runs: right, down, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Build a board from text rows, top row first.
    ///
    /// Player marks (`X`, `O`) fill a cell; `.` or a space leaves it empty.
    /// Boards with pieces hanging over empty cells are refused.
    pub fn from_rows(rows: [&str; ROWS]) -> Result<Self, BoardError> {
        let mut board = Board::new();
        for (r, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != COLS {
                return Err(BoardError::InvalidRowLength { row: r, len });
            }
            for (c, ch) in line.chars().enumerate() {
                board.cells[r][c] = match ch {
                    '.' | ' ' => Cell::Empty,
                    _ if ch == PlayerId::First.mark() => Cell::Mark(PlayerId::First),
                    _ if ch == PlayerId::Second.mark() => Cell::Mark(PlayerId::Second),
                    _ => return Err(BoardError::UnknownMark { row: r, col: c, ch }),
                };
            }
        }
        if let Some((row, col)) = board.first_floating() {
            return Err(BoardError::FloatingPiece { row, col });
        }
        Ok(board)
    }

    /// Cell at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns `true` when the top cell of `col` is taken. Columns outside the
    /// grid count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        col >= COLS || !self.cells[0][col].is_empty()
    }

    /// Lowest empty row of `col`, where the next piece would land.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&r| self.cells[r][col].is_empty())
    }

    /// Drop a piece for `player` into `col` and return the row it landed on.
    pub fn drop_piece(&mut self, col: usize, player: PlayerId) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::ColumnOutOfRange { column: col });
        }
        let row = self
            .landing_row(col)
            .ok_or(MoveError::ColumnFull { column: col })?;
        self.cells[row][col] = Cell::Mark(player);
        Ok(row)
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Number of pieces belonging to `player`.
    pub fn count(&self, player: PlayerId) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.owner() == Some(player))
            .count()
    }

    /// Returns `true` when every column is full.
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|c| self.is_column_full(c))
    }

    /// Returns `true` when no piece sits above an empty cell.
    pub fn is_settled(&self) -> bool {
        self.first_floating().is_none()
    }

    fn first_floating(&self) -> Option<(usize, usize)> {
        for c in 0..COLS {
            for r in 0..ROWS - 1 {
                if !self.cells[r][c].is_empty() && self.cells[r + 1][c].is_empty() {
                    return Some((r, c));
                }
            }
        }
        None
    }

    /// Positions of a run starting at `(row, col)` stepping by `(dr, dc)`,
    /// or `None` if any of them falls off the grid.
    fn run_from(row: usize, col: usize, (dr, dc): (isize, isize)) -> Option<Run> {
        let span = (WIN_LENGTH - 1) as isize;
        let end_r = row as isize + dr * span;
        let end_c = col as isize + dc * span;
        if !(0..ROWS as isize).contains(&end_r) || !(0..COLS as isize).contains(&end_c) {
            return None;
        }
        Some(core::array::from_fn(|i| {
            let i = i as isize;
            ((row as isize + dr * i) as usize, (col as isize + dc * i) as usize)
        }))
    }

    /// First run of four equal, non-empty cells, scanning every start cell in
    /// every direction.
    pub fn winning_run(&self) -> Option<Run> {
        self.find_run(None)
    }

    /// First four-in-a-row made of `player`'s pieces.
    pub fn run_for(&self, player: PlayerId) -> Option<Run> {
        self.find_run(Some(player))
    }

    fn find_run(&self, owner: Option<PlayerId>) -> Option<Run> {
        for row in 0..ROWS {
            for col in 0..COLS {
                let first = self.cells[row][col];
                if first.is_empty() || owner.is_some_and(|p| first.owner() != Some(p)) {
                    continue;
                }
                for dir in DIRECTIONS {
                    if let Some(run) = Self::run_from(row, col, dir) {
                        if run.iter().all(|&(r, c)| self.cells[r][c] == first) {
                            return Some(run);
                        }
                    }
                }
            }
        }
        None
    }

    /// Owner of a four-in-a-row, if one exists.
    pub fn winner(&self) -> Option<PlayerId> {
        self.winning_run()
            .and_then(|run| self.cells[run[0].0][run[0].1].owner())
    }

    #[cfg(test)]
    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    Connect Four Game ")?;
        for row in self.cells.iter() {
            for cell in row.iter() {
                write!(f, "| {} ", cell.symbol())?;
            }
            writeln!(f, "|")?;
            for _ in 0..COLS * 4 + 1 {
                write!(f, "-")?;
            }
            writeln!(f)?;
        }
        write!(f, "  1")?;
        for c in 1..COLS {
            write!(f, "   {}", c + 1)?;
        }
        writeln!(f)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in self.cells.iter() {
            write!(f, "  ")?;
            for cell in row.iter() {
                let ch = if cell.is_empty() { '.' } else { cell.symbol() };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
