#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use anyhow::Context;

use crate::{
    board::Board,
    common::MoveError,
    config::COLS,
    player::{InputProvider, Player},
};

/// Turn a typed, one-based column number into a zero-based index.
pub fn parse_column(input: &str) -> Option<usize> {
    let column: usize = input.trim().parse().ok()?;
    if (1..=COLS).contains(&column) {
        Some(column - 1)
    } else {
        None
    }
}

fn is_quit(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "q" | "quit")
}

/// Human player typing column numbers on a console.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
    // last column was refused; keep reading without a fresh prompt
    retrying: bool,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player reading from stdin and prompting on stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            retrying: false,
        }
    }

    /// Give back the prompt writer, mainly so tests can read what was shown.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("failed to read column from input")?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> InputProvider for CliPlayer<R, W> {
    fn next_column(&mut self, _board: &Board, player: Player) -> anyhow::Result<Option<usize>> {
        if !std::mem::take(&mut self.retrying) {
            writeln!(self.output, "Player {} ({}):", player.id.number(), player.mark)?;
            write!(self.output, "Enter a number 1 - {}: ", COLS)?;
            self.output.flush()?;
        }
        loop {
            let Some(line) = self.read_line()? else {
                log::debug!("input closed");
                return Ok(None);
            };
            if is_quit(&line) {
                return Ok(None);
            }
            match parse_column(&line) {
                Some(column) => return Ok(Some(column)),
                None => {
                    log::debug!("unparseable column {:?}", line.trim());
                    writeln!(self.output, "Number is invalid! Please try again!")?;
                    self.output.flush()?;
                }
            }
        }
    }

    fn reject(&mut self, err: MoveError) -> anyhow::Result<()> {
        let msg = match err {
            MoveError::ColumnFull { .. } => "This column is full, please select another",
            MoveError::ColumnOutOfRange { .. } => "Number is invalid! Please try again!",
            MoveError::GameOver => "The game is already over",
        };
        writeln!(self.output, "{}", msg)?;
        self.output.flush()?;
        self.retrying = true;
        Ok(())
    }
}
