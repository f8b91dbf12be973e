#![cfg(feature = "std")]

use std::io::{self, Write};
use std::string::String;

use crate::{board::Board, common::Outcome};

/// Receives the board between turns and the result at the end.
pub trait Renderer {
    fn render_board(&mut self, board: &Board) -> anyhow::Result<()>;

    fn render_outcome(&mut self, outcome: Outcome) -> anyhow::Result<()>;
}

/// Text shown for a finished game. Nothing is announced while in progress.
pub fn outcome_message(outcome: Outcome) -> Option<String> {
    match outcome {
        Outcome::InProgress => None,
        Outcome::Draw => Some(String::from("It's a tie!")),
        Outcome::Win(player) => Some(std::format!(
            "Congratulations Player {} you are the winner!",
            player.number()
        )),
    }
}

/// [`Renderer`] writing plain text to any writer.
pub struct ConsoleRenderer<W> {
    out: W,
}

impl ConsoleRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render_board(&mut self, board: &Board) -> anyhow::Result<()> {
        writeln!(self.out)?;
        write!(self.out, "{}", board)?;
        self.out.flush()?;
        Ok(())
    }

    fn render_outcome(&mut self, outcome: Outcome) -> anyhow::Result<()> {
        if let Some(msg) = outcome_message(outcome) {
            writeln!(self.out, "{}", msg)?;
            self.out.flush()?;
        }
        Ok(())
    }
}
