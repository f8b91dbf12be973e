#![cfg(feature = "std")]

use crate::{
    common::Outcome,
    game::GameEngine,
    player::InputProvider,
    ui::Renderer,
};

/// How a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Game reached a win or a draw.
    Finished(Outcome),
    /// Input asked to stop before the game was decided.
    Quit,
}

/// Turn loop driving one game from an input source to a renderer.
pub struct GameSession<I, R> {
    engine: GameEngine,
    input: I,
    renderer: R,
}

impl<I: InputProvider, R: Renderer> GameSession<I, R> {
    pub fn new(engine: GameEngine, input: I, renderer: R) -> Self {
        Self {
            engine,
            input,
            renderer,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Hand back the collaborators once the game is done.
    pub fn into_parts(self) -> (GameEngine, I, R) {
        (self.engine, self.input, self.renderer)
    }

    /// Play until the game is decided or the input quits.
    pub fn run(&mut self) -> anyhow::Result<SessionEnd> {
        log::info!("starting game at turn {}", self.engine.turn());
        while !self.engine.is_over() {
            self.renderer.render_board(self.engine.board())?;
            if !self.play_turn()? {
                log::info!("game abandoned after {} moves", self.engine.turn());
                return Ok(SessionEnd::Quit);
            }
        }
        let outcome = self.engine.status();
        self.renderer.render_board(self.engine.board())?;
        self.renderer.render_outcome(outcome)?;
        log::info!("game over after {} moves: {:?}", self.engine.turn(), outcome);
        Ok(SessionEnd::Finished(outcome))
    }

    /// Ask for columns until one is accepted. Returns `false` on quit.
    fn play_turn(&mut self) -> anyhow::Result<bool> {
        let player = self.engine.current_player();
        loop {
            let Some(column) = self.input.next_column(self.engine.board(), player)? else {
                return Ok(false);
            };
            match self.engine.apply_move(column) {
                Ok((row, col)) => {
                    log::debug!(
                        "player {} ({}) -> row {}, column {}",
                        player.id.number(),
                        player.mark,
                        row,
                        col + 1
                    );
                    return Ok(true);
                }
                Err(err) => {
                    log::info!("rejected move for player {}: {}", player.id.number(), err);
                    self.input.reject(err)?;
                }
            }
        }
    }
}
