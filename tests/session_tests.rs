#![cfg(feature = "std")]

use connect_four::{
    outcome_message, Board, CliPlayer, ConsoleRenderer, GameEngine, GameSession, InputProvider,
    MoveError, Outcome, Player, PlayerId, Renderer, SessionEnd,
};
use std::io::Cursor;

type ScriptedSession = GameSession<CliPlayer<Cursor<Vec<u8>>, Vec<u8>>, ConsoleRenderer<Vec<u8>>>;

fn session_with(input: &str) -> ScriptedSession {
    GameSession::new(
        GameEngine::new(),
        CliPlayer::new(Cursor::new(input.as_bytes().to_vec()), Vec::new()),
        ConsoleRenderer::new(Vec::new()),
    )
}

fn rendered(session: ScriptedSession) -> (GameEngine, String, String) {
    let (engine, input, renderer) = session.into_parts();
    let prompts = String::from_utf8(input.into_output()).unwrap();
    let screen = String::from_utf8(renderer.into_inner()).unwrap();
    (engine, prompts, screen)
}

#[test]
fn test_outcome_messages() {
    assert_eq!(outcome_message(Outcome::InProgress), None);
    assert_eq!(outcome_message(Outcome::Draw).as_deref(), Some("It's a tie!"));
    assert_eq!(
        outcome_message(Outcome::Win(PlayerId::Second)).as_deref(),
        Some("Congratulations Player 2 you are the winner!")
    );
}

#[test]
fn test_scripted_win() {
    let mut session = session_with("1\n2\n1\n2\n1\n2\n1\n");
    let end = session.run().unwrap();
    assert_eq!(end, SessionEnd::Finished(Outcome::Win(PlayerId::First)));

    let (engine, _, screen) = rendered(session);
    assert_eq!(engine.turn(), 7);
    // one board per turn plus the final board
    assert_eq!(screen.matches("Connect Four Game").count(), 8);
    assert!(screen.ends_with("Congratulations Player 1 you are the winner!\n"));
}

#[test]
fn test_invalid_and_full_moves_are_retried() {
    // column 1 fills after six moves; the seventh pick of 1 is refused
    let script = "1\n1\n1\n1\n1\n1\nfoo\n1\n8\n2\n";
    let mut session = session_with(script);
    let end = session.run().unwrap();
    assert_eq!(end, SessionEnd::Quit);

    let (engine, prompts, screen) = rendered(session);
    assert_eq!(engine.turn(), 7);
    assert_eq!(engine.board().get(5, 1), Some(connect_four::Cell::Mark(PlayerId::First)));
    assert!(prompts.contains("This column is full, please select another"));
    assert_eq!(prompts.matches("Number is invalid! Please try again!").count(), 2);
    // the refused pick is re-read without prompting again
    assert_eq!(prompts.matches("Enter a number 1 - 7: ").count(), 8);
    assert_eq!(prompts.matches("Player 1 (X):").count(), 4);
    assert!(!screen.contains("It's a tie!"));
    assert!(!screen.contains("winner"));
}

#[test]
fn test_quit_announces_nothing() {
    let mut session = session_with("4\n");
    assert_eq!(session.run().unwrap(), SessionEnd::Quit);
    assert_eq!(session.engine().status(), Outcome::InProgress);
    let (_, _, screen) = rendered(session);
    assert!(!screen.contains("It's a tie!"));
    assert!(!screen.contains("winner"));
}

#[test]
fn test_scripted_draw() {
    let columns = [
        3, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 7, 5, 5, 5, 5,
        5, 5, 6, 6, 6, 6, 6, 6, 7, 7, 7, 7, 7,
    ];
    let script: String = columns.iter().map(|c| format!("{}\n", c)).collect();
    let mut session = session_with(&script);
    assert_eq!(session.run().unwrap(), SessionEnd::Finished(Outcome::Draw));
    let (_, _, screen) = rendered(session);
    assert!(screen.ends_with("It's a tie!\n"));
}

/// Input that replays fixed zero-based columns and records rejections.
struct Scripted {
    columns: Vec<usize>,
    rejected: Vec<MoveError>,
    fail_on_reject: bool,
}

impl InputProvider for Scripted {
    fn next_column(&mut self, _board: &Board, _player: Player) -> anyhow::Result<Option<usize>> {
        if self.columns.is_empty() {
            return Ok(None);
        }
        Ok(Some(self.columns.remove(0)))
    }

    fn reject(&mut self, err: MoveError) -> anyhow::Result<()> {
        self.rejected.push(err);
        if self.fail_on_reject {
            anyhow::bail!("cannot report {}", err);
        }
        Ok(())
    }
}

/// Renderer that just keeps what it was given.
#[derive(Default)]
struct Recorder {
    boards: usize,
    outcomes: Vec<Outcome>,
}

impl Renderer for Recorder {
    fn render_board(&mut self, _board: &Board) -> anyhow::Result<()> {
        self.boards += 1;
        Ok(())
    }

    fn render_outcome(&mut self, outcome: Outcome) -> anyhow::Result<()> {
        self.outcomes.push(outcome);
        Ok(())
    }
}

#[test]
fn test_session_with_custom_collaborators() {
    let input = Scripted {
        columns: vec![10, 6, 0, 6, 1, 5, 2, 5, 3],
        rejected: Vec::new(),
        fail_on_reject: false,
    };
    let mut session = GameSession::new(GameEngine::new(), input, Recorder::default());
    assert_eq!(
        session.run().unwrap(),
        SessionEnd::Finished(Outcome::Win(PlayerId::Second))
    );
    let (_, input, recorder) = session.into_parts();
    assert_eq!(input.rejected, vec![MoveError::ColumnOutOfRange { column: 10 }]);
    assert_eq!(recorder.outcomes, vec![Outcome::Win(PlayerId::Second)]);
    assert_eq!(recorder.boards, 9);
}

#[test]
fn test_reject_failure_stops_session() {
    let input = Scripted {
        columns: vec![0, 9, 1],
        rejected: Vec::new(),
        fail_on_reject: true,
    };
    let mut session = GameSession::new(GameEngine::new(), input, Recorder::default());
    let err = session.run().unwrap_err();
    assert!(err.to_string().contains("cannot report"));
    assert_eq!(session.engine().turn(), 1);
}
