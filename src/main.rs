use clap::Parser;
use connect_four::prelude::*;
use connect_four::{init_logging, LOG_ENV};

#[derive(Parser)]
#[command(author, version, about = "Two-player Connect Four on the console", long_about = None)]
struct Cli {
    #[arg(
        long,
        value_name = "LEVEL",
        help = "Diagnostic log level on stderr (error, warn, info, debug, trace)"
    )]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());
    log::debug!("log level resolved (override via --log-level or {})", LOG_ENV);

    let mut session = GameSession::new(
        GameEngine::new(),
        CliPlayer::stdio(),
        ConsoleRenderer::stdout(),
    );
    match session.run()? {
        SessionEnd::Finished(outcome) => log::info!("finished: {:?}", outcome),
        SessionEnd::Quit => println!("\nGame abandoned."),
    }
    Ok(())
}
