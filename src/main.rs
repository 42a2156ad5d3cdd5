mod app;
mod cli;
mod clipboard;
mod config;
mod controller;
mod editor;
mod error;
mod input;
mod logging;
mod models;
mod notes;
mod proposer;
mod theme;
mod ui;
mod utils;

use std::io::{self, stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;

use app::App;
use config::ProposerConfig;
use input::AppCommand;
use proposer::GeminiProposer;

#[tokio::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    logging::init_logging();

    let cli_config = cli::parse_args()?;

    let mut proposer_config = ProposerConfig::from_env();
    if let Some(model) = &cli_config.model {
        proposer_config.model = model.clone();
    }
    if proposer_config.api_key.is_none() {
        log::warn!("No API key configured; proposals will fail");
    }
    log::info!("Using model {}", proposer_config.model);

    let mut app = App::new(&cli_config, Arc::new(GeminiProposer::new(&proposer_config)));

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    if let Err(e) = &result {
        log::error!("Terminal loop failed: {}", e);
    }
    if cli_config.print_on_exit && !app.board.notes().is_empty() {
        println!("{}", app.board.notes());
    }
    log::info!("Exiting with {} cards on the board", app.board.len());

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        app.poll_proposal();
        app.tick();

        terminal.draw(|frame| ui::render(app, frame))?;

        // Handle input
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match input::handle_key(app, key) {
                    Some(AppCommand::Quit) => app.should_quit = true,
                    Some(AppCommand::CopyNotes) => app.copy_notes(&mut stdout()),
                    None => {}
                }
            }
        }
    }

    Ok(())
}
