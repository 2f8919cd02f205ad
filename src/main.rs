//! # Labyrinth Main Entry Point
//!
//! Sets up logging and rules, then runs the read-eval-print loop.

use clap::Parser;
use labyrinth::{
    ConsoleDisplay, ConsoleInput, GameCompletionState, GameState, InputHandler, LabyrinthResult,
    RulesConfig,
};
use log::info;
use std::path::PathBuf;

/// Command line arguments for the labyrinth game.
#[derive(Parser, Debug)]
#[command(name = "labyrinth")]
#[command(about = "Explore the labyrinth, solve its riddles and open the treasure chest")]
#[command(version)]
struct Args {
    /// JSON file overriding the event and trap rules
    #[arg(short, long)]
    rules: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> LabyrinthResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);
    info!("Starting labyrinth v{}", labyrinth::VERSION);

    let rules = match &args.rules {
        Some(path) => RulesConfig::load_from_file(path)?,
        None => RulesConfig::default(),
    };

    run_game(GameState::with_rules(rules))
}

/// Initializes env_logger with the given filter.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::new()
        .parse_filters(log_level)
        .format_target(false)
        .init();
}

/// Main game loop.
fn run_game(mut game_state: GameState) -> LabyrinthResult<()> {
    let handler = InputHandler::new();
    let mut input = ConsoleInput::new();
    let mut display = ConsoleDisplay::stdout();

    // Ctrl-C ends the session like `quit`
    let interrupt = input.interrupt_handle();
    ctrlc::set_handler(move || interrupt.interrupt())?;

    let rule = "=".repeat(60);
    display.print_line(&format!("\n{}", rule))?;
    display.print_line("WELCOME TO THE LABYRINTH OF TREASURES!")?;
    display.print_line(&rule)?;
    display.print_line(
        "\nYou are a daring explorer of an ancient labyrinth.\
         \nYour goal is to find the great treasure!\
         \nType 'help' for a list of commands.",
    )?;
    display.render_events(&[game_state.describe_current_room()])?;

    handler.run_session(&mut game_state, &mut input, &mut display)?;

    info!("Session finished: {:?}", game_state.get_completion_state());
    display.print_line(&format!("\n{}", rule))?;
    display.print_line(match game_state.get_completion_state() {
        GameCompletionState::Won => "YOU FOUND THE TREASURE",
        GameCompletionState::PlayerDied => "YOU DIED IN THE LABYRINTH",
        GameCompletionState::Quit | GameCompletionState::Playing => "GAME OVER",
    })?;
    display.print_line(&rule)?;
    display.print_line(&format!("Steps taken: {}", game_state.steps_taken))?;
    display.print_line(&format!("Items in inventory: {}", game_state.inventory.len()))?;

    Ok(())
}
