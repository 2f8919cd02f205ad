//! # Input Module
//!
//! Line input and command dispatch for player interactions.

pub mod commands;

pub use commands::*;

use crate::game::{Direction, GameCompletionState, GameEvent, GameState, Item, RoomId};
use crate::rendering::ConsoleDisplay;
use crate::LabyrinthResult;
use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

/// Line returned when input ends or is interrupted.
pub const QUIT_SENTINEL: &str = "quit";

/// Source of player replies.
///
/// Implementations never fail: end of input or an interrupted read yields
/// [`QUIT_SENTINEL`].
pub trait InputProvider {
    /// Shows `prompt` and returns the next line without its line ending.
    fn read_line(&mut self, prompt: &str) -> String;

    /// Whether the player asked to stop (e.g. Ctrl-C) while input was pending.
    fn interrupted(&self) -> bool {
        false
    }
}

/// Messages passed from the reader thread (and the interrupt handle) to
/// [`ConsoleInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum InputMessage {
    Line(String),
    Closed,
    Interrupted,
}

/// Wakes a [`ConsoleInput`] that is waiting for a line and makes every
/// later read return [`QUIT_SENTINEL`].
///
/// Cloneable and `Send`, so it can be moved into a signal handler.
#[derive(Debug, Clone)]
pub struct InterruptHandle {
    flag: Arc<AtomicBool>,
    sender: Sender<InputMessage>,
}

impl InterruptHandle {
    /// Marks the input as interrupted.
    pub fn interrupt(&self) {
        self.flag.store(true, Ordering::SeqCst);
        // the receiver is gone once the session has ended
        let _ = self.sender.send(InputMessage::Interrupted);
    }
}

/// Reads replies from a line stream, standard input by default.
///
/// Lines are read on a background thread so that an [`InterruptHandle`] can
/// end a wait that would otherwise block until the next newline.
pub struct ConsoleInput {
    receiver: Receiver<InputMessage>,
    handle: InterruptHandle,
    prompt_out: Box<dyn Write + Send>,
    closed: bool,
}

impl ConsoleInput {
    /// Reads from standard input and prompts on standard output.
    pub fn new() -> Self {
        Self::with_streams(BufReader::new(std::io::stdin()), std::io::stdout())
    }

    /// Reads lines from `reader` and writes prompts to `prompt_out`.
    pub fn with_streams<R, W>(reader: R, prompt_out: W) -> Self
    where
        R: BufRead + Send + 'static,
        W: Write + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        let reader_sender = sender.clone();
        thread::spawn(move || read_lines(reader, reader_sender));

        Self {
            receiver,
            handle: InterruptHandle {
                flag: Arc::new(AtomicBool::new(false)),
                sender,
            },
            prompt_out: Box::new(prompt_out),
            closed: false,
        }
    }

    /// A handle that interrupts this input from another thread.
    pub fn interrupt_handle(&self) -> InterruptHandle {
        self.handle.clone()
    }

    fn write_prompt(&mut self, prompt: &str) {
        if let Err(e) = write!(self.prompt_out, "{}", prompt) {
            log::warn!("Failed to write prompt: {}", e);
        }
        if let Err(e) = self.prompt_out.flush() {
            log::warn!("Failed to flush prompt: {}", e);
        }
    }

    fn end_prompt_line(&mut self) {
        if let Err(e) = writeln!(self.prompt_out) {
            log::warn!("Failed to write prompt: {}", e);
        }
    }
}

impl Default for ConsoleInput {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConsoleInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleInput")
            .field("interrupted", &self.interrupted())
            .field("closed", &self.closed)
            .finish()
    }
}

/// Forwards lines from `reader` until it ends or the receiver goes away.
fn read_lines<R: BufRead>(mut reader: R, sender: Sender<InputMessage>) {
    loop {
        let mut line = String::new();
        let message = match reader.read_line(&mut line) {
            Ok(0) => InputMessage::Closed,
            Ok(_) => InputMessage::Line(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                log::warn!("Failed to read input: {}", e);
                InputMessage::Closed
            }
        };
        let done = message == InputMessage::Closed;
        if sender.send(message).is_err() || done {
            return;
        }
    }
}

impl InputProvider for ConsoleInput {
    fn read_line(&mut self, prompt: &str) -> String {
        if self.closed || self.interrupted() {
            return QUIT_SENTINEL.to_string();
        }

        self.write_prompt(prompt);
        match self.receiver.recv() {
            Ok(InputMessage::Line(line)) => line,
            Ok(InputMessage::Interrupted) => {
                log::info!("Input interrupted");
                self.end_prompt_line();
                QUIT_SENTINEL.to_string()
            }
            Ok(InputMessage::Closed) | Err(_) => {
                self.closed = true;
                self.end_prompt_line();
                QUIT_SENTINEL.to_string()
            }
        }
    }

    fn interrupted(&self) -> bool {
        self.handle.flag.load(Ordering::SeqCst)
    }
}

/// Replays canned replies; used for tests and scripted runs.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    /// Prompts shown so far
    pub prompts: Vec<String>,
}

impl ScriptedInput {
    /// Creates a scripted input that will return `lines` in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Number of replies not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputProvider for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> String {
        self.prompts.push(prompt.to_string());
        self.lines
            .pop_front()
            .unwrap_or_else(|| QUIT_SENTINEL.to_string())
    }
}

/// Runs parsed commands against the game state.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    pub fn new() -> Self {
        Self
    }

    /// Executes `command`, reading any follow-up replies from `input`.
    ///
    /// Nothing happens once the game is over.
    ///
    /// # Examples
    ///
    /// ```
    /// use labyrinth::{Command, GameState, InputHandler, RoomId, ScriptedInput};
    ///
    /// let handler = InputHandler::new();
    /// let mut game_state = GameState::new();
    /// let mut input = ScriptedInput::default();
    ///
    /// handler.execute(Command::parse("go north"), &mut game_state, &mut input);
    /// assert_eq!(game_state.current_room, RoomId::Hall);
    /// ```
    pub fn execute(
        &self,
        command: Command,
        game_state: &mut GameState,
        input: &mut dyn InputProvider,
    ) -> Vec<GameEvent> {
        if game_state.is_game_ended() {
            return Vec::new();
        }

        match command {
            Command::Look => vec![game_state.describe_current_room()],

            Command::Go(argument) => {
                if argument.is_empty() {
                    return vec![GameEvent::info(
                        "Say which way to go: north, south, east, west.",
                    )];
                }
                match Direction::parse(&argument) {
                    Some(direction) => game_state.move_player(direction),
                    None => vec![GameEvent::warning("You can't go that way.")],
                }
            }

            Command::Take(argument) => {
                if argument.is_empty() {
                    return vec![GameEvent::info("Say what you want to pick up.")];
                }
                match argument.parse::<Item>() {
                    Ok(item) => game_state.take_item(item),
                    Err(_) => vec![GameEvent::warning("There is no such item here.")],
                }
            }

            Command::Use(argument) => {
                if argument.is_empty() {
                    return vec![GameEvent::info("Say what you want to use.")];
                }
                match argument.parse::<Item>() {
                    Ok(item) => game_state.use_item(item),
                    Err(_) => vec![GameEvent::warning("You don't have that item.")],
                }
            }

            Command::Inventory => vec![game_state.show_inventory()],

            Command::Solve => {
                if game_state.current_room == RoomId::TreasureRoom {
                    game_state.attempt_open_treasure(input)
                } else {
                    game_state.solve_puzzle(input)
                }
            }

            Command::Help => vec![GameEvent::info(help_text())],

            Command::Quit => {
                game_state.end_game(GameCompletionState::Quit);
                vec![GameEvent::info("Thanks for playing!")]
            }

            Command::Unknown(verb) => vec![GameEvent::warning(format!(
                "Unknown command: {}. Type 'help' for a list of commands.",
                verb
            ))],

            Command::Empty => Vec::new(),
        }
    }

    /// Reads and executes commands until the game ends, rendering every event.
    ///
    /// An interrupted input ends the session as [`GameCompletionState::Quit`]
    /// unless the game already ended another way.
    pub fn run_session<W: Write>(
        &self,
        game_state: &mut GameState,
        input: &mut dyn InputProvider,
        display: &mut ConsoleDisplay<W>,
    ) -> LabyrinthResult<()> {
        while !game_state.is_game_ended() {
            let command = if input.interrupted() {
                Command::Quit
            } else {
                Command::parse(&input.read_line("\n> "))
            };
            let events = self.execute(command, game_state, input);
            display.render_events(&events)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(line: &str, game_state: &mut GameState) -> Vec<GameEvent> {
        let mut input = ScriptedInput::default();
        InputHandler::new().execute(Command::parse(line), game_state, &mut input)
    }

    #[test]
    fn test_scripted_input_yields_quit_when_exhausted() {
        let mut input = ScriptedInput::new(["one"]);
        assert_eq!(input.read_line("> "), "one");
        assert_eq!(input.read_line("> "), QUIT_SENTINEL);
        assert_eq!(input.prompts, vec!["> ".to_string(), "> ".to_string()]);
    }

    #[test]
    fn test_console_input_reads_lines_then_quits_at_end() {
        let mut input = ConsoleInput::with_streams(
            std::io::Cursor::new("go north\r\nlook\n"),
            std::io::sink(),
        );
        assert_eq!(input.read_line("> "), "go north");
        assert_eq!(input.read_line("> "), "look");
        assert_eq!(input.read_line("> "), QUIT_SENTINEL);
        assert_eq!(input.read_line("> "), QUIT_SENTINEL);
        assert!(!input.interrupted());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn test_console_input_survives_prompt_write_failure() {
        let mut input = ConsoleInput::with_streams(std::io::Cursor::new("look\n"), BrokenPipe);
        assert_eq!(input.read_line("> "), "look");
        assert_eq!(input.read_line("> "), QUIT_SENTINEL);
    }

    #[test]
    fn test_console_input_after_interrupt_yields_quit() {
        let mut input = ConsoleInput::with_streams(std::io::Cursor::new("look\n"), std::io::sink());
        input.interrupt_handle().interrupt();

        assert!(input.interrupted());
        assert_eq!(input.read_line("> "), QUIT_SENTINEL);
    }

    #[test]
    fn test_unknown_direction_is_rejected() {
        let mut game_state = GameState::new();
        let events = run("go up", &mut game_state);
        assert_eq!(events, vec![GameEvent::warning("You can't go that way.")]);
        assert_eq!(game_state.steps_taken, 0);
    }

    #[test]
    fn test_bare_direction_moves() {
        let mut game_state = GameState::new();
        run("north", &mut game_state);
        assert_eq!(game_state.current_room, RoomId::Hall);
    }

    #[test]
    fn test_unknown_item_names() {
        let mut game_state = GameState::new();
        assert_eq!(
            run("take lamp", &mut game_state),
            vec![GameEvent::warning("There is no such item here.")]
        );
        assert_eq!(
            run("use lamp", &mut game_state),
            vec![GameEvent::warning("You don't have that item.")]
        );
    }

    #[test]
    fn test_missing_arguments() {
        let mut game_state = GameState::new();
        for line in ["go", "take", "use"] {
            let events = run(line, &mut game_state);
            assert_eq!(events.len(), 1);
        }
        assert_eq!(game_state.steps_taken, 0);
    }

    #[test]
    fn test_solve_routes_to_chest_in_treasure_room() {
        let mut game_state = GameState::new();
        game_state.current_room = RoomId::TreasureRoom;
        let mut input = ScriptedInput::new(["yes", "10"]);

        InputHandler::new().execute(Command::Solve, &mut game_state, &mut input);

        assert_eq!(game_state.completion_state, GameCompletionState::Won);
        // the treasure room puzzle is only consulted, never cleared
        assert!(game_state.room().puzzle.is_some());
    }

    #[test]
    fn test_quit_ends_game() {
        let mut game_state = GameState::new();
        run("exit", &mut game_state);
        assert!(game_state.game_over);
        assert_eq!(game_state.completion_state, GameCompletionState::Quit);
        assert!(run("north", &mut game_state).is_empty());
    }

    #[test]
    fn test_unknown_command_mutates_nothing() {
        let mut game_state = GameState::new();
        let events = run("dance", &mut game_state);
        assert_eq!(events[0].importance(), crate::MessageImportance::Warning);
        assert_eq!(game_state.current_room, RoomId::Entrance);
    }
}
