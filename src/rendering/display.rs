//! # Display Management
//!
//! Console output of game events.

use crate::game::{GameEvent, MessageImportance};
use crate::LabyrinthResult;
use std::io::Write;

/// Writes game events to a text sink.
pub struct ConsoleDisplay<W: Write> {
    out: W,
}

impl ConsoleDisplay<std::io::Stdout> {
    /// Creates a display writing to standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleDisplay<W> {
    /// Creates a display writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes one event.
    ///
    /// Room descriptions are set off by a blank line; warnings and critical
    /// messages get a marker prefix.
    pub fn render_event(&mut self, event: &GameEvent) -> LabyrinthResult<()> {
        let text = event.to_string();
        let line = match (event, event.importance()) {
            (GameEvent::RoomDescribed { .. }, _) => format!("\n{}", text),
            (_, MessageImportance::Warning) => format!("! {}", text),
            (_, MessageImportance::Critical) => format!("!!! {}", text),
            (_, MessageImportance::Info | MessageImportance::Success) => text,
        };
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    /// Writes every event in order.
    pub fn render_events(&mut self, events: &[GameEvent]) -> LabyrinthResult<()> {
        for event in events {
            self.render_event(event)?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Writes a plain line that is not a game event (banners, summaries).
    pub fn print_line(&mut self, line: &str) -> LabyrinthResult<()> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    /// Consumes the display and returns the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Item;

    #[test]
    fn test_render_prefixes_by_importance() {
        let mut display = ConsoleDisplay::new(Vec::new());
        display
            .render_events(&[
                GameEvent::info("hello"),
                GameEvent::ItemLost { item: Item::Coin },
                GameEvent::PlayerDied,
            ])
            .unwrap();

        let output = String::from_utf8(display.into_inner()).unwrap();
        assert_eq!(
            output,
            "hello\n! You lost an item: coin!\n!!! The trap was lethal... You have died.\n"
        );
    }

    #[test]
    fn test_room_description_starts_with_blank_line() {
        let mut game_state = crate::GameState::new();
        game_state.current_room = crate::RoomId::Armory;
        let mut display = ConsoleDisplay::new(Vec::new());
        display.render_event(&game_state.describe_current_room()).unwrap();

        let output = String::from_utf8(display.into_inner()).unwrap();
        assert!(output.starts_with("\n== ARMORY ==\n"));
        assert!(output.contains("Visible items: sword, bronze_box"));
    }
}
