//! # Command Definitions
//!
//! Parsing of typed command lines and the help table.

/// Commands listed by `help`, as (usage, description).
pub const COMMANDS: &[(&str, &str)] = &[
    ("go <direction>", "move north/south/east/west"),
    ("north|south|east|west", "short form of go"),
    ("look", "describe the current room"),
    ("take <item>", "pick up an item"),
    ("use <item>", "use an item from your inventory"),
    ("inventory", "show your inventory"),
    ("solve", "try to solve the puzzle (opens the chest in the treasure room)"),
    ("help", "show this list"),
    ("quit", "leave the game"),
];

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Describe the current room
    Look,
    /// Move; the argument is the raw direction word, empty when missing
    Go(String),
    /// Pick up the named item
    Take(String),
    /// Use the named item
    Use(String),
    /// Show the inventory
    Inventory,
    /// Solve the room puzzle or open the chest
    Solve,
    /// Show the command list
    Help,
    /// Leave the game
    Quit,
    /// Anything not recognized
    Unknown(String),
    /// Blank line
    Empty,
}

impl Command {
    /// Parses a command line.
    ///
    /// The line is lowercased and split into a verb and the rest.
    ///
    /// # Examples
    ///
    /// ```
    /// use labyrinth::Command;
    ///
    /// assert_eq!(Command::parse("Take  Torch"), Command::Take("torch".to_string()));
    /// assert_eq!(Command::parse("north"), Command::Go("north".to_string()));
    /// assert_eq!(Command::parse("   "), Command::Empty);
    /// ```
    pub fn parse(line: &str) -> Self {
        let line = line.trim().to_lowercase();
        let mut parts = line.splitn(2, char::is_whitespace);
        let verb = match parts.next() {
            Some(verb) if !verb.is_empty() => verb,
            _ => return Command::Empty,
        };
        let argument = parts.next().unwrap_or("").trim().to_string();

        match verb {
            "look" => Command::Look,
            "go" => Command::Go(argument),
            "north" | "south" | "east" | "west" => Command::Go(verb.to_string()),
            "take" => Command::Take(argument),
            "use" => Command::Use(argument),
            "inventory" => Command::Inventory,
            "solve" => Command::Solve,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// Renders the help table.
pub fn help_text() -> String {
    let mut text = String::from("Available commands:");
    for (usage, description) in COMMANDS {
        text.push_str(&format!("\n  {:<22} - {}", usage, description));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_verbs() {
        assert_eq!(Command::parse("look"), Command::Look);
        assert_eq!(Command::parse("INVENTORY"), Command::Inventory);
        assert_eq!(Command::parse("solve"), Command::Solve);
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse("exit"), Command::Quit);
        assert_eq!(Command::parse("quit"), Command::Quit);
    }

    #[test]
    fn test_parse_arguments() {
        assert_eq!(Command::parse("go west"), Command::Go("west".to_string()));
        assert_eq!(Command::parse("go"), Command::Go(String::new()));
        assert_eq!(
            Command::parse("use bronze_box"),
            Command::Use("bronze_box".to_string())
        );
        assert_eq!(Command::parse("take"), Command::Take(String::new()));
    }

    #[test]
    fn test_parse_unknown_and_empty() {
        assert_eq!(Command::parse("dance"), Command::Unknown("dance".to_string()));
        assert_eq!(Command::parse(""), Command::Empty);
    }

    #[test]
    fn test_help_lists_every_command() {
        let text = help_text();
        for (usage, _) in COMMANDS {
            assert!(text.contains(usage));
        }
    }
}
