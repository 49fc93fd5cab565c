//! Command registry and parsing

use crate::error::{PokedexError, Result};

/// Name, usage line and description of a registered command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandInfo {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

/// Every command the REPL understands, in the order `help` lists them.
pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "help",
        usage: "help",
        description: "Displays a help message",
    },
    CommandInfo {
        name: "exit",
        usage: "exit",
        description: "Exit the Pokedex",
    },
    CommandInfo {
        name: "map",
        usage: "map",
        description: "Displays Location areas going forward",
    },
    CommandInfo {
        name: "mapb",
        usage: "mapb",
        description: "Displays Location areas going backward",
    },
    CommandInfo {
        name: "explore",
        usage: "explore <location-area>",
        description: "Lists the Pokemon found in a location area",
    },
    CommandInfo {
        name: "catch",
        usage: "catch <pokemon>",
        description: "Throws a Pokeball at a Pokemon",
    },
    CommandInfo {
        name: "inspect",
        usage: "inspect <pokemon>",
        description: "Shows details of a caught Pokemon",
    },
    CommandInfo {
        name: "pokedex",
        usage: "pokedex",
        description: "Lists every Pokemon you have caught",
    },
    CommandInfo {
        name: "cache",
        usage: "cache",
        description: "Shows response cache statistics",
    },
];

/// A parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore(String),
    Catch(String),
    Inspect(String),
    Pokedex,
    CacheStats,
}

impl Command {
    /// Parses already-cleaned words into a command.
    ///
    /// Returns `Ok(None)` for blank input. Words after the ones a command uses
    /// are ignored.
    pub fn parse(words: &[String]) -> Result<Option<Self>> {
        let Some((name, args)) = words.split_first() else {
            return Ok(None);
        };

        let command = match name.as_str() {
            "help" => Command::Help,
            "exit" => Command::Exit,
            "map" => Command::Map,
            "mapb" => Command::MapBack,
            "explore" => Command::Explore(required_arg(args, "explore")?),
            "catch" => Command::Catch(required_arg(args, "catch")?),
            "inspect" => Command::Inspect(required_arg(args, "inspect")?),
            "pokedex" => Command::Pokedex,
            "cache" => Command::CacheStats,
            other => return Err(PokedexError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn required_arg(args: &[String], command: &str) -> Result<String> {
    args.first()
        .cloned()
        .ok_or_else(|| PokedexError::MissingArgument(usage(command)))
}

/// Usage line of a registered command.
pub fn usage(command: &str) -> &'static str {
    COMMANDS
        .iter()
        .find(|info| info.name == command)
        .map_or("help", |info| info.usage)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(input: &[&str]) -> Vec<String> {
        input.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_parse_blank_input() {
        assert_eq!(Command::parse(&[]).unwrap(), None);
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse(&words(&["help"])).unwrap(), Some(Command::Help));
        assert_eq!(Command::parse(&words(&["map"])).unwrap(), Some(Command::Map));
        assert_eq!(Command::parse(&words(&["mapb"])).unwrap(), Some(Command::MapBack));
        assert_eq!(Command::parse(&words(&["pokedex"])).unwrap(), Some(Command::Pokedex));
        assert_eq!(Command::parse(&words(&["cache"])).unwrap(), Some(Command::CacheStats));
        assert_eq!(Command::parse(&words(&["exit", "now"])).unwrap(), Some(Command::Exit));
    }

    #[test]
    fn test_parse_command_with_argument() {
        assert_eq!(
            Command::parse(&words(&["catch", "pikachu"])).unwrap(),
            Some(Command::Catch("pikachu".to_string()))
        );
        assert_eq!(
            Command::parse(&words(&["explore", "canalave-city-area"])).unwrap(),
            Some(Command::Explore("canalave-city-area".to_string()))
        );
    }

    #[test]
    fn test_parse_missing_argument() {
        let err = Command::parse(&words(&["inspect"])).unwrap_err();
        assert!(matches!(err, PokedexError::MissingArgument("inspect <pokemon>")));
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = Command::parse(&words(&["fly", "away"])).unwrap_err();
        assert!(matches!(err, PokedexError::UnknownCommand(name) if name == "fly"));
    }

    #[test]
    fn test_registry_names_are_unique() {
        let mut names: Vec<&str> = COMMANDS.iter().map(|info| info.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), COMMANDS.len());
    }
}
