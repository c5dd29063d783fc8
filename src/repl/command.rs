//! Command parsing

use crate::error::{PokedexError, Result};

/// Command names and descriptions, in the order `help` lists them.
pub const COMMANDS: &[(&str, &str)] = &[
    ("help", "Displays a help message"),
    ("exit", "Exit the Pokedex"),
    ("map", "Displays the next 20 locations in the Pokemon world"),
    ("mapb", "Displays the previous 20 locations in the Pokemon world"),
    ("explore", "Explore a location area for Pokemon: explore <area>"),
    ("catch", "Attempt to catch a Pokemon: catch <pokemon>"),
    ("inspect", "Show details of a caught Pokemon: inspect <pokemon>"),
    ("pokedex", "List every Pokemon you have caught"),
];

/// A parsed REPL command.
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
}

impl Command {
    /// Parses cleaned input words. Returns `Ok(None)` for blank input.
    ///
    /// Words after the first argument are ignored.
    pub fn parse(words: &[String]) -> Result<Option<Self>> {
        let Some((name, args)) = words.split_first() else {
            return Ok(None);
        };
        let arg = |command: &'static str, argument: &'static str| {
            args.first()
                .cloned()
                .ok_or(PokedexError::MissingArgument { command, argument })
        };

        let command = match name.as_str() {
            "help" => Command::Help,
            "exit" => Command::Exit,
            "map" => Command::Map,
            "mapb" => Command::MapBack,
            "explore" => Command::Explore(arg("explore", "area")?),
            "catch" => Command::Catch(arg("catch", "pokemon")?),
            "inspect" => Command::Inspect(arg("inspect", "pokemon")?),
            "pokedex" => Command::Pokedex,
            other => return Err(PokedexError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

/// Lowercases the input and splits it on whitespace.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        clean_input(text)
    }

    #[test]
    fn test_clean_input() {
        let cases = [
            ("  hello  world  ", vec!["hello", "world"]),
            ("  tacooo  belll  ", vec!["tacooo", "belll"]),
            ("  hello  world  I am herr ", vec!["hello", "world", "i", "am", "herr"]),
            ("superfunnymonkey 2", vec!["superfunnymonkey", "2"]),
            ("Charmander Bulbasaur PIKACHU", vec!["charmander", "bulbasaur", "pikachu"]),
            ("\tmap\n", vec!["map"]),
            ("   ", vec![]),
        ];

        for (input, expected) in cases {
            assert_eq!(clean_input(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse(&words("help")).unwrap(), Some(Command::Help));
        assert_eq!(Command::parse(&words("EXIT")).unwrap(), Some(Command::Exit));
        assert_eq!(Command::parse(&words("map")).unwrap(), Some(Command::Map));
        assert_eq!(Command::parse(&words("mapb")).unwrap(), Some(Command::MapBack));
        assert_eq!(Command::parse(&words("pokedex")).unwrap(), Some(Command::Pokedex));
    }

    #[test]
    fn test_parse_commands_with_argument() {
        assert_eq!(
            Command::parse(&words("explore pastoria-city-area")).unwrap(),
            Some(Command::Explore("pastoria-city-area".to_string()))
        );
        assert_eq!(
            Command::parse(&words("catch Pikachu extra words")).unwrap(),
            Some(Command::Catch("pikachu".to_string()))
        );
        assert_eq!(
            Command::parse(&words("inspect pidgey")).unwrap(),
            Some(Command::Inspect("pidgey".to_string()))
        );
    }

    #[test]
    fn test_parse_blank_input() {
        assert_eq!(Command::parse(&words("   ")).unwrap(), None);
    }

    #[test]
    fn test_parse_missing_argument() {
        let result = Command::parse(&words("catch"));
        assert!(matches!(
            result,
            Err(PokedexError::MissingArgument {
                command: "catch",
                argument: "pokemon"
            })
        ));
    }

    #[test]
    fn test_parse_unknown_command() {
        let result = Command::parse(&words("fly cerulean"));
        assert!(matches!(result, Err(PokedexError::UnknownCommand(name)) if name == "fly"));
    }

    #[test]
    fn test_help_table_covers_every_command() {
        for (name, _) in COMMANDS {
            let needs_arg = matches!(*name, "explore" | "catch" | "inspect");
            let input = if needs_arg { format!("{name} x") } else { name.to_string() };
            assert!(Command::parse(&words(&input)).unwrap().is_some(), "{name}");
        }
    }
}
