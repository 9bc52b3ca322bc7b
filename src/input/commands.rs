//! # Command Definitions
//!
//! The CLI verb surface and its parser. Verbs are matched case-insensitively;
//! item names keep their spacing ("pick rusty sword" picks "rusty sword").

use std::fmt;

/// A compass direction the player can move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Returns the lowercase direction name used for connection lookups.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move through a connection (north/n, south/s, east/e, west/w)
    Move(Direction),
    /// Describe the current scene (look/l)
    Look,
    /// List carried items (inventory/i)
    Inventory,
    /// Show the full status sheet (status/stat)
    Status,
    /// Pick up an item from the scene (pick/take)
    Pick { item: String },
    /// Drop a carried item into the scene
    Drop { item: String },
    /// Consume a usable item
    Use { item: String },
    /// Equip a carried item into a slot
    Equip { item: String, slot: String },
    /// Return a slot's item to the inventory
    Unequip { slot: String },
    /// Save the game, optionally to a named file
    Save { file: Option<String> },
    /// Load the game, optionally from a named file
    Load { file: Option<String> },
    /// Show the command reference
    Help,
    /// Leave the game (quit/exit)
    Quit,
}

/// Why an input line did not parse. Reported to the player; never fatal.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Blank input line
    #[error("nothing entered")]
    Empty,

    /// The first word is not a known verb
    #[error("unrecognized command '{0}', try 'help'")]
    Unrecognized(String),

    /// A verb that needs an item name got none; carries the verb as typed
    #[error("'{verb}' needs an item name")]
    MissingItem { verb: String },

    /// `equip` needs both an item and a slot
    #[error("'equip' needs an item and a slot, like 'equip sword weapon'")]
    MissingEquipArgs,

    /// `unequip` needs a slot name
    #[error("'unequip' needs a slot name")]
    MissingSlot,
}

/// Parses one input line into a [`Command`].
///
/// # Examples
///
/// ```
/// use wayfarer::{parse_command, Command, Direction};
///
/// assert_eq!(parse_command("n"), Ok(Command::Move(Direction::North)));
/// assert_eq!(
///     parse_command("take rusty sword"),
///     Ok(Command::Pick { item: "rusty sword".to_string() })
/// );
/// assert!(parse_command("dance").is_err());
/// ```
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let mut parts = input.split_whitespace();
    let verb = match parts.next() {
        Some(verb) => verb.to_lowercase(),
        None => return Err(ParseError::Empty),
    };
    let rest: Vec<&str> = parts.collect();

    match verb.as_str() {
        "north" | "n" => Ok(Command::Move(Direction::North)),
        "south" | "s" => Ok(Command::Move(Direction::South)),
        "east" | "e" => Ok(Command::Move(Direction::East)),
        "west" | "w" => Ok(Command::Move(Direction::West)),

        "look" | "l" => Ok(Command::Look),
        "inventory" | "i" => Ok(Command::Inventory),
        "status" | "stat" => Ok(Command::Status),

        "pick" | "take" | "drop" | "use" => match join_item(&rest) {
            Some(item) => Ok(match verb.as_str() {
                "pick" | "take" => Command::Pick { item },
                "drop" => Command::Drop { item },
                _ => Command::Use { item },
            }),
            None => Err(ParseError::MissingItem { verb: verb.clone() }),
        },

        // The slot is the final word: "equip rusty sword weapon"
        "equip" => match rest.split_last() {
            Some((slot, item)) if !item.is_empty() => Ok(Command::Equip {
                item: item.join(" "),
                slot: slot.to_string(),
            }),
            _ => Err(ParseError::MissingEquipArgs),
        },
        "unequip" => match rest.first() {
            Some(slot) => Ok(Command::Unequip {
                slot: slot.to_string(),
            }),
            None => Err(ParseError::MissingSlot),
        },

        "save" => Ok(Command::Save {
            file: join_item(&rest),
        }),
        "load" => Ok(Command::Load {
            file: join_item(&rest),
        }),

        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),

        _ => Err(ParseError::Unrecognized(verb.clone())),
    }
}

fn join_item(parts: &[&str]) -> Option<String> {
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}
