use std::str::FromStr;

use super::errors::ConsoleError;

/// A single scorekeeping instruction typed at the console
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add <jersey> <name...>`
    Add { jersey: i32, name: String },
    /// `foul <jersey>`
    Foul { jersey: i32 },
    /// `shot <jersey> <1|2|3>`
    Shot { jersey: i32, shot_type: i32 },
    /// `player <jersey>`
    Player { jersey: i32 },
    /// `stats`
    Stats,
    /// `team`
    Team,
    /// `json`
    Json,
    /// `name <team name...>`
    Rename { name: String },
    /// `help`
    Help,
    /// `quit` or `exit`
    Quit,
}

pub const HELP: &str = "\
Commands:
  add <jersey> <name>    add a player to the roster
  foul <jersey>          record a foul
  shot <jersey> <1|2|3>  record a made shot
  player <jersey>        show one player's line
  stats                  show the detail stats table
  team                   show team fouls and points
  json                   export the box score as JSON
  name <team name>       rename the team
  help                   show this help
  quit                   leave the scorekeeper";

fn number(
    token: Option<&str>,
    command: &'static str,
    argument: &'static str,
) -> Result<i32, ConsoleError> {
    let token = token.ok_or(ConsoleError::MissingArgument { command, argument })?;
    token
        .parse()
        .map_err(|_| ConsoleError::NotANumber(token.to_string()))
}

fn text<'a>(
    tokens: impl Iterator<Item = &'a str>,
    command: &'static str,
    argument: &'static str,
) -> Result<String, ConsoleError> {
    let text = tokens.collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        return Err(ConsoleError::MissingArgument { command, argument });
    }
    Ok(text)
}

impl FromStr for Command {
    type Err = ConsoleError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next().unwrap_or_default().to_lowercase();

        match keyword.as_str() {
            "add" => {
                let jersey = number(tokens.next(), "add", "jersey")?;
                let name = text(tokens, "add", "name")?;
                Ok(Command::Add { jersey, name })
            }
            "foul" => Ok(Command::Foul {
                jersey: number(tokens.next(), "foul", "jersey")?,
            }),
            "shot" => {
                let jersey = number(tokens.next(), "shot", "jersey")?;
                let shot_type = number(tokens.next(), "shot", "shot type")?;
                Ok(Command::Shot { jersey, shot_type })
            }
            "player" => Ok(Command::Player {
                jersey: number(tokens.next(), "player", "jersey")?,
            }),
            "stats" => Ok(Command::Stats),
            "team" => Ok(Command::Team),
            "json" => Ok(Command::Json),
            "name" => Ok(Command::Rename {
                name: text(tokens, "name", "team name")?,
            }),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(ConsoleError::UnknownCommand(keyword)),
        }
    }
}
