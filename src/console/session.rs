use std::io::{self, BufRead, Write};

use super::command::{Command, HELP};
use super::errors::{ConsoleError, ConsoleResult};
use crate::domain::errors::RosterError;
use crate::domain::player::Player;
use crate::domain::team::Team;
use crate::report::BoxScore;

/// Whether the session should keep reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive scorekeeping session over a single team
///
/// Rejected commands are reported on the output as `error: <message>` and
/// leave the team untouched; only I/O failures end the session early.
pub struct Session<W: Write> {
    team: Team,
    out: W,
}

impl<W: Write> Session<W> {
    /// Creates a session tracking `team` and writing to `out`
    pub fn new(team: Team, out: W) -> Self {
        Self { team, out }
    }

    /// Returns the tracked team
    pub fn team(&self) -> &Team {
        &self.team
    }

    /// Ends the session and hands back the team
    pub fn into_team(self) -> Team {
        self.team
    }

    /// Reads commands until end of input or `quit`
    pub fn run<R: BufRead>(&mut self, input: R, prompt: &str) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            if !prompt.is_empty() {
                write!(self.out, "{}", prompt)?;
                self.out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            if self.handle_line(&line?)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Parses and executes one line of input
    pub fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Flow::Continue);
        }

        match line.parse::<Command>().and_then(|command| self.execute(command)) {
            Ok(flow) => Ok(flow),
            Err(ConsoleError::Io(e)) => Err(e),
            Err(e) => {
                tracing::warn!(command = line, error = %e, "command rejected");
                writeln!(self.out, "error: {}", e)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Applies a parsed command to the team
    pub fn execute(&mut self, command: Command) -> ConsoleResult<Flow> {
        match command {
            Command::Add { jersey, name } => {
                self.team.add_player(name, jersey)?;
                let player = self.lookup(jersey)?;
                let line = format!("Added #{} {}", player.jersey(), player.name());
                writeln!(self.out, "{}", line)?;
            }
            Command::Foul { jersey } => {
                self.team.record_foul(jersey)?;
                self.describe(jersey)?;
            }
            Command::Shot { jersey, shot_type } => {
                self.team.record_shot(jersey, shot_type)?;
                self.describe(jersey)?;
            }
            Command::Player { jersey } => self.describe(jersey)?,
            Command::Stats => write!(self.out, "{}", self.team.detail_stats())?,
            Command::Team => writeln!(self.out, "{}", self.team.team_stats())?,
            Command::Json => {
                let json = BoxScore::from(&self.team).to_json()?;
                writeln!(self.out, "{}", json)?;
            }
            Command::Rename { name } => {
                self.team.set_name(name);
                writeln!(self.out, "Team renamed to {}", self.team.name())?;
            }
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn lookup(&self, jersey: i32) -> ConsoleResult<&Player> {
        let player = self.team.find_player(jersey)?;
        // find_player already validated the range, so the cast is lossless.
        player.ok_or(ConsoleError::Roster(RosterError::PlayerNotFound(jersey as u8)))
    }

    fn describe(&mut self, jersey: i32) -> ConsoleResult<()> {
        let line = self.lookup(jersey)?.describe();
        writeln!(self.out, "{}", line)?;
        Ok(())
    }
}
