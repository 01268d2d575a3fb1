use pico_args::Arguments;
use std::ffi::OsString;
use swiss_tournament::{MatchOutcome, PlayerId};
use thiserror::Error;

/// Errors that can occur during argument parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Malformed option or positional value.
    #[error("{0}")]
    Args(#[from] pico_args::Error),
    /// No command given.
    #[error("Missing command. Run with --help to see available commands")]
    MissingCommand,
    /// Unrecognized command.
    #[error("Unrecognized command '{0}'. Run with --help to see available commands")]
    UnrecognizedCommand(String),
    /// `--draw` given to something other than `report`.
    #[error("--draw only applies to the report command")]
    DrawWithoutReport,
    /// Leftover arguments.
    #[error("Unexpected arguments: {0:?}")]
    UnexpectedArguments(Vec<String>),
}

/// One admin action against the tournament store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Migrate,
    ResetMatches,
    ResetPlayers,
    Count,
    Register {
        name: String,
    },
    Report {
        winner: PlayerId,
        loser: PlayerId,
        outcome: MatchOutcome,
    },
    Standings,
    Players,
    Matches,
    Pairings,
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cli {
    pub database_url: Option<String>,
    pub json: bool,
    pub command: Command,
}

/// Parse the process arguments (without the program name).
///
/// Options are taken first so they may appear before or after the command.
///
/// # Examples
///
/// ```ignore
/// let cli = parse_args(vec!["report".into(), "1".into(), "2".into(), "--draw".into()])?;
/// assert_eq!(cli.command, Command::Report { winner: 1, loser: 2, outcome: MatchOutcome::Draw });
/// ```
pub fn parse_args(args: Vec<OsString>) -> Result<Cli, ParseError> {
    let mut pargs = Arguments::from_vec(args);

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        return Ok(Cli {
            database_url: None,
            json: false,
            command: Command::Help,
        });
    }

    let json = pargs.contains("--json");
    let draw = pargs.contains("--draw");
    let database_url: Option<String> = pargs.opt_value_from_str("--db-url")?;

    let name = pargs.subcommand()?.ok_or(ParseError::MissingCommand)?;
    let command = match name.as_str() {
        "migrate" => Command::Migrate,
        "reset-matches" => Command::ResetMatches,
        "reset-players" => Command::ResetPlayers,
        "count" => Command::Count,
        "register" => Command::Register {
            name: pargs.free_from_str()?,
        },
        "report" => Command::Report {
            winner: pargs.free_from_str()?,
            loser: pargs.free_from_str()?,
            outcome: MatchOutcome::from_draw_flag(draw),
        },
        "standings" => Command::Standings,
        "players" => Command::Players,
        "matches" => Command::Matches,
        "pairings" => Command::Pairings,
        _ => return Err(ParseError::UnrecognizedCommand(name)),
    };

    if draw && !matches!(command, Command::Report { .. }) {
        return Err(ParseError::DrawWithoutReport);
    }

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        return Err(ParseError::UnexpectedArguments(
            remaining
                .into_iter()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
        ));
    }

    Ok(Cli {
        database_url,
        json,
        command,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, ParseError> {
        parse_args(args.iter().map(OsString::from).collect())
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse(&["count"]).unwrap().command, Command::Count);
        assert_eq!(parse(&["migrate"]).unwrap().command, Command::Migrate);
        assert_eq!(parse(&["reset-matches"]).unwrap().command, Command::ResetMatches);
        assert_eq!(parse(&["reset-players"]).unwrap().command, Command::ResetPlayers);
        assert_eq!(parse(&["standings"]).unwrap().command, Command::Standings);
        assert_eq!(parse(&["pairings"]).unwrap().command, Command::Pairings);
    }

    #[test]
    fn test_help_wins_over_everything() {
        assert_eq!(parse(&["report", "--help"]).unwrap().command, Command::Help);
        assert_eq!(parse(&["-h"]).unwrap().command, Command::Help);
    }

    #[test]
    fn test_register_takes_name() {
        let cli = parse(&["register", "Boots O'Neal"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Register {
                name: "Boots O'Neal".to_string()
            }
        );
    }

    #[test]
    fn test_report_win_and_draw() {
        let cli = parse(&["report", "3", "7"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Report {
                winner: 3,
                loser: 7,
                outcome: MatchOutcome::Decisive,
            }
        );

        let cli = parse(&["report", "3", "7", "--draw"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Report {
                winner: 3,
                loser: 7,
                outcome: MatchOutcome::Draw,
            }
        );
    }

    #[test]
    fn test_options_before_command() {
        let cli = parse(&["--json", "--db-url", "postgres://x@y/z", "standings"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.database_url.as_deref(), Some("postgres://x@y/z"));
        assert_eq!(cli.command, Command::Standings);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(parse(&[]), Err(ParseError::MissingCommand)));
        assert!(matches!(
            parse(&["shuffle"]),
            Err(ParseError::UnrecognizedCommand(ref c)) if c == "shuffle"
        ));
        assert!(matches!(parse(&["report", "one", "2"]), Err(ParseError::Args(_))));
        assert!(matches!(parse(&["report", "1"]), Err(ParseError::Args(_))));
        assert!(matches!(parse(&["count", "--draw"]), Err(ParseError::DrawWithoutReport)));
        assert!(matches!(
            parse(&["count", "extra"]),
            Err(ParseError::UnexpectedArguments(_))
        ));
    }
}
