//! Command line administration for a Swiss-system tournament.
//!
//! Each invocation runs one command against the tournament store and exits.

mod commands;
mod config;
mod output;

use anyhow::{Context, Error};
use commands::{Command, parse_args};
use config::AdminConfig;
use log::info;
use swiss_tournament::{Database, TournamentManager};

const HELP: &str = "\
Administer a Swiss-system tournament

USAGE:
  swiss_admin [OPTIONS] <COMMAND>

COMMANDS:
  migrate                  Create or update the tournament schema
  reset-matches            Delete all match records
  reset-players            Delete all players and their matches
  count                    Print the number of registered players
  register NAME            Register a player
  report WINNER LOSER      Record a match result  [--draw for a draw]
  standings                Print players ranked by wins
  players                  List registered players
  matches                  List reported matches
  pairings                 Print pairings for the next round

OPTIONS:
  --db-url     URL         Database connection string  [default: env DATABASE_URL or postgres://postgres@localhost/tournament]
  --json                   Print lists as JSON

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  DATABASE_URL             PostgreSQL connection string
  DB_MAX_CONNECTIONS       Pool size (default: 5)
  RUST_LOG                 Log filter (e.g. info, swiss_tournament=debug)
";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let cli = parse_args(std::env::args_os().skip(1).collect())?;
    if cli.command == Command::Help {
        print!("{HELP}");
        return Ok(());
    }

    env_logger::builder().format_target(false).init();

    let config = AdminConfig::from_env(cli.database_url, cli.json)?;
    let db = Database::new(&config.database)
        .await
        .context("Failed to connect to database")?;
    info!("Database connected successfully");

    let result = run(&db, &config, cli.command).await;
    db.close().await;
    result
}

async fn run(db: &Database, config: &AdminConfig, command: Command) -> Result<(), Error> {
    let tournament = TournamentManager::from_database(db);

    match command {
        Command::Help => print!("{HELP}"),
        Command::Migrate => db.migrate().await?,
        Command::ResetMatches => tournament.reset_matches().await?,
        Command::ResetPlayers => tournament.reset_players().await?,
        Command::Count => println!("{}", tournament.count_players().await?),
        Command::Register { name } => {
            let id = tournament.register_player(&name).await?;
            println!("{id}");
        }
        Command::Report {
            winner,
            loser,
            outcome,
        } => tournament.report_match(winner, loser, outcome).await?,
        Command::Standings => {
            let standings = tournament.standings().await?;
            if config.json {
                println!("{}", serde_json::to_string_pretty(&standings)?);
            } else {
                print!("{}", output::standings_table(&standings));
            }
        }
        Command::Players => {
            let players = tournament.players().await?;
            if config.json {
                println!("{}", serde_json::to_string_pretty(&players)?);
            } else {
                print!("{}", output::players_table(&players));
            }
        }
        Command::Matches => {
            let matches = tournament.matches().await?;
            if config.json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else {
                print!("{}", output::matches_table(&matches));
            }
        }
        Command::Pairings => {
            let pairings = tournament.swiss_pairings().await?;
            if config.json {
                println!("{}", serde_json::to_string_pretty(&pairings)?);
            } else {
                print!("{}", output::pairings_table(&pairings));
            }
        }
    }

    Ok(())
}
