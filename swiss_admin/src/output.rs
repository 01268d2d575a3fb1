//! Plain-text rendering of tournament data for the terminal.

use std::fmt::Write;
use swiss_tournament::{MatchOutcome, MatchRecord, Pairing, Player, Standing};

/// Render standings, first place first
pub fn standings_table(standings: &[Standing]) -> String {
    let mut out = format!(
        "{:>4}  {:>6}  {:<24} {:>5}  {:>7}\n",
        "RANK", "ID", "NAME", "WINS", "PLAYED"
    );
    for (rank, s) in standings.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>4}  {:>6}  {:<24} {:>5.1}  {:>7}",
            rank + 1,
            s.id,
            s.name,
            s.wins,
            s.matches_played
        );
    }
    out
}

pub fn pairings_table(pairings: &[Pairing]) -> String {
    let mut out = String::new();
    for (table, p) in pairings.iter().enumerate() {
        let _ = writeln!(
            out,
            "Table {}: {} ({}) vs {} ({})",
            table + 1,
            p.name1,
            p.id1,
            p.name2,
            p.id2
        );
    }
    out
}

pub fn players_table(players: &[Player]) -> String {
    let mut out = String::new();
    for p in players {
        let _ = writeln!(
            out,
            "{:>6}  {:<24} registered {}",
            p.id,
            p.name,
            p.registered_at.format("%Y-%m-%d %H:%M")
        );
    }
    out
}

pub fn matches_table(matches: &[MatchRecord]) -> String {
    let mut out = String::new();
    for m in matches {
        let verb = match m.outcome {
            MatchOutcome::Decisive => "beat",
            MatchOutcome::Draw => "drew with",
        };
        let _ = writeln!(out, "#{:<5} {} {} {}", m.id, m.winner, verb, m.loser);
    }
    out
}
