//! Player statistics: appearances, goals, assists and man-of-the-match awards,
//! recomputed from the completed matches on every load.

use crate::models::{EventType, Match, Player, PlayerStats};
use std::collections::HashMap;
use std::io::Write;

/// A match counts once both scores are set.
pub fn is_completed(m: &Match) -> bool {
    m.score().is_some()
}

/// Compute the four counters for every player (one entry per player, same order).
///
/// - Appearances: +1 for each completed match played by the player's club
///   (club membership, not lineups).
/// - Goals: `goal` and `penalty` events credit the scorer; own goals credit nobody.
/// - Assists: only `goal` events with an assisting player.
/// - Man of the match: the completed match's `motm`, if it is a known player.
///
/// Counters start at zero; references to unknown players are ignored.
pub fn aggregate_stats(players: &[Player], matches: &[Match]) -> Vec<PlayerStats> {
    let mut stats: Vec<PlayerStats> = players.iter().map(|p| PlayerStats::empty(p.id.clone())).collect();
    let index: HashMap<&str, usize> = players
        .iter()
        .enumerate()
        .map(|(i, p)| (p.id.as_str(), i))
        .collect();

    let mut club_matches: HashMap<&str, u32> = HashMap::new();

    for m in matches.iter().filter(|m| is_completed(m)) {
        for club in [m.home.as_deref(), m.away.as_deref()].into_iter().flatten() {
            *club_matches.entry(club).or_insert(0) += 1;
        }

        for ev in &m.events {
            match ev.kind {
                EventType::Goal => {
                    if let Some(&i) = index.get(ev.player_id.as_str()) {
                        stats[i].goals += 1;
                    }
                    if let Some(&i) = ev.assist_id.as_deref().and_then(|a| index.get(a)) {
                        stats[i].assists += 1;
                    }
                }
                EventType::Penalty => {
                    if let Some(&i) = index.get(ev.player_id.as_str()) {
                        stats[i].goals += 1;
                    }
                }
                EventType::OwnGoal | EventType::Other => {}
            }
        }

        if let Some(&i) = m.motm.as_deref().and_then(|id| index.get(id)) {
            stats[i].motm += 1;
        }
    }

    for (p, s) in players.iter().zip(stats.iter_mut()) {
        s.appearances = club_matches.get(p.club_id.as_str()).copied().unwrap_or(0);
    }

    stats
}

/// Reset and overwrite every player's counters from `matches`.
pub fn refresh_player_stats(players: &mut [Player], matches: &[Match]) {
    let stats = aggregate_stats(players, matches);
    for (p, s) in players.iter_mut().zip(&stats) {
        p.reset_stats();
        p.set_stats(s);
    }
}

#[derive(serde::Serialize)]
struct StatsRow<'a> {
    id: &'a str,
    name: &'a str,
    club_id: &'a str,
    position: &'a str,
    appearances: u32,
    goals: u32,
    assists: u32,
    motm: u32,
}

/// Write the players' current counters as CSV (one header row, one row per player).
pub fn write_stats_csv<W: Write>(players: &[Player], writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for p in players {
        wtr.serialize(StatsRow {
            id: &p.id,
            name: &p.name,
            club_id: &p.club_id,
            position: &p.position,
            appearances: p.appearances,
            goals: p.goals,
            assists: p.assists,
            motm: p.motm,
        })?;
    }
    wtr.flush()?;
    Ok(())
}
