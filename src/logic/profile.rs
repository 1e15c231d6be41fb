//! League player profile page: player with fresh counters, club and teammates.

use crate::logic::stats::refresh_player_stats;
use crate::models::{find_team, FixtureDocument, Player, Team};
use serde::Serialize;

/// URL slug of a name: lowercase, whitespace runs become "-", anything outside
/// `[A-Za-z0-9_-]` is dropped and repeated "-" collapse.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.trim().chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            slug.push(c.to_ascii_lowercase());
        }
    }
    let mut collapsed = String::with_capacity(slug.len());
    for c in slug.chars() {
        if c == '-' && collapsed.ends_with('-') {
            continue;
        }
        collapsed.push(c);
    }
    collapsed
}

/// A teammate card on the profile.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Teammate {
    pub name: String,
    pub slug: String,
    pub position: String,
    pub image: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PlayerProfile {
    pub player: Player,
    pub slug: String,
    pub club: Option<Team>,
    pub teammates: Vec<Teammate>,
}

/// Every league player with counters recomputed from the document's matches.
pub fn league_players(doc: &FixtureDocument) -> Vec<Player> {
    let mut players = doc.players.clone();
    refresh_player_stats(&mut players, &doc.resolved_matches());
    players
}

/// Profile of the player whose name slugifies to `slug`; `None` when there is none.
pub fn player_profile(doc: &FixtureDocument, slug: &str) -> Option<PlayerProfile> {
    let players = league_players(doc);
    let player = players.iter().find(|p| slugify(&p.name) == slug)?.clone();

    let teammates = players
        .iter()
        .filter(|p| p.club_id == player.club_id && p.id != player.id)
        .map(|p| Teammate {
            name: p.name.clone(),
            slug: slugify(&p.name),
            position: p.position.clone(),
            image: p.image.clone(),
        })
        .collect();

    Some(PlayerProfile {
        slug: slugify(&player.name),
        club: find_team(&doc.clubs, Some(player.club_id.as_str())).cloned(),
        teammates,
        player,
    })
}
