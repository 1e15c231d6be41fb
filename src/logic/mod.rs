//! Site logic: bracket resolution, player stats and the page view models built on them.

pub mod bracket;
mod fixtures;
mod match_report;
mod profile;
mod stats;

pub use bracket::{resolve_bracket, winner_of, ResolvedBracket, BRACKET_MATCH_IDS};
pub use fixtures::{
    bracket_cards, cup_page, fixture_list, outer_slots, BracketCard, CupPage, FixtureRow, TBD,
    UPCOMING,
};
pub use match_report::{event_side, match_report, GoalLine, MatchReport, PlayerLink, UNKNOWN_PLAYER};
pub use profile::{league_players, player_profile, slugify, PlayerProfile, Teammate};
pub use stats::{aggregate_stats, is_completed, refresh_player_stats, write_stats_csv};
