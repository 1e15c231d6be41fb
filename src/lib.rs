//! Cup site: library with models, bracket/stats logic and the fixture store.

pub mod config;
pub mod logic;
pub mod models;
pub mod store;

pub use config::SiteConfig;
pub use logic::{
    aggregate_stats, bracket_cards, cup_page, event_side, fixture_list, is_completed,
    league_players, match_report, outer_slots, player_profile, refresh_player_stats,
    resolve_bracket, slugify, winner_of, write_stats_csv, BracketCard, CupPage, FixtureRow,
    GoalLine, MatchReport, PlayerLink, PlayerProfile, ResolvedBracket, Teammate,
    BRACKET_MATCH_IDS, TBD, UNKNOWN_PLAYER, UPCOMING,
};
pub use models::{
    find_team, EventType, FixtureDocument, FixtureError, Match, MatchEvent, MatchId, MatchRecord,
    Player, PlayerId, PlayerStats, Side, Team, TeamId, BRACKET_TEAMS, KICKOFF_FORMAT,
};
pub use store::{load_cup_document, load_document};
