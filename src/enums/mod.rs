//! Enumerated types.

mod free_games_policy;
mod language;

pub use free_games_policy::FreeGamesPolicy;
pub use language::Language;
