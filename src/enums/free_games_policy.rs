use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Which free games are included when getting owned games. Parses from and displays as
/// `played`, `free_sub` or `none`.
#[derive(Default, Debug, Deserialize, Serialize, Display, EnumString, PartialEq, Eq, Clone, Copy)]
#[strum(ascii_case_insensitive)]
pub enum FreeGamesPolicy {
    /// Include free games the account has played. Sends `include_played_free_games=true`.
    #[default]
    #[strum(serialize = "played")]
    IncludePlayedFreeGames,
    /// Include games from free subscriptions. Sends `include_free_sub=true`.
    #[strum(serialize = "free_sub")]
    IncludeFreeSubscriptions,
    /// Leave out games from free subscriptions. Sends `include_free_sub=false`.
    #[strum(serialize = "none")]
    ExcludeFreeSubscriptions,
}

impl FreeGamesPolicy {
    /// The query parameter sent to `GetOwnedGames` for this policy.
    pub fn query_param(&self) -> (&'static str, &'static str) {
        match self {
            Self::IncludePlayedFreeGames => ("include_played_free_games", "true"),
            Self::IncludeFreeSubscriptions => ("include_free_sub", "true"),
            Self::ExcludeFreeSubscriptions => ("include_free_sub", "false"),
        }
    }
}
