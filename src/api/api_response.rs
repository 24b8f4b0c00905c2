//! Wrappers for Web API responses. Steam nests the payload under a `response` key, which is
//! left out entirely for some requests that have no result.

use crate::response::OwnedGame;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct ResolveVanityURLResponse {
    #[serde(default)]
    pub response: Option<ResolveVanityURLResponseBody>,
}

#[derive(Deserialize, Debug)]
pub struct ResolveVanityURLResponseBody {
    #[serde(default)]
    pub steamid: Option<String>,
    // 1 on success, 42 when there is no match.
    #[serde(default)]
    pub success: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ResolveVanityURLResponse {
    pub fn steamid(self) -> Option<String> {
        self.response
            .and_then(|response| response.steamid)
            .filter(|steamid| !steamid.is_empty())
    }
}

#[derive(Deserialize, Debug)]
pub struct GetOwnedGamesResponse {
    #[serde(default)]
    pub response: Option<GetOwnedGamesResponseBody>,
}

#[derive(Deserialize, Debug)]
pub struct GetOwnedGamesResponseBody {
    #[serde(default)]
    pub game_count: Option<u32>,
    // Missing for accounts that own nothing or have a private profile.
    #[serde(default)]
    pub games: Option<Vec<OwnedGame>>,
}

impl GetOwnedGamesResponse {
    pub fn games(self) -> Vec<OwnedGame> {
        self.response
            .and_then(|response| response.games)
            .unwrap_or_default()
    }
}
