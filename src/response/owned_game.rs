use crate::types::AppId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A game owned by an account, as returned by `GetOwnedGames`.
///
/// Only `appid` and `name` are read into fields. Everything else Steam sends (playtime, icon
/// hashes, etc.) is kept as-is in `metadata` and written back out when serialized.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct OwnedGame {
    /// The app ID of the game.
    pub appid: AppId,
    /// The name of the game. Only present when app info was requested.
    #[serde(default)]
    pub name: String,
    /// Any other fields.
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl OwnedGame {
    /// Total minutes played.
    pub fn playtime_forever(&self) -> Option<u64> {
        self.metadata.get("playtime_forever").and_then(Value::as_u64)
    }
}
