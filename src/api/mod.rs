//! Requests to the Steam Web API and store.

mod api_response;
mod builder;

pub use builder::{SteamCatalogAPIBuilder, DEFAULT_COUNTRY_CODE};

use api_response::{GetOwnedGamesResponse, ResolveVanityURLResponse};
use crate::enums::{FreeGamesPolicy, Language};
use crate::error::{ConfigurationError, Error, TransportError, UpstreamError};
use crate::helpers::{check_response, parses_response};
use crate::response::{DiscountedGame, OwnedGame};
use crate::specials::normalize_featured_categories;
use crate::types::{HttpClient, SteamID};
use bytes::Bytes;
use serde::de::DeserializeOwned;

/// Makes requests to Steam. Holds only read-only configuration, so one instance can be cloned
/// and shared between any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct SteamCatalogAPI {
    client: HttpClient,
    pub(crate) api_key: Option<String>,
    pub(crate) language: Language,
    pub(crate) country_code: String,
    pub(crate) free_games_policy: FreeGamesPolicy,
    pub(crate) api_hostname: String,
    pub(crate) store_hostname: String,
}

impl SteamCatalogAPI {
    /// The hostname for Web API requests.
    pub const API_HOSTNAME: &'static str = "https://api.steampowered.com";
    /// The hostname for store requests.
    pub const STORE_HOSTNAME: &'static str = "https://store.steampowered.com";

    /// Creates a new [`SteamCatalogAPIBuilder`].
    pub fn builder() -> SteamCatalogAPIBuilder {
        SteamCatalogAPIBuilder::new()
    }

    fn get_api_url(
        &self,
        interface: &str,
        method: &str,
        version: usize,
    ) -> String {
        format!("{}/{interface}/{method}/v{version}", self.api_hostname)
    }

    fn get_store_url(&self, pathname: &str) -> String {
        format!("{}{pathname}", self.store_hostname)
    }

    fn api_key(&self) -> Result<&str, ConfigurationError> {
        self.api_key
            .as_deref()
            .ok_or(ConfigurationError::MissingApiKey)
    }

    async fn send(
        &self,
        uri: &str,
        query: &[(&str, &str)],
    ) -> Result<reqwest::Response, TransportError> {
        // The query holds the key so only the endpoint is logged.
        log::debug!("GET {uri}");

        let response = self.client.get(uri)
            .query(query)
            .send()
            .await?;

        Ok(response)
    }

    /// Sends a GET request and returns the response body. Any non-2xx status is an error. The
    /// request is not retried.
    pub async fn get(
        &self,
        uri: &str,
        query: &[(&str, &str)],
    ) -> Result<Bytes, TransportError> {
        let response = self.send(uri, query).await?;

        check_response(response).await
    }

    async fn get_json<D>(
        &self,
        uri: &str,
        query: &[(&str, &str)],
    ) -> Result<D, UpstreamError>
    where
        D: DeserializeOwned,
    {
        let response = self.send(uri, query).await?;

        parses_response(response).await
    }

    /// Resolves a vanity URL (the custom part of a profile URL) to a [`SteamID`].
    ///
    /// Fails with [`Error::NotFound`] when no account uses the vanity URL.
    pub async fn resolve_vanity_url(
        &self,
        vanity_url: &str,
    ) -> Result<SteamID, Error> {
        let key = self.api_key()?;

        if vanity_url.is_empty() {
            return Err(Error::Parameter("Vanity URL cannot be empty"));
        }

        let uri = self.get_api_url("ISteamUser", "ResolveVanityURL", 1);
        let body: ResolveVanityURLResponse = self.get_json(&uri, &[
            ("key", key),
            ("vanityurl", vanity_url),
        ]).await?;

        if let Some(response) = &body.response {
            if response.success != Some(1) {
                log::warn!(
                    "Vanity URL \"{vanity_url}\" did not resolve ({:?}: {})",
                    response.success,
                    response.message.as_deref().unwrap_or("no message"),
                );
            }
        }

        let steamid = body.steamid()
            .ok_or_else(|| Error::NotFound {
                vanity_url: vanity_url.to_string(),
            })?;
        let steamid = steamid.parse::<u64>()
            .map_err(|_error| UpstreamError::UnexpectedResponse(format!("Invalid steamid \"{steamid}\"")))?;

        Ok(SteamID::from(steamid))
    }

    /// Gets the games owned by an account, including app info.
    ///
    /// Accounts that own nothing and accounts with a private game list both have no games.
    pub async fn get_owned_games(
        &self,
        steamid: &SteamID,
    ) -> Result<Vec<OwnedGame>, Error> {
        let key = self.api_key()?;
        let steamid = u64::from(*steamid).to_string();
        let (free_games_param, free_games_value) = self.free_games_policy.query_param();
        let uri = self.get_api_url("IPlayerService", "GetOwnedGames", 1);
        let body: GetOwnedGamesResponse = self.get_json(&uri, &[
            ("key", key),
            ("steamid", steamid.as_str()),
            ("include_appinfo", "true"),
            (free_games_param, free_games_value),
        ]).await?;

        if let Some(game_count) = body.response.as_ref().and_then(|response| response.game_count) {
            log::debug!("{steamid} owns {game_count} games");
        }

        Ok(body.games())
    }

    /// Gets the raw `featuredcategories` payload from the store.
    pub async fn get_featured_categories(&self) -> Result<serde_json::Value, Error> {
        let key = self.api_key()?;
        let uri = self.get_store_url("/api/featuredcategories");
        let body = self.get_json(&uri, &[
            ("key", key),
            ("cc", self.country_code.as_str()),
            ("l", self.language.api_language_code()),
        ]).await?;

        Ok(body)
    }

    /// Gets the games currently on special in the store, at most
    /// [`MAX_DISCOUNTED_GAMES`](crate::MAX_DISCOUNTED_GAMES) in store order.
    pub async fn get_discounted_games(&self) -> Result<Vec<DiscountedGame>, Error> {
        let payload = self.get_featured_categories().await?;
        let games = normalize_featured_categories(&payload)?;

        Ok(games)
    }
}
