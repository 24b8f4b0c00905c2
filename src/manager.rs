use crate::api::{SteamCatalogAPI, SteamCatalogAPIBuilder};
use crate::error::Error;
use crate::response::{DiscountedGame, OwnedGame};

/// The entry point for request handlers: looks up the games owned by a Steam user and the
/// games currently discounted in the store.
///
/// Holds no state of its own beyond the API's read-only configuration. Clone it freely.
#[derive(Debug, Clone)]
pub struct CatalogManager {
    /// The underlying API. The methods on [`CatalogManager`] only include more conventional
    /// ease-of-use methods. Use this API if you have a more specific use-case.
    pub api: SteamCatalogAPI,
}

impl CatalogManager {
    /// Creates a new [`CatalogManager`].
    pub fn new(api: SteamCatalogAPI) -> Self {
        Self {
            api,
        }
    }

    /// Creates a new [`CatalogManager`] configured from environment variables. See
    /// [`SteamCatalogAPIBuilder::from_env`].
    pub fn from_env() -> Result<Self, Error> {
        let api = SteamCatalogAPIBuilder::from_env()?.build()?;

        Ok(Self::new(api))
    }

    /// Gets the games owned by the Steam user with the given vanity URL.
    ///
    /// Fails with [`Error::NotFound`] if no account uses the username, in which case no games
    /// are requested.
    pub async fn owned_games_for(
        &self,
        username: &str,
    ) -> Result<Vec<OwnedGame>, Error> {
        let username = username.trim();

        if username.is_empty() {
            return Err(Error::Parameter("Steam username cannot be empty"));
        }

        let steamid = self.api.resolve_vanity_url(username).await?;

        self.api.get_owned_games(&steamid).await
    }

    /// Gets the games currently on special in the store.
    pub async fn discounted_games(&self) -> Result<Vec<DiscountedGame>, Error> {
        self.api.get_discounted_games().await
    }
}

impl From<SteamCatalogAPI> for CatalogManager {
    fn from(api: SteamCatalogAPI) -> Self {
        Self::new(api)
    }
}
