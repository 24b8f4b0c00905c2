//! Looks up the games owned by a Steam user and the games currently discounted in the Steam
//! store.
//!
//! ```no_run
//! use steam_catalog::{CatalogManager, SteamCatalogAPI};
//!
//! # async fn run() -> Result<(), steam_catalog::Error> {
//! let api = SteamCatalogAPI::builder()
//!     .api_key(std::env::var("STEAM_API_KEY").unwrap_or_default())
//!     .build()?;
//! let manager = CatalogManager::new(api);
//!
//! for game in manager.owned_games_for("gabelogannewell").await? {
//!     println!("{} ({})", game.name, game.appid);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod enums;
pub mod error;
pub mod response;
pub mod types;

mod helpers;
mod manager;
mod specials;
#[cfg(test)]
mod test_helpers;

pub use api::{SteamCatalogAPI, SteamCatalogAPIBuilder};
pub use enums::{FreeGamesPolicy, Language};
pub use error::{ConfigurationError, Error, TransportError, UpstreamError};
pub use helpers::ProxyConfig;
pub use manager::CatalogManager;
pub use response::{DiscountedGame, OwnedGame};
pub use specials::{normalize_featured_categories, normalize_specials_section, MAX_DISCOUNTED_GAMES};
pub use types::SteamID;
