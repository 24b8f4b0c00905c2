//! Models returned by the API.

mod owned_game;
mod discounted_game;

pub use owned_game::OwnedGame;
pub use discounted_game::DiscountedGame;
