use crate::types::{AppId, Price};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A discounted game from the store's specials, normalized into a fixed shape.
///
/// Only `name` is guaranteed to be present.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct DiscountedGame {
    /// The app ID of the game.
    pub appid: Option<AppId>,
    /// The name of the game as sent. Never blank.
    pub name: String,
    /// The discount, e.g. `75` for 75% off.
    pub discount_percent: Option<u32>,
    /// The price before the discount, in the smallest unit of the currency.
    pub original_price: Option<Price>,
    /// The price after the discount, in the smallest unit of the currency.
    pub final_price: Option<Price>,
    /// The main image.
    pub header_image: Option<String>,
    /// The small capsule image.
    pub capsule_image: Option<String>,
    /// The store page.
    pub url: Option<String>,
    /// e.g. "Very Positive".
    pub reviews_summary: Option<String>,
    /// Passed through as sent.
    pub platform_icons: Option<Value>,
    /// User tags, e.g. `RPG`. Tags sent as objects are reduced to their name.
    pub tags: Option<Vec<String>>,
}
