//! Normalizes the store's specials into [`DiscountedGame`]s.
//!
//! The featured categories payload has changed shape over time, so each output field is read
//! from an ordered list of candidate keys where the first usable value wins.

use crate::error::UpstreamError;
use crate::response::DiscountedGame;
use crate::types::{AppId, Price};
use serde_json::{Map, Value};

/// The maximum number of discounted games returned.
pub const MAX_DISCOUNTED_GAMES: usize = 40;

const SECTION_KEYS: &[&str] = &["specials", "Specials"];
const ITEM_LIST_KEYS: &[&str] = &["items", "large_capsules"];

const APPID_KEYS: &[&str] = &["id", "appid"];
const NAME_KEYS: &[&str] = &["name"];
const DISCOUNT_PERCENT_KEYS: &[&str] = &["discount_percent"];
const ORIGINAL_PRICE_KEYS: &[&str] = &["original_price"];
const FINAL_PRICE_KEYS: &[&str] = &["final_price"];
const HEADER_IMAGE_KEYS: &[&str] = &[
    "large_capsule_image",
    "large_capsule",
    "small_capsule_image",
    "small_capsule",
    "header_image",
    "header",
];
const CAPSULE_IMAGE_KEYS: &[&str] = &[
    "small_capsule_image",
    "small_capsule",
    "capsule_image",
    "capsule",
];
const URL_KEYS: &[&str] = &["url"];
const REVIEWS_SUMMARY_KEYS: &[&str] = &["reviews_summary"];
const PLATFORM_ICONS_KEYS: &[&str] = &["platform_icons"];
const TAGS_KEYS: &[&str] = &["tags"];

type Object = Map<String, Value>;

/// Extracts discounted games from a `featuredcategories` response.
///
/// Section keys are tried in order and the first section holding a non-empty item list wins. A
/// payload without one has no discounted games.
pub fn normalize_featured_categories(
    payload: &Value,
) -> Result<Vec<DiscountedGame>, UpstreamError> {
    let payload = payload
        .as_object()
        .ok_or_else(|| UpstreamError::UnexpectedResponse("featured categories is not an object".into()))?;

    for section in SECTION_KEYS.iter().filter_map(|key| payload.get(*key)) {
        if section.is_null() {
            continue;
        }

        if let Some(items) = section_items(section)? {
            return Ok(normalize_items(items));
        }
    }

    Ok(Vec::new())
}

/// Extracts discounted games from the specials section of a `featuredcategories` response.
pub fn normalize_specials_section(
    section: &Value,
) -> Result<Vec<DiscountedGame>, UpstreamError> {
    Ok(section_items(section)?
        .map(normalize_items)
        .unwrap_or_default())
}

/// The first non-empty item list in a specials section. An item list that is present but not
/// an array is malformed.
fn section_items(section: &Value) -> Result<Option<&[Value]>, UpstreamError> {
    let section = section
        .as_object()
        .ok_or_else(|| UpstreamError::UnexpectedResponse("specials is not an object".into()))?;

    for key in ITEM_LIST_KEYS {
        match section.get(*key) {
            None | Some(Value::Null) => continue,
            Some(Value::Array(items)) if items.is_empty() => continue,
            Some(Value::Array(items)) => return Ok(Some(items.as_slice())),
            Some(_) => {
                return Err(UpstreamError::UnexpectedResponse(format!("specials {key} is not a list")));
            },
        }
    }

    Ok(None)
}

fn normalize_items(items: &[Value]) -> Vec<DiscountedGame> {
    items
        .iter()
        .filter_map(Value::as_object)
        .filter_map(normalize_item)
        .take(MAX_DISCOUNTED_GAMES)
        .collect()
}

fn normalize_item(item: &Object) -> Option<DiscountedGame> {
    let appid = first_of(item, APPID_KEYS, as_number::<AppId>);
    let Some(name) = first_of(item, NAME_KEYS, as_string) else {
        log::debug!("Skipping special without a name (appid {appid:?})");
        return None;
    };

    Some(DiscountedGame {
        appid,
        name,
        discount_percent: first_of(item, DISCOUNT_PERCENT_KEYS, as_number::<u32>),
        original_price: first_of(item, ORIGINAL_PRICE_KEYS, as_number::<Price>),
        final_price: first_of(item, FINAL_PRICE_KEYS, as_number::<Price>),
        header_image: first_of(item, HEADER_IMAGE_KEYS, as_string),
        capsule_image: first_of(item, CAPSULE_IMAGE_KEYS, as_string),
        url: first_of(item, URL_KEYS, as_string),
        reviews_summary: first_of(item, REVIEWS_SUMMARY_KEYS, as_string),
        platform_icons: first_of(item, PLATFORM_ICONS_KEYS, |value| Some(value.clone())),
        tags: first_of(item, TAGS_KEYS, as_tags),
    })
}

/// Reads the first key in `keys` whose value converts.
fn first_of<T, F>(item: &Object, keys: &[&str], convert: F) -> Option<T>
where
    F: Fn(&Value) -> Option<T>,
{
    keys.iter()
        .filter_map(|key| item.get(*key))
        .filter(|value| !value.is_null())
        .find_map(convert)
}

/// Blank strings count as absent. Values are kept as sent.
fn as_string(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|s| !s.trim().is_empty())
        .map(String::from)
}

/// Numbers are sometimes sent as strings.
fn as_number<T>(value: &Value) -> Option<T>
where
    T: TryFrom<u64>,
{
    let number = match value {
        Value::Number(number) => number.as_u64()?,
        Value::String(s) => s.trim().parse::<u64>().ok()?,
        _ => return None,
    };

    T::try_from(number).ok()
}

/// Tags are either plain strings or objects with a name.
fn as_tags(value: &Value) -> Option<Vec<String>> {
    let tags = value
        .as_array()?
        .iter()
        .filter_map(|tag| match tag {
            Value::Object(tag) => tag.get("name").and_then(as_string),
            tag => as_string(tag),
        })
        .collect();

    Some(tags)
}
