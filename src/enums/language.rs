use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Languages for store responses, sent as the `l` parameter. Parses from and displays as the
/// language name the Steam Web API accepts, e.g. `schinese`.
///
/// See <https://partner.steamgames.com/doc/store/localization/languages> for more information.
#[derive(Default, Debug, Deserialize, Serialize, Display, EnumString, IntoStaticStr, PartialEq, Eq, Clone, Copy)]
#[strum(ascii_case_insensitive)]
pub enum Language {
    #[strum(serialize = "arabic")]
    Arabic,
    #[strum(serialize = "bulgarian")]
    Bulgarian,
    #[strum(serialize = "schinese")]
    ChineseSimplified,
    #[strum(serialize = "tchinese")]
    ChineseTraditional,
    #[strum(serialize = "czech")]
    Czech,
    #[strum(serialize = "danish")]
    Danish,
    #[strum(serialize = "dutch")]
    Dutch,
    /// This is the default language.
    #[default]
    #[strum(serialize = "english")]
    English,
    #[strum(serialize = "finnish")]
    Finnish,
    #[strum(serialize = "french")]
    French,
    #[strum(serialize = "german")]
    German,
    #[strum(serialize = "greek")]
    Greek,
    #[strum(serialize = "hungarian")]
    Hungarian,
    #[strum(serialize = "italian")]
    Italian,
    #[strum(serialize = "japanese")]
    Japanese,
    #[strum(serialize = "koreana")]
    Korean,
    #[strum(serialize = "norwegian")]
    Norwegian,
    #[strum(serialize = "polish")]
    Polish,
    #[strum(serialize = "portuguese")]
    Portuguese,
    #[strum(serialize = "brazilian")]
    PortugueseBrazil,
    #[strum(serialize = "romanian")]
    Romanian,
    #[strum(serialize = "russian")]
    Russian,
    #[strum(serialize = "spanish")]
    SpanishSpain,
    #[strum(serialize = "latam")]
    SpanishLatinAmerica,
    #[strum(serialize = "swedish")]
    Swedish,
    #[strum(serialize = "thai")]
    Thai,
    #[strum(serialize = "turkish")]
    Turkish,
    #[strum(serialize = "ukrainian")]
    Ukrainian,
    #[strum(serialize = "vietnamese")]
    Vietnamese,
}

impl Language {
    /// The language name the Steam Web API and store endpoints accept, e.g. `schinese`.
    pub fn api_language_code(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gets_correct_code_for_english() {
        assert_eq!(Language::English.api_language_code(), "english");
        assert_eq!(Language::default(), Language::English);
        assert_eq!(Language::PortugueseBrazil.to_string(), "brazilian");
    }

    #[test]
    fn parses_api_language_codes() {
        assert_eq!("schinese".parse::<Language>(), Ok(Language::ChineseSimplified));
        assert_eq!("Koreana".parse::<Language>(), Ok(Language::Korean));
        assert_eq!("klingon".parse::<Language>(), Err(strum::ParseError::VariantNotFound));
    }
}
