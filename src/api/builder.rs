use super::SteamCatalogAPI;
use crate::enums::{FreeGamesPolicy, Language};
use crate::error::{ConfigurationError, Error};
use crate::helpers::{get_default_client, ClientOptions, ProxyConfig, DEFAULT_TIMEOUT, USER_AGENT_STRING};
use std::time::Duration;
use reqwest_middleware::ClientWithMiddleware;
use url::Url;

/// The default country code for store prices.
pub const DEFAULT_COUNTRY_CODE: &str = "us";

/// Builder for constructing a [`SteamCatalogAPI`].
///
/// An API key is required for every request. Building without one succeeds, but each request
/// will then fail with [`ConfigurationError::MissingApiKey`] before anything is sent.
#[derive(Debug, Clone)]
pub struct SteamCatalogAPIBuilder {
    /// Your API key from <https://steamcommunity.com/dev/apikey>.
    pub(crate) api_key: Option<String>,
    /// The language for store responses.
    pub(crate) language: Language,
    /// The country code for store prices, e.g. `us`.
    pub(crate) country_code: String,
    /// Which free games to include when getting owned games.
    pub(crate) free_games_policy: FreeGamesPolicy,
    /// The timeout for each request. Defaults to 15 seconds.
    pub(crate) timeout: Duration,
    /// Proxies for outbound requests.
    pub(crate) proxy: ProxyConfig,
    /// User agent for requests.
    pub(crate) user_agent: &'static str,
    /// Hostname for Web API requests.
    pub(crate) api_hostname: String,
    /// Hostname for store requests.
    pub(crate) store_hostname: String,
    /// Client to use for requests.
    pub(crate) client: Option<ClientWithMiddleware>,
}

impl Default for SteamCatalogAPIBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            language: Language::English,
            country_code: DEFAULT_COUNTRY_CODE.into(),
            free_games_policy: FreeGamesPolicy::default(),
            timeout: DEFAULT_TIMEOUT,
            proxy: ProxyConfig::default(),
            user_agent: USER_AGENT_STRING,
            api_hostname: SteamCatalogAPI::API_HOSTNAME.into(),
            store_hostname: SteamCatalogAPI::STORE_HOSTNAME.into(),
            client: None,
        }
    }
}

impl SteamCatalogAPIBuilder {
    /// Creates a new [`SteamCatalogAPIBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from environment variables.
    ///
    /// | Variable | Setting |
    /// | --- | --- |
    /// | `STEAM_API_KEY` | [`Self::api_key`] |
    /// | `HTTP_PROXY` | [`Self::http_proxy`] |
    /// | `HTTPS_PROXY` | [`Self::https_proxy`], falling back to `HTTP_PROXY` |
    /// | `STEAM_HTTP_TIMEOUT` | [`Self::timeout`] in seconds, fractions allowed |
    /// | `STEAM_COUNTRY_CODE` | [`Self::country_code`] |
    /// | `STEAM_LANGUAGE` | [`Self::language`], e.g. `schinese` |
    /// | `STEAM_FREE_GAMES_POLICY` | [`Self::free_games_policy`]: `played`, `free_sub` or `none` |
    ///
    /// Unset or blank variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut builder = Self::new();

        builder.api_key = var("STEAM_API_KEY");
        builder.proxy = {
            let http = var("HTTP_PROXY");
            let https = var("HTTPS_PROXY").or_else(|| http.clone());

            ProxyConfig { http, https }
        };

        if let Some(value) = var("STEAM_HTTP_TIMEOUT") {
            builder.timeout = parse_timeout(&value)
                .ok_or_else(|| ConfigurationError::InvalidValue {
                    name: "STEAM_HTTP_TIMEOUT",
                    value,
                })?;
        }

        if let Some(value) = var("STEAM_COUNTRY_CODE") {
            builder.country_code = value;
        }

        if let Some(value) = var("STEAM_LANGUAGE") {
            builder.language = value
                .parse()
                .map_err(|_error| ConfigurationError::InvalidValue {
                    name: "STEAM_LANGUAGE",
                    value,
                })?;
        }

        if let Some(value) = var("STEAM_FREE_GAMES_POLICY") {
            builder.free_games_policy = value
                .parse()
                .map_err(|_error| ConfigurationError::InvalidValue {
                    name: "STEAM_FREE_GAMES_POLICY",
                    value,
                })?;
        }

        Ok(builder)
    }

    /// The API key. It is required for all requests.
    pub fn api_key(mut self, api_key: String) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// The language for store responses.
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// The country code for store prices, e.g. `us` or `cn`.
    pub fn country_code<T>(mut self, country_code: T) -> Self
    where
        T: Into<String>,
    {
        self.country_code = country_code.into();
        self
    }

    /// Which free games to include when getting owned games.
    pub fn free_games_policy(mut self, free_games_policy: FreeGamesPolicy) -> Self {
        self.free_games_policy = free_games_policy;
        self
    }

    /// The timeout for each request. Defaults to 15 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sends all requests through this proxy.
    pub fn proxy(mut self, url: String) -> Self {
        self.proxy = ProxyConfig::all(url);
        self
    }

    /// Sends plaintext requests through this proxy.
    pub fn http_proxy(mut self, url: String) -> Self {
        self.proxy.http = Some(url);
        self
    }

    /// Sends encrypted requests through this proxy.
    pub fn https_proxy(mut self, url: String) -> Self {
        self.proxy.https = Some(url);
        self
    }

    /// User agent for requests.
    pub fn user_agent(mut self, user_agent: &'static str) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Hostname for Web API requests. Defaults to <https://api.steampowered.com>.
    pub fn api_hostname<T>(mut self, hostname: T) -> Self
    where
        T: Into<String>,
    {
        self.api_hostname = hostname.into();
        self
    }

    /// Hostname for store requests. Defaults to <https://store.steampowered.com>.
    pub fn store_hostname<T>(mut self, hostname: T) -> Self
    where
        T: Into<String>,
    {
        self.store_hostname = hostname.into();
        self
    }

    /// Client to use for requests. The timeout, proxy and user agent settings are not applied to
    /// a client given here.
    pub fn client(mut self, client: ClientWithMiddleware) -> Self {
        self.client = Some(client);
        self
    }

    /// Builds the [`SteamCatalogAPI`].
    pub fn build(self) -> Result<SteamCatalogAPI, Error> {
        let api_hostname = parse_hostname(self.api_hostname)?;
        let store_hostname = parse_hostname(self.store_hostname)?;
        let client = match self.client {
            Some(client) => client,
            None => get_default_client(&ClientOptions {
                user_agent: self.user_agent,
                timeout: self.timeout,
                proxy: self.proxy,
            })?,
        };

        Ok(SteamCatalogAPI {
            client,
            api_key: self.api_key.filter(|api_key| !api_key.trim().is_empty()),
            language: self.language,
            country_code: self.country_code,
            free_games_policy: self.free_games_policy,
            api_hostname,
            store_hostname,
        })
    }
}

fn parse_timeout(value: &str) -> Option<Duration> {
    let secs = value.parse::<f64>().ok()?;

    Duration::try_from_secs_f64(secs)
        .ok()
        .filter(|timeout| !timeout.is_zero())
}

fn parse_hostname(hostname: String) -> Result<String, ConfigurationError> {
    match Url::parse(&hostname) {
        Ok(_) => Ok(hostname.trim_end_matches('/').to_string()),
        Err(source) => Err(ConfigurationError::InvalidHostname {
            hostname,
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_vars(vars: &[(&str, &str)]) -> Result<SteamCatalogAPIBuilder, ConfigurationError> {
        let vars = vars
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();

        SteamCatalogAPIBuilder::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn reads_settings_from_env() {
        let builder = from_vars(&[
            ("STEAM_API_KEY", " ABCDEF "),
            ("HTTP_PROXY", "http://127.0.0.1:7890"),
            ("STEAM_HTTP_TIMEOUT", "2.5"),
            ("STEAM_COUNTRY_CODE", "cn"),
            ("STEAM_LANGUAGE", "schinese"),
            ("STEAM_FREE_GAMES_POLICY", "none"),
        ]).unwrap();

        assert_eq!(builder.api_key.as_deref(), Some("ABCDEF"));
        assert_eq!(builder.proxy, ProxyConfig::all("http://127.0.0.1:7890".into()));
        assert_eq!(builder.timeout, Duration::from_millis(2500));
        assert_eq!(builder.country_code, "cn");
        assert_eq!(builder.language, Language::ChineseSimplified);
        assert_eq!(builder.free_games_policy, FreeGamesPolicy::ExcludeFreeSubscriptions);
    }

    #[test]
    fn env_defaults() {
        let builder = from_vars(&[("STEAM_API_KEY", "   ")]).unwrap();

        assert!(builder.api_key.is_none());
        assert_eq!(builder.proxy, ProxyConfig::default());
        assert_eq!(builder.timeout, DEFAULT_TIMEOUT);
        assert_eq!(builder.country_code, DEFAULT_COUNTRY_CODE);
        assert_eq!(builder.free_games_policy, FreeGamesPolicy::IncludePlayedFreeGames);
    }

    #[test]
    fn separate_https_proxy() {
        let builder = from_vars(&[
            ("HTTP_PROXY", "http://127.0.0.1:7890"),
            ("HTTPS_PROXY", "http://127.0.0.1:7891"),
        ]).unwrap();

        assert_eq!(builder.proxy.http.as_deref(), Some("http://127.0.0.1:7890"));
        assert_eq!(builder.proxy.https.as_deref(), Some("http://127.0.0.1:7891"));
    }

    #[test]
    fn rejects_invalid_timeout() {
        for value in ["soon", "0", "-1"] {
            let error = from_vars(&[("STEAM_HTTP_TIMEOUT", value)]).unwrap_err();

            assert!(matches!(
                error,
                ConfigurationError::InvalidValue { name: "STEAM_HTTP_TIMEOUT", .. },
            ));
        }
    }

    #[test]
    fn rejects_invalid_hostname() {
        let error = SteamCatalogAPIBuilder::new()
            .api_hostname("api.steampowered.com")
            .build()
            .unwrap_err();

        assert!(matches!(
            error,
            Error::Configuration(ConfigurationError::InvalidHostname { .. }),
        ));
    }

    #[test]
    fn builds_without_api_key() {
        let api = SteamCatalogAPIBuilder::new()
            .store_hostname("https://store.steampowered.com/")
            .build()
            .unwrap();

        assert!(api.api_key.is_none());
        assert_eq!(api.store_hostname, "https://store.steampowered.com");
    }
}
