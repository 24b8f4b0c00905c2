//! Error types.

use reqwest::StatusCode;

/// The maximum number of characters of an error response body that is kept.
const BODY_SNIPPET_LENGTH: usize = 256;

/// Any error that can occur while talking to Steam.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The client is not configured to make this request.
    #[error("Configuration error: {}", .0)]
    Configuration(#[from] ConfigurationError),
    /// Steam could not be reached or returned something unusable.
    #[error("Upstream error: {}", .0)]
    Upstream(#[from] UpstreamError),
    /// The vanity URL does not belong to any Steam account.
    #[error("No Steam account found for \"{vanity_url}\"")]
    NotFound {
        /// The vanity URL that was looked up.
        vanity_url: String,
    },
    /// A parameter cannot be used for the request.
    #[error("Invalid parameter: {}", .0)]
    Parameter(&'static str),
}

impl Error {
    /// The HTTP status a request handler should respond with for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::NotFound { .. } => StatusCode::BAD_REQUEST,
            Self::Parameter(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Whether this error was caused by a request timing out.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::Upstream(UpstreamError::Transport(TransportError::Timeout(_))),
        )
    }
}

impl From<TransportError> for Error {
    fn from(error: TransportError) -> Self {
        Self::Upstream(UpstreamError::Transport(error))
    }
}

/// Errors in the client configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigurationError {
    /// No API key is configured.
    #[error("STEAM_API_KEY is not configured")]
    MissingApiKey,
    /// A proxy URL could not be used.
    #[error("Invalid proxy \"{url}\": {source}")]
    InvalidProxy {
        /// The proxy URL.
        url: String,
        /// The cause.
        source: reqwest::Error,
    },
    /// A hostname could not be parsed as a URL.
    #[error("Invalid hostname \"{hostname}\": {source}")]
    InvalidHostname {
        /// The hostname.
        hostname: String,
        /// The cause.
        source: url::ParseError,
    },
    /// A configuration value could not be parsed.
    #[error("Invalid value for {name}: {value}")]
    InvalidValue {
        /// The name of the setting.
        name: &'static str,
        /// The value given.
        value: String,
    },
    /// The HTTP client could not be built.
    #[error("Error building HTTP client: {}", .0)]
    Client(#[source] reqwest::Error),
}

/// Steam could not be reached or returned something unusable.
#[derive(thiserror::Error, Debug)]
pub enum UpstreamError {
    /// The request failed.
    #[error("{}", .0)]
    Transport(#[from] TransportError),
    /// The response body was not valid JSON for the expected type.
    #[error("Error parsing response: {}", .0)]
    Parse(#[from] serde_json::Error),
    /// The response was valid JSON but not in the expected shape.
    #[error("Unexpected response: {}", .0)]
    UnexpectedResponse(String),
}

/// A single outbound request failed.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    /// The request did not complete within the configured timeout.
    #[error("Request timed out: {}", .0)]
    Timeout(#[source] reqwest::Error),
    /// The request could not be completed.
    #[error("Request error: {}", .0)]
    Reqwest(#[source] reqwest::Error),
    /// A middleware failed the request.
    #[error("Request middleware error: {}", .0)]
    Middleware(anyhow::Error),
    /// The response had a non-2xx status.
    #[error("Error {status}")]
    Http {
        /// The status of the response.
        status: StatusCode,
        /// The start of the response body.
        body: String,
    },
}

impl TransportError {
    /// Creates a [`TransportError::Http`], keeping only the start of the body.
    pub(crate) fn http(status: StatusCode, body: &[u8]) -> Self {
        let body = String::from_utf8_lossy(body)
            .chars()
            .take(BODY_SNIPPET_LENGTH)
            .collect();

        Self::Http {
            status,
            body,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(error)
        } else {
            Self::Reqwest(error)
        }
    }
}

impl From<reqwest_middleware::Error> for TransportError {
    fn from(error: reqwest_middleware::Error) -> Self {
        match error {
            reqwest_middleware::Error::Reqwest(e) => e.into(),
            reqwest_middleware::Error::Middleware(e) => Self::Middleware(e),
        }
    }
}
