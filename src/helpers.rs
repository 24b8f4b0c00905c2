use crate::error::{ConfigurationError, TransportError, UpstreamError};
use crate::types::HttpClient;
use std::time::Duration;
use reqwest::{header, Proxy};
use reqwest_middleware::ClientBuilder;
use serde::de::DeserializeOwned;

pub const USER_AGENT_STRING: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/97.0.4692.71 Safari/537.36";
/// The default timeout for each request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Proxies used for outbound requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Proxy for plaintext requests.
    pub http: Option<String>,
    /// Proxy for encrypted requests.
    pub https: Option<String>,
}

impl ProxyConfig {
    /// Uses the same proxy for every request.
    pub fn all(url: String) -> Self {
        Self {
            http: Some(url.clone()),
            https: Some(url),
        }
    }

    fn is_empty(&self) -> bool {
        self.http.is_none() && self.https.is_none()
    }
}

/// Settings for building the HTTP client.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub user_agent: &'static str,
    pub timeout: Duration,
    pub proxy: ProxyConfig,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            user_agent: USER_AGENT_STRING,
            timeout: DEFAULT_TIMEOUT,
            proxy: ProxyConfig::default(),
        }
    }
}

fn build_proxy(
    url: &str,
    build: fn(&str) -> reqwest::Result<Proxy>,
) -> Result<Proxy, ConfigurationError> {
    build(url)
        .map_err(|source| ConfigurationError::InvalidProxy {
            url: url.to_string(),
            source,
        })
}

/// Builds the client used for all requests. Requests are never retried.
pub fn get_default_client(options: &ClientOptions) -> Result<HttpClient, ConfigurationError> {
    let mut headers = header::HeaderMap::new();

    headers.insert(header::USER_AGENT, header::HeaderValue::from_static(options.user_agent));

    let mut builder = reqwest::ClientBuilder::new()
        .default_headers(headers)
        .timeout(options.timeout)
        .gzip(true);
    let proxy = &options.proxy;

    if proxy.is_empty() {
        // Otherwise reqwest would pick up proxies from the environment.
        builder = builder.no_proxy();
    } else if proxy.http.is_some() && proxy.http == proxy.https {
        if let Some(url) = &proxy.http {
            builder = builder.proxy(build_proxy(url, |url| Proxy::all(url))?);
        }
    } else {
        if let Some(url) = &proxy.http {
            builder = builder.proxy(build_proxy(url, |url| Proxy::http(url))?);
        }

        if let Some(url) = &proxy.https {
            builder = builder.proxy(build_proxy(url, |url| Proxy::https(url))?);
        }
    }

    let client = builder
        .build()
        .map_err(ConfigurationError::Client)?;

    Ok(ClientBuilder::new(client).build())
}

/// Reads the body of a response, failing on any non-2xx status.
pub async fn check_response(response: reqwest::Response) -> Result<bytes::Bytes, TransportError> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        return Err(TransportError::http(status, &body));
    }

    Ok(body)
}

/// Checks the response and parses its body as JSON.
pub async fn parses_response<D>(response: reqwest::Response) -> Result<D, UpstreamError>
where
    D: DeserializeOwned,
{
    let body = check_response(response).await?;

    Ok(serde_json::from_slice::<D>(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn response(status: u16, body: &'static str) -> reqwest::Response {
        http::Response::builder()
            .status(status)
            .body(body)
            .map(reqwest::Response::from)
            .unwrap()
    }

    #[tokio::test]
    async fn checks_non_success_status() {
        let error = check_response(response(503, "down for maintenance")).await.unwrap_err();

        match error {
            TransportError::Http { status, body } => {
                assert_eq!(status.as_u16(), 503);
                assert_eq!(body, "down for maintenance");
            },
            error => panic!("unexpected error: {error}"),
        }
    }

    #[tokio::test]
    async fn non_json_body_is_a_parse_error() {
        let error = parses_response::<serde_json::Value>(response(200, "<html></html>")).await.unwrap_err();

        assert!(matches!(error, UpstreamError::Parse(_)));
    }

    #[test]
    fn rejects_invalid_proxy() {
        let options = ClientOptions {
            proxy: ProxyConfig::all("not a url".into()),
            ..ClientOptions::default()
        };
        let error = get_default_client(&options).unwrap_err();

        assert!(matches!(error, ConfigurationError::InvalidProxy { .. }));
    }

    #[test]
    fn builds_client_with_separate_proxies() {
        let options = ClientOptions {
            proxy: ProxyConfig {
                http: Some("http://127.0.0.1:7890".into()),
                https: Some("http://127.0.0.1:7891".into()),
            },
            ..ClientOptions::default()
        };

        assert!(get_default_client(&options).is_ok());
    }

    /// Starts a proxy that answers one request, sends `url` through it and returns the request
    /// head the proxy received.
    async fn request_head_through_proxy(
        proxy: impl FnOnce(String) -> ProxyConfig,
        url: &'static str,
    ) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let options = ClientOptions {
            proxy: proxy(format!("http://{}", listener.local_addr().unwrap())),
            ..ClientOptions::default()
        };
        let client = get_default_client(&options).unwrap();
        let request = tokio::spawn(async move {
            client.get(url).send().await
        });
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut received = Vec::<u8>::new();
        let mut buffer = [0u8; 1024];

        while !received.windows(4).any(|window| window == b"\r\n\r\n") {
            let read = socket.read(&mut buffer).await.unwrap();

            if read == 0 {
                break;
            }

            received.extend_from_slice(&buffer[..read]);
        }

        socket
            .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 2\r\nconnection: close\r\n\r\n{}")
            .await
            .unwrap();

        let response = request.await.unwrap().unwrap();

        assert!(response.status().is_success());

        String::from_utf8(received).unwrap()
    }

    #[tokio::test]
    async fn sends_requests_through_proxy() {
        let head = request_head_through_proxy(
            ProxyConfig::all,
            "http://steam.invalid/api/featuredcategories",
        ).await;

        assert!(head.starts_with("GET http://steam.invalid/api/featuredcategories HTTP/1.1\r\n"));
    }

    #[tokio::test]
    async fn sends_http_requests_through_http_proxy() {
        let head = request_head_through_proxy(
            |address| ProxyConfig {
                http: Some(address),
                // Nothing listens here.
                https: Some("http://127.0.0.1:9".into()),
            },
            "http://steam.invalid/ISteamUser/ResolveVanityURL/v1/?vanityurl=robinwalker",
        ).await;

        assert!(head.starts_with("GET http://steam.invalid/ISteamUser/ResolveVanityURL/v1/?vanityurl=robinwalker HTTP/1.1\r\n"));
    }
}
