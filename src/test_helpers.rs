//! A mock transport for testing requests without touching the network.

use crate::api::{SteamCatalogAPI, SteamCatalogAPIBuilder};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use http::Extensions;
use reqwest::{Request, Response, Url};
use reqwest_middleware::{ClientBuilder, Middleware, Next};

pub enum MockResponse {
    Body(u16, String),
    Error(&'static str),
}

impl MockResponse {
    pub fn fixture(body: &str) -> Self {
        Self::Body(200, body.to_string())
    }
}

/// Serves queued responses in order and records every request it receives.
pub struct MockTransport {
    responses: Mutex<VecDeque<MockResponse>>,
    requests: Mutex<Vec<Url>>,
}

impl MockTransport {
    pub fn new(responses: Vec<MockResponse>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }

    /// A builder for an API with a key whose requests go to this transport.
    pub fn builder(self: &Arc<Self>) -> SteamCatalogAPIBuilder {
        let client = ClientBuilder::new(reqwest::Client::new())
            .with_arc(Arc::clone(self) as Arc<dyn Middleware>)
            .build();

        SteamCatalogAPI::builder()
            .api_key("APIKEY".into())
            .client(client)
    }

    pub fn api(self: &Arc<Self>) -> SteamCatalogAPI {
        self.builder().build().unwrap()
    }
}

/// The value of a query parameter in a request.
pub fn query_value(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

#[async_trait::async_trait]
impl Middleware for MockTransport {
    async fn handle(
        &self,
        req: Request,
        _extensions: &mut Extensions,
        _next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        self.requests.lock().unwrap().push(req.url().clone());

        let response = self.responses.lock().unwrap().pop_front();

        match response {
            Some(MockResponse::Body(status, body)) => http::Response::builder()
                .status(status)
                .body(body)
                .map(Response::from)
                .map_err(|error| reqwest_middleware::Error::Middleware(error.into())),
            Some(MockResponse::Error(message)) => {
                Err(reqwest_middleware::Error::Middleware(anyhow::anyhow!(message)))
            },
            None => Err(reqwest_middleware::Error::Middleware(anyhow::anyhow!("no response queued"))),
        }
    }
}
