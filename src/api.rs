// API client module: a small blocking client that creates pages in a
// Notion database. The HTTP call goes through the `Transport` trait so
// the client can be exercised without the network.

use anyhow::Context;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::config::Config;

/// API version the page payload below was written against.
pub const NOTION_VERSION: &str = "2021-05-13";

pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum RegisterError {
    #[error("error marshalling payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("error creating request: {0}")]
    Request(String),
    #[error("error sending request: {0}")]
    Transport(#[source] TransportError),
    #[error("API error (status: {}): {body}", .status.as_u16())]
    Api { status: StatusCode, body: String },
}

/// A fully prepared request, handed to a `Transport` as is.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub url: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Status and raw body text. `body` is left empty on a 200.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Sends one POST and returns the status with the raw body text.
pub trait Transport {
    fn send(&self, request: OutboundRequest) -> Result<TransportResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: OutboundRequest) -> Result<TransportResponse, TransportError> {
        (**self).send(request)
    }
}

/// `Transport` backed by a reqwest blocking client with its default timeout.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> anyhow::Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: OutboundRequest) -> Result<TransportResponse, TransportError> {
        let res = self
            .client
            .post(&request.url)
            .headers(request.headers)
            .body(request.body)
            .send()?;
        let status = res.status();
        // The body of a created page is never used, so only failures read it.
        // A failed read still reports the status with an empty body.
        let body = if status == StatusCode::OK {
            String::new()
        } else {
            res.text().unwrap_or_else(|_| "".into())
        };
        Ok(TransportResponse { status, body })
    }
}

/// Body of a page creation call: a page under `database_id` whose "Name"
/// title property holds `title`.
#[derive(Serialize, Debug)]
pub struct RegistrationRequest<'a> {
    parent: Parent<'a>,
    properties: Properties<'a>,
}

#[derive(Serialize, Debug)]
struct Parent<'a> {
    database_id: &'a str,
}

#[derive(Serialize, Debug)]
struct Properties<'a> {
    #[serde(rename = "Name")]
    name: TitleProperty<'a>,
}

#[derive(Serialize, Debug)]
struct TitleProperty<'a> {
    title: [RichText<'a>; 1],
}

#[derive(Serialize, Debug)]
struct RichText<'a> {
    text: Text<'a>,
}

#[derive(Serialize, Debug)]
struct Text<'a> {
    content: &'a str,
}

impl<'a> RegistrationRequest<'a> {
    pub fn new(database_id: &'a str, title: &'a str) -> Self {
        RegistrationRequest {
            parent: Parent { database_id },
            properties: Properties {
                name: TitleProperty {
                    title: [RichText {
                        text: Text { content: title },
                    }],
                },
            },
        }
    }
}

/// Client for the Notion page endpoint. Holds the transport, the bearer
/// token and the endpoint URL for the lifetime of the process.
pub struct NotionClient<T> {
    transport: T,
    token: String,
    endpoint: String,
}

impl<T: Transport> NotionClient<T> {
    pub fn with_transport(transport: T, config: &Config) -> Self {
        NotionClient {
            transport,
            token: config.access_token.clone(),
            endpoint: config.api_url.clone(),
        }
    }

    fn headers(&self) -> Result<HeaderMap, RegisterError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let auth = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|err| RegisterError::Request(err.to_string()))?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            HeaderName::from_static("notion-version"),
            HeaderValue::from_static(NOTION_VERSION),
        );
        Ok(headers)
    }

    /// Create one page titled `title` in `database_id`. Any status other
    /// than 200 is returned as `RegisterError::Api` with the raw body.
    pub fn register_record(&self, database_id: &str, title: &str) -> Result<(), RegisterError> {
        let body = serde_json::to_vec(&RegistrationRequest::new(database_id, title))?;
        let request = OutboundRequest {
            url: self.endpoint.clone(),
            headers: self.headers()?,
            body,
        };

        log::debug!("POST {}", request.url);
        let res = self
            .transport
            .send(request)
            .map_err(RegisterError::Transport)?;

        if res.status != StatusCode::OK {
            return Err(RegisterError::Api {
                status: res.status,
                body: res.body,
            });
        }
        Ok(())
    }
}
