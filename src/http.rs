use reqwest::{Client, Url};
use std::time::Duration;

use crate::{error::ClientError, logger::Logger};

/// Request timeout for the shared client
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client with an optional base URL
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Option<Url>,
}

impl HttpClient {
    /// Build the client; an empty `base_url` yields a client without a base
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ConfigInvalid`] if `base_url` isn't an absolute
    /// http(s) URL and [`ClientError::Build`] if the TLS backend can't be
    /// initialized
    pub fn new(base_url: &str, logger: &Logger) -> Result<Self, ClientError> {
        let base_url = parse_base_url(base_url)?;

        logger.debugf(format_args!(
            "building http client (base url: {})",
            base_url.as_ref().map_or("none", Url::as_str)
        ));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self { client, base_url })
    }

    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }

    #[must_use]
    pub const fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Resolve `path` against the base URL
    ///
    /// # Errors
    ///
    /// Returns an error if there is no base URL or the join fails
    pub fn url(&self, path: &str) -> Result<Url, ClientError> {
        let base = self
            .base_url
            .as_ref()
            .ok_or_else(|| ClientError::ConfigInvalid("no base url configured".to_string()))?;

        base.join(path)
            .map_err(|e| ClientError::ConfigInvalid(format!("cannot join {path} onto {base}: {e}")))
    }
}

fn parse_base_url(raw: &str) -> Result<Option<Url>, ClientError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let url = Url::parse(raw)
        .map_err(|e| ClientError::ConfigInvalid(format!("invalid base url {raw}: {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(Some(url)),
        scheme => Err(ClientError::ConfigInvalid(format!(
            "unsupported scheme {scheme} in base url {raw}"
        ))),
    }
}
