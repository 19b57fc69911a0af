use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::IataError;
use crate::html::first_datatable_cell;

const DEFAULT_BASE_URL: &str = "https://www.iata.org/";
const CODE_SEARCH_PATH: &str = "en/publications/directories/code-search";

/// HTTP client for the IATA airline code-search directory.
pub struct IataClient {
    client: Client,
    base_url: Url,
}

impl IataClient {
    /// Creates a client pointed at `www.iata.org`.
    ///
    /// # Errors
    ///
    /// Returns [`IataError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, IataError> {
        Self::with_base_url(timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`IataError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`IataError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, IataError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| IataError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Looks up the display name for a carrier code.
    ///
    /// Returns `Ok(None)` when the page has no result row.
    ///
    /// # Errors
    ///
    /// - [`IataError::Http`] on network failure.
    /// - [`IataError::UnexpectedStatus`] on any non-2xx status.
    pub async fn lookup(&self, carrier_code: &str) -> Result<Option<String>, IataError> {
        let url = self.search_url(carrier_code)?;

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(IataError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        Ok(first_datatable_cell(&body))
    }

    fn search_url(&self, carrier_code: &str) -> Result<Url, IataError> {
        let mut url = self
            .base_url
            .join(CODE_SEARCH_PATH)
            .map_err(|e| IataError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut()
            .append_pair("airline.search", carrier_code.trim());
        Ok(url)
    }
}
