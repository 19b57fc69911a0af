//! HTTP client for the Amadeus Self-Service REST API.
//!
//! Wraps `reqwest` with Amadeus-specific error handling and typed response
//! deserialization. The bearer token is never stored on the client: callers
//! obtain it from [`AmadeusClient::authenticate`] and pass it to each search.

use std::time::Duration;

use airgrid_core::{Credentials, SearchRequest};
use chrono::NaiveDate;
use reqwest::{Client, Response, Url};

use crate::error::AmadeusError;
use crate::types::{
    AccessToken, ApiErrorBody, AuthErrorBody, FlightOffer, OfferSearchResponse, TokenResponse,
};

const DEFAULT_BASE_URL: &str = "https://test.api.amadeus.com/";
const TOKEN_PATH: &str = "v1/security/oauth2/token";
const OFFERS_PATH: &str = "v2/shopping/flight-offers";

/// Maximum offers requested per date. Only the first page is fetched.
pub const OFFERS_PAGE_SIZE: u32 = 20;

/// Prices are requested and stored in Indian rupees.
const CURRENCY: &str = "INR";
const ADULTS: &str = "1";

/// Client for the Amadeus REST API.
///
/// Use [`AmadeusClient::new`] for the test environment or
/// [`AmadeusClient::with_base_url`] to point at another host or a mock server.
pub struct AmadeusClient {
    client: Client,
    base_url: Url,
}

impl AmadeusClient {
    /// Creates a client pointed at the Amadeus test environment.
    ///
    /// # Errors
    ///
    /// Returns [`AmadeusError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, AmadeusError> {
        Self::with_base_url(timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`AmadeusError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`AmadeusError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, AmadeusError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so `Url::join` appends rather than
        // replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| AmadeusError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Exchanges a client-credentials pair for a bearer token.
    ///
    /// # Errors
    ///
    /// - [`AmadeusError::Auth`] if the endpoint is unreachable or returns a
    ///   non-2xx status.
    /// - [`AmadeusError::Deserialize`] if the token body is not the expected
    ///   shape.
    pub async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<AccessToken, AmadeusError> {
        let url = self.endpoint(TOKEN_PATH)?;
        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
        ];

        let response = self
            .client
            .post(url)
            .form(&form)
            .send()
            .await
            .map_err(|e| AmadeusError::Auth {
                status: None,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AmadeusError::Auth {
                status: Some(status.as_u16()),
                message: auth_error_message(&body),
            });
        }

        let body = read_body(response, TOKEN_PATH, |message| AmadeusError::Auth {
            status: Some(status.as_u16()),
            message,
        })
        .await?;
        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| AmadeusError::Deserialize {
                context: TOKEN_PATH.to_string(),
                source: e,
            })?;

        tracing::debug!(expires_in = ?token.expires_in, "obtained access token");
        Ok(AccessToken::new(token.access_token))
    }

    /// Fetches the first page of offers for one departure date.
    ///
    /// Offers that fail to deserialize are logged and skipped; the rest of
    /// the page is returned in API order.
    ///
    /// # Errors
    ///
    /// - [`AmadeusError::Query`] on network failure or a non-2xx status.
    /// - [`AmadeusError::Deserialize`] if the envelope is not valid JSON.
    pub async fn search_offers(
        &self,
        token: &AccessToken,
        request: &SearchRequest,
        date: NaiveDate,
    ) -> Result<Vec<FlightOffer>, AmadeusError> {
        let url = self.endpoint(OFFERS_PATH)?;
        let params = Self::offer_params(request, date);

        let response = self
            .client
            .get(url)
            .bearer_auth(token.secret())
            .query(&params)
            .send()
            .await
            .map_err(|e| AmadeusError::Query {
                status: None,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AmadeusError::Query {
                status: Some(status.as_u16()),
                message: query_error_message(&body),
            });
        }

        let context = format!("{OFFERS_PATH}(departureDate={date})");
        let body = read_body(response, &context, |message| AmadeusError::Query {
            status: Some(status.as_u16()),
            message,
        })
        .await?;
        let envelope: OfferSearchResponse =
            serde_json::from_str(&body).map_err(|e| AmadeusError::Deserialize {
                context: context.clone(),
                source: e,
            })?;

        let offers = envelope
            .data
            .into_iter()
            .enumerate()
            .filter_map(|(idx, raw)| {
                serde_json::from_value::<FlightOffer>(raw)
                    .map_err(|e| {
                        tracing::warn!(index = idx, %date, error = %e, "skipping malformed offer");
                    })
                    .ok()
            })
            .collect::<Vec<_>>();

        tracing::debug!(%date, count = offers.len(), "received offers");
        Ok(offers)
    }

    /// Query parameters for one offer search.
    fn offer_params(request: &SearchRequest, date: NaiveDate) -> Vec<(&'static str, String)> {
        vec![
            ("originLocationCode", request.origin.to_string()),
            ("destinationLocationCode", request.destination.to_string()),
            ("departureDate", date.format("%Y-%m-%d").to_string()),
            ("adults", ADULTS.to_string()),
            ("currencyCode", CURRENCY.to_string()),
            ("travelClass", request.travel_class.to_string()),
            ("maxPrice", request.max_price.to_string()),
            ("max", OFFERS_PAGE_SIZE.to_string()),
        ]
    }

    fn endpoint(&self, path: &str) -> Result<Url, AmadeusError> {
        self.base_url
            .join(path)
            .map_err(|e| AmadeusError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Reads a success body, mapping a mid-stream transport failure through
/// `on_error`.
async fn read_body<F>(response: Response, context: &str, on_error: F) -> Result<String, AmadeusError>
where
    F: FnOnce(String) -> AmadeusError,
{
    response
        .text()
        .await
        .map_err(|e| on_error(format!("failed to read {context} body: {e}")))
}

/// Best-effort human message from a token-endpoint error body.
fn auth_error_message(body: &str) -> String {
    let parsed: AuthErrorBody = serde_json::from_str(body).unwrap_or_default();
    parsed
        .error_description
        .or(parsed.title)
        .or(parsed.error)
        .unwrap_or_else(|| fallback_message(body))
}

/// Best-effort human message from a search error body, joining every
/// `errors[].detail` (or `title` when no detail is given).
fn query_error_message(body: &str) -> String {
    let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
    let parts: Vec<String> = parsed
        .errors
        .into_iter()
        .filter_map(|e| e.detail.or(e.title))
        .filter(|s| !s.trim().is_empty())
        .collect();
    if parts.is_empty() {
        fallback_message(body)
    } else {
        parts.join("; ")
    }
}

fn fallback_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no response body".to_string()
    } else {
        trimmed.chars().take(200).collect()
    }
}
