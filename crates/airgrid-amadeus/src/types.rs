//! Amadeus API request/response types.
//!
//! Only the fields the fetch pipeline reads are modelled; everything else in
//! the offer payload is ignored.

use std::fmt;

use rust_decimal::Decimal;
use serde::Deserialize;

/// Bearer token for one fetch session.
///
/// Owned by the caller and passed into every search call; never cached
/// beyond the run that obtained it.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for the `Authorization` header.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([redacted])")
    }
}

// ---------------------------------------------------------------------------
// v1/security/oauth2/token
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Error body returned by the token endpoint, e.g.
/// `{"error": "invalid_client", "error_description": "Client credentials are invalid"}`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct AuthErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

// ---------------------------------------------------------------------------
// v2/shopping/flight-offers
// ---------------------------------------------------------------------------

/// Search envelope. Offers are kept as raw values so that one malformed
/// entry can be skipped without discarding the page.
#[derive(Debug, Deserialize)]
pub(crate) struct OfferSearchResponse {
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
}

/// `{"errors": [{"status": 400, "title": "...", "detail": "..."}]}`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorDetail {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

/// One priced itinerary returned by the offer search.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightOffer {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub itineraries: Vec<Itinerary>,
    pub price: OfferPrice,
}

impl FlightOffer {
    /// The first itinerary and its first segment; later legs are ignored.
    #[must_use]
    pub fn first_leg(&self) -> Option<(&Itinerary, &Segment)> {
        let itinerary = self.itineraries.first()?;
        let segment = itinerary.segments.first()?;
        Some((itinerary, segment))
    }

    /// Offer identifier for log and error messages.
    #[must_use]
    pub fn display_id(&self) -> &str {
        self.id.as_deref().unwrap_or("?")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Itinerary {
    /// ISO-8601 elapsed time, e.g. `"PT18H10M"`.
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Two-character IATA carrier code, e.g. `"AI"`.
    pub carrier_code: String,
    #[serde(default)]
    pub aircraft: Option<Aircraft>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Aircraft {
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OfferPrice {
    #[serde(default)]
    pub currency: Option<String>,
    /// Grand total as the API returns it, e.g. `"5234.00"`.
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
}
