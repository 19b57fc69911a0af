use thiserror::Error;

/// Errors returned by the Amadeus API client.
#[derive(Debug, Error)]
pub enum AmadeusError {
    /// The underlying `reqwest::Client` could not be constructed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Token exchange was rejected or the auth endpoint was unreachable.
    /// `status` is `None` for transport failures.
    #[error("authentication failed{}: {message}", fmt_status(.status))]
    Auth { status: Option<u16>, message: String },

    /// The offer search returned a non-2xx status or could not be reached.
    #[error("offer search failed{}: {message}", fmt_status(.status))]
    Query { status: Option<u16>, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A single offer lacked the fields needed to build a table row.
    #[error("malformed offer {offer_id}: {reason}")]
    MalformedOffer { offer_id: String, reason: String },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

fn fmt_status(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}
