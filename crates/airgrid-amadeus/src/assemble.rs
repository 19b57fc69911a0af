//! Builds table rows from raw flight offers.

use airgrid_core::{FlightDuration, FlightRecord, SearchRequest, UNKNOWN};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::AmadeusError;
use crate::types::FlightOffer;

/// Assembles one [`FlightRecord`] from an offer and its resolved airline name.
///
/// Only the first itinerary and its first segment are read. The aircraft
/// code defaults to `"Unknown"`; the ISO-8601 duration is rewritten into
/// display form (`PT18H10M` → `18h 10m`).
///
/// # Errors
///
/// Returns [`AmadeusError::MalformedOffer`] if the offer has no segment, no
/// parseable duration, or a negative total.
pub fn assemble_record(
    request: &SearchRequest,
    date: NaiveDate,
    offer: &FlightOffer,
    airline: &str,
) -> Result<FlightRecord, AmadeusError> {
    let malformed = |reason: String| AmadeusError::MalformedOffer {
        offer_id: offer.display_id().to_string(),
        reason,
    };

    let (itinerary, segment) = offer
        .first_leg()
        .ok_or_else(|| malformed("no itinerary segment".to_string()))?;

    let raw_duration = itinerary
        .duration
        .as_deref()
        .ok_or_else(|| malformed("itinerary has no duration".to_string()))?;
    let duration =
        FlightDuration::from_iso8601(raw_duration).map_err(|e| malformed(e.to_string()))?;

    if offer.price.total < Decimal::ZERO {
        return Err(malformed(format!("negative total {}", offer.price.total)));
    }
    if let Some(currency) = offer.price.currency.as_deref() {
        if !currency.eq_ignore_ascii_case("INR") {
            tracing::warn!(
                offer_id = offer.display_id(),
                currency,
                "offer priced in unexpected currency"
            );
        }
    }

    let aircraft = segment
        .aircraft
        .as_ref()
        .and_then(|a| a.code.as_deref())
        .filter(|code| !code.trim().is_empty())
        .unwrap_or(UNKNOWN)
        .to_string();

    let airline = if airline.trim().is_empty() {
        UNKNOWN.to_string()
    } else {
        airline.to_string()
    };

    Ok(FlightRecord {
        origin: request.origin.to_string(),
        destination: request.destination.to_string(),
        date,
        airline,
        price: offer.price.total,
        duration: duration.to_string(),
        aircraft,
    })
}
