use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{CoreError, DateRange};

/// Placeholder written when an airline or aircraft cannot be determined.
pub const UNKNOWN: &str = "Unknown";

/// A three-letter IATA airport code, always stored upper-case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AirportCode(String);

impl AirportCode {
    /// Upper-cases and validates `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidAirportCode`] unless `raw` is exactly three
    /// ASCII letters after trimming.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let code = raw.trim().to_ascii_uppercase();
        if code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase()) {
            Ok(Self(code))
        } else {
            Err(CoreError::InvalidAirportCode(raw.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AirportCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Fare cabin filter accepted by the offer search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TravelClass {
    #[default]
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl TravelClass {
    /// The wire value the search API expects, e.g. `"PREMIUM_ECONOMY"`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelClass::Economy => "ECONOMY",
            TravelClass::PremiumEconomy => "PREMIUM_ECONOMY",
            TravelClass::Business => "BUSINESS",
            TravelClass::First => "FIRST",
        }
    }
}

impl fmt::Display for TravelClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelClass {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "ECONOMY" => Ok(TravelClass::Economy),
            "PREMIUM_ECONOMY" => Ok(TravelClass::PremiumEconomy),
            "BUSINESS" => Ok(TravelClass::Business),
            "FIRST" => Ok(TravelClass::First),
            _ => Err(CoreError::InvalidTravelClass(s.to_string())),
        }
    }
}

/// Client-credentials pair for the offer-search API.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    #[must_use]
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[redacted]")
            .finish()
    }
}

/// Parameters for one fetch run, validated at construction.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub dates: DateRange,
    /// Price ceiling in INR.
    pub max_price: u32,
    pub travel_class: TravelClass,
    pub credentials: Credentials,
}

impl SearchRequest {
    /// # Errors
    ///
    /// - [`CoreError::InvalidAirportCode`] if either code is not three letters.
    /// - [`CoreError::InvalidRange`] if `end` is before `start`.
    /// - [`CoreError::InvalidMaxPrice`] if `max_price` is zero.
    pub fn new(
        origin: &str,
        destination: &str,
        start: NaiveDate,
        end: NaiveDate,
        max_price: u32,
        travel_class: TravelClass,
        credentials: Credentials,
    ) -> Result<Self, CoreError> {
        let origin = AirportCode::parse(origin)?;
        let destination = AirportCode::parse(destination)?;
        let dates = DateRange::new(start, end)?;
        if max_price == 0 {
            return Err(CoreError::InvalidMaxPrice(max_price));
        }

        Ok(Self {
            origin,
            destination,
            dates,
            max_price,
            travel_class,
            credentials,
        })
    }
}

/// One directional flight offer on one date, as stored in the table.
///
/// Field order matches the on-disk column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    #[serde(rename = "From")]
    pub origin: String,
    #[serde(rename = "To")]
    pub destination: String,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Airline")]
    pub airline: String,
    /// Total fare in INR, kept as an exact decimal.
    #[serde(rename = "Price (INR)", with = "rust_decimal::serde::str")]
    pub price: Decimal,
    /// Display form, e.g. `"18h 10m"`.
    #[serde(rename = "Duration")]
    pub duration: String,
    #[serde(rename = "Aircraft")]
    pub aircraft: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn airport_code_is_uppercased() {
        let code = AirportCode::parse(" del ").unwrap();
        assert_eq!(code.as_str(), "DEL");
    }

    #[test]
    fn airport_code_rejects_wrong_length_or_digits() {
        for bad in ["DE", "DELH", "D3L", ""] {
            assert!(AirportCode::parse(bad).is_err(), "expected {bad:?} rejected");
        }
    }

    #[test]
    fn travel_class_parses_case_insensitively() {
        assert_eq!("economy".parse::<TravelClass>().unwrap(), TravelClass::Economy);
        assert_eq!(
            "premium-economy".parse::<TravelClass>().unwrap(),
            TravelClass::PremiumEconomy
        );
        assert_eq!("BUSINESS".parse::<TravelClass>().unwrap(), TravelClass::Business);
        assert!("coach".parse::<TravelClass>().is_err());
    }

    #[test]
    fn travel_class_display_is_wire_value() {
        assert_eq!(TravelClass::PremiumEconomy.to_string(), "PREMIUM_ECONOMY");
        assert_eq!(TravelClass::default().to_string(), "ECONOMY");
    }

    #[test]
    fn credentials_debug_redacts_secret() {
        let creds = Credentials::new("id-123", "s3cret");
        let debug = format!("{creds:?}");
        assert!(debug.contains("id-123"));
        assert!(!debug.contains("s3cret"));
    }

    #[test]
    fn search_request_validates_inputs() {
        let creds = Credentials::new("id", "secret");
        let ok = SearchRequest::new(
            "del",
            "bom",
            date("2025-05-01"),
            date("2025-05-03"),
            50_000,
            TravelClass::Economy,
            creds.clone(),
        )
        .unwrap();
        assert_eq!(ok.origin.as_str(), "DEL");
        assert_eq!(ok.destination.as_str(), "BOM");
        assert_eq!(ok.dates.len(), 3);

        let reversed = SearchRequest::new(
            "DEL",
            "BOM",
            date("2025-05-03"),
            date("2025-05-01"),
            50_000,
            TravelClass::Economy,
            creds.clone(),
        );
        assert!(matches!(reversed, Err(CoreError::InvalidRange { .. })));

        let zero_price = SearchRequest::new(
            "DEL",
            "BOM",
            date("2025-05-01"),
            date("2025-05-01"),
            0,
            TravelClass::Economy,
            creds,
        );
        assert!(matches!(zero_price, Err(CoreError::InvalidMaxPrice(0))));
    }
}
