//! Client for the Amadeus Self-Service flight-offer search API.
//!
//! Covers the client-credentials token exchange, the per-date offer search,
//! and assembly of raw offers into table rows.

pub mod assemble;
pub mod client;
pub mod error;
pub mod types;

pub use assemble::assemble_record;
pub use client::{AmadeusClient, OFFERS_PAGE_SIZE};
pub use error::AmadeusError;
pub use types::{AccessToken, FlightOffer, Itinerary, OfferPrice, Segment};
