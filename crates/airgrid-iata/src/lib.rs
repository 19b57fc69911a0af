//! Airline display-name lookup against the IATA code-search directory.
//!
//! The directory is an HTML page; the name is scraped from its result table.
//! [`AirlineResolver`] memoizes outcomes for the lifetime of one fetch run.

pub mod client;
pub mod error;
pub mod html;
pub mod resolver;

pub use client::IataClient;
pub use error::IataError;
pub use resolver::{AirlineLookup, AirlineResolver};
