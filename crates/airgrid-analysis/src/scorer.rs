//! Weighted price/duration scorer.

use airgrid_core::{FlightDuration, FlightRecord};
use rust_decimal::prelude::ToPrimitive;

use crate::error::AnalysisError;
use crate::normalize::min_max;

/// Relative importance of price and duration.
///
/// Weights are applied verbatim and need not sum to `1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub price: f64,
    pub duration: f64,
}

impl Weights {
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidWeight`] if either weight is `NaN` or
    /// infinite.
    pub fn new(price: f64, duration: f64) -> Result<Self, AnalysisError> {
        if !price.is_finite() {
            return Err(AnalysisError::InvalidWeight {
                name: "price",
                value: price,
            });
        }
        if !duration.is_finite() {
            return Err(AnalysisError::InvalidWeight {
                name: "duration",
                value: duration,
            });
        }
        Ok(Self { price, duration })
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            price: 0.6,
            duration: 0.4,
        }
    }
}

/// A [`FlightRecord`] with its derived analysis fields. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecord {
    pub record: FlightRecord,
    pub price: f64,
    pub duration_min: u32,
    /// Price scaled to `[0, 1]` across the scored set.
    pub price_norm: f64,
    /// Duration scaled to `[0, 1]` across the scored set.
    pub dur_norm: f64,
    /// `w_price * price_norm + w_duration * dur_norm`; lower is better.
    pub score: f64,
}

/// Scores every record, preserving input order.
///
/// # Errors
///
/// - [`AnalysisError::NoRecords`] if `records` is empty.
/// - [`AnalysisError::InvalidDuration`] if a duration is not in display form.
/// - [`AnalysisError::InvalidPrice`] if a price is negative or not
///   representable as `f64`.
pub fn score_records(
    records: Vec<FlightRecord>,
    weights: Weights,
) -> Result<Vec<ScoredRecord>, AnalysisError> {
    if records.is_empty() {
        return Err(AnalysisError::NoRecords);
    }

    let mut prices = Vec::with_capacity(records.len());
    let mut durations = Vec::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        let row = idx + 1;
        let price = record
            .price
            .to_f64()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or_else(|| AnalysisError::InvalidPrice {
                row,
                value: record.price.to_string(),
            })?;
        let duration = FlightDuration::parse_display(&record.duration).map_err(|_| {
            AnalysisError::InvalidDuration {
                row,
                value: record.duration.clone(),
            }
        })?;
        prices.push(price);
        durations.push(duration.minutes());
    }

    let duration_values: Vec<f64> = durations.iter().map(|&m| f64::from(m)).collect();
    let price_norms = min_max(&prices);
    let dur_norms = min_max(&duration_values);

    let scored = records
        .into_iter()
        .zip(prices)
        .zip(durations)
        .zip(price_norms.into_iter().zip(dur_norms))
        .map(|(((record, price), duration_min), (price_norm, dur_norm))| ScoredRecord {
            record,
            price,
            duration_min,
            price_norm,
            dur_norm,
            score: weights.price * price_norm + weights.duration * dur_norm,
        })
        .collect::<Vec<_>>();

    tracing::debug!(count = scored.len(), "scored flight records");
    Ok(scored)
}
