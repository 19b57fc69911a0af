//! Ranking of saved flight records by normalized price and duration.
//!
//! Each record's price and duration are min-max scaled to `[0, 1]` across the
//! set and combined with caller weights; the lowest score is the best flight.

pub mod chart;
pub mod error;
pub mod normalize;
pub mod scorer;
pub mod select;

pub use chart::render_scatter;
pub use error::AnalysisError;
pub use normalize::min_max;
pub use scorer::{score_records, ScoredRecord, Weights};
pub use select::{rank, top_n, DEFAULT_TOP_N};
