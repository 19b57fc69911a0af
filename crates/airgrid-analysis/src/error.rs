use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no flight records to analyze")]
    NoRecords,

    #[error("row {row}: invalid duration \"{value}\"")]
    InvalidDuration { row: usize, value: String },

    #[error("row {row}: price {value} cannot be scored")]
    InvalidPrice { row: usize, value: String },

    #[error("invalid {name} weight {value}: must be finite")]
    InvalidWeight { name: &'static str, value: f64 },
}
