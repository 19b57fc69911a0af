//! Shared domain types, configuration, and table I/O for airgrid.

pub mod app_config;
pub mod config;
pub mod dates;
pub mod duration;
pub mod error;
pub mod flights;
pub mod table;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, log_level_from_env};
pub use dates::{DateRange, DateRangeIter};
pub use duration::FlightDuration;
pub use error::{ConfigError, CoreError};
pub use flights::{AirportCode, Credentials, FlightRecord, SearchRequest, TravelClass, UNKNOWN};
pub use table::{read_records, write_records, TableError, TABLE_HEADER};
