//! `fetch` command: search offers day by day and write them to a CSV table.
//!
//! One run authenticates once, walks the date range in order, resolves each
//! offer's carrier name through a per-run memo, and writes every assembled
//! row. Any auth or search failure aborts the run before the file is written.

use std::fmt;
use std::path::PathBuf;

use airgrid_amadeus::{assemble_record, AmadeusClient};
use airgrid_core::{
    write_records, AppConfig, ConfigError, Credentials, FlightRecord, SearchRequest, TravelClass,
    UNKNOWN,
};
use airgrid_iata::{AirlineLookup, AirlineResolver, IataClient};
use anyhow::Context;
use chrono::NaiveDate;
use clap::Args;

#[derive(Args)]
pub struct FetchArgs {
    /// Origin airport code (e.g., DEL)
    #[arg(long)]
    pub origin: String,
    /// Destination airport code (e.g., BOM)
    #[arg(long)]
    pub destination: String,
    /// First departure date, YYYY-MM-DD
    #[arg(long, alias = "startDate")]
    pub start_date: NaiveDate,
    /// Last departure date, YYYY-MM-DD (inclusive)
    #[arg(long, alias = "endDate")]
    pub end_date: NaiveDate,
    /// Maximum price in INR
    #[arg(long, alias = "maxPrice", default_value_t = 50_000)]
    pub max_price: u32,
    /// Travel class: ECONOMY, PREMIUM_ECONOMY, BUSINESS or FIRST
    #[arg(long, alias = "travelClass", default_value = "ECONOMY")]
    pub travel_class: TravelClass,
    /// Amadeus API key
    #[arg(long, alias = "apiKey", env = "AMADEUS_API_KEY", hide_env_values = true)]
    pub api_key: String,
    /// Amadeus API secret
    #[arg(long, alias = "apiSecret", env = "AMADEUS_API_SECRET", hide_env_values = true)]
    pub api_secret: String,
    /// Output CSV path (".csv" is appended if missing)
    #[arg(long)]
    pub output: Option<String>,
}

impl fmt::Debug for FetchArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchArgs")
            .field("origin", &self.origin)
            .field("destination", &self.destination)
            .field("start_date", &self.start_date)
            .field("end_date", &self.end_date)
            .field("max_price", &self.max_price)
            .field("travel_class", &self.travel_class)
            .field("api_key", &self.api_key)
            .field("api_secret", &"[redacted]")
            .field("output", &self.output)
            .finish()
    }
}

impl FetchArgs {
    fn search_request(&self) -> anyhow::Result<SearchRequest> {
        let request = SearchRequest::new(
            &self.origin,
            &self.destination,
            self.start_date,
            self.end_date,
            self.max_price,
            self.travel_class,
            Credentials::new(self.api_key.clone(), self.api_secret.clone()),
        )?;
        Ok(request)
    }
}

/// Resolves the table path, appending `.csv` when the name lacks it.
///
/// # Errors
///
/// Returns [`ConfigError::MissingParameter`] if no non-blank path was given.
pub(crate) fn resolve_output_path(output: Option<&str>) -> Result<PathBuf, ConfigError> {
    let raw = output
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ConfigError::MissingParameter("output".to_string()))?;

    if raw.ends_with(".csv") {
        Ok(PathBuf::from(raw))
    } else {
        Ok(PathBuf::from(format!("{raw}.csv")))
    }
}

/// Runs the fetch pipeline and writes the table.
///
/// Inputs are validated before any network call.
///
/// # Errors
///
/// Returns an error if validation fails, authentication or any offer search
/// fails, or the table cannot be written.
pub(crate) async fn run_fetch(config: &AppConfig, args: FetchArgs) -> anyhow::Result<()> {
    let output = resolve_output_path(args.output.as_deref())?;
    let request = args.search_request()?;

    let amadeus = AmadeusClient::with_base_url(
        config.request_timeout_secs,
        &config.user_agent,
        &config.amadeus_base_url,
    )
    .context("failed to build Amadeus client")?;
    let iata = IataClient::with_base_url(
        config.request_timeout_secs,
        &config.lookup_user_agent,
        &config.iata_base_url,
    )
    .context("failed to build IATA client")?;

    let records = collect_records(&amadeus, &iata, &request).await?;

    write_records(&output, &records)
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!("saved {} flights to '{}'", records.len(), output.display());
    Ok(())
}

/// Authenticates, then searches every date in order and assembles rows.
///
/// Malformed offers are logged and skipped; airline lookups never fail the
/// run.
///
/// # Errors
///
/// Returns an error if authentication or any offer search fails.
pub(crate) async fn collect_records(
    amadeus: &AmadeusClient,
    iata: &IataClient,
    request: &SearchRequest,
) -> anyhow::Result<Vec<FlightRecord>> {
    let token = amadeus
        .authenticate(&request.credentials)
        .await
        .context("could not obtain Amadeus access token")?;
    let mut resolver = AirlineResolver::new(iata);
    let mut records = Vec::new();

    for date in &request.dates {
        tracing::info!(
            origin = %request.origin,
            destination = %request.destination,
            %date,
            "searching flights"
        );
        let offers = amadeus
            .search_offers(&token, request, date)
            .await
            .with_context(|| format!("offer search failed for {date}"))?;

        for offer in &offers {
            let airline = match offer.first_leg() {
                Some((_, segment)) => resolver.resolve(&segment.carrier_code).await,
                None => AirlineLookup::NotFound,
            };

            match assemble_record(request, date, offer, airline.name_or(UNKNOWN)) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(%date, error = %e, "skipping offer");
                }
            }
        }
    }

    tracing::info!(
        records = records.len(),
        airlines = resolver.resolved_count(),
        "fetch complete"
    );
    Ok(records)
}

#[cfg(test)]
#[path = "fetch_test.rs"]
mod tests;
