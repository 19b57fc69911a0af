//! `analyze` command: score a saved table and print the best offers.

use std::path::PathBuf;

use airgrid_analysis::{
    render_scatter, score_records, top_n, ScoredRecord, Weights, DEFAULT_TOP_N,
};
use anyhow::Context;
use clap::Args;

const CHART_WIDTH: usize = 60;
const CHART_HEIGHT: usize = 16;
const AIRLINE_COLUMN: usize = 28;

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Table written by `fetch`
    #[arg(long)]
    pub csv: PathBuf,
    /// Also print a price/duration scatter chart
    #[arg(long, alias = "showChart")]
    pub show_chart: bool,
    /// Weight applied to normalized price
    #[arg(long, alias = "wPrice", default_value_t = 0.6, allow_negative_numbers = true)]
    pub weight_price: f64,
    /// Weight applied to normalized duration
    #[arg(long, alias = "wDur", default_value_t = 0.4, allow_negative_numbers = true)]
    pub weight_duration: f64,
    /// Number of offers to print
    #[arg(long, alias = "topN", default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,
}

/// Reads the table, scores every row and prints the top offers.
///
/// # Errors
///
/// Returns an error if a weight is not finite, the table cannot be read, it
/// has no rows, or a row carries an unparseable price or duration.
pub(crate) fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<()> {
    let weights = Weights::new(args.weight_price, args.weight_duration)?;
    let records = airgrid_core::read_records(&args.csv)?;
    let scored = score_records(records, weights)
        .with_context(|| format!("failed to score {}", args.csv.display()))?;

    let best = top_n(&scored, args.top_n);
    print!("{}", format_ranking(&best));
    println!(
        "analyzed {} flights; showing {} best (price weight {}, duration weight {})",
        scored.len(),
        best.len(),
        weights.price,
        weights.duration
    );

    if args.show_chart {
        println!();
        println!("{}", render_scatter(&scored, CHART_WIDTH, CHART_HEIGHT));
    }

    Ok(())
}

/// Renders ranked rows as an aligned table, one line per row.
fn format_ranking(ranked: &[&ScoredRecord]) -> String {
    let mut out = format!(
        "{:<12}{:<AIRLINE_COLUMN$}{:>12}{:>14}{:>10}\n",
        "Date", "Airline", "Price", "duration_min", "score"
    );
    for s in ranked {
        let airline = if s.record.airline.chars().count() > AIRLINE_COLUMN - 2 {
            let cut: String = s.record.airline.chars().take(AIRLINE_COLUMN - 5).collect();
            format!("{cut}...")
        } else {
            s.record.airline.clone()
        };
        out.push_str(&format!(
            "{:<12}{:<AIRLINE_COLUMN$}{:>12}{:>14}{:>10.4}\n",
            s.record.date.to_string(),
            airline,
            s.record.price.to_string(),
            s.duration_min,
            s.score
        ));
    }
    out
}
