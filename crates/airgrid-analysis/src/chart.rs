//! Text scatter plot of duration against price, graded by score.
//!
//! Renders to a `String` so it works in any terminal, including headless
//! ones, and never blocks.

use crate::scorer::ScoredRecord;

/// Point glyphs from best score to worst.
const GLYPHS: [char; 5] = ['@', '#', '+', '-', '.'];

const MIN_WIDTH: usize = 10;
const MIN_HEIGHT: usize = 4;

/// Plots every record with duration (minutes) on the x axis and price on the
/// y axis. Where points share a cell the better score's glyph wins.
///
/// Returns an empty string for an empty slice.
#[must_use]
pub fn render_scatter(scored: &[ScoredRecord], width: usize, height: usize) -> String {
    if scored.is_empty() {
        return String::new();
    }
    let width = width.max(MIN_WIDTH);
    let height = height.max(MIN_HEIGHT);

    let (dur_lo, dur_hi) = bounds(scored.iter().map(|s| f64::from(s.duration_min)));
    let (price_lo, price_hi) = bounds(scored.iter().map(|s| s.price));
    let (score_lo, score_hi) = bounds(scored.iter().map(|s| s.score));

    // Each cell holds the best glyph index placed there so far.
    let mut grid: Vec<Vec<Option<usize>>> = vec![vec![None; width]; height];
    for s in scored {
        let col = scale(f64::from(s.duration_min), dur_lo, dur_hi, width);
        let row = height - 1 - scale(s.price, price_lo, price_hi, height);
        let glyph = scale(s.score, score_lo, score_hi, GLYPHS.len());
        let cell = &mut grid[row][col];
        *cell = Some(cell.map_or(glyph, |existing| existing.min(glyph)));
    }

    let top_label = format!("{price_hi:.0}");
    let bottom_label = format!("{price_lo:.0}");
    let gutter = top_label.len().max(bottom_label.len());

    let mut lines = Vec::with_capacity(height + 4);
    lines.push("Price (INR) vs. Duration (minutes), lower score is better".to_string());
    for (idx, row) in grid.iter().enumerate() {
        let label = if idx == 0 {
            top_label.as_str()
        } else if idx == height - 1 {
            bottom_label.as_str()
        } else {
            ""
        };
        let cells: String = row
            .iter()
            .map(|cell| cell.map_or(' ', |g| GLYPHS[g]))
            .collect();
        lines.push(format!("{label:>gutter$} |{}", cells.trim_end()));
    }
    lines.push(format!("{:>gutter$} +{}", "", "-".repeat(width)));

    let left = format!("{dur_lo:.0}");
    let right = format!("{dur_hi:.0}");
    let pad = width.saturating_sub(left.len() + right.len());
    lines.push(format!("{:>gutter$}  {left}{}{right}", "", " ".repeat(pad)));

    let legend: Vec<String> = GLYPHS.iter().map(char::to_string).collect();
    lines.push(format!(
        "score: {} (best {score_lo:.2} .. worst {score_hi:.2})",
        legend.join(" ")
    ));

    lines.join("\n")
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// Maps `value` in `[lo, hi]` onto a bucket index in `0..buckets`.
/// A zero-width range maps everything to bucket 0.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn scale(value: f64, lo: f64, hi: f64, buckets: usize) -> usize {
    let range = hi - lo;
    if buckets <= 1 || range <= 0.0 || !range.is_finite() {
        return 0;
    }
    let t = ((value - lo) / range).clamp(0.0, 1.0);
    let idx = (t * (buckets - 1) as f64).round() as usize;
    idx.min(buckets - 1)
}
