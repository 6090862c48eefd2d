//! Projection of a timing corpus into sorted (value, seconds) series for an
//! external plotting surface.

use crate::timing::TimingEntry;
use crate::Independent;

use serde::{Deserialize, Serialize};

/// One point of a projected series. `seconds` is `None` when the requested
/// function label was not timed in that run; a run that was not measured is
/// distinct from one that measured zero.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub value: u32,
    pub seconds: Option<f64>,
}

fn key_of(entry: &TimingEntry, independent: Independent) -> u32 {
    match independent {
        Independent::G1N => entry.g1.n,
        Independent::G1K => entry.g1.k,
    }
}

/// Sort `entries` ascending by the chosen independent field (stable, ties
/// keep their original order) and emit one point per entry for
/// `function_label`.
pub fn project(
    entries: &[TimingEntry],
    independent: Independent,
    function_label: &str,
) -> Vec<SeriesPoint> {
    let mut sorted: Vec<&TimingEntry> = entries.iter().collect();
    sorted.sort_by_key(|entry| key_of(entry, independent));

    sorted
        .into_iter()
        .map(|entry| SeriesPoint {
            value: key_of(entry, independent),
            seconds: entry.timings.get(function_label).copied(),
        })
        .collect()
}

/// Legacy projection surface: a missing label collapses to `0.0`. Distorts
/// plots where a function was simply not timed; prefer `project`.
pub fn project_or_zero(
    entries: &[TimingEntry],
    independent: Independent,
    function_label: &str,
) -> Vec<(u32, f64)> {
    project(entries, independent, function_label)
        .into_iter()
        .map(|point| (point.value, point.seconds.unwrap_or(0.0)))
        .collect()
}
