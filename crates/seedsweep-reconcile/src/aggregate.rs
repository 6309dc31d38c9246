//! Per-category aggregation of classification outcomes.

use std::collections::BTreeMap;

use seedsweep_core::{Category, CategoryReport, Classification, Verdict};

/// Group classification outcomes by category.
///
/// Only orphaned outcomes accumulate files and bytes; orphan order
/// follows the input order. Every category in `scanned` gets an entry,
/// so categories where nothing was orphaned report an empty list with a
/// zero total.
pub fn aggregate(
    outcomes: impl IntoIterator<Item = Classification>,
    scanned: &[Category],
) -> BTreeMap<Category, CategoryReport> {
    let mut reports: BTreeMap<Category, CategoryReport> = scanned
        .iter()
        .map(|category| (category.clone(), CategoryReport::new(category.clone())))
        .collect();

    for outcome in outcomes {
        if outcome.verdict != Verdict::Orphaned {
            continue;
        }
        let report = reports
            .entry(outcome.file.category.clone())
            .or_insert_with(|| CategoryReport::new(outcome.file.category.clone()));
        report.record(outcome.file);
    }

    reports
}
