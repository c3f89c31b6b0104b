use metrics::counter;
use tracing::info;

use crate::types::{NormalizedRow, ValidatedRow};

/// Drops every row whose date is absent after conversion. Rows with an
/// absent price never got this far. The drop count is surfaced so silent
/// data loss stays observable.
pub fn drop_undated(rows: Vec<NormalizedRow>) -> Vec<ValidatedRow> {
    let total = rows.len();
    let validated: Vec<ValidatedRow> = rows
        .into_iter()
        .filter_map(ValidatedRow::from_normalized)
        .collect();

    let dropped = total - validated.len();
    if dropped > 0 {
        info!("Dropped {} rows with missing or invalid dates", dropped);
        counter!("bazari_rows_dropped_invalid_date_total").increment(dropped as u64);
    }
    validated
}
