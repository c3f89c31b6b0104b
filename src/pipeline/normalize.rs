use metrics::counter;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::constants::SALES_DISCOUNT_FACTOR;
use crate::ids::IdGenerator;
use crate::types::{NormalizedRow, RawRow};

/// Everything that is not a digit or a decimal point gets stripped before
/// the price is parsed: currency symbols, grouping commas, stray text.
static NON_PRICE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9.]").expect("static pattern is valid"));

/// Cleans and parses a raw price value. Anything that does not come out as
/// a finite non-negative number is treated as absent, never as an error.
fn parse_price(raw: &str) -> Option<f64> {
    let cleaned = NON_PRICE_CHARS.replace_all(raw, "");
    if cleaned.is_empty() {
        return None;
    }
    let value: f64 = cleaned.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value)
}

/// Rounds to one fractional digit: nearest, ties away from zero
/// (`f64::round` semantics).
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Turns raw rows into normalized rows: drops the housekeeping index
/// column, assigns two fresh surrogate identifiers per row, parses and
/// rounds the price, and derives the sale price. Rows whose price cannot
/// be parsed are dropped here, before the sale price is derived.
pub fn normalize_rows(rows: Vec<RawRow>, ids: &dyn IdGenerator) -> Vec<NormalizedRow> {
    if rows.iter().any(|r| r.index.is_some()) {
        debug!("Dropping housekeeping '{}' column", crate::constants::INDEX_COLUMN);
    }

    let mut normalized = Vec::with_capacity(rows.len());
    let mut dropped = 0usize;

    for row in rows {
        let Some(price) = row.actual_price.as_deref().and_then(parse_price) else {
            debug!("Dropping row with unparsable price {:?}", row.actual_price);
            dropped += 1;
            continue;
        };

        let actual_price = round_to_tenth(price);
        normalized.push(NormalizedRow {
            product_id: ids.generate(),
            sales_id: ids.generate(),
            actual_price,
            // Unlike actual_price, the derived price is not rounded.
            sales_price: actual_price * SALES_DISCOUNT_FACTOR,
            date: row.date,
            ratings: row.ratings,
            no_of_ratings: row.no_of_ratings,
            discount_price: row.discount_price,
            name: row.name,
            main_category: row.main_category,
            sub_category: row.sub_category,
            image: row.image,
            link: row.link,
        });
    }

    if dropped > 0 {
        counter!("bazari_rows_dropped_missing_price_total").increment(dropped as u64);
    }
    normalized
}
