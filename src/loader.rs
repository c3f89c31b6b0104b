use crate::constants::INDEX_COLUMN;
use crate::error::Result;
use crate::types::RawRow;
use csv::{ReaderBuilder, StringRecord};
use std::path::Path;
use tracing::{debug, info};

/// Header positions for the expected columns. A column missing from the
/// header simply yields `None` for every row.
struct Columns {
    index: Option<usize>,
    actual_price: Option<usize>,
    date: Option<usize>,
    ratings: Option<usize>,
    no_of_ratings: Option<usize>,
    discount_price: Option<usize>,
    name: Option<usize>,
    main_category: Option<usize>,
    sub_category: Option<usize>,
    image: Option<usize>,
    link: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Self {
        let position = |name: &str| headers.iter().position(|h| h == name);
        Self {
            index: position(INDEX_COLUMN),
            actual_price: position("actual_price"),
            date: position("date"),
            ratings: position("ratings"),
            no_of_ratings: position("no_of_ratings"),
            discount_price: position("discount_price"),
            name: position("name"),
            main_category: position("main_category"),
            sub_category: position("sub_category"),
            image: position("image"),
            link: position("link"),
        }
    }
}

fn field(record: &StringRecord, position: Option<usize>) -> Option<String> {
    position
        .and_then(|i| record.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Reads the whole source table into memory. An unreadable file or a
/// malformed record aborts the run; missing columns do not.
pub fn load_csv(path: &Path) -> Result<Vec<RawRow>> {
    info!("Loading CSV from {}", path.display());

    let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = reader.headers()?.clone();
    let columns = Columns::from_headers(&headers);

    if columns.actual_price.is_none() {
        debug!("Column 'actual_price' not found; every row will carry an absent price");
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(RawRow {
            index: field(&record, columns.index),
            actual_price: field(&record, columns.actual_price),
            date: field(&record, columns.date),
            ratings: field(&record, columns.ratings),
            no_of_ratings: field(&record, columns.no_of_ratings),
            discount_price: field(&record, columns.discount_price),
            name: field(&record, columns.name),
            main_category: field(&record, columns.main_category),
            sub_category: field(&record, columns.sub_category),
            image: field(&record, columns.image),
            link: field(&record, columns.link),
        });
    }

    info!("Loaded {} raw rows", rows.len());
    Ok(rows)
}
