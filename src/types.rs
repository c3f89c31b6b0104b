use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the raw product/sale table, as loaded from the source.
///
/// Every column is optional: a column missing from the CSV header maps to
/// `None` for all rows, and an empty cell maps to `None` for that row.
/// Values are kept as text until the normalizer parses them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    /// Housekeeping `Unnamed: 0` column, dropped during normalization.
    pub index: Option<String>,
    pub actual_price: Option<String>,
    pub date: Option<String>,
    pub ratings: Option<String>,
    pub no_of_ratings: Option<String>,
    pub discount_price: Option<String>,
    pub name: Option<String>,
    pub main_category: Option<String>,
    pub sub_category: Option<String>,
    pub image: Option<String>,
    pub link: Option<String>,
}

/// A row that survived price parsing. `actual_price` is always present;
/// `date` still holds the raw source text until the calendar converter
/// replaces it with a Jalali date string (or `None` on failure).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRow {
    pub product_id: Uuid,
    pub sales_id: Uuid,
    /// Non-negative, rounded to one fractional digit.
    pub actual_price: f64,
    /// `actual_price * 0.9`, kept at full floating precision.
    pub sales_price: f64,
    pub date: Option<String>,
    pub ratings: Option<String>,
    pub no_of_ratings: Option<String>,
    pub discount_price: Option<String>,
    pub name: Option<String>,
    pub main_category: Option<String>,
    pub sub_category: Option<String>,
    pub image: Option<String>,
    pub link: Option<String>,
}

/// A row that survived both price and date filtering. Date presence is
/// encoded in the type, so the partitioner never re-checks it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedRow {
    pub product_id: Uuid,
    pub sales_id: Uuid,
    pub actual_price: f64,
    pub sales_price: f64,
    /// Jalali date in `YYYY-MM-DD` form.
    pub date: String,
    pub ratings: Option<String>,
    pub no_of_ratings: Option<String>,
    pub discount_price: Option<String>,
    pub name: Option<String>,
    pub main_category: Option<String>,
    pub sub_category: Option<String>,
    pub image: Option<String>,
    pub link: Option<String>,
}

impl ValidatedRow {
    /// Promotes a normalized row if its date is present.
    pub fn from_normalized(row: NormalizedRow) -> Option<Self> {
        let date = row.date?;
        Some(Self {
            product_id: row.product_id,
            sales_id: row.sales_id,
            actual_price: row.actual_price,
            sales_price: row.sales_price,
            date,
            ratings: row.ratings,
            no_of_ratings: row.no_of_ratings,
            discount_price: row.discount_price,
            name: row.name,
            main_category: row.main_category,
            sub_category: row.sub_category,
            image: row.image,
            link: row.link,
        })
    }
}

/// Pricing projection of a validated row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPrice {
    pub product_id: Uuid,
    pub ratings: Option<String>,
    pub no_of_ratings: Option<String>,
    pub discount_price: Option<String>,
    pub actual_price: f64,
}

/// Catalog projection of a validated row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    pub product_id: Uuid,
    pub name: Option<String>,
    pub main_category: Option<String>,
    pub sub_category: Option<String>,
    pub image: Option<String>,
    pub link: Option<String>,
}

/// Sale projection of a validated row. `product_id` is the join key back
/// to the two product projections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub sales_id: Uuid,
    pub product_id: Uuid,
    pub date: String,
    pub sales_price: f64,
}
