//! Shared constants for column and collection names.

/// Housekeeping index column pandas-style CSV exports carry.
pub const INDEX_COLUMN: &str = "Unnamed: 0";

// Collection names the sink batches are addressed by.
pub const PRODUCT_PRICE_COLLECTION: &str = "product_price_collection";
pub const PRODUCT_DETAILS_COLLECTION: &str = "product_details_collection";
pub const SALES_COLLECTION: &str = "sales_collection";

/// Discount factor applied to `actual_price` to derive `sales_price`.
pub const SALES_DISCOUNT_FACTOR: f64 = 0.9;
