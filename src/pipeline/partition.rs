use crate::types::{ProductDetails, ProductPrice, Sale, ValidatedRow};

/// Pure projection of validated rows into the three derived entity sets.
/// Row order is preserved, so the three outputs stay positionally aligned
/// and `product_id` links them without any foreign-key bookkeeping.
pub fn partition_rows(
    rows: &[ValidatedRow],
) -> (Vec<ProductPrice>, Vec<ProductDetails>, Vec<Sale>) {
    let mut prices = Vec::with_capacity(rows.len());
    let mut details = Vec::with_capacity(rows.len());
    let mut sales = Vec::with_capacity(rows.len());

    for row in rows {
        prices.push(ProductPrice {
            product_id: row.product_id,
            ratings: row.ratings.clone(),
            no_of_ratings: row.no_of_ratings.clone(),
            discount_price: row.discount_price.clone(),
            actual_price: row.actual_price,
        });
        details.push(ProductDetails {
            product_id: row.product_id,
            name: row.name.clone(),
            main_category: row.main_category.clone(),
            sub_category: row.sub_category.clone(),
            image: row.image.clone(),
            link: row.link.clone(),
        });
        sales.push(Sale {
            sales_id: row.sales_id,
            product_id: row.product_id,
            date: row.date.clone(),
            sales_price: row.sales_price,
        });
    }

    (prices, details, sales)
}
