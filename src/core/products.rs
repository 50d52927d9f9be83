use crate::domain::model::Product;

/// The highest-priced product; the earliest one wins a tie. `None` when empty.
pub fn get_most_expensive_product(products: &[Product]) -> Option<&Product> {
    let mut iter = products.iter();
    let mut best = iter.next()?;
    for product in iter {
        if product.price > best.price {
            best = product;
        }
    }
    tracing::debug!(
        "Most expensive of {} products: {} ({})",
        products.len(),
        best.name,
        best.price
    );
    Some(best)
}
