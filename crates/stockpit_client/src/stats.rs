//! Aggregates derived from the product collection.

use crate::types::Product;

/// Summary numbers shown in the stats row.
///
/// Pure data, recomputed from whatever collection snapshot is on hand
/// (including a transiently empty one) and never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InventoryStats {
    /// Number of products in the collection.
    pub count: usize,
    /// Sum of `price * quantity` across the collection.
    pub total_value: f64,
}

impl InventoryStats {
    /// Compute the aggregates for a collection snapshot.
    pub fn of(products: &[Product]) -> Self {
        Self {
            count: products.len(),
            total_value: products
                .iter()
                .map(|product| product.price * f64::from(product.quantity))
                .sum(),
        }
    }

    /// The total value rendered with exactly two decimal places.
    pub fn total_value_display(&self) -> String {
        format!("{:.2}", self.total_value)
    }
}
