//! Extremum and mean-relative queries
//!
//! Tie-break rule for extrema: first in collection order wins among
//! equal prices. Partition rule: `price >= mean` is above, `< mean`
//! is below, so the two filters split the collection exactly.

use crate::store::Product;

/// Product with the greatest price, or `None` on an empty slice.
pub fn most_expensive(products: &[Product]) -> Option<&Product> {
    products
        .iter()
        .reduce(|best, p| if p.price > best.price { p } else { best })
}

/// Product with the least price, or `None` on an empty slice.
pub fn cheapest(products: &[Product]) -> Option<&Product> {
    products
        .iter()
        .reduce(|best, p| if p.price < best.price { p } else { best })
}

/// Unrounded arithmetic mean of all prices, or `None` on an empty
/// slice. Callers round at the display edge with [`round_to_cents`].
pub fn mean_price(products: &[Product]) -> Option<f64> {
    if products.is_empty() {
        return None;
    }
    let total: f64 = products.iter().map(|p| p.price).sum();
    Some(total / products.len() as f64)
}

/// Products priced at or above the mean, in collection order. Empty
/// input yields an empty result.
pub fn above_mean(products: &[Product]) -> Vec<Product> {
    match mean_price(products) {
        Some(mean) => products
            .iter()
            .filter(|p| p.price >= mean)
            .cloned()
            .collect(),
        None => Vec::new(),
    }
}

/// Products priced strictly below the mean, in collection order.
pub fn below_mean(products: &[Product]) -> Vec<Product> {
    match mean_price(products) {
        Some(mean) => products.iter().filter(|p| p.price < mean).cloned().collect(),
        None => Vec::new(),
    }
}

/// Rounds a price to 2 decimal digits for display.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, price: f64) -> Product {
        Product {
            id,
            name: format!("P{}", id),
            category: "Teste".to_string(),
            price,
        }
    }

    #[test]
    fn test_extrema_bound_every_price() {
        let products = vec![product(1, 10.0), product(2, 35.5), product(3, 2.25)];

        let max = most_expensive(&products).unwrap();
        let min = cheapest(&products).unwrap();
        assert!(products.iter().all(|p| p.price <= max.price));
        assert!(products.iter().all(|p| p.price >= min.price));
        assert_eq!(max.id, 2);
        assert_eq!(min.id, 3);
    }

    #[test]
    fn test_extrema_tie_break_is_first_in_order() {
        let products = vec![product(1, 5.0), product(2, 5.0), product(3, 5.0)];

        assert_eq!(most_expensive(&products).unwrap().id, 1);
        assert_eq!(cheapest(&products).unwrap().id, 1);
    }

    #[test]
    fn test_empty_slice_has_no_extrema_or_mean() {
        assert!(most_expensive(&[]).is_none());
        assert!(cheapest(&[]).is_none());
        assert!(mean_price(&[]).is_none());
        assert!(above_mean(&[]).is_empty());
        assert!(below_mean(&[]).is_empty());
    }

    #[test]
    fn test_mean_is_the_arithmetic_average() {
        let products = vec![product(1, 10.0), product(2, 20.0)];
        assert_eq!(mean_price(&products), Some(15.0));
    }

    #[test]
    fn test_mean_filters_partition_the_collection() {
        // mean = 15.0; B sits at the mean and counts as above
        let products = vec![
            product(1, 10.0),
            product(2, 20.0),
            product(3, 15.0),
        ];

        let above = above_mean(&products);
        let below = below_mean(&products);

        assert_eq!(above.len() + below.len(), products.len());
        assert_eq!(above.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(below.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(15.0), 15.0);
        assert_eq!(round_to_cents(33.333333), 33.33);
        assert_eq!(round_to_cents(159.899), 159.9);
    }
}
